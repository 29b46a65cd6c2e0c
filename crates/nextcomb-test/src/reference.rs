//! Reference combination enumeration.

/// Iterator over all `k`-subsets of `0..n` as ascending index vectors, in
/// lexicographic order.
///
/// ```
/// use nextcomb_test::IndexCombinations;
///
/// let all: Vec<Vec<usize>> = IndexCombinations::new(4, 2).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1]);
/// assert_eq!(all[5], vec![2, 3]);
/// ```
pub struct IndexCombinations {
    n: usize,
    positions: Vec<usize>,
    done: bool,
}

impl IndexCombinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            positions: (0..k).collect(),
            done: k > n,
        }
    }

    fn advance(&mut self) {
        let k = self.positions.len();
        for i in (0..k).rev() {
            // Leave room for the k - i - 1 positions after this one.
            if self.positions[i] < self.n - (k - i) {
                self.positions[i] += 1;
                for j in (i + 1)..k {
                    self.positions[j] = self.positions[j - 1] + 1;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.positions.clone();
        self.advance();
        Some(current)
    }
}

/// Compute binomial coefficient C(n, k).
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result
}

/// Returns every distinct `r`-multiset of `items`, each as a sorted vector,
/// in lexicographic order.
pub fn distinct_selections<T: Ord + Clone>(items: &[T], r: usize) -> Vec<Vec<T>> {
    let mut sorted = items.to_vec();
    sorted.sort();
    let mut all: Vec<Vec<T>> = IndexCombinations::new(sorted.len(), r)
        .map(|idx| idx.into_iter().map(|i| sorted[i].clone()).collect())
        .collect();
    all.sort();
    all.dedup();
    all
}
