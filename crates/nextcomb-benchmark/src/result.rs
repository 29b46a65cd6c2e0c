//! Benchmark result types.

use std::fmt;
use std::time::Duration;

use nextcomb_config::InputKind;
use nextcomb_core::{OpCounts, Variant};

/// Work done for one subset size within a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetRun {
    /// Subset size.
    pub r: usize,
    /// Combinations visited, the initial one included.
    pub combinations: u64,
    /// Operations spent on this subset size.
    pub counts: OpCounts,
}

/// Result of sweeping one variant over every subset size of one length.
///
/// `Display` renders the text summary:
///
/// ```
/// use nextcomb_benchmark::SweepResult;
/// use nextcomb_config::InputKind;
/// use nextcomb_core::Variant;
///
/// let result = SweepResult::new(Variant::GappedRotation, 20, InputKind::Distinct);
/// assert_eq!(
///     result.to_string(),
///     "gapped_rotation (n = 20):\n\
///     \x20 value comparisons: 0\n\
///     \x20 value swaps:       0\n\
///     \x20 iter comparisons:  0\n\
///     \x20 iter increments:   0\n",
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub variant: Variant,
    /// Sequence length `n`.
    pub length: usize,
    pub input: InputKind,
    /// Totals over the whole sweep.
    pub counts: OpCounts,
    /// One entry per subset size, in order.
    pub subsets: Vec<SubsetRun>,
    /// Wall-clock time of the sweep.
    pub elapsed: Duration,
}

impl SweepResult {
    /// Creates an empty result.
    pub fn new(variant: Variant, length: usize, input: InputKind) -> Self {
        Self {
            variant,
            length,
            input,
            counts: OpCounts::default(),
            subsets: Vec::with_capacity(length + 1),
            elapsed: Duration::ZERO,
        }
    }

    /// Adds one subset size and folds its counts into the totals.
    pub fn add_subset(&mut self, run: SubsetRun) {
        self.counts += run.counts;
        self.subsets.push(run);
    }

    /// Returns the number of combinations visited over all subset sizes.
    pub fn combinations(&self) -> u64 {
        self.subsets.iter().map(|s| s.combinations).sum()
    }

    /// Returns the average number of operations per combination.
    pub fn ops_per_combination(&self) -> f64 {
        let combinations = self.combinations();
        if combinations == 0 {
            0.0
        } else {
            self.counts.total() as f64 / combinations as f64
        }
    }

    /// Returns combinations visited per second.
    pub fn combinations_per_second(&self) -> f64 {
        if self.elapsed.is_zero() {
            0.0
        } else {
            self.combinations() as f64 / self.elapsed.as_secs_f64()
        }
    }
}

impl fmt::Display for SweepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (n = {}):", self.variant, self.length)?;
        writeln!(f, "  value comparisons: {}", self.counts.value_comparisons)?;
        writeln!(f, "  value swaps:       {}", self.counts.value_swaps)?;
        writeln!(f, "  iter comparisons:  {}", self.counts.cursor_comparisons)?;
        writeln!(f, "  iter increments:   {}", self.counts.cursor_steps)
    }
}

/// Results of several sweeps sharing one input kind.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSuite {
    pub input: InputKind,
    /// Sweeps in run order: lengths outer, variants inner.
    pub sweeps: Vec<SweepResult>,
    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

impl BenchmarkSuite {
    /// Creates an empty suite.
    pub fn new(input: InputKind) -> Self {
        Self {
            input,
            sweeps: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Adds a sweep.
    pub fn add_sweep(&mut self, sweep: SweepResult) {
        self.sweeps.push(sweep);
    }

    /// Returns the number of sweeps.
    pub fn sweep_count(&self) -> usize {
        self.sweeps.len()
    }

    /// Returns the swept lengths in first-run order, without repeats.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths = Vec::new();
        for sweep in &self.sweeps {
            if !lengths.contains(&sweep.length) {
                lengths.push(sweep.length);
            }
        }
        lengths
    }

    /// Returns the sweeps of one length.
    pub fn for_length(&self, length: usize) -> impl Iterator<Item = &SweepResult> {
        self.sweeps.iter().filter(move |s| s.length == length)
    }

    /// Finds the sweep of `variant` at `length`.
    pub fn find(&self, variant: Variant, length: usize) -> Option<&SweepResult> {
        self.sweeps
            .iter()
            .find(|s| s.variant == variant && s.length == length)
    }

    /// Returns the sweep with the fewest total operations at `length`.
    ///
    /// Ties go to the sweep that ran first.
    ///
    /// # Example
    ///
    /// ```
    /// use nextcomb_benchmark::{BenchmarkSuite, SweepResult};
    /// use nextcomb_config::InputKind;
    /// use nextcomb_core::{OpCounts, Variant};
    ///
    /// let mut suite = BenchmarkSuite::new(InputKind::Distinct);
    /// let mut slow = SweepResult::new(Variant::LinearRotation, 3, InputKind::Distinct);
    /// slow.counts = OpCounts { value_comparisons: 9, ..OpCounts::default() };
    /// let mut fast = SweepResult::new(Variant::Visitor, 3, InputKind::Distinct);
    /// fast.counts = OpCounts { value_swaps: 4, ..OpCounts::default() };
    /// suite.add_sweep(slow);
    /// suite.add_sweep(fast);
    ///
    /// assert_eq!(suite.cheapest(3).unwrap().variant, Variant::Visitor);
    /// assert!(suite.cheapest(4).is_none());
    /// ```
    pub fn cheapest(&self, length: usize) -> Option<&SweepResult> {
        self.for_length(length).fold(None, |best: Option<&SweepResult>, s| match best {
            Some(b) if b.counts.total() <= s.counts.total() => Some(b),
            _ => Some(s),
        })
    }
}

impl fmt::Display for BenchmarkSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sweep) in self.sweeps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{sweep}")?;
        }
        Ok(())
    }
}
