//! Benchmark runner.

use std::ops::ControlFlow;
use std::time::Instant;

use nextcomb_config::{HarnessConfig, InputKind};
use nextcomb_core::{
    for_each_combination, CombinationStep, Cursor, GappedRotation, LinearRotation, OpCounters,
    ReversalScan, Sequence, Variant,
};
use tracing::{debug, info};

use crate::error::BenchmarkError;
use crate::input::build_input;
use crate::report::{CsvExporter, MarkdownReport};
use crate::result::{BenchmarkSuite, SubsetRun, SweepResult};

/// Runs the sweeps a [`HarnessConfig`] describes.
///
/// # Example
///
/// ```
/// use nextcomb_benchmark::Benchmark;
/// use nextcomb_config::HarnessConfig;
/// use nextcomb_core::Variant;
///
/// let config = HarnessConfig::new()
///     .with_lengths([4, 6])
///     .with_variants([Variant::GappedRotation, Variant::Visitor]);
/// let suite = Benchmark::new(config).unwrap().run_all();
///
/// assert_eq!(suite.sweep_count(), 4);
/// assert_eq!(suite.find(Variant::Visitor, 6).unwrap().combinations(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: HarnessConfig,
}

impl Benchmark {
    /// Creates a benchmark from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::Config`] if the configuration is invalid.
    pub fn new(config: HarnessConfig) -> Result<Self, BenchmarkError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Sweeps every configured variant over every configured length.
    pub fn run_all(&self) -> BenchmarkSuite {
        let lengths = &self.config.lengths;
        let variants = &self.config.variants;

        info!(
            event = "benchmark_start",
            lengths = ?lengths,
            variant_count = variants.len(),
            input = ?self.config.input,
        );

        let start = Instant::now();
        let mut suite = BenchmarkSuite::new(self.config.input);
        for &length in lengths {
            for &variant in variants {
                suite.add_sweep(sweep(variant, length, self.config.input));
            }
        }
        suite.elapsed = start.elapsed();

        info!(
            event = "benchmark_end",
            sweeps = suite.sweep_count() as u64,
            duration_ms = suite.elapsed.as_millis() as u64,
        );

        suite
    }

    /// Writes the CSV and Markdown reports the configuration asks for.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::Report`] if a file can't be written.
    pub fn write_reports(&self, suite: &BenchmarkSuite) -> Result<(), BenchmarkError> {
        let output = &self.config.output;
        if let Some(path) = &output.csv_path {
            CsvExporter::to_file(suite, path).map_err(|source| BenchmarkError::Report {
                path: path.clone(),
                source,
            })?;
            info!(event = "report_written", format = "csv", path = %path.display());
        }
        if let Some(path) = &output.markdown_path {
            MarkdownReport::to_file(suite, path).map_err(|source| BenchmarkError::Report {
                path: path.clone(),
                source,
            })?;
            info!(event = "report_written", format = "markdown", path = %path.display());
        }
        Ok(())
    }
}

/// Sweeps one variant over every subset size of a length-`n` input.
///
/// Counters are reset once when the sweep starts and accumulate across all
/// subset sizes; the per-size breakdown holds the difference between
/// snapshots taken around each size.
pub fn sweep(variant: Variant, n: usize, input: InputKind) -> SweepResult {
    let values = build_input(input, n);
    let counters = OpCounters::new();
    let mut result = SweepResult::new(variant, n, input);

    info!(event = "sweep_start", variant = variant.name(), n = n as u64);

    let start = Instant::now();
    counters.reset();
    for r in 0..=n {
        let before = counters.snapshot();

        // Setup goes through the uncounted constructors.
        let mut seq = counters.track_all(values.iter().copied());
        let first = counters.cursor(0usize);
        let mid = counters.cursor(r);
        let last = counters.cursor(n);

        let seq = &mut seq[..];
        let combinations = match variant {
            Variant::GappedRotation => step_until_exhausted(&GappedRotation, seq, first, mid, last),
            Variant::ReversalScan => step_until_exhausted(&ReversalScan, seq, first, mid, last),
            Variant::LinearRotation => step_until_exhausted(&LinearRotation, seq, first, mid, last),
            Variant::Visitor => visit_all(seq, first, mid, last),
        };

        let counts = counters.snapshot() - before;
        debug!(
            event = "subset_end",
            variant = variant.name(),
            n = n as u64,
            r = r as u64,
            combinations = combinations,
            value_comparisons = counts.value_comparisons,
            value_swaps = counts.value_swaps,
            iter_comparisons = counts.cursor_comparisons,
            iter_increments = counts.cursor_steps,
        );
        result.add_subset(SubsetRun {
            r,
            combinations,
            counts,
        });
    }
    result.elapsed = start.elapsed();
    debug_assert_eq!(result.counts, counters.snapshot());

    info!(
        event = "sweep_end",
        variant = variant.name(),
        n = n as u64,
        combinations = result.combinations(),
        value_comparisons = result.counts.value_comparisons,
        value_swaps = result.counts.value_swaps,
        iter_comparisons = result.counts.cursor_comparisons,
        iter_increments = result.counts.cursor_steps,
        duration_ms = result.elapsed.as_millis() as u64,
    );

    result
}

fn step_until_exhausted<G, S, C>(step: &G, seq: &mut S, first: C, mid: C, last: C) -> u64
where
    G: CombinationStep,
    S: Sequence + ?Sized,
    C: Cursor,
{
    let mut combinations = 1;
    while step.advance(seq, first, mid, last) {
        combinations += 1;
    }
    combinations
}

fn visit_all<S, C>(seq: &mut S, first: C, mid: C, last: C) -> u64
where
    S: Sequence + ?Sized,
    C: Cursor,
{
    let mut combinations = 0;
    let _ = for_each_combination(seq, first, mid, last, |_| {
        combinations += 1;
        ControlFlow::Continue(())
    });
    combinations
}
