//! Benchmark entry point that hides the wiring.

use nextcomb_benchmark::{Benchmark, BenchmarkError, BenchmarkSuite};
use nextcomb_config::HarnessConfig;

/// Runs every sweep `config` describes and writes the configured reports.
///
/// With the `console` feature the console output is initialized first.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a report can't be
/// written.
///
/// # Example
///
/// ```
/// use nextcomb::{run_benchmark, HarnessConfig, Variant};
///
/// let config = HarnessConfig::new()
///     .with_lengths([5])
///     .with_variants([Variant::ReversalScan]);
/// let suite = run_benchmark(config).unwrap();
/// assert_eq!(suite.sweeps[0].combinations(), 32);
/// ```
pub fn run_benchmark(config: HarnessConfig) -> Result<BenchmarkSuite, BenchmarkError> {
    #[cfg(feature = "console")]
    nextcomb_console::init();

    let benchmark = Benchmark::new(config)?;
    let suite = benchmark.run_all();
    benchmark.write_reports(&suite)?;
    Ok(suite)
}
