//! Operation-counting benchmark harness for nextcomb.
//!
//! The harness compares the next-combination generators by the primitive
//! operations they perform rather than by wall-clock time alone.
//!
//! # Overview
//!
//! For each configured length `n` and variant, one sweep:
//! - builds a fresh sequence of `n` counted values for every `r` in `0..=n`
//! - walks it with counted cursors until the variant reports exhaustion
//! - accumulates value comparisons, value swaps, cursor comparisons and
//!   cursor steps over the whole sweep, keeping a per-`r` breakdown
//!
//! Results render as a text summary, CSV, or a Markdown report.
//!
//! # Zero-Erasure Design
//!
//! Each sweep dispatches on [`Variant`](nextcomb_core::Variant) once and then
//! runs a fully monomorphized loop over `Tracked` values and `TrackedCursor`
//! positions. No trait objects sit on the counted path.
//!
//! # Example
//!
//! ```
//! use nextcomb_benchmark::sweep;
//! use nextcomb_config::InputKind;
//! use nextcomb_core::Variant;
//!
//! let result = sweep(Variant::ReversalScan, 5, InputKind::Distinct);
//!
//! // 2^5 combinations over r = 0..=5.
//! assert_eq!(result.combinations(), 32);
//! assert!(result.to_string().starts_with("reversal_scan (n = 5):"));
//! ```

mod error;
mod input;
mod report;
mod result;
mod runner;

pub use error::BenchmarkError;
pub use input::build_input;
pub use report::{CsvExporter, MarkdownReport, TextReport};
pub use result::{BenchmarkSuite, SubsetRun, SweepResult};
pub use runner::{sweep, Benchmark};

#[cfg(test)]
mod tests;
