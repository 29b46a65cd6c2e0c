//! nextcomb - In-place combination enumeration in Rust
//!
//! Rearrange a slice so its prefix holds the lexicographically next
//! `r`-combination, pick among interchangeable strategies, and count the
//! primitive operations each one performs.
//!
//! # Example
//!
//! ```rust
//! use nextcomb::prelude::*;
//!
//! let mut hand = ['A', 'B', 'C', 'D'];
//! let mut count = 1;
//! while next_combination(&mut hand, 2) {
//!     count += 1;
//! }
//! assert_eq!(count, 6);
//!
//! let result = sweep(Variant::LinearRotation, 4, InputKind::Distinct);
//! assert_eq!(result.combinations(), 16);
//! ```

// Enumeration API
pub use nextcomb_core::{
    for_each_combination, next_combination, next_combination_split, rotate_disjoint,
    CombinationError, CombinationStep, Cursor, Element, GappedRotation, Joined, LinearRotation,
    ReversalScan, Selection, Sequence, Variant,
};

// Instrumentation
pub use nextcomb_core::{OpCounters, OpCounts, Tracked, TrackedCursor};

// Range algorithms for custom generators
pub use nextcomb_core::algo;

// Configuration
pub use nextcomb_config::{ConfigError, HarnessConfig, InputKind, OutputConfig};

// Benchmark harness
pub use nextcomb_benchmark::{
    build_input, sweep, Benchmark, BenchmarkError, BenchmarkSuite, CsvExporter, MarkdownReport,
    SubsetRun, SweepResult, TextReport,
};

#[cfg(feature = "console")]
pub use nextcomb_console as console;

mod run;
pub use run::run_benchmark;

pub mod prelude {
    pub use super::{
        for_each_combination, next_combination, next_combination_split, CombinationStep, Cursor,
        Element, GappedRotation, LinearRotation, ReversalScan, Selection, Sequence, Variant,
    };
    pub use super::{sweep, Benchmark, HarnessConfig, InputKind, OpCounters, OpCounts};
}
