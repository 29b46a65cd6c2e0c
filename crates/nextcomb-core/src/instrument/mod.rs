//! Operation counting.
//!
//! Instrumentation is a pair of decorators: [`Tracked`] wraps an element and
//! [`TrackedCursor`] wraps a cursor. Both report to an [`OpCounters`] they
//! borrow, so the generic algorithms count their own work without any change
//! to their code. Nothing here is global; whoever owns the counters decides
//! when they are reset and read.
//!
//! # Example
//!
//! ```
//! use nextcomb_core::{CombinationStep, Cursor, GappedRotation, OpCounters};
//!
//! let counters = OpCounters::new();
//! let mut items = counters.track_all(0..4);
//! let first = counters.cursor(0usize);
//! let (mid, last) = (first.shifted(2), first.shifted(4));
//!
//! let mut combinations = 1;
//! while GappedRotation.advance(&mut items[..], first, mid, last) {
//!     combinations += 1;
//! }
//!
//! let counts = counters.snapshot();
//! assert_eq!(combinations, 6);
//! assert!(counts.value_comparisons > 0);
//! assert!(counts.cursor_steps > 0);
//! ```

mod counters;
mod cursor;
mod value;

pub use counters::{OpCounters, OpCounts};
pub use cursor::TrackedCursor;
pub use value::Tracked;
