//! Shared test fixtures for nextcomb crates.
//!
//! This crate provides pure reference implementations for testing.
//! It does NOT depend on `nextcomb-core`, so core can use it as a
//! dev-dependency without a cycle.
//!
//! - [`reference`] - index-based combination enumeration and binomials
//! - [`fixtures`] - small canned inputs
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! nextcomb-test = { workspace = true }
//! ```
//!
//! ```
//! use nextcomb_test::reference::{binomial, distinct_selections};
//!
//! assert_eq!(binomial(5, 2), 10);
//! assert_eq!(distinct_selections(&[1, 1, 2], 2), vec![vec![1, 1], vec![1, 2]]);
//! ```

pub mod fixtures;
pub mod reference;

pub use fixtures::{letters, text};
pub use reference::{binomial, distinct_selections, IndexCombinations};
