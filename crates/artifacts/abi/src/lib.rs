//! Contract interface descriptions: loading them from an ABI directory and finding the view
//! functions a description forgot to check.

#[macro_use]
extern crate tracing;

pub mod coverage;
pub mod loader;

pub use coverage::{is_non_mutating, missing_coverage, non_mutating_functions};
pub use loader::{AbiLoader, ABI_EXTENSION};
