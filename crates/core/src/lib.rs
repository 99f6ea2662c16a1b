//! Shared building blocks of the state-checker: the error type and small helpers for addresses,
//! endpoints and files.

pub mod error;
pub mod utils;

#[cfg(feature = "test-utils")]
pub mod test_utils;
