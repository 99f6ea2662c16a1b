//! Coverage of an ABI by a set of declared checks.
//!
//! Every non-mutating function of a contract must appear in its check set, either with an
//! expectation or with a skip marker. A function that is missing means the description has
//! drifted from the deployed interface.

use alloy_json_abi::{Function, JsonAbi, StateMutability};
use std::collections::BTreeSet;

/// Whether the function can be called without changing state, i.e. it is neither `payable` nor
/// `nonpayable`.
pub fn is_non_mutating(function: &Function) -> bool {
    !matches!(function.state_mutability, StateMutability::Payable | StateMutability::NonPayable)
}

/// Returns the names of all non-mutating functions in `abi`, each name once.
pub fn non_mutating_functions(abi: &JsonAbi) -> Vec<&str> {
    abi.functions
        .iter()
        .filter(|(_, overloads)| overloads.iter().any(is_non_mutating))
        .map(|(name, _)| name.as_str())
        .collect()
}

/// Returns the non-mutating functions of `abi` that have no entry in `declared`.
///
/// A declared key is either a function name or a full signature like `balanceOf(address)`; a
/// signature covers its function name.
pub fn missing_coverage<'a>(
    abi: &JsonAbi,
    declared: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let declared: BTreeSet<&str> = declared.into_iter().map(function_name).collect();
    non_mutating_functions(abi)
        .into_iter()
        .filter(|name| !declared.contains(name))
        .map(str::to_string)
        .collect()
}

/// Strips the parameter list from a signature key.
fn function_name(key: &str) -> &str {
    key.split_once('(').map_or(key, |(name, _)| name).trim()
}
