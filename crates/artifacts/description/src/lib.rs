//! Deployment descriptions.
//!
//! A description lists, per network, the deployed contracts together with the values their view
//! functions are expected to return and the accounts expected to hold their access-control roles.

pub mod check;
pub mod description;

pub use check::{CallExpectation, CheckSet, CheckValue, Scalar};
pub use description::{ContractEntry, Description, Network, NetworkSection, ProxyScopes, RoleMap};
