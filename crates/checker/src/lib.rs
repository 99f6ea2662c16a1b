//! Checks deployed contracts against a declarative deployment description.
//!
//! A [`Description`] lists, per network, the contracts of a deployment together with the
//! results their view functions must return and the holders of their access-control roles.
//! [`StateChecker`] replays every declared call against the network's endpoint and reports one
//! line per check.

#[macro_use]
extern crate tracing;

pub mod acl;
pub mod contract;
mod driver;
pub mod invoker;
pub mod report;
pub mod resolver;
pub mod rpc;
pub mod section;
pub mod value;

pub use driver::StateChecker;
pub use invoker::Outcome;
pub use report::{Reporter, Summary};
pub use rpc::{CallClient, CallError, Connector, HttpConnector};

pub use state_checker_artifacts_abi as abi;
pub use state_checker_artifacts_abi::AbiLoader;
pub use state_checker_artifacts_description as description;
pub use state_checker_artifacts_description::Description;
pub use state_checker_core::{error, utils};
