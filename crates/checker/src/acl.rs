//! Role-holder verification through `hasRole`.

use crate::{
    contract::{BoundContract, CallFailure},
    invoker::{self, Outcome},
    report::Reporter,
    value,
};
use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::Function;
use once_cell::sync::Lazy;
use state_checker_artifacts_description::{ContractEntry, Scalar};
use state_checker_core::error::Result;
use std::io::Write;

static HAS_ROLE: Lazy<Function> = Lazy::new(|| {
    Function::parse("function hasRole(bytes32 role, address account) view returns (bool)")
        .expect("valid signature")
});

/// Asserts that every declared holder holds its role on `contract`.
///
/// A falsy return and a revert both fail the check.
pub async fn check_acl<W: Write>(
    contract: &BoundContract<'_>,
    entry: &ContractEntry,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    for (role, holder) in entry.acl() {
        let args = [Scalar::Text(role.to_string()), Scalar::Text(holder.to_string())];
        let description = invoker::describe(HAS_ROLE.name.as_str(), &args);
        reporter.pending(&description)?;
        let outcome = match contract.call_function(&HAS_ROLE, &args).await {
            Ok(DynSolValue::Bool(true)) => Outcome::Match("true".to_string()),
            Ok(actual) => {
                Outcome::Mismatch { actual: value::render(&actual), expected: "true".to_string() }
            }
            Err(CallFailure::Invalid(err)) => Outcome::Invalid(err),
            Err(CallFailure::Reverted(err)) => Outcome::UnexpectedRevert(err),
        };
        reporter.record(&description, &outcome)?;
    }
    Ok(())
}
