//! Evaluation of single view-function expectations.

use crate::{
    contract::{BoundContract, CallFailure},
    report::Reporter,
    value,
};
use alloy_dyn_abi::DynSolValue;
use state_checker_artifacts_description::{CallExpectation, CheckSet, CheckValue, Scalar};
use state_checker_core::error::Result;
use std::{fmt, io::Write};

/// Final state of one check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The call returned the expected value.
    Match(String),
    Mismatch { actual: String, expected: String },
    /// The call reverted as declared by `mustRevert`.
    ExpectedRevert(String),
    UnexpectedRevert(String),
    /// The call returned although it was declared to revert.
    UnexpectedSuccess(String),
    /// The check could not be turned into a call.
    Invalid(String),
    Skipped,
}

impl Outcome {
    /// Whether this outcome counts as passing. Skipped checks pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Match(_) | Self::ExpectedRevert(_) | Self::Skipped)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match(actual) => f.write_str(actual),
            Self::Mismatch { actual, expected } => write!(f, "{actual} (expected {expected})"),
            Self::ExpectedRevert(err) | Self::UnexpectedRevert(err) => {
                write!(f, "REVERTED with: {err}")
            }
            Self::UnexpectedSuccess(actual) => write!(f, "{actual} (expected to revert)"),
            Self::Invalid(err) => f.write_str(err),
            Self::Skipped => f.write_str("skipped"),
        }
    }
}

/// `.method` or `.method(a, b)`.
pub fn describe(method: &str, args: &[Scalar]) -> String {
    if args.is_empty() {
        format!(".{method}")
    } else {
        let args = args.iter().map(ToString::to_string).collect::<Vec<_>>();
        format!(".{method}({})", args.join(", "))
    }
}

/// Classifies the result of a call against its expectation.
pub fn classify(
    result: Result<DynSolValue, CallFailure>,
    expectation: &CallExpectation,
) -> Outcome {
    match (result, expectation.must_revert) {
        (Err(CallFailure::Invalid(err)), _) => Outcome::Invalid(err),
        (Err(CallFailure::Reverted(err)), true) => Outcome::ExpectedRevert(err),
        (Err(CallFailure::Reverted(err)), false) => Outcome::UnexpectedRevert(err),
        (Ok(actual), true) => Outcome::UnexpectedSuccess(value::render(&actual)),
        (Ok(actual), false) => {
            let rendered = value::render(&actual);
            match &expectation.result {
                Some(expected) if value::matches(&actual, expected) => Outcome::Match(rendered),
                Some(expected) => {
                    Outcome::Mismatch { actual: rendered, expected: expected.to_string() }
                }
                None => Outcome::Match(rendered),
            }
        }
    }
}

/// Performs one call of `method` and records its outcome.
pub async fn invoke<W: Write>(
    contract: &BoundContract<'_>,
    method: &str,
    expectation: &CallExpectation,
    reporter: &mut Reporter<W>,
) -> Result<Outcome> {
    let description = describe(method, &expectation.args);
    reporter.pending(&description)?;
    let result = contract.call(method, &expectation.args).await;
    let outcome = classify(result, expectation);
    if !outcome.is_pass() {
        debug!(contract = contract.name(), %description, %outcome, "check failed");
    }
    reporter.record(&description, &outcome)?;
    Ok(outcome)
}

/// Runs every check of `checks` against `contract` in declared order.
pub async fn run_check_set<W: Write>(
    contract: &BoundContract<'_>,
    checks: &CheckSet,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    for (method, check) in checks {
        match check {
            CheckValue::Skip => reporter.record(&describe(method, &[]), &Outcome::Skipped)?,
            CheckValue::Scalar(expected) => {
                invoke(contract, method, &CallExpectation::returning(expected.clone()), reporter)
                    .await?;
            }
            CheckValue::Call(expectation) => {
                invoke(contract, method, expectation, reporter).await?;
            }
            CheckValue::Calls(expectations) => {
                for expectation in expectations {
                    invoke(contract, method, expectation, reporter).await?;
                }
            }
        }
    }
    Ok(())
}
