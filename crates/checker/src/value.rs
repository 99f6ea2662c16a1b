//! Conversions between declared scalars and ABI values.

use alloy_dyn_abi::{DynSolType, DynSolValue, Specifier};
use alloy_json_abi::Function;
use alloy_primitives::{hex, I256, U256};
use state_checker_artifacts_description::Scalar;
use state_checker_core::utils;
use std::str::FromStr;

/// Converts declared arguments into values of the function's parameter types.
pub fn coerce_args(function: &Function, args: &[Scalar]) -> Result<Vec<DynSolValue>, String> {
    if function.inputs.len() != args.len() {
        return Err(format!(
            "`{}` takes {} arguments, {} given",
            function.signature(),
            function.inputs.len(),
            args.len()
        ));
    }
    function
        .inputs
        .iter()
        .zip(args)
        .map(|(param, arg)| {
            let ty = param.resolve().map_err(|err| err.to_string())?;
            coerce(&ty, arg).map_err(|err| format!("argument `{arg}` as {}: {err}", param.ty))
        })
        .collect()
}

/// Converts one declared scalar into a value of type `ty`.
pub fn coerce(ty: &DynSolType, arg: &Scalar) -> Result<DynSolValue, String> {
    match (ty, arg) {
        (DynSolType::Bool, Scalar::Bool(b)) => Ok(DynSolValue::Bool(*b)),
        // addresses are accepted in any letter case
        (DynSolType::Address, Scalar::Text(text)) => {
            utils::parse_address(text).map(DynSolValue::Address).map_err(|err| err.to_string())
        }
        _ => ty.coerce_str(&arg.to_string()).map_err(|err| err.to_string()),
    }
}

/// Whether a returned value satisfies the declared expectation.
///
/// Integers compare numerically, addresses case-insensitively, byte strings as case-insensitive
/// hex, everything else by its rendered text.
pub fn matches(actual: &DynSolValue, expected: &Scalar) -> bool {
    match (actual, expected) {
        (DynSolValue::Bool(actual), Scalar::Bool(expected)) => actual == expected,
        (DynSolValue::Uint(actual, _), Scalar::Int(expected)) => {
            u128::try_from(*expected).is_ok_and(|expected| *actual == U256::from(expected))
        }
        (DynSolValue::Int(actual, _), Scalar::Int(expected)) => {
            I256::try_from(*expected).is_ok_and(|expected| *actual == expected)
        }
        (actual, Scalar::Text(expected)) => matches_text(actual, expected),
        _ => false,
    }
}

fn matches_text(actual: &DynSolValue, expected: &str) -> bool {
    if let Ok(expected) = utils::parse_address(expected) {
        return match actual {
            DynSolValue::Address(actual) => *actual == expected,
            DynSolValue::String(actual) => {
                utils::parse_address(actual).is_ok_and(|actual| actual == expected)
            }
            _ => false,
        };
    }
    match actual {
        DynSolValue::Uint(actual, _) => U256::from_str(expected.trim()).is_ok_and(|e| e == *actual),
        DynSolValue::Int(actual, _) => I256::from_str(expected.trim()).is_ok_and(|e| e == *actual),
        DynSolValue::FixedBytes(..) | DynSolValue::Bytes(_) => {
            render(actual).eq_ignore_ascii_case(expected.trim())
        }
        DynSolValue::String(actual) => actual == expected,
        actual => render(actual) == expected,
    }
}

/// Renders a returned value for the report.
pub fn render(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::FixedBytes(word, size) => hex::encode_prefixed(&word[..*size]),
        DynSolValue::Address(address) => address.to_checksum(None),
        DynSolValue::Function(function) => hex::encode_prefixed(function),
        DynSolValue::Bytes(bytes) => hex::encode_prefixed(bytes),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Array(values) | DynSolValue::FixedArray(values) => {
            format!("[{}]", render_all(values))
        }
        DynSolValue::Tuple(values) => format!("({})", render_all(values)),
        #[allow(unreachable_patterns)]
        other => format!("{other:?}"),
    }
}

fn render_all(values: &[DynSolValue]) -> String {
    values.iter().map(render).collect::<Vec<_>>().join(", ")
}
