//! Declared expectations for view functions.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::{Number, Value};
use std::fmt;

/// View-function name (or full signature) to the expectation(s) for it, in declared order.
pub type CheckSet = IndexMap<String, CheckValue>;

/// An expected result or call argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scalar {
    Bool(bool),
    Int(i128),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => fmt::Display::fmt(b, f),
            Self::Int(i) => fmt::Display::fmt(i, f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl TryFrom<Value> for Scalar {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::Number(n) => integer(&n).map(Self::Int),
            Value::String(s) => Ok(Self::Text(s)),
            Value::Tagged(tagged) => Self::try_from(tagged.value),
            other => Err(format!("expected text, an integer or a boolean, found {}", kind(&other))),
        }
    }
}

fn integer(n: &Number) -> Result<i128, String> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
        .ok_or_else(|| format!("{n} is not an integer; quote large numbers as text"))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// One invocation of a view function: its arguments, the expected result and whether the call
/// is expected to revert instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpectation {
    pub args: Vec<Scalar>,
    /// Absent only when `must_revert` is set.
    pub result: Option<Scalar>,
    pub must_revert: bool,
}

impl CallExpectation {
    /// An argument-less call expected to return `result`.
    pub fn returning(result: Scalar) -> Self {
        Self { args: Vec::new(), result: Some(result), must_revert: false }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawCall {
    #[serde(default)]
    args: Vec<Value>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    must_revert: bool,
}

impl TryFrom<Value> for CallExpectation {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw: RawCall = serde_yaml::from_value(value).map_err(|err| err.to_string())?;
        let args = raw
            .args
            .into_iter()
            .enumerate()
            .map(|(i, arg)| Scalar::try_from(arg).map_err(|err| format!("argument {i}: {err}")))
            .collect::<Result<Vec<_>, _>>()?;
        let result = raw.result.map(Scalar::try_from).transpose()?;
        if result.is_none() && !raw.must_revert {
            return Err("a call expectation needs a `result` unless `mustRevert` is set".into());
        }
        Ok(Self { args, result, must_revert: raw.must_revert })
    }
}

/// The value of a check set entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum CheckValue {
    /// Declared for coverage, never called.
    Skip,
    /// Bare expected result of an argument-less call.
    Scalar(Scalar),
    Call(CallExpectation),
    /// Several invocations of the same function, run in list order.
    Calls(Vec<CallExpectation>),
}

impl CheckValue {
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

impl TryFrom<Value> for CheckValue {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::Skip),
            Value::Mapping(_) => CallExpectation::try_from(value).map(Self::Call),
            Value::Sequence(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Mapping(_) => {
                        CallExpectation::try_from(item).map_err(|err| format!("item {i}: {err}"))
                    }
                    other => Err(format!(
                        "item {i}: list entries must be call expectations, found {}",
                        kind(&other)
                    )),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Calls),
            Value::Tagged(tagged) => Self::try_from(tagged.value),
            scalar => Scalar::try_from(scalar).map(Self::Scalar),
        }
    }
}
