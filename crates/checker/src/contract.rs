//! A contract ABI bound to an address and a chain client.

use crate::{rpc::CallClient, value};
use alloy_dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy_json_abi::{Function, JsonAbi};
use alloy_primitives::Address;
use state_checker_artifacts_description::Scalar;

/// Why a simulated call produced no comparable value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallFailure {
    /// The call could not be built: unknown function, wrong arity or unconvertible arguments.
    Invalid(String),
    /// The node rejected the call, or its return data could not be decoded.
    Reverted(String),
}

/// An interface bound at an address, used for read-only calls.
pub struct BoundContract<'a> {
    name: String,
    address: Address,
    abi: JsonAbi,
    client: &'a dyn CallClient,
}

impl<'a> BoundContract<'a> {
    pub fn new(
        name: impl Into<String>,
        address: Address,
        abi: JsonAbi,
        client: &'a dyn CallClient,
    ) -> Self {
        Self { name: name.into(), address, abi, client }
    }

    /// The ABI short-name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selects the function a check set key refers to.
    ///
    /// A key with a parameter list selects the overload with that signature; a bare name selects
    /// the overload taking `arity` arguments.
    pub fn function(&self, key: &str, arity: usize) -> Result<&Function, CallFailure> {
        let (name, signature) = match key.split_once('(') {
            Some((name, _)) => {
                (name.trim(), Some(key.chars().filter(|c| !c.is_whitespace()).collect::<String>()))
            }
            None => (key.trim(), None),
        };
        let overloads = self.abi.function(name).ok_or_else(|| {
            CallFailure::Invalid(format!("`{name}` is not a function of {}", self.name))
        })?;
        match signature {
            Some(signature) => overloads
                .iter()
                .find(|function| function.signature() == signature)
                .ok_or_else(|| CallFailure::Invalid(format!("{} has no `{signature}`", self.name))),
            None => overloads.iter().find(|function| function.inputs.len() == arity).ok_or_else(
                || CallFailure::Invalid(format!("no overload of `{name}` takes {arity} arguments")),
            ),
        }
    }

    /// Calls the function selected by `key` with `args`.
    pub async fn call(&self, key: &str, args: &[Scalar]) -> Result<DynSolValue, CallFailure> {
        let function = self.function(key, args.len())?;
        self.call_function(function, args).await
    }

    /// Calls `function` with `args` and decodes its return value.
    ///
    /// A single return value is returned as is, several are returned as a tuple.
    pub async fn call_function(
        &self,
        function: &Function,
        args: &[Scalar],
    ) -> Result<DynSolValue, CallFailure> {
        let values = value::coerce_args(function, args).map_err(CallFailure::Invalid)?;
        let input = function
            .abi_encode_input(&values)
            .map_err(|err| CallFailure::Invalid(err.to_string()))?;
        debug!(
            contract = %self.name,
            address = %self.address,
            function = %function.signature(),
            "calling"
        );
        let output = self
            .client
            .call(self.address, input.into())
            .await
            .map_err(|err| CallFailure::Reverted(err.to_string()))?;
        let mut decoded = function.abi_decode_output(&output, false).map_err(|err| {
            CallFailure::Reverted(format!("undecodable return data {output}: {err}"))
        })?;
        trace!(?decoded, "decoded");
        Ok(if decoded.len() == 1 { decoded.remove(0) } else { DynSolValue::Tuple(decoded) })
    }
}
