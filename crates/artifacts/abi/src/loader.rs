use alloy_json_abi::JsonAbi;
use state_checker_core::error::{CheckerError, Result};
use std::path::PathBuf;

/// Extension of the files in an ABI directory.
pub const ABI_EXTENSION: &str = "json";

/// Reads contract ABIs by interface short-name from a directory.
///
/// `StETH` resolves to `<root>/StETH.json`. The file holds either a bare ABI array or a compiler
/// artifact with an `abi` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbiLoader {
    root: PathBuf,
}

impl AbiLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the path of the ABI file for `name`
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{ABI_EXTENSION}"))
    }

    /// Loads and parses the ABI for the interface `name`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, name: &str) -> Result<JsonAbi> {
        let path = self.path_of(name);
        if !path.is_file() {
            return Err(CheckerError::AbiNotFound { name: name.to_string(), path });
        }
        let content =
            std::fs::read_to_string(&path).map_err(|err| CheckerError::io(err, &path))?;
        let abi = parse_abi(&content).map_err(|err| CheckerError::AbiMalformed { path, err })?;
        trace!(functions = abi.functions.len(), "loaded ABI");
        Ok(abi)
    }
}

/// Parses a bare ABI array or the `abi` field of an artifact object.
pub fn parse_abi(content: &str) -> serde_json::Result<JsonAbi> {
    let mut value: serde_json::Value = serde_json::from_str(content)?;
    if let Some(abi) = value.as_object_mut().and_then(|artifact| artifact.remove("abi")) {
        value = abi;
    }
    serde_json::from_value(value)
}
