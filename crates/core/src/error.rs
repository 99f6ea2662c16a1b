use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub type Result<T, E = CheckerError> = std::result::Result<T, E>;

/// Various error types
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error(transparent)]
    Io(#[from] CheckerIoError),
    /// The description is not a well-formed document.
    #[error("malformed description: {0}")]
    MalformedDescription(#[from] serde_yaml::Error),
    /// The description parsed but violates the schema.
    #[error("invalid description: {0}")]
    InvalidDescription(String),
    #[error("ABI `{name}` not found at \"{}\"", path.display())]
    AbiNotFound { name: String, path: PathBuf },
    #[error("malformed ABI \"{}\": {err}", path.display())]
    AbiMalformed {
        path: PathBuf,
        #[source]
        err: serde_json::Error,
    },
    /// Non-mutating ABI functions of a contract have no declared check.
    #[error(
        "contract `{alias}` ({name}) declares no checks for: {}",
        missing.join(", ")
    )]
    Coverage { alias: String, name: String, missing: Vec<String> },
    #[error("RPC endpoint `{0}` is neither a URL nor a set environment variable")]
    EndpointUnresolved(String),
    #[error("invalid address `{0}`")]
    InvalidAddress(String),
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
    #[error("{0}")]
    Message(String),
}

impl CheckerError {
    pub fn io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        CheckerIoError::new(err, path).into()
    }

    pub fn msg(msg: impl std::fmt::Display) -> Self {
        Self::Message(msg.to_string())
    }

    pub fn invalid(msg: impl std::fmt::Display) -> Self {
        Self::InvalidDescription(msg.to_string())
    }
}

#[derive(Debug, Error)]
#[error("\"{}\": {io}", self.path.display())]
pub struct CheckerIoError {
    io: io::Error,
    path: PathBuf,
}

impl CheckerIoError {
    pub fn new(io: io::Error, path: impl Into<PathBuf>) -> Self {
        Self { io, path: path.into() }
    }

    /// The path at which the error occurred
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying `io::Error`
    pub fn source(&self) -> &io::Error {
        &self.io
    }
}

impl From<CheckerIoError> for io::Error {
    fn from(err: CheckerIoError) -> Self {
        err.io
    }
}
