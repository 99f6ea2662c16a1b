//! Helpers for tests that need ABI files and descriptions on disk.

use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// A temporary directory holding an `abi/` folder and description files.
///
/// The directory is removed when the workspace is dropped.
pub struct TempWorkspace {
    root: TempDir,
}

impl TempWorkspace {
    pub fn new() -> std::io::Result<Self> {
        let root = tempfile::tempdir()?;
        fs::create_dir_all(root.path().join("abi"))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// The directory ABI files are written to.
    pub fn abi_dir(&self) -> PathBuf {
        self.root().join("abi")
    }

    /// Writes `abi` as `abi/<name>.json`.
    pub fn add_abi(&self, name: &str, abi: &str) -> std::io::Result<PathBuf> {
        let path = self.abi_dir().join(format!("{name}.json"));
        fs::write(&path, abi)?;
        Ok(path)
    }

    /// Writes a description file and returns its path.
    pub fn add_description(&self, file_name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.root().join(file_name);
        fs::write(&path, content)?;
        Ok(path)
    }
}
