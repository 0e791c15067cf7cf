//! Test-only helpers for building scratch directory trees.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::alias::AliasTable;
use crate::router::Gateway;

/// A temporary directory removed on drop.
pub struct TestRoot {
    dir: TempDir,
}

impl TestRoot {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `rel` under the root as a `/`-separated string.
    pub fn path_str(&self, rel: &str) -> String {
        self.path().join(rel).display().to_string()
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn mkdir(&self, rel: &str) -> io::Result<PathBuf> {
        let path = self.path().join(rel);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    pub fn read(&self, rel: &str) -> io::Result<String> {
        fs::read_to_string(self.path().join(rel))
    }

    /// Local gateway with `alias` pointing at this root.
    pub fn gateway(&self, alias: &str) -> Gateway {
        Gateway::local(AliasTable::new([(
            alias.to_string(),
            self.path().display().to_string(),
        )]))
    }
}
