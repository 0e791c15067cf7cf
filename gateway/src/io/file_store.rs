//! File store adapter backed by the host filesystem.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::dir_store::{DirectoryStore, LocalDirectoryStore};
use crate::core::splice::insert_lines;
use crate::error::{GatewayError, GatewayResult};

/// File operations the router depends on.
///
/// Each failing operation reports a distinct [`GatewayError`] rather than a
/// generic I/O failure whenever the condition is known.
pub trait FileStore: Send + Sync {
    /// Full text of `path`. [`GatewayError::FileNotFound`] if absent.
    fn read(&self, path: &Path) -> GatewayResult<String>;

    /// Write `content` to `path`, replacing any existing file. With
    /// `create_directories`, missing parent directories are created first.
    fn create(&self, path: &Path, content: &str, create_directories: bool) -> GatewayResult<()>;

    /// Insert the lines of `content` before line `line` (1-based).
    fn update(&self, path: &Path, line: i64, content: &str) -> GatewayResult<()>;

    /// Remove `path`. [`GatewayError::FileNotFound`] if absent, including on
    /// a repeated delete.
    fn delete(&self, path: &Path) -> GatewayResult<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// Host filesystem implementation. Parent directories are created through the
/// wrapped [`DirectoryStore`].
#[derive(Debug, Clone, Default)]
pub struct LocalFileStore<D = LocalDirectoryStore> {
    directories: D,
}

impl<D: DirectoryStore> LocalFileStore<D> {
    pub fn new(directories: D) -> Self {
        Self { directories }
    }

    fn require_file(&self, path: &Path) -> GatewayResult<()> {
        if self.exists(path) {
            Ok(())
        } else {
            Err(GatewayError::FileNotFound(path.to_path_buf()))
        }
    }
}

impl<D: DirectoryStore> FileStore for LocalFileStore<D> {
    fn read(&self, path: &Path) -> GatewayResult<String> {
        self.require_file(path)?;
        fs::read_to_string(path).map_err(|err| GatewayError::io(path, err))
    }

    fn create(&self, path: &Path, content: &str, create_directories: bool) -> GatewayResult<()> {
        if create_directories {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                self.directories.create(parent)?;
            }
        }
        debug!(path = %path.display(), bytes = content.len(), "writing file");
        fs::write(path, content).map_err(|err| GatewayError::io(path, err))
    }

    fn update(&self, path: &Path, line: i64, content: &str) -> GatewayResult<()> {
        let original = self.read(path)?;
        let updated = insert_lines(&original, line, content)?;
        debug!(path = %path.display(), line, "splicing lines into file");
        fs::write(path, updated).map_err(|err| GatewayError::io(path, err))
    }

    fn delete(&self, path: &Path) -> GatewayResult<()> {
        self.require_file(path)?;
        debug!(path = %path.display(), "deleting file");
        fs::remove_file(path).map_err(|err| GatewayError::io(path, err))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
