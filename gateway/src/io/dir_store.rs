//! Directory store adapter backed by the host filesystem.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::tree::{TreeNode, render};
use crate::error::{GatewayError, GatewayResult};

/// Directory operations the router depends on.
pub trait DirectoryStore: Send + Sync {
    /// True if `dir` exists and is a directory. Never fails.
    fn exists(&self, dir: &Path) -> bool;

    /// Create `dir` and any missing ancestors. Existing directories are fine.
    fn create(&self, dir: &Path) -> GatewayResult<()>;

    /// Render the hierarchy under `root`, expanding at most `max_depth` levels.
    fn tree(&self, root: &Path, max_depth: Option<usize>) -> GatewayResult<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirectoryStore;

impl DirectoryStore for LocalDirectoryStore {
    fn exists(&self, dir: &Path) -> bool {
        dir.is_dir()
    }

    fn create(&self, dir: &Path) -> GatewayResult<()> {
        fs::create_dir_all(dir).map_err(|err| GatewayError::io(dir, err))
    }

    fn tree(&self, root: &Path, max_depth: Option<usize>) -> GatewayResult<String> {
        let node = scan_tree(root, max_depth)?;
        Ok(render(&node, max_depth))
    }
}

/// Build the node tree under `root`, named after `root` itself.
///
/// Entries are listed in file-name order. Directories at nesting level
/// `>= max_depth` are returned without children and never read. Symbolic
/// links are listed as files and not followed.
pub fn scan_tree(root: &Path, max_depth: Option<usize>) -> GatewayResult<TreeNode> {
    if !root.is_dir() {
        return Err(GatewayError::DirectoryNotFound(root.to_path_buf()));
    }
    debug!(root = %root.display(), ?max_depth, "scanning directory tree");
    let children = scan_level(root, 1, max_depth)?;
    Ok(TreeNode::dir(root.display().to_string(), children))
}

fn scan_level(dir: &Path, level: usize, max_depth: Option<usize>) -> GatewayResult<Vec<TreeNode>> {
    let mut entries = fs::read_dir(dir)
        .map_err(|err| GatewayError::io(dir, err))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| GatewayError::io(dir, err))?;
    entries.sort_by_key(|entry| entry.file_name());

    let closed = max_depth.is_some_and(|depth| level >= depth);
    let mut nodes = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|err| GatewayError::io(&path, err))?;
        if !file_type.is_dir() {
            nodes.push(TreeNode::file(name));
            continue;
        }
        let children = if closed {
            Vec::new()
        } else {
            scan_level(&path, level + 1, max_depth)?
        };
        nodes.push(TreeNode::dir(name, children));
    }
    Ok(nodes)
}
