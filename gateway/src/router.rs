//! Kernel request router: the single entry point of the gateway.
//!
//! Validates the request, resolves aliases, dispatches to the file or
//! directory store and folds every outcome into a [`Response`]. The router
//! itself never touches the filesystem.

use std::path::Path;

use serde_json::Value;
use tracing::{Level, debug, info, warn};

use crate::core::alias::AliasTable;
use crate::core::types::{Operation, Request, Response};
use crate::error::{GatewayError, GatewayResult};
use crate::io::dir_store::{DirectoryStore, LocalDirectoryStore};
use crate::io::file_store::{FileStore, LocalFileStore};
use crate::io::host::{self, HostInfo};

/// Composed gateway: an immutable alias table plus the two stores.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Gateway<F = LocalFileStore, D = LocalDirectoryStore> {
    aliases: AliasTable,
    files: F,
    directories: D,
}

impl Gateway {
    /// Gateway over the host filesystem.
    pub fn local(aliases: AliasTable) -> Self {
        Self::new(aliases, LocalFileStore::default(), LocalDirectoryStore)
    }
}

impl<F: FileStore, D: DirectoryStore> Gateway<F, D> {
    pub fn new(aliases: AliasTable, files: F, directories: D) -> Self {
        Self {
            aliases,
            files,
            directories,
        }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn host_info(&self) -> HostInfo {
        host::detect()
    }

    /// Resolve `path` through the alias table.
    pub fn resolve(&self, path: &str) -> GatewayResult<String> {
        self.aliases.resolve(path)
    }

    /// Handle one request. Every failure becomes an error response.
    pub fn dispatch(&self, request: &Request) -> Response {
        match Operation::try_from(request).and_then(|op| self.execute(&op)) {
            Ok(response) => response,
            Err(err) => {
                log_failure(request.request_type.as_deref().unwrap_or_default(), &err);
                Response::from(err)
            }
        }
    }

    /// Handle a request still in JSON form; `null` is a missing request.
    pub fn dispatch_value(&self, value: Value) -> Response {
        if value.is_null() {
            return rejected(GatewayError::NullRequest);
        }
        match serde_json::from_value::<Request>(value) {
            Ok(request) => self.dispatch(&request),
            Err(err) => rejected(GatewayError::MalformedRequest(err.to_string())),
        }
    }

    /// Handle a request given as JSON text.
    pub fn dispatch_json(&self, raw: &str) -> Response {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => self.dispatch_value(value),
            Err(err) => rejected(GatewayError::MalformedRequest(err.to_string())),
        }
    }

    fn execute(&self, operation: &Operation) -> GatewayResult<Response> {
        let resolved = self.resolve(operation.target())?;
        let path = Path::new(&resolved);
        debug!(
            kind = operation.kind().as_str(),
            target = operation.target(),
            resolved = %resolved,
            "dispatching"
        );
        let response = match operation {
            Operation::Read { .. } => Response::with_content(self.files.read(path)?),
            Operation::Update { line, content, .. } => {
                self.files.update(path, *line, content)?;
                Response::ok()
            }
            Operation::Create {
                content,
                create_directories,
                ..
            } => {
                self.files.create(path, content, *create_directories)?;
                Response::ok()
            }
            Operation::Delete { .. } => {
                self.files.delete(path)?;
                Response::ok()
            }
            Operation::Tree { depth, .. } => {
                Response::with_content(self.directories.tree(path, *depth)?)
            }
        };
        Ok(response)
    }
}

/// Validation errors log at `debug`, missing targets at `info`, the rest at `warn`.
fn failure_level(err: &GatewayError) -> Level {
    if err.is_validation() {
        Level::DEBUG
    } else if err.is_not_found() {
        Level::INFO
    } else {
        Level::WARN
    }
}

fn log_failure(request_type: &str, err: &GatewayError) {
    match failure_level(err) {
        Level::DEBUG => debug!(request_type, error = %err, "request rejected"),
        Level::INFO => info!(request_type, error = %err, "request target missing"),
        _ => warn!(request_type, error = %err, "request failed"),
    }
}

fn rejected(err: GatewayError) -> Response {
    log_failure("", &err);
    Response::from(err)
}
