//! Request/response contract shared by the router and its callers.
//!
//! [`Request`] is the open wire shape handed over by outer layers (camelCase
//! JSON). [`Operation`] is its validated, tagged form: one variant per
//! operation kind carrying exactly the fields that kind uses.

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, GatewayResult};

/// The only request category the gateway serves.
pub const IO_CATEGORY: &str = "IO";

/// A single operation descriptor as sent by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Request {
    pub request_category: Option<String>,
    pub request_type: Option<String>,
    /// Target file for Read/Update/Create/Delete. May start with an alias.
    pub file_path: Option<String>,
    /// Target directory for Tree. May start with an alias.
    pub directory: Option<String>,
    /// 1-based insertion line for Update.
    pub line_number: Option<i64>,
    pub content: Option<String>,
    /// Maximum nesting level expanded by Tree.
    pub depth: Option<usize>,
    pub create_directories: bool,
}

impl Request {
    fn io(kind: OperationKind) -> Self {
        Self {
            request_category: Some(IO_CATEGORY.to_string()),
            request_type: Some(kind.as_str().to_string()),
            ..Self::default()
        }
    }

    pub fn read(file_path: impl Into<String>) -> Self {
        Self {
            file_path: Some(file_path.into()),
            ..Self::io(OperationKind::Read)
        }
    }

    pub fn update(
        file_path: impl Into<String>,
        line_number: i64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            file_path: Some(file_path.into()),
            line_number: Some(line_number),
            content: Some(content.into()),
            ..Self::io(OperationKind::Update)
        }
    }

    pub fn create(
        file_path: impl Into<String>,
        content: impl Into<String>,
        create_directories: bool,
    ) -> Self {
        Self {
            file_path: Some(file_path.into()),
            content: Some(content.into()),
            create_directories,
            ..Self::io(OperationKind::Create)
        }
    }

    pub fn delete(file_path: impl Into<String>) -> Self {
        Self {
            file_path: Some(file_path.into()),
            ..Self::io(OperationKind::Delete)
        }
    }

    pub fn tree(directory: impl Into<String>, depth: Option<usize>) -> Self {
        Self {
            directory: Some(directory.into()),
            depth,
            ..Self::io(OperationKind::Tree)
        }
    }
}

/// Recognized values of `requestType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Read,
    Update,
    Create,
    Delete,
    Tree,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Update => "Update",
            Self::Create => "Create",
            Self::Delete => "Delete",
            Self::Tree => "Tree",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Read" => Some(Self::Read),
            "Update" => Some(Self::Update),
            "Create" => Some(Self::Create),
            "Delete" => Some(Self::Delete),
            "Tree" => Some(Self::Tree),
            _ => None,
        }
    }
}

/// Validated request. Paths are still unresolved (may carry an alias).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Read {
        file: String,
    },
    Update {
        file: String,
        line: i64,
        content: String,
    },
    Create {
        file: String,
        content: String,
        create_directories: bool,
    },
    Delete {
        file: String,
    },
    Tree {
        directory: String,
        depth: Option<usize>,
    },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Read { .. } => OperationKind::Read,
            Self::Update { .. } => OperationKind::Update,
            Self::Create { .. } => OperationKind::Create,
            Self::Delete { .. } => OperationKind::Delete,
            Self::Tree { .. } => OperationKind::Tree,
        }
    }

    /// The unresolved path this operation targets.
    pub fn target(&self) -> &str {
        match self {
            Self::Read { file }
            | Self::Update { file, .. }
            | Self::Create { file, .. }
            | Self::Delete { file } => file,
            Self::Tree { directory, .. } => directory,
        }
    }
}

impl TryFrom<&Request> for Operation {
    type Error = GatewayError;

    /// Checks category, then kind, then the fields the kind requires.
    fn try_from(request: &Request) -> GatewayResult<Self> {
        let category = request.request_category.as_deref().unwrap_or_default();
        if category != IO_CATEGORY {
            return Err(GatewayError::UnsupportedCategory(category.to_string()));
        }

        let raw_kind = request.request_type.as_deref().unwrap_or_default();
        let kind = OperationKind::parse(raw_kind)
            .ok_or_else(|| GatewayError::UnsupportedOperation(raw_kind.to_string()))?;

        let content = || request.content.clone().unwrap_or_default();
        let operation = match kind {
            OperationKind::Read => Self::Read {
                file: required_file(request, kind)?,
            },
            OperationKind::Update => {
                let line = request
                    .line_number
                    .ok_or(GatewayError::MissingLineNumber)?;
                Self::Update {
                    file: required_file(request, kind)?,
                    line,
                    content: content(),
                }
            }
            OperationKind::Create => Self::Create {
                file: required_file(request, kind)?,
                content: content(),
                create_directories: request.create_directories,
            },
            OperationKind::Delete => Self::Delete {
                file: required_file(request, kind)?,
            },
            OperationKind::Tree => {
                let directory = non_empty(request.directory.as_deref())
                    .ok_or(GatewayError::MissingDirectory)?;
                Self::Tree {
                    directory,
                    depth: request.depth,
                }
            }
        };
        Ok(operation)
    }
}

fn required_file(request: &Request, kind: OperationKind) -> GatewayResult<String> {
    non_empty(request.file_path.as_deref()).ok_or(GatewayError::MissingFilePath(kind.as_str()))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Normalized result of a dispatch.
///
/// Fields are private so an error response can never also claim success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    success: bool,
    is_error: bool,
    error_message: Option<String>,
    content: Option<String>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            success: true,
            is_error: false,
            error_message: None,
            content: None,
        }
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::ok()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            is_error: true,
            error_message: Some(message.into()),
            content: None,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl From<GatewayError> for Response {
    fn from(err: GatewayError) -> Self {
        Self::error(err.to_string())
    }
}
