use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    #[error("file not found: {}", path.display())]
    MissingFile { path: PathBuf },
    #[error("{reason}")]
    Unavailable { reason: String },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Other(String),
}

/// Coarse classification reported alongside failed actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingFile,
    Unavailable,
    Other,
}

impl ToolError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ToolError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            ToolError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        ToolError::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ToolError::MissingFile { .. } => FailureKind::MissingFile,
            ToolError::Unavailable { .. } => FailureKind::Unavailable,
            ToolError::Io { .. } | ToolError::Other(_) => FailureKind::Other,
        }
    }

    /// Stable code used in `--json` error envelopes.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            FailureKind::MissingFile => "FILE_NOT_FOUND",
            FailureKind::Unavailable => "UNAVAILABLE",
            FailureKind::Other => "ERROR",
        }
    }
}
