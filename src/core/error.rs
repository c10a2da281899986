//! Error types for editor actions

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by the open/save handlers and startup font setup
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Use .md or .MD as the file suffix")]
    ExtensionRejected { path: PathBuf },

    #[error("Font setup failed: {0}")]
    Font(String),
}

/// How an error is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Naming-policy problems, shown as an information dialog
    Information,
    /// I/O failures, shown as an error dialog
    Error,
}

impl EditorError {
    /// File the error relates to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            EditorError::Read { path, .. }
            | EditorError::Write { path, .. }
            | EditorError::ExtensionRejected { path } => Some(path.as_path()),
            EditorError::Font(_) => None,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            EditorError::ExtensionRejected { .. } => Severity::Information,
            _ => Severity::Error,
        }
    }
}

/// Convenience type alias for Results with EditorError
pub type Result<T> = std::result::Result<T, EditorError>;
