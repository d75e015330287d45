//! Error types for answer-sheet ingestion.
//!
//! Every fallible library operation returns [`SheetError`]. Callers that need
//! to branch on the failure class use [`SheetError::kind`] rather than
//! matching on message text.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Broad failure class of a [`SheetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input did not have the expected structure.
    MalformedInput,
    /// The caller passed a value that violates a documented precondition.
    InvalidInput,
    /// A remote source link was unrecognized or unreachable.
    InvalidLink,
    /// Filesystem access, creation, or existence failure.
    Io,
}

/// Errors produced while parsing, encoding, retrieving, or collating sheets.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Structural mismatch in a sheet or encoded line.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A respondent file failed during collation.
    #[error("error processing {file}: {source}")]
    Respondent {
        file: String,
        #[source]
        source: Box<SheetError>,
    },

    /// A documented precondition was violated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The source link could not be resolved or fetched.
    #[error("invalid link: {0}")]
    InvalidLink(String),

    /// An underlying filesystem call failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// An expected path or file set was absent.
    #[error("not found: {0}")]
    NotFound(String),
}

impl SheetError {
    /// Returns the failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SheetError::MalformedInput(_) | SheetError::Respondent { .. } => {
                ErrorKind::MalformedInput
            }
            SheetError::InvalidInput(_) => ErrorKind::InvalidInput,
            SheetError::InvalidLink(_) => ErrorKind::InvalidLink,
            SheetError::Io { .. } | SheetError::NotFound(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        SheetError::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        Self::io(format!("failed to read {}", path.display()), source)
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Self::io(format!("failed to write {}", path.display()), source)
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
