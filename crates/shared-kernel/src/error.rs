// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::{AccountSid, GroupId, UserId};

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FileMetaError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, FileMetaError>;

/// Failures of a single metadata extraction.
///
/// Messages name the entry by the display name handed to the extractor, so
/// a caller reporting many paths can surface them verbatim.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The stat snapshot is not the native shape the backend decodes.
    #[error("Cannot obtain {name} permission information")]
    Permissions { name: String, found: &'static str },

    #[error("Cannot obtain {name} user information: {source}")]
    User {
        name: String,
        #[source]
        source: LookupError,
    },

    #[error("Cannot obtain {name} group information: {source}")]
    Group {
        name: String,
        #[source]
        source: LookupError,
    },

    #[error("Cannot obtain {name} time information: {field} out of range")]
    Time { name: String, field: &'static str },
}

pub type ExtractionResult<T> = std::result::Result<T, ExtractionError>;

/// Identity directory lookup failures.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("user: unknown userid {0}")]
    UnknownUser(UserId),

    #[error("group: unknown groupid {0}")]
    UnknownGroup(GroupId),

    #[error("unknown account {0}")]
    UnknownAccount(AccountSid),

    /// The directory service itself failed.
    #[error("{what} lookup failed: {source}")]
    Directory {
        what: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{what} is not available")]
    Unavailable { what: String },

    #[error("{what} lookup is not supported on this platform")]
    Unsupported { what: String },
}

impl LookupError {
    pub fn directory(what: impl Into<String>, source: std::io::Error) -> Self {
        Self::Directory { what: what.into(), source }
    }
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to stat '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config: {details}")]
    ConfigParse { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}
