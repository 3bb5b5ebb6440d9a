//! Error taxonomy for repository ingestion.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepoError>;

/// A foreign key that did not resolve when a later row referenced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MissingReference {
    #[error("major '{major}' for student {student} is not a known major")]
    Major { major: String, student: String },

    #[error("student with cwid {cwid} could not be found")]
    Student { cwid: String },

    #[error("instructor with cwid {cwid} could not be found")]
    Instructor { cwid: String },
}

#[derive(Error, Debug)]
pub enum RepoError {
    /// Path missing or unopenable.
    #[error("can't open '{}' for reading: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line did not split into the expected number of fields.
    #[error("{} has {found} field(s) on line {line} but expected {expected}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        found: usize,
        expected: usize,
    },

    /// A data line that is not valid UTF-8.
    #[error("{} has invalid text encoding on line {line}", path.display())]
    Encoding { path: PathBuf, line: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("referential integrity: {0}")]
    ReferentialIntegrity(#[from] MissingReference),

    #[error("duplicate {entity} key: {key}")]
    DuplicateKey { entity: &'static str, key: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("mirror query failed: {0}")]
    Mirror(#[from] rusqlite::Error),
}

impl RepoError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepoError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
