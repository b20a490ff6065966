//! Types shared by the generation routines.

use thiserror::Error;

use crate::host::HostError;
use crate::storage::StorageError;

/// Options for one generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Open the month file once the entry is in place.
    pub open_file: bool,

    /// Scheduled runs: log at debug level and skip the success notice
    /// unless the file is opened.
    pub quiet: bool,
}

impl GenerateOptions {
    pub fn interactive() -> Self {
        Self { open_file: true, quiet: false }
    }

    pub fn scheduled() -> Self {
        Self { open_file: false, quiet: true }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new dated entry was appended.
    Created { path: String },
    /// Today's entry was already present; nothing was written.
    AlreadyExists { path: String },
}

impl Outcome {
    pub fn path(&self) -> &str {
        match self {
            Outcome::Created { path } | Outcome::AlreadyExists { path } => path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Outcome::Created { .. })
    }
}

/// Error type for a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(
        "cannot create root folder '{0}': a file with the same name may exist, or the vault is not writable"
    )]
    RootFolder(String),

    #[error(
        "cannot create year folder '{0}': a file with the same name may exist, or the vault is not writable"
    )]
    YearFolder(String),

    #[error(
        "cannot create task file '{0}': a folder with the same name may exist, or the vault is not writable"
    )]
    TaskFile(String),

    #[error("could not append today's entry to '{0}'")]
    Append(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Open(#[from] HostError),
}
