//! Hierarchical storage behind the generator.
//!
//! The host provides a [`Vault`]; everything above it talks in vault-relative,
//! `/`-separated paths and never touches host types directly.

mod fs;
mod lock;
mod memory;
mod ops;
mod path;

use thiserror::Error;

pub use fs::FsVault;
pub use lock::PathLocks;
pub use memory::MemoryVault;
pub use ops::{
    append_to_file, create_with_recheck, ensure_file_exists, ensure_folder_exists,
    exists, file_contains,
};
pub use path::{normalize_path, parent_path};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("'{0}' already exists")]
    AlreadyExists(String),

    #[error("'{0}' does not exist")]
    NotFound(String),

    #[error("'{0}' is a folder, not a file")]
    NotAFile(String),

    #[error("parent folder of '{0}' does not exist")]
    MissingParent(String),

    #[error("invalid vault path '{0}'")]
    InvalidPath(String),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// What lives at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

/// Storage contract a host must provide.
///
/// Paths are vault-relative and already normalized. The empty path is the
/// vault root, which always exists as a folder.
pub trait Vault: Send + Sync {
    /// Kind of node at `path`, or `None` when nothing is there.
    fn node(&self, path: &str) -> Option<NodeKind>;

    /// Create a single folder. Fails if anything already exists at `path`.
    fn create_folder(&self, path: &str) -> Result<()>;

    /// Create a new file. Fails if anything already exists at `path`.
    fn create_file(&self, path: &str, content: &str) -> Result<()>;

    fn read_file(&self, path: &str) -> Result<String>;

    /// Overwrite an existing file.
    fn write_file(&self, path: &str, content: &str) -> Result<()>;
}
