use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use super::{NodeKind, Result, StorageError, Vault};

/// Vault backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a vault path. Rejects paths escaping the root.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        let rel = Path::new(path);
        let escapes = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(StorageError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(rel))
    }

    fn io_error(path: &str, source: io::Error) -> StorageError {
        match source.kind() {
            ErrorKind::AlreadyExists => StorageError::AlreadyExists(path.to_string()),
            ErrorKind::NotFound => StorageError::NotFound(path.to_string()),
            _ => StorageError::Io { path: path.to_string(), source },
        }
    }
}

impl Vault for FsVault {
    fn node(&self, path: &str) -> Option<NodeKind> {
        let abs = self.resolve(path).ok()?;
        let meta = fs::metadata(abs).ok()?;
        if meta.is_dir() { Some(NodeKind::Folder) } else { Some(NodeKind::File) }
    }

    fn create_folder(&self, path: &str) -> Result<()> {
        let abs = self.resolve(path)?;
        fs::create_dir(&abs).map_err(|e| Self::io_error(path, e))
    }

    fn create_file(&self, path: &str, content: &str) -> Result<()> {
        let abs = self.resolve(path)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&abs)
            .map_err(|e| Self::io_error(path, e))?;
        file.write_all(content.as_bytes()).map_err(|e| Self::io_error(path, e))
    }

    fn read_file(&self, path: &str) -> Result<String> {
        let abs = self.resolve(path)?;
        if abs.is_dir() {
            return Err(StorageError::NotAFile(path.to_string()));
        }
        fs::read_to_string(&abs).map_err(|e| Self::io_error(path, e))
    }

    fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let abs = self.resolve(path)?;
        match self.node(path) {
            Some(NodeKind::File) => fs::write(&abs, content).map_err(|e| Self::io_error(path, e)),
            Some(NodeKind::Folder) => Err(StorageError::NotAFile(path.to_string())),
            None => Err(StorageError::NotFound(path.to_string())),
        }
    }
}
