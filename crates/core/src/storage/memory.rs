use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use super::path::{normalize_path, parent_path};
use super::{NodeKind, Result, StorageError, Vault};

#[derive(Debug, Clone)]
enum Entry {
    Folder,
    File(String),
}

/// In-process vault. Backs embedders that keep notes in memory, and tests.
#[derive(Debug, Default)]
pub struct MemoryVault {
    entries: RwLock<BTreeMap<String, Entry>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths currently stored, in sorted order. Folders included.
    pub fn paths(&self) -> Vec<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Seed a file, creating missing parent folders.
    pub fn insert_file(&self, path: &str, content: &str) {
        let path = normalize_path(path);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut parent = parent_path(&path);
        while let Some(p) = parent {
            entries.entry(p.to_string()).or_insert(Entry::Folder);
            parent = parent_path(p);
        }
        entries.insert(path, Entry::File(content.to_string()));
    }

    /// Seed an empty folder, creating missing parents.
    pub fn insert_folder(&self, path: &str) {
        let path = normalize_path(path);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut current = Some(path.as_str());
        while let Some(p) = current {
            entries.entry(p.to_string()).or_insert(Entry::Folder);
            current = parent_path(p);
        }
    }

    fn check_parent(entries: &BTreeMap<String, Entry>, path: &str) -> Result<()> {
        match parent_path(path) {
            None => Ok(()),
            Some(parent) => match entries.get(parent) {
                Some(Entry::Folder) => Ok(()),
                _ => Err(StorageError::MissingParent(path.to_string())),
            },
        }
    }
}

impl Vault for MemoryVault {
    fn node(&self, path: &str) -> Option<NodeKind> {
        if path.is_empty() {
            return Some(NodeKind::Folder);
        }
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(path).map(|e| match e {
            Entry::Folder => NodeKind::Folder,
            Entry::File(_) => NodeKind::File,
        })
    }

    fn create_folder(&self, path: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if path.is_empty() || entries.contains_key(path) {
            return Err(StorageError::AlreadyExists(path.to_string()));
        }
        Self::check_parent(&entries, path)?;
        entries.insert(path.to_string(), Entry::Folder);
        Ok(())
    }

    fn create_file(&self, path: &str, content: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if path.is_empty() || entries.contains_key(path) {
            return Err(StorageError::AlreadyExists(path.to_string()));
        }
        Self::check_parent(&entries, path)?;
        entries.insert(path.to_string(), Entry::File(content.to_string()));
        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        match entries.get(path) {
            Some(Entry::File(content)) => Ok(content.clone()),
            Some(Entry::Folder) => Err(StorageError::NotAFile(path.to_string())),
            None => Err(StorageError::NotFound(path.to_string())),
        }
    }

    fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        match entries.get_mut(path) {
            Some(Entry::File(existing)) => {
                *existing = content.to_string();
                Ok(())
            }
            Some(Entry::Folder) => Err(StorageError::NotAFile(path.to_string())),
            None => Err(StorageError::NotFound(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_parent() {
        let v = MemoryVault::new();
        assert!(matches!(v.create_folder("a/b"), Err(StorageError::MissingParent(_))));
        v.create_folder("a").unwrap();
        v.create_folder("a/b").unwrap();
        assert_eq!(v.node("a/b"), Some(NodeKind::Folder));
    }

    #[test]
    fn create_conflicts() {
        let v = MemoryVault::new();
        v.create_file("x.md", "hi").unwrap();
        assert!(matches!(v.create_file("x.md", ""), Err(StorageError::AlreadyExists(_))));
        assert!(matches!(v.create_folder("x.md"), Err(StorageError::AlreadyExists(_))));
    }

    #[test]
    fn read_and_write() {
        let v = MemoryVault::new();
        v.insert_file("a/b/c.md", "one");
        assert_eq!(v.node("a"), Some(NodeKind::Folder));
        v.write_file("a/b/c.md", "two").unwrap();
        assert_eq!(v.read_file("a/b/c.md").unwrap(), "two");
        assert!(matches!(v.read_file("a/b"), Err(StorageError::NotAFile(_))));
        assert!(matches!(v.write_file("nope.md", ""), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn root_is_a_folder() {
        assert_eq!(MemoryVault::new().node(""), Some(NodeKind::Folder));
    }
}
