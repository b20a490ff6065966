//! Idempotent operations over a [`Vault`].
//!
//! Expected obstacles (already exists, lost a creation race, missing file on a
//! read-only check) come back as booleans. Only genuine I/O failures while
//! reading or rewriting content are returned as errors.

use tracing::{debug, warn};

use super::path::{normalize_path, parent_path};
use super::{NodeKind, Result, StorageError, Vault};

/// Separator placed between existing content and appended content.
const APPEND_SEPARATOR: &str = "\n\n";

/// Run `create`; if it fails, look again.
///
/// Another writer may have created the node between our check and our create.
/// A node of the expected kind counts as success; a node of the wrong kind, or
/// still nothing at all, is a failure.
pub fn create_with_recheck<V, F>(vault: &V, path: &str, kind: NodeKind, create: F) -> bool
where
    V: Vault + ?Sized,
    F: FnOnce() -> Result<()>,
{
    let err = match create() {
        Ok(()) => {
            debug!(path, ?kind, "created");
            return true;
        }
        Err(e) => e,
    };

    match vault.node(path) {
        Some(found) if found == kind => {
            debug!(path, ?kind, error = %err, "create failed but node now exists");
            true
        }
        Some(found) => {
            warn!(path, expected = ?kind, ?found, "create failed, path holds a different kind");
            false
        }
        None => {
            warn!(path, ?kind, error = %err, "create failed");
            false
        }
    }
}

/// Make sure every folder along `path` exists.
///
/// Returns `false` when some segment is occupied by a file or cannot be created.
pub fn ensure_folder_exists<V: Vault + ?Sized>(vault: &V, path: &str) -> bool {
    let normalized = normalize_path(path);
    let mut current = String::new();

    for segment in normalized.split('/').filter(|s| !s.is_empty()) {
        if !current.is_empty() {
            current.push('/');
        }
        current.push_str(segment);

        match vault.node(&current) {
            Some(NodeKind::Folder) => {}
            Some(NodeKind::File) => {
                warn!(path = %current, "path exists but is a file, not a folder");
                return false;
            }
            None => {
                let created = create_with_recheck(vault, &current, NodeKind::Folder, || {
                    vault.create_folder(&current)
                });
                if !created {
                    return false;
                }
            }
        }
    }

    true
}

/// Make sure a file exists at `path`, creating it with `initial` if needed.
///
/// An existing file is left untouched. Returns `false` when a folder occupies
/// the path or the parent folders cannot be created.
pub fn ensure_file_exists<V: Vault + ?Sized>(vault: &V, path: &str, initial: &str) -> bool {
    let path = normalize_path(path);

    match vault.node(&path) {
        Some(NodeKind::File) => {
            debug!(path = %path, "file already exists");
            return true;
        }
        Some(NodeKind::Folder) => {
            warn!(path = %path, "path exists but is a folder, not a file");
            return false;
        }
        None => {}
    }

    if let Some(parent) = parent_path(&path)
        && !ensure_folder_exists(vault, parent)
    {
        warn!(parent, "could not ensure parent folder");
        return false;
    }

    create_with_recheck(vault, &path, NodeKind::File, || vault.create_file(&path, initial))
}

/// Append `content` to the file at `path`, creating the file if absent.
///
/// Existing content and the new content are joined by a blank line; an empty
/// file receives `content` as is.
pub fn append_to_file<V: Vault + ?Sized>(vault: &V, path: &str, content: &str) -> Result<bool> {
    let path = normalize_path(path);

    match vault.node(&path) {
        Some(NodeKind::File) => {
            let current = vault.read_file(&path)?;
            let updated = if current.is_empty() {
                content.to_string()
            } else {
                format!("{current}{APPEND_SEPARATOR}{content}")
            };
            vault.write_file(&path, &updated)?;
            debug!(path = %path, bytes = content.len(), "appended");
            Ok(true)
        }
        Some(NodeKind::Folder) => Err(StorageError::NotAFile(path)),
        None => {
            debug!(path = %path, "file missing, creating with content");
            Ok(ensure_file_exists(vault, &path, content))
        }
    }
}

/// Whether the file at `path` contains `needle`. A missing file contains nothing.
pub fn file_contains<V: Vault + ?Sized>(vault: &V, path: &str, needle: &str) -> Result<bool> {
    let path = normalize_path(path);
    match vault.node(&path) {
        Some(NodeKind::File) => Ok(vault.read_file(&path)?.contains(needle)),
        _ => Ok(false),
    }
}

/// Whether anything exists at `path`.
pub fn exists<V: Vault + ?Sized>(vault: &V, path: &str) -> bool {
    vault.node(&normalize_path(path)).is_some()
}
