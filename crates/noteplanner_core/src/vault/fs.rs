//! Filesystem-backed vault rooted at a directory.
//!
//! # Responsibility
//! - Map vault-relative note paths onto files under one root directory.
//! - Enforce exclusive creation and root containment.
//!
//! # Invariants
//! - Paths that leave the root are rejected: rooted paths, `..` segments
//!   and backslashes all come back as [`VaultError::InvalidPath`].
//! - `create` never truncates an existing file.
//! - Missing parent folders are not created here. Location folders are
//!   user content, and their absence surfaces as an I/O failure on the
//!   affected note only.

use super::{Vault, VaultEntry, VaultError, VaultResult};
use log::info;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    /// Opens a vault rooted at an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> VaultResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(VaultError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("vault root is not a directory: {}", root.display()),
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a vault-relative path to an absolute one under the root.
    pub fn absolute_path(&self, path: &str) -> VaultResult<PathBuf> {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed.contains('\\') {
            return Err(VaultError::InvalidPath(path.to_string()));
        }
        let relative = Path::new(trimmed);
        if relative.is_absolute() {
            return Err(VaultError::InvalidPath(path.to_string()));
        }
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => resolved.push(segment),
                Component::CurDir => {}
                // ParentDir and Prefix would escape the root.
                _ => return Err(VaultError::InvalidPath(path.to_string())),
            }
        }
        Ok(resolved)
    }
}

impl Vault for FsVault {
    fn exists(&self, path: &str) -> VaultResult<bool> {
        Ok(self.absolute_path(path)?.is_file())
    }

    fn create(&self, path: &str, content: &str) -> VaultResult<VaultEntry> {
        let absolute = self.absolute_path(path)?;
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&absolute)
        {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(VaultError::Conflict(path.to_string()));
            }
            Err(err) => return Err(VaultError::Io(err)),
        };
        file.write_all(content.as_bytes())?;
        info!("event=vault_create module=vault status=ok path={path}");
        Ok(VaultEntry::new(path))
    }

    fn resolve(&self, path: &str) -> VaultResult<Option<VaultEntry>> {
        if self.absolute_path(path)?.is_file() {
            Ok(Some(VaultEntry::new(path)))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FsVault;
    use crate::vault::{Vault, VaultError};
    use tempfile::tempdir;

    #[test]
    fn create_then_exists_then_resolve() {
        let dir = tempdir().expect("tempdir");
        let vault = FsVault::open(dir.path()).expect("open");

        assert!(!vault.exists("2024-03-15.md").expect("exists"));
        vault.create("2024-03-15.md", "# 2024-03-15").expect("create");
        assert!(vault.exists("2024-03-15.md").expect("exists"));

        let entry = vault
            .resolve("2024-03-15.md")
            .expect("resolve")
            .expect("present");
        assert_eq!(entry.title(), "2024-03-15");
        let on_disk =
            std::fs::read_to_string(dir.path().join("2024-03-15.md")).expect("read back");
        assert_eq!(on_disk, "# 2024-03-15");
    }

    #[test]
    fn create_refuses_to_overwrite() {
        let dir = tempdir().expect("tempdir");
        let vault = FsVault::open(dir.path()).expect("open");
        vault.create("note.md", "original").expect("create");

        match vault.create("note.md", "replacement") {
            Err(VaultError::Conflict(path)) => assert_eq!(path, "note.md"),
            other => panic!("expected Conflict, got {other:?}"),
        }
        let on_disk = std::fs::read_to_string(dir.path().join("note.md")).expect("read back");
        assert_eq!(on_disk, "original");
    }

    #[test]
    fn missing_location_folder_is_an_io_failure() {
        let dir = tempdir().expect("tempdir");
        let vault = FsVault::open(dir.path()).expect("open");

        match vault.create("Daily/2024-03-15.md", "# 2024-03-15") {
            Err(VaultError::Io(_)) => {}
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn existing_location_folder_is_used_as_is() {
        let dir = tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("Daily")).expect("mkdir");
        let vault = FsVault::open(dir.path()).expect("open");

        vault.create("Daily/2024-03-15.md", "# 2024-03-15").expect("create");
        assert!(dir.path().join("Daily/2024-03-15.md").is_file());
    }

    #[test]
    fn escaping_paths_are_rejected() {
        let dir = tempdir().expect("tempdir");
        let vault = FsVault::open(dir.path()).expect("open");

        for bad in ["../escape.md", "a/../../escape.md", "/rooted.md", "a\\b.md", ""] {
            match vault.exists(bad) {
                Err(VaultError::InvalidPath(_)) => {}
                other => panic!("expected InvalidPath for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn open_rejects_missing_root() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("nowhere");
        assert!(FsVault::open(missing).is_err());
    }
}
