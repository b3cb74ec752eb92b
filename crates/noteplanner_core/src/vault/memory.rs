//! In-memory vault for tests and ephemeral hosts.
//!
//! # Responsibility
//! - Mirror the visible semantics of [`super::FsVault`] over an
//!   in-process map, minus the filesystem details (no folder existence,
//!   no path containment checks).
//!
//! # Invariants
//! - Exclusive creation matches the filesystem vault.
//! - Content stored through the gateway is never rewritten by it.

use super::{Vault, VaultEntry, VaultError, VaultResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryVault {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an entry directly, bypassing the exclusive-create rule.
    pub fn seed(&self, path: impl Into<String>, content: impl Into<String>) {
        self.entries.borrow_mut().insert(path.into(), content.into());
    }

    /// Stored content for assertions.
    pub fn content(&self, path: &str) -> Option<String> {
        self.entries.borrow().get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Vault for MemoryVault {
    fn exists(&self, path: &str) -> VaultResult<bool> {
        Ok(self.entries.borrow().contains_key(path))
    }

    fn create(&self, path: &str, content: &str) -> VaultResult<VaultEntry> {
        let mut entries = self.entries.borrow_mut();
        if entries.contains_key(path) {
            return Err(VaultError::Conflict(path.to_string()));
        }
        entries.insert(path.to_string(), content.to_string());
        Ok(VaultEntry::new(path))
    }

    fn resolve(&self, path: &str) -> VaultResult<Option<VaultEntry>> {
        if self.entries.borrow().contains_key(path) {
            Ok(Some(VaultEntry::new(path)))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryVault;
    use crate::vault::{Vault, VaultError};

    #[test]
    fn create_is_exclusive() {
        let vault = MemoryVault::new();
        vault.create("note.md", "first").expect("create");
        match vault.create("note.md", "second") {
            Err(VaultError::Conflict(_)) => {}
            other => panic!("expected Conflict, got {other:?}"),
        }
        assert_eq!(vault.content("note.md").as_deref(), Some("first"));
    }

    #[test]
    fn resolve_reports_presence() {
        let vault = MemoryVault::new();
        assert!(vault.resolve("gone.md").expect("resolve").is_none());
        vault.seed("here.md", "body");
        assert!(vault.resolve("here.md").expect("resolve").is_some());
        assert!(vault.exists("here.md").expect("exists"));
    }
}
