//! Vault gateway: the host file-storage boundary.
//!
//! # Responsibility
//! - Define the contract the planner uses to check, create and resolve
//!   notes.
//! - Keep path semantics vault-relative with forward slashes.
//!
//! # Invariants
//! - `create` is exclusive. An existing entry at the path is a conflict,
//!   never an overwrite.
//! - Implementations never rewrite existing note content through this
//!   boundary.
//!
//! # See also
//! - `planner` for the only in-tree caller.

mod fs;
mod memory;

pub use fs::FsVault;
pub use memory::MemoryVault;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub type VaultResult<T> = Result<T, VaultError>;

/// Handle to an entry known to exist in the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEntry {
    /// Vault-relative path with forward slashes, e.g. `Daily/2024-03-15.md`.
    pub path: String,
}

impl VaultEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// File name without the `.md` extension, for display and logging.
    pub fn title(&self) -> &str {
        let name = self.path.rsplit('/').next().unwrap_or(&self.path);
        name.strip_suffix(".md").unwrap_or(name)
    }
}

/// Vault gateway failure.
#[derive(Debug)]
pub enum VaultError {
    /// Exclusive creation found something already at the path.
    Conflict(String),
    /// The path cannot be expressed inside this vault.
    InvalidPath(String),
    Io(io::Error),
}

impl Display for VaultError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conflict(path) => write!(f, "entry already exists at `{path}`"),
            Self::InvalidPath(path) => write!(f, "path is not valid inside the vault: `{path}`"),
            Self::Io(err) => write!(f, "vault I/O failure: {err}"),
        }
    }
}

impl Error for VaultError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for VaultError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Host storage boundary the planner ensures notes through.
pub trait Vault {
    /// Whether an entry exists at the vault-relative path.
    fn exists(&self, path: &str) -> VaultResult<bool>;

    /// Creates a new entry with the given content. Fails with
    /// [`VaultError::Conflict`] when the path is already taken.
    fn create(&self, path: &str, content: &str) -> VaultResult<VaultEntry>;

    /// Resolves a path to an entry handle, `None` when absent.
    fn resolve(&self, path: &str) -> VaultResult<Option<VaultEntry>>;
}

#[cfg(test)]
mod tests {
    use super::VaultEntry;

    #[test]
    fn title_strips_folders_and_extension() {
        assert_eq!(VaultEntry::new("Daily/2024-03-15.md").title(), "2024-03-15");
        assert_eq!(VaultEntry::new("Week-11-2024.md").title(), "Week-11-2024");
        assert_eq!(
            VaultEntry::new("Journal/Weekly/Week-11-2024.md").title(),
            "Week-11-2024"
        );
        assert_eq!(VaultEntry::new("plain").title(), "plain");
    }
}
