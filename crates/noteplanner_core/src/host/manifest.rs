//! Plugin manifest: declaration-time metadata checked at registration.
//!
//! # Responsibility
//! - Carry id, version and capability declarations for one plugin.
//! - Validate the declaration before the host accepts it.
//!
//! # Invariants
//! - Ids are lowercase dotted identifiers, e.g. `builtin.notes.planner`.
//! - Versions are plain `major.minor.patch` triplets.
//! - Capabilities are non-empty, supported and free of duplicates.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Capability string for startup work when the host loads plugins.
pub const CAPABILITY_STARTUP: &str = "startup";
/// Capability string for contributing a settings surface.
pub const CAPABILITY_SETTINGS: &str = "settings";

const SUPPORTED_CAPABILITIES: &[&str] = &[CAPABILITY_STARTUP, CAPABILITY_SETTINGS];

/// Capabilities this host version understands.
pub fn supported_capabilities() -> &'static [&'static str] {
    SUPPORTED_CAPABILITIES
}

/// Declarative manifest for one plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginManifest {
    /// Stable plugin identifier.
    pub id: String,
    /// Semantic version of the plugin.
    pub version: String,
    /// Declared capabilities; only declared ones get routed.
    pub capabilities: Vec<String>,
}

impl PluginManifest {
    /// Checks the declaration. The host refuses registration on any error.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(ManifestError::EmptyId);
        }
        if !is_valid_plugin_id(id) {
            return Err(ManifestError::InvalidId(id.to_string()));
        }

        let version = self.version.trim();
        if version.is_empty() {
            return Err(ManifestError::EmptyVersion);
        }
        if !is_semver_triplet(version) {
            return Err(ManifestError::InvalidVersion(version.to_string()));
        }

        if self.capabilities.is_empty() {
            return Err(ManifestError::MissingCapabilities);
        }
        let mut seen = BTreeSet::new();
        for capability in &self.capabilities {
            let capability = capability.trim();
            if capability.is_empty() {
                return Err(ManifestError::EmptyCapability);
            }
            if !SUPPORTED_CAPABILITIES.contains(&capability) {
                return Err(ManifestError::UnsupportedCapability(capability.to_string()));
            }
            if !seen.insert(capability) {
                return Err(ManifestError::DuplicateCapability(capability.to_string()));
            }
        }
        Ok(())
    }

    /// Whether this manifest declares `capability`.
    pub fn declares(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|value| value.trim() == capability)
    }
}

/// Lowercase alphanumeric segments joined by single `.`, `_` or `-`.
fn is_valid_plugin_id(value: &str) -> bool {
    let bytes = value.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };
    if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
        return false;
    }
    let mut prev_was_separator = false;
    for &byte in rest {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' => prev_was_separator = false,
            b'.' | b'_' | b'-' if !prev_was_separator => prev_was_separator = true,
            _ => return false,
        }
    }
    !prev_was_separator
}

fn is_semver_triplet(value: &str) -> bool {
    let numeric = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    let mut parts = value.split('.');
    matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(major), Some(minor), Some(patch), None)
            if numeric(major) && numeric(minor) && numeric(patch)
    )
}

/// Manifest validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    EmptyId,
    InvalidId(String),
    EmptyVersion,
    InvalidVersion(String),
    MissingCapabilities,
    EmptyCapability,
    UnsupportedCapability(String),
    DuplicateCapability(String),
}

impl Display for ManifestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "plugin id must not be empty"),
            Self::InvalidId(id) => write!(
                f,
                "plugin id `{id}` must be lowercase segments joined by `.`, `_` or `-`"
            ),
            Self::EmptyVersion => write!(f, "plugin version must not be empty"),
            Self::InvalidVersion(version) => {
                write!(f, "plugin version `{version}` is not a major.minor.patch triplet")
            }
            Self::MissingCapabilities => write!(f, "plugin must declare at least one capability"),
            Self::EmptyCapability => write!(f, "capability entries must not be empty"),
            Self::UnsupportedCapability(capability) => {
                write!(f, "capability `{capability}` is not supported by this host")
            }
            Self::DuplicateCapability(capability) => {
                write!(f, "capability `{capability}` is declared twice")
            }
        }
    }
}

impl Error for ManifestError {}
