//! Plugin host kernel: registration and lifecycle dispatch.
//!
//! # Responsibility
//! - Validate and register plugin declarations.
//! - Drive `on_load`/`on_unload` and route settings surfaces by declared
//!   capability.
//!
//! # Invariants
//! - Plugin ids are unique within one host.
//! - Load order is registration order; unload order is the reverse.
//! - One plugin's load failure is captured in its report and never stops
//!   the host or the remaining plugins.

use crate::host::manifest::{
    ManifestError, PluginManifest, CAPABILITY_SETTINGS, CAPABILITY_STARTUP,
};
use crate::present::Presenter;
use crate::settings::surface::SettingsSurface;
use crate::vault::Vault;
use chrono::NaiveDate;
use log::{error, info};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Collaborators the host hands to plugins on load.
///
/// Plugins never read the clock themselves; `today` is the host's one
/// clock reading for the whole load pass.
pub struct HostServices<'host> {
    pub vault: &'host dyn Vault,
    pub presenter: &'host dyn Presenter,
    pub today: NaiveDate,
}

/// Failure reported by a plugin during load. Non-fatal to the host.
#[derive(Debug)]
pub struct PluginError {
    message: String,
}

impl PluginError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for PluginError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for PluginError {}

/// Contract every hosted plugin implements. The host decides when each
/// hook runs; a plugin only declares capabilities and reacts.
pub trait Plugin {
    /// Declarative manifest, validated once at registration.
    fn manifest(&self) -> &PluginManifest;

    /// Startup hook, invoked for `startup`-capable plugins only.
    fn on_load(&mut self, services: &HostServices<'_>) -> Result<(), PluginError>;

    /// Teardown hook, reverse registration order.
    fn on_unload(&mut self) {}

    /// Settings surface, invoked for `settings`-capable plugins only.
    fn settings_surface(&mut self) -> Option<&mut dyn SettingsSurface> {
        None
    }
}

/// Registration or routing failure raised by the host kernel.
#[derive(Debug)]
pub enum HostError {
    InvalidManifest(ManifestError),
    DuplicatePluginId(String),
    PluginNotFound(String),
    /// The plugin exists but does not declare the capability the host
    /// tried to route.
    CapabilityNotDeclared {
        plugin_id: String,
        capability: &'static str,
    },
}

impl Display for HostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidManifest(err) => write!(f, "manifest rejected: {err}"),
            Self::DuplicatePluginId(id) => write!(f, "plugin id `{id}` is already registered"),
            Self::PluginNotFound(id) => write!(f, "no plugin registered as `{id}`"),
            Self::CapabilityNotDeclared {
                plugin_id,
                capability,
            } => write!(f, "plugin `{plugin_id}` does not declare `{capability}`"),
        }
    }
}

impl Error for HostError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidManifest(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ManifestError> for HostError {
    fn from(err: ManifestError) -> Self {
        Self::InvalidManifest(err)
    }
}

/// Per-plugin result of one `load_all` pass.
#[derive(Debug)]
pub struct PluginLoadReport {
    pub plugin_id: String,
    pub result: Result<(), PluginError>,
}

impl PluginLoadReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// In-process plugin registry and lifecycle driver.
#[derive(Default)]
pub struct PluginHost {
    plugins: Vec<Box<dyn Plugin>>,
    ids: BTreeSet<String>,
}

impl PluginHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one plugin after validating its manifest.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Result<(), HostError> {
        let manifest = plugin.manifest();
        manifest.validate()?;
        let id = manifest.id.trim().to_string();
        let version = manifest.version.clone();
        if !self.ids.insert(id.clone()) {
            return Err(HostError::DuplicatePluginId(id));
        }
        info!("event=plugin_register module=host status=ok plugin={id} version={version}");
        self.plugins.push(plugin);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Registered plugin ids, sorted.
    pub fn plugin_ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// Invokes `on_load` for every `startup`-capable plugin in
    /// registration order. Failures are captured per plugin.
    pub fn load_all(&mut self, services: &HostServices<'_>) -> Vec<PluginLoadReport> {
        let mut reports = Vec::new();
        for plugin in &mut self.plugins {
            if !plugin.manifest().declares(CAPABILITY_STARTUP) {
                continue;
            }
            let plugin_id = plugin.manifest().id.trim().to_string();
            let result = plugin.on_load(services);
            match &result {
                Ok(()) => info!("event=plugin_load module=host status=ok plugin={plugin_id}"),
                Err(err) => {
                    error!(
                        "event=plugin_load module=host status=error plugin={} error={err}",
                        plugin_id
                    )
                }
            }
            reports.push(PluginLoadReport { plugin_id, result });
        }
        reports
    }

    /// Invokes `on_unload` for every plugin, reverse registration order.
    pub fn unload_all(&mut self) {
        for plugin in self.plugins.iter_mut().rev() {
            info!(
                "event=plugin_unload module=host status=ok plugin={}",
                plugin.manifest().id
            );
            plugin.on_unload();
        }
    }

    /// Routes to the settings surface of a `settings`-capable plugin.
    pub fn settings_surface(
        &mut self,
        plugin_id: &str,
    ) -> Result<&mut dyn SettingsSurface, HostError> {
        let position = self
            .plugins
            .iter()
            .position(|plugin| plugin.manifest().id.trim() == plugin_id)
            .ok_or_else(|| HostError::PluginNotFound(plugin_id.to_string()))?;
        let plugin = &mut self.plugins[position];
        if !plugin.manifest().declares(CAPABILITY_SETTINGS) {
            return Err(HostError::CapabilityNotDeclared {
                plugin_id: plugin_id.to_string(),
                capability: CAPABILITY_SETTINGS,
            });
        }
        plugin
            .settings_surface()
            .ok_or_else(|| HostError::CapabilityNotDeclared {
                plugin_id: plugin_id.to_string(),
                capability: CAPABILITY_SETTINGS,
            })
    }
}
