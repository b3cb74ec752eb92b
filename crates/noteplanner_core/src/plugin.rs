//! Built-in note planner plugin.
//!
//! # Responsibility
//! - Bind the settings store, the startup orchestrator and the settings
//!   surface into one host-registrable plugin.
//!
//! # Invariants
//! - Settings load once at construction, persisted values merged over
//!   defaults; afterwards the record changes only through the surface.
//! - `on_load` never fails for per-note conditions. Those stay on the
//!   retained [`PlannerReport`].
//!
//! # See also
//! - `host::kernel` for when the hooks run.

use crate::emoji::pick_random_emoji;
use crate::host::kernel::{HostServices, Plugin, PluginError};
use crate::host::manifest::{PluginManifest, CAPABILITY_SETTINGS, CAPABILITY_STARTUP};
use crate::planner::{NotePlanner, PlannerReport};
use crate::settings::model::PlannerSettings;
use crate::settings::store::{SettingsStore, SettingsStoreError};
use crate::settings::surface::{
    apply_field_change, settings_fields, SettingKey, SettingsError, SettingsField, SettingsSurface,
};
use log::debug;

/// Stable identifier the host addresses this plugin by.
pub const PLANNER_PLUGIN_ID: &str = "builtin.notes.planner";

const SETTINGS_TITLE: &str = "Settings for Note Planner";

/// The built-in plugin: ensures and opens today's daily and weekly notes
/// on host load, and offers the planner settings surface.
pub struct PlannerPlugin<S: SettingsStore> {
    manifest: PluginManifest,
    store: S,
    settings: PlannerSettings,
    last_report: Option<PlannerReport>,
}

impl<S: SettingsStore> PlannerPlugin<S> {
    /// Builds the plugin, loading the settings record through the store.
    pub fn from_store(store: S) -> Result<Self, SettingsStoreError> {
        let settings = store.load()?;
        Ok(Self {
            manifest: PluginManifest {
                id: PLANNER_PLUGIN_ID.to_string(),
                version: crate::core_version().to_string(),
                capabilities: vec![
                    CAPABILITY_STARTUP.to_string(),
                    CAPABILITY_SETTINGS.to_string(),
                ],
            },
            store,
            settings,
            last_report: None,
        })
    }

    /// Live settings snapshot.
    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Report of the most recent `on_load` run, if one happened.
    pub fn last_report(&self) -> Option<&PlannerReport> {
        self.last_report.as_ref()
    }
}

impl<S: SettingsStore> Plugin for PlannerPlugin<S> {
    fn manifest(&self) -> &PluginManifest {
        &self.manifest
    }

    fn on_load(&mut self, services: &HostServices<'_>) -> Result<(), PluginError> {
        let planner = NotePlanner::new(services.vault, services.presenter);
        let report = planner.ensure_and_open(&self.settings, services.today);

        // TODO: decorate new note titles with the pick; today only the
        // selection exists and the result is logged.
        if let Some(emoji) = pick_random_emoji(&self.settings.emojis) {
            debug!("event=emoji_pick module=plugin status=ok emoji={emoji}");
        }

        self.last_report = Some(report);
        Ok(())
    }

    fn on_unload(&mut self) {
        self.last_report = None;
    }

    fn settings_surface(&mut self) -> Option<&mut dyn SettingsSurface> {
        Some(self)
    }
}

impl<S: SettingsStore> SettingsSurface for PlannerPlugin<S> {
    fn title(&self) -> &str {
        SETTINGS_TITLE
    }

    fn fields(&self) -> Vec<SettingsField> {
        settings_fields(&self.settings)
    }

    fn apply(&mut self, key: SettingKey, raw: &str) -> Result<(), SettingsError> {
        apply_field_change(&mut self.settings, key, raw);
        self.store.save(&self.settings)?;
        Ok(())
    }
}
