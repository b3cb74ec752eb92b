//! Core domain logic for NotePlanner.
//!
//! Ensures that a daily note and an ISO-week weekly note exist in a vault,
//! creates them from fixed templates when missing, and asks the host to
//! open both. This crate owns the contracts; host binaries supply the
//! vault and presenter gateways.

pub mod calendar;
pub mod emoji;
pub mod host;
pub mod logging;
pub mod path;
pub mod planner;
pub mod plugin;
pub mod present;
pub mod settings;
pub mod template;
pub mod vault;

pub use emoji::pick_random_emoji;
pub use host::kernel::{
    HostError, HostServices, Plugin, PluginError, PluginHost, PluginLoadReport,
};
pub use host::manifest::{
    supported_capabilities, ManifestError, PluginManifest, CAPABILITY_SETTINGS, CAPABILITY_STARTUP,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use planner::{
    NoteKind, NoteOutcome, NotePlanner, PlannedNote, PlannerIssue, PlannerReport,
};
pub use plugin::{PlannerPlugin, PLANNER_PLUGIN_ID};
pub use present::{PresentError, PresentResult, Presenter};
pub use settings::model::PlannerSettings;
pub use settings::store::{
    JsonSettingsStore, MemorySettingsStore, SettingsStore, SettingsStoreError,
};
pub use settings::surface::{
    parse_setting_key, settings_fields, FieldControl, SettingKey, SettingsError, SettingsField,
    SettingsSurface,
};
pub use vault::{FsVault, MemoryVault, Vault, VaultEntry, VaultError, VaultResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
