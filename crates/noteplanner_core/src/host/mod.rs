//! Plugin host contracts: manifests and the lifecycle kernel.
//!
//! The host process (CLI, desktop shell, test harness) decides when
//! plugins load, unload and show settings. Plugins only declare what they
//! can do and react when invoked. Capability strings gate what the host
//! will route to a plugin.

pub mod kernel;
pub mod manifest;
