//! Planner configuration: record, persistence and editable surface.
//!
//! # Responsibility
//! - Define the flat settings record and its defaults.
//! - Keep persistence behind a store trait with JSON and in-memory
//!   implementations.
//! - Describe the editable settings surface the host renders.
//!
//! # Invariants
//! - Loading merges the persisted document over defaults key by key.
//! - Every applied field change persists the whole record immediately.
//!
//! # See also
//! - `plugin` for the built-in plugin that owns a live record.

pub mod model;
pub mod store;
pub mod surface;
