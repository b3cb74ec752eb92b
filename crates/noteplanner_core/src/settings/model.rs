//! The planner settings record and its list-field helpers.
//!
//! # Responsibility
//! - Define [`PlannerSettings`], its defaults and its serialized shape.
//!
//! # Invariants
//! - Serialized field names are camelCase to stay compatible with
//!   documents written by earlier releases.
//! - Per-field `#[serde(default)]` semantics: keys missing from a
//!   persisted document fall back to their default, unknown keys are
//!   dropped on the next save.
//! - No field is validated here. Formats, locations and emoji entries are
//!   taken as typed by the user.

use serde::{Deserialize, Serialize};

/// Flat settings record for the planner. One document, whole-record saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerSettings {
    /// Date-token format rendered into the daily stem, e.g. `YYYY-MM-DD`.
    pub daily_note_format: String,
    /// Display-only label slot. Weekly paths are always `Week-<n>-<year>`;
    /// this field never feeds the path builder.
    pub weekly_note_format: String,
    /// Folder prefix for daily notes; empty means the vault root.
    pub daily_note_location: String,
    /// Folder prefix for weekly notes; empty means the vault root.
    pub weekly_note_location: String,
    /// Declared week-start day. Stored and persisted, consumed by nothing.
    pub week_start: String,
    /// Pool for random title decoration.
    pub emojis: Vec<String>,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            daily_note_format: "YYYY-MM-DD".to_string(),
            weekly_note_format: "Week #".to_string(),
            daily_note_location: String::new(),
            weekly_note_location: String::new(),
            week_start: "Monday".to_string(),
            emojis: vec![
                "😊".to_string(),
                "📚".to_string(),
                "✍️".to_string(),
                "🚀".to_string(),
                "🌟".to_string(),
                "🎯".to_string(),
            ],
        }
    }
}

/// Joins the emoji pool for display in the settings surface.
pub fn join_emoji_list(pool: &[String]) -> String {
    pool.join(", ")
}

/// Splits the emoji control's raw text back into a pool.
///
/// Splits on `,` and trims each piece. Nothing is filtered: an empty
/// input yields a pool holding one empty string, and that pool still
/// counts as non-empty for selection.
pub fn split_emoji_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|piece| piece.trim().to_string()).collect()
}
