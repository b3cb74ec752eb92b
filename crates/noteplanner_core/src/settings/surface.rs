//! Editable settings surface rendered by the host.
//!
//! # Responsibility
//! - Enumerate the editable fields with their labels, descriptions,
//!   placeholders and control shapes.
//! - Translate raw control text into record changes.
//!
//! # Invariants
//! - `weekStart` is stored in the record but never offered as a field.
//! - Field changes carry no validation or debounce. Whatever the user
//!   typed lands in the record, and the whole record persists on every
//!   change.

use crate::settings::model::{join_emoji_list, split_emoji_list, PlannerSettings};
use crate::settings::store::SettingsStoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Editable field keys, named after the persisted camelCase keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    DailyNoteFormat,
    WeeklyNoteFormat,
    DailyNoteLocation,
    WeeklyNoteLocation,
    Emojis,
}

/// Fields in the order the surface renders them.
pub const SETTING_KEYS: &[SettingKey] = &[
    SettingKey::DailyNoteFormat,
    SettingKey::WeeklyNoteFormat,
    SettingKey::DailyNoteLocation,
    SettingKey::WeeklyNoteLocation,
    SettingKey::Emojis,
];

impl SettingKey {
    /// Persisted key name, also the identifier hosts address fields by.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DailyNoteFormat => "dailyNoteFormat",
            Self::WeeklyNoteFormat => "weeklyNoteFormat",
            Self::DailyNoteLocation => "dailyNoteLocation",
            Self::WeeklyNoteLocation => "weeklyNoteLocation",
            Self::Emojis => "emojis",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DailyNoteFormat => "Daily Note Format",
            Self::WeeklyNoteFormat => "Weekly Note Format",
            Self::DailyNoteLocation => "Daily Note Location",
            Self::WeeklyNoteLocation => "Weekly Note Location",
            Self::Emojis => "Custom Emojis",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::DailyNoteFormat => "Set the format for daily note titles.",
            Self::WeeklyNoteFormat => "Set the format for weekly note titles.",
            Self::DailyNoteLocation => "Folder location for daily notes.",
            Self::WeeklyNoteLocation => "Folder location for weekly notes.",
            Self::Emojis => "Set custom emojis to randomly add to the file titles.",
        }
    }

    /// Hint shown while the control is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::DailyNoteFormat => "YYYY-MM-DD",
            Self::WeeklyNoteFormat => "Week #",
            Self::DailyNoteLocation | Self::WeeklyNoteLocation => "Folder path",
            Self::Emojis => "😊, 📚, ✍️, 🚀, 🌟, 🎯",
        }
    }

    pub fn control(self) -> FieldControl {
        match self {
            Self::Emojis => FieldControl::MultiLine,
            _ => FieldControl::SingleLine,
        }
    }
}

/// Parses a host-supplied key name into a [`SettingKey`].
pub fn parse_setting_key(value: &str) -> Result<SettingKey, SettingsError> {
    match value.trim() {
        "dailyNoteFormat" => Ok(SettingKey::DailyNoteFormat),
        "weeklyNoteFormat" => Ok(SettingKey::WeeklyNoteFormat),
        "dailyNoteLocation" => Ok(SettingKey::DailyNoteLocation),
        "weeklyNoteLocation" => Ok(SettingKey::WeeklyNoteLocation),
        "emojis" => Ok(SettingKey::Emojis),
        other => Err(SettingsError::UnknownKey(other.to_string())),
    }
}

/// Control shape of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    SingleLine,
    MultiLine,
}

/// One renderable field with its current display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsField {
    pub key: SettingKey,
    pub label: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub control: FieldControl,
    pub value: String,
}

/// Builds the ordered field list for the current record.
pub fn settings_fields(settings: &PlannerSettings) -> Vec<SettingsField> {
    SETTING_KEYS
        .iter()
        .map(|&key| SettingsField {
            key,
            label: key.label(),
            description: key.description(),
            placeholder: key.placeholder(),
            control: key.control(),
            value: field_value(settings, key),
        })
        .collect()
}

/// Current display value of one field. The emoji pool joins to `a, b, c`.
pub fn field_value(settings: &PlannerSettings, key: SettingKey) -> String {
    match key {
        SettingKey::DailyNoteFormat => settings.daily_note_format.clone(),
        SettingKey::WeeklyNoteFormat => settings.weekly_note_format.clone(),
        SettingKey::DailyNoteLocation => settings.daily_note_location.clone(),
        SettingKey::WeeklyNoteLocation => settings.weekly_note_location.clone(),
        SettingKey::Emojis => join_emoji_list(&settings.emojis),
    }
}

/// Applies one raw control edit to the record. Persistence is the
/// caller's concern.
pub fn apply_field_change(settings: &mut PlannerSettings, key: SettingKey, raw: &str) {
    match key {
        SettingKey::DailyNoteFormat => settings.daily_note_format = raw.to_string(),
        SettingKey::WeeklyNoteFormat => settings.weekly_note_format = raw.to_string(),
        SettingKey::DailyNoteLocation => settings.daily_note_location = raw.to_string(),
        SettingKey::WeeklyNoteLocation => settings.weekly_note_location = raw.to_string(),
        SettingKey::Emojis => settings.emojis = split_emoji_list(raw),
    }
}

/// Settings surface failure reported back to the host.
#[derive(Debug)]
pub enum SettingsError {
    /// The host addressed a field this surface does not offer.
    UnknownKey(String),
    /// Persisting the changed record failed.
    Store(SettingsStoreError),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownKey(key) => write!(f, "unknown settings key `{key}`"),
            Self::Store(err) => write!(f, "settings change could not be persisted: {err}"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownKey(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<SettingsStoreError> for SettingsError {
    fn from(err: SettingsStoreError) -> Self {
        Self::Store(err)
    }
}

/// Host-rendered settings tab.
///
/// The host decides when to show the surface and how controls look; the
/// surface owns labels, values and the apply-and-persist step.
pub trait SettingsSurface {
    /// Heading shown above the fields.
    fn title(&self) -> &str;

    /// Renderable fields, pre-populated with current values.
    fn fields(&self) -> Vec<SettingsField>;

    /// Applies one field edit and persists the whole record immediately.
    fn apply(&mut self, key: SettingKey, raw: &str) -> Result<(), SettingsError>;
}

#[cfg(test)]
mod tests {
    use super::{
        apply_field_change, field_value, parse_setting_key, settings_fields, FieldControl,
        SettingKey, SettingsError, SETTING_KEYS,
    };
    use crate::settings::model::PlannerSettings;

    #[test]
    fn key_names_round_trip() {
        for &key in SETTING_KEYS {
            assert_eq!(parse_setting_key(key.as_str()).expect("known key"), key);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        match parse_setting_key("weekStart") {
            Err(SettingsError::UnknownKey(key)) => assert_eq!(key, "weekStart"),
            other => panic!("expected UnknownKey, got {other:?}"),
        }
    }

    #[test]
    fn surface_offers_five_fields_in_render_order() {
        let fields = settings_fields(&PlannerSettings::default());
        let labels: Vec<&str> = fields.iter().map(|field| field.label).collect();
        assert_eq!(
            labels,
            vec![
                "Daily Note Format",
                "Weekly Note Format",
                "Daily Note Location",
                "Weekly Note Location",
                "Custom Emojis",
            ]
        );
        assert!(fields.iter().all(|field| field.key != SettingKey::Emojis
            || field.control == FieldControl::MultiLine));
    }

    #[test]
    fn default_emoji_value_matches_placeholder() {
        let value = field_value(&PlannerSettings::default(), SettingKey::Emojis);
        assert_eq!(value, "😊, 📚, ✍️, 🚀, 🌟, 🎯");
        assert_eq!(value, SettingKey::Emojis.placeholder());
    }

    #[test]
    fn location_fields_start_empty_with_placeholder() {
        let fields = settings_fields(&PlannerSettings::default());
        let daily_location = fields
            .iter()
            .find(|field| field.key == SettingKey::DailyNoteLocation)
            .expect("field present");
        assert_eq!(daily_location.value, "");
        assert_eq!(daily_location.placeholder, "Folder path");
    }

    #[test]
    fn applying_emoji_text_splits_and_trims() {
        let mut settings = PlannerSettings::default();
        apply_field_change(&mut settings, SettingKey::Emojis, "🔥 , 🧊");
        assert_eq!(settings.emojis, vec!["🔥", "🧊"]);
    }

    #[test]
    fn clearing_emoji_text_yields_single_empty_entry() {
        let mut settings = PlannerSettings::default();
        apply_field_change(&mut settings, SettingKey::Emojis, "");
        assert_eq!(settings.emojis, vec![""]);
    }

    #[test]
    fn format_edits_land_verbatim() {
        let mut settings = PlannerSettings::default();
        apply_field_change(&mut settings, SettingKey::DailyNoteFormat, "DD.MM.YYYY");
        apply_field_change(&mut settings, SettingKey::WeeklyNoteLocation, "Journal/Weekly");
        assert_eq!(settings.daily_note_format, "DD.MM.YYYY");
        assert_eq!(settings.weekly_note_location, "Journal/Weekly");
    }
}
