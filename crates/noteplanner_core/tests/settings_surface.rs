//! Settings surface over a JSON-backed store: field rendering, edits,
//! immediate persistence and reload-merge behavior.

use noteplanner_core::{
    FieldControl, JsonSettingsStore, PlannerPlugin, SettingKey, SettingsSurface,
};
use tempfile::tempdir;

fn surface_fixture(dir: &std::path::Path) -> PlannerPlugin<JsonSettingsStore> {
    let store = JsonSettingsStore::new(dir.join(".noteplanner/settings.json"));
    PlannerPlugin::from_store(store).expect("plugin constructs")
}

#[test]
fn fresh_surface_shows_defaults_with_placeholders() {
    let dir = tempdir().expect("tempdir");
    let plugin = surface_fixture(dir.path());

    assert_eq!(plugin.title(), "Settings for Note Planner");

    let fields = plugin.fields();
    assert_eq!(fields.len(), 5);

    assert_eq!(fields[0].label, "Daily Note Format");
    assert_eq!(fields[0].description, "Set the format for daily note titles.");
    assert_eq!(fields[0].placeholder, "YYYY-MM-DD");
    assert_eq!(fields[0].value, "YYYY-MM-DD");

    assert_eq!(fields[1].label, "Weekly Note Format");
    assert_eq!(fields[1].value, "Week #");

    assert_eq!(fields[2].label, "Daily Note Location");
    assert_eq!(fields[2].placeholder, "Folder path");
    assert_eq!(fields[2].value, "");

    assert_eq!(fields[3].label, "Weekly Note Location");
    assert_eq!(fields[3].value, "");

    assert_eq!(fields[4].label, "Custom Emojis");
    assert_eq!(fields[4].control, FieldControl::MultiLine);
    assert_eq!(fields[4].value, "😊, 📚, ✍️, 🚀, 🌟, 🎯");

    // weekStart exists in the record but is never offered for editing.
    assert!(fields.iter().all(|field| field.key.as_str() != "weekStart"));
}

#[test]
fn each_apply_persists_the_whole_record() {
    let dir = tempdir().expect("tempdir");
    let mut plugin = surface_fixture(dir.path());

    plugin
        .apply(SettingKey::DailyNoteLocation, "Daily")
        .expect("apply location");

    // A second plugin over the same path sees the change merged with the
    // untouched defaults.
    let reloaded = surface_fixture(dir.path());
    assert_eq!(reloaded.settings().daily_note_location, "Daily");
    assert_eq!(reloaded.settings().daily_note_format, "YYYY-MM-DD");
    assert_eq!(reloaded.settings().week_start, "Monday");

    let raw = std::fs::read_to_string(dir.path().join(".noteplanner/settings.json"))
        .expect("document written");
    assert!(raw.contains("\"dailyNoteLocation\": \"Daily\""));
    assert!(raw.contains("\"weekStart\""));
}

#[test]
fn emoji_edit_round_trips_through_display_text() {
    let dir = tempdir().expect("tempdir");
    let mut plugin = surface_fixture(dir.path());

    plugin
        .apply(SettingKey::Emojis, "🔥, 🧊 ,🌈")
        .expect("apply emojis");
    assert_eq!(plugin.settings().emojis, vec!["🔥", "🧊", "🌈"]);

    let reloaded = surface_fixture(dir.path());
    let emoji_field = reloaded
        .fields()
        .into_iter()
        .find(|field| field.key == SettingKey::Emojis)
        .expect("emoji field");
    assert_eq!(emoji_field.value, "🔥, 🧊, 🌈");
}

#[test]
fn clearing_the_emoji_control_keeps_one_empty_entry() {
    let dir = tempdir().expect("tempdir");
    let mut plugin = surface_fixture(dir.path());

    plugin.apply(SettingKey::Emojis, "").expect("apply empty");
    assert_eq!(plugin.settings().emojis, vec![""]);

    let reloaded = surface_fixture(dir.path());
    assert_eq!(reloaded.settings().emojis, vec![""]);
}

#[test]
fn unknown_keys_in_the_document_are_dropped_on_next_save() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(".noteplanner/settings.json");
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(
        &path,
        r#"{"dailyNoteFormat":"DD-MM-YYYY","legacyKnob":true}"#,
    )
    .expect("seed document");

    let mut plugin = surface_fixture(dir.path());
    assert_eq!(plugin.settings().daily_note_format, "DD-MM-YYYY");

    plugin
        .apply(SettingKey::WeeklyNoteFormat, "Week no.")
        .expect("apply");

    let raw = std::fs::read_to_string(&path).expect("document");
    assert!(raw.contains("\"dailyNoteFormat\": \"DD-MM-YYYY\""));
    assert!(!raw.contains("legacyKnob"));
}

#[test]
fn format_edits_change_the_next_plan() {
    let dir = tempdir().expect("tempdir");
    let mut plugin = surface_fixture(dir.path());

    plugin
        .apply(SettingKey::DailyNoteFormat, "DD.MM.YYYY")
        .expect("apply format");

    let reloaded = surface_fixture(dir.path());
    let (daily, _) = noteplanner_core::NotePlanner::plan(
        reloaded.settings(),
        chrono::NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid test date"),
    );
    assert_eq!(daily.path, "15.03.2024.md");
}
