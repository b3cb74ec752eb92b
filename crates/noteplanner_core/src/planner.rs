//! Startup orchestration: ensure today's notes exist, then open them.
//!
//! # Responsibility
//! - Sequence settings, calendar, paths, vault and presenter into one
//!   startup run.
//! - Record a per-note outcome without letting one note's trouble stop
//!   the other note's pipeline.
//!
//! # Invariants
//! - A run touches exactly two paths: one daily, one weekly. At most one
//!   creation and one open request per path.
//! - Existing note content is never read or rewritten.
//! - Step order is fixed: ensure daily, ensure weekly, open daily, open
//!   weekly. The open step runs even when the ensure step recorded an
//!   issue, so a note created by someone else mid-run still opens.
//!
//! # See also
//! - `plugin` for the host-facing wrapper around this orchestrator.

use crate::calendar::date_format::render_date_format;
use crate::calendar::week::WeekStamp;
use crate::path::{daily_path, weekly_path};
use crate::present::Presenter;
use crate::settings::model::PlannerSettings;
use crate::template::{daily_template, weekly_template};
use crate::vault::{Vault, VaultError};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::fmt::{Display, Formatter};

/// Which of the two planned notes an outcome talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Daily,
    Weekly,
}

impl NoteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

/// A note the planner intends to ensure: target path plus creation body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedNote {
    pub kind: NoteKind,
    pub path: String,
    pub body: String,
}

/// Non-fatal condition recorded while ensuring or opening one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerIssue {
    /// The path resolved to nothing after the ensure step.
    LookupMiss,
    /// Something appeared at the path between the existence check and the
    /// creation request.
    CreateConflict,
    /// The vault gateway failed (I/O, permissions, unusable path).
    Gateway(String),
    /// The presenter could not open the resolved entry.
    OpenFailed(String),
}

impl Display for PlannerIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LookupMiss => write!(f, "note vanished before it could be opened"),
            Self::CreateConflict => write!(f, "note was created by someone else mid-run"),
            Self::Gateway(message) => write!(f, "vault gateway failure: {message}"),
            Self::OpenFailed(message) => write!(f, "open request failed: {message}"),
        }
    }
}

/// Outcome of one note's ensure-and-open pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteOutcome {
    pub kind: NoteKind,
    pub path: String,
    /// Whether this run created the note.
    pub created: bool,
    /// Whether the presenter accepted the open request.
    pub opened: bool,
    pub issues: Vec<PlannerIssue>,
}

impl NoteOutcome {
    fn pending(kind: NoteKind, path: String) -> Self {
        Self {
            kind,
            path,
            created: false,
            opened: false,
            issues: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Result envelope of one startup run. Never an error: per-note trouble
/// lands in the outcomes as issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerReport {
    pub daily: NoteOutcome,
    pub weekly: NoteOutcome,
}

impl PlannerReport {
    pub fn is_clean(&self) -> bool {
        self.daily.is_clean() && self.weekly.is_clean()
    }
}

/// Startup orchestrator over the vault and presentation gateways.
pub struct NotePlanner<'gw> {
    vault: &'gw dyn Vault,
    presenter: &'gw dyn Presenter,
}

impl<'gw> NotePlanner<'gw> {
    pub fn new(vault: &'gw dyn Vault, presenter: &'gw dyn Presenter) -> Self {
        Self { vault, presenter }
    }

    /// Derives both planned notes for `today` without touching a gateway.
    ///
    /// The daily stem comes from the configured date-token format and is
    /// reused verbatim as the daily header. The weekly name ignores the
    /// weekly format field and always uses the week stamp.
    pub fn plan(settings: &PlannerSettings, today: NaiveDate) -> (PlannedNote, PlannedNote) {
        let stem = render_date_format(&settings.daily_note_format, today);
        let week = WeekStamp::of(today);
        let daily = PlannedNote {
            kind: NoteKind::Daily,
            path: daily_path(&stem, &settings.daily_note_location),
            body: daily_template(&stem),
        };
        let weekly = PlannedNote {
            kind: NoteKind::Weekly,
            path: weekly_path(week, &settings.weekly_note_location),
            body: weekly_template(week),
        };
        (daily, weekly)
    }

    /// Runs the full startup sequence and reports what happened.
    pub fn ensure_and_open(&self, settings: &PlannerSettings, today: NaiveDate) -> PlannerReport {
        let (daily, weekly) = Self::plan(settings, today);
        info!(
            "event=planner_run module=planner status=start daily_path={} weekly_path={}",
            daily.path, weekly.path
        );

        let mut daily_outcome = NoteOutcome::pending(daily.kind, daily.path.clone());
        let mut weekly_outcome = NoteOutcome::pending(weekly.kind, weekly.path.clone());

        self.ensure_note(&daily, &mut daily_outcome);
        self.ensure_note(&weekly, &mut weekly_outcome);
        self.open_note(&mut daily_outcome);
        self.open_note(&mut weekly_outcome);

        info!(
            "event=planner_run module=planner status=done daily_created={} weekly_created={} clean={}",
            daily_outcome.created,
            weekly_outcome.created,
            daily_outcome.is_clean() && weekly_outcome.is_clean()
        );
        PlannerReport {
            daily: daily_outcome,
            weekly: weekly_outcome,
        }
    }

    fn ensure_note(&self, note: &PlannedNote, outcome: &mut NoteOutcome) {
        let kind = note.kind.as_str();
        match self.vault.exists(&note.path) {
            Ok(true) => {
                debug!(
                    "event=note_ensure module=planner kind={kind} status=exists path={}",
                    note.path
                );
            }
            Ok(false) => match self.vault.create(&note.path, &note.body) {
                Ok(_) => {
                    outcome.created = true;
                    info!(
                        "event=note_ensure module=planner kind={kind} status=created path={}",
                        note.path
                    );
                }
                Err(VaultError::Conflict(_)) => {
                    outcome.issues.push(PlannerIssue::CreateConflict);
                    warn!(
                        "event=note_ensure module=planner kind={kind} status=conflict path={}",
                        note.path
                    );
                }
                Err(err) => {
                    warn!(
                        "event=note_ensure module=planner kind={kind} status=error path={} error={err}",
                        note.path
                    );
                    outcome.issues.push(PlannerIssue::Gateway(err.to_string()));
                }
            },
            Err(err) => {
                warn!(
                    "event=note_ensure module=planner kind={kind} status=error path={} error={err}",
                    note.path
                );
                outcome.issues.push(PlannerIssue::Gateway(err.to_string()));
            }
        }
    }

    fn open_note(&self, outcome: &mut NoteOutcome) {
        let kind = outcome.kind.as_str();
        match self.vault.resolve(&outcome.path) {
            Ok(Some(entry)) => match self.presenter.open_in_new_pane(&entry) {
                Ok(()) => {
                    outcome.opened = true;
                    info!(
                        "event=note_open module=planner kind={kind} status=ok title={} path={}",
                        entry.title(),
                        outcome.path
                    );
                }
                Err(err) => {
                    warn!(
                        "event=note_open module=planner kind={kind} status=error path={} error={err}",
                        outcome.path
                    );
                    outcome.issues.push(PlannerIssue::OpenFailed(err.to_string()));
                }
            },
            Ok(None) => {
                outcome.issues.push(PlannerIssue::LookupMiss);
                warn!(
                    "event=note_open module=planner kind={kind} status=miss path={}",
                    outcome.path
                );
            }
            Err(err) => {
                warn!(
                    "event=note_open module=planner kind={kind} status=error path={} error={err}",
                    outcome.path
                );
                outcome.issues.push(PlannerIssue::Gateway(err.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteKind, NotePlanner};
    use crate::settings::model::PlannerSettings;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn plan_derives_both_paths_from_settings() {
        let mut settings = PlannerSettings::default();
        settings.daily_note_location = "Daily".to_string();
        settings.weekly_note_location = "Weekly".to_string();

        let (daily, weekly) = NotePlanner::plan(&settings, date(2024, 3, 15));
        assert_eq!(daily.kind, NoteKind::Daily);
        assert_eq!(daily.path, "Daily/2024-03-15.md");
        assert!(daily.body.starts_with("# 2024-03-15\n"));
        assert_eq!(weekly.kind, NoteKind::Weekly);
        assert_eq!(weekly.path, "Weekly/Week-11-2024.md");
        assert!(weekly.body.starts_with("# Week 11, 2024\n"));
    }

    #[test]
    fn plan_ignores_weekly_format_field() {
        let mut settings = PlannerSettings::default();
        settings.weekly_note_format = "W-YYYY".to_string();

        let (_, weekly) = NotePlanner::plan(&settings, date(2024, 3, 15));
        assert_eq!(weekly.path, "Week-11-2024.md");
    }

    #[test]
    fn plan_carries_calendar_year_across_iso_boundary() {
        let settings = PlannerSettings::default();
        let (_, weekly) = NotePlanner::plan(&settings, date(2024, 12, 30));
        // ISO week 1 of 2025, calendar year 2024.
        assert_eq!(weekly.path, "Week-1-2024.md");
        assert!(weekly.body.starts_with("# Week 1, 2024\n"));
    }

    #[test]
    fn custom_daily_format_feeds_path_and_header() {
        let mut settings = PlannerSettings::default();
        settings.daily_note_format = "DD.MM.YYYY".to_string();

        let (daily, _) = NotePlanner::plan(&settings, date(2024, 3, 15));
        assert_eq!(daily.path, "15.03.2024.md");
        assert!(daily.body.starts_with("# 15.03.2024\n"));
    }
}
