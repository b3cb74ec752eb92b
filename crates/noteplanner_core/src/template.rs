//! Fixed Markdown skeletons for newly created notes.
//!
//! # Responsibility
//! - Produce the initial body for a daily or weekly note, parameterized
//!   only by the header.
//!
//! # Invariants
//! - Section structure is fixed. Daily notes carry `Reading Notes` and
//!   `Thoughts`; weekly notes carry `Summary`, `Achievements` and
//!   `Next Week's Goals`.
//! - Templates apply on creation only; existing notes are never revised.

use crate::calendar::week::WeekStamp;

/// Body for a fresh daily note. The header repeats the rendered date stem.
pub fn daily_template(date_label: &str) -> String {
    format!("# {date_label}\n\n## Reading Notes\n- \n\n## Thoughts\n- ")
}

/// Body for a fresh weekly note, headed `Week <n>, <year>`.
pub fn weekly_template(week: WeekStamp) -> String {
    format!(
        "# Week {}, {}\n\n## Summary\n- \n\n## Achievements\n- \n\n## Next Week's Goals\n- ",
        week.week, week.year
    )
}
