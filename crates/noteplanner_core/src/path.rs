//! Vault-relative path construction for planned notes.
//!
//! # Responsibility
//! - Combine a filename stem with a configured location prefix.
//!
//! # Invariants
//! - Pure and total; no validation happens here. Gateways decide whether a
//!   produced path is usable.
//! - Every produced path ends in `.md`.
//! - Locations are joined literally: empty means the vault root, anything
//!   else is prefixed verbatim with a single `/`. Stray slashes in the
//!   location show up in the result unchanged.

use crate::calendar::week::WeekStamp;

/// Path for the daily note of a rendered date stem.
pub fn daily_path(stem: &str, location: &str) -> String {
    join_location(location, format!("{stem}.md"))
}

/// Path for the weekly note of a week stamp, named `Week-<n>-<year>.md`.
pub fn weekly_path(week: WeekStamp, location: &str) -> String {
    join_location(location, format!("Week-{}-{}.md", week.week, week.year))
}

fn join_location(location: &str, file_name: String) -> String {
    if location.is_empty() {
        file_name
    } else {
        format!("{location}/{file_name}")
    }
}

#[cfg(test)]
mod tests {
    use super::{daily_path, weekly_path};
    use crate::calendar::week::WeekStamp;

    #[test]
    fn empty_location_means_vault_root() {
        assert_eq!(daily_path("2024-03-15", ""), "2024-03-15.md");
        assert_eq!(
            weekly_path(WeekStamp { week: 11, year: 2024 }, ""),
            "Week-11-2024.md"
        );
    }

    #[test]
    fn location_is_prefixed_with_single_slash() {
        assert_eq!(daily_path("2024-03-15", "Daily"), "Daily/2024-03-15.md");
        assert_eq!(
            weekly_path(WeekStamp { week: 11, year: 2024 }, "Weekly"),
            "Weekly/Week-11-2024.md"
        );
    }

    #[test]
    fn location_is_not_normalized() {
        // Trailing slash in the location doubles up; cleanup is the
        // user's job, not the path builder's.
        assert_eq!(daily_path("2024-03-15", "Daily/"), "Daily//2024-03-15.md");
    }

    #[test]
    fn week_number_is_not_padded() {
        assert_eq!(
            weekly_path(WeekStamp { week: 1, year: 2024 }, ""),
            "Week-1-2024.md"
        );
    }
}
