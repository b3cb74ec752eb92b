//! Date-token rendering for daily note stems.
//!
//! # Responsibility
//! - Render a calendar date through a token format string such as
//!   `YYYY-MM-DD` or `dddd, MMMM D`.
//!
//! # Invariants
//! - Tokens are matched longest-first, so `YYYY` never decays into two
//!   `YY` renderings and `MMMM` wins over `MM`.
//! - Unrecognized characters pass through verbatim; rendering is total and
//!   never fails.

use chrono::{Datelike, NaiveDate};

/// Recognized tokens, ordered longest-first for the scanner.
const DATE_TOKENS: &[&str] = &[
    "YYYY", "MMMM", "dddd", "MMM", "ddd", "YY", "MM", "DD", "M", "D",
];

/// Renders `date` through the token format string.
///
/// The default daily format `YYYY-MM-DD` renders 2024-03-15 as
/// `2024-03-15`; `dddd, MMMM D` renders it as `Friday, March 15`.
pub fn render_date_format(format: &str, date: NaiveDate) -> String {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;
    'scan: while !rest.is_empty() {
        for token in DATE_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                render_token(token, date, &mut out);
                rest = tail;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(literal) = chars.next() {
            out.push(literal);
        }
        rest = chars.as_str();
    }
    out
}

fn render_token(token: &str, date: NaiveDate, out: &mut String) {
    match token {
        "YYYY" => out.push_str(&format!("{:04}", date.year())),
        "YY" => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
        "MMMM" => out.push_str(&date.format("%B").to_string()),
        "MMM" => out.push_str(&date.format("%b").to_string()),
        "MM" => out.push_str(&format!("{:02}", date.month())),
        "M" => out.push_str(&date.month().to_string()),
        "DD" => out.push_str(&format!("{:02}", date.day())),
        "D" => out.push_str(&date.day().to_string()),
        "dddd" => out.push_str(&date.format("%A").to_string()),
        "ddd" => out.push_str(&date.format("%a").to_string()),
        // The scanner only hands over entries of DATE_TOKENS.
        other => out.push_str(other),
    }
}
