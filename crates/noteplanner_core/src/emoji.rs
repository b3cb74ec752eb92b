//! Random selection from the configured emoji pool.
//!
//! The picked value is observational for now: nothing downstream consumes
//! it beyond a debug log line, since title decoration has not been built.

use rand::seq::SliceRandom;

/// Picks one pool entry with uniform probability.
///
/// Returns `None` only for an empty pool. A single-entry pool always
/// yields that entry, even when the entry is the empty string a cleared
/// settings field leaves behind.
pub fn pick_random_emoji(pool: &[String]) -> Option<&str> {
    pool.choose(&mut rand::thread_rng()).map(String::as_str)
}
