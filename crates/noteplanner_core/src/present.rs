//! Presentation gateway: showing ensured notes to the user.
//!
//! # Responsibility
//! - Define the boundary the planner uses to ask the host for an open
//!   editor pane.
//!
//! # Invariants
//! - Opening is fire-and-observe. A failed open is recorded as a
//!   diagnostic on the affected note and never aborts the run.

use crate::vault::VaultEntry;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PresentResult = Result<(), PresentError>;

/// Presentation failure, e.g. no editor available or the spawn failed.
#[derive(Debug)]
pub struct PresentError {
    message: String,
}

impl PresentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for PresentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for PresentError {}

/// Host boundary that displays a vault entry in a new pane.
///
/// Each planned note gets its own call; the order of calls is the order
/// the panes should appear in.
pub trait Presenter {
    fn open_in_new_pane(&self, entry: &VaultEntry) -> PresentResult;
}
