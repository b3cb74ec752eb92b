//! Editor-spawning presenter for the terminal host.
//!
//! # Responsibility
//! - Open each ensured note by running the user's editor on its absolute
//!   path, one note after the other.
//!
//! # Invariants
//! - Editor resolution order: explicit override, `$VISUAL`, `$EDITOR`.
//! - With no editor at all, the absolute path is printed so the run still
//!   shows both notes; that counts as a successful open.

use log::info;
use noteplanner_core::{PresentError, PresentResult, Presenter, VaultEntry};
use std::env;
use std::path::PathBuf;
use std::process::Command;

pub struct EditorPresenter {
    vault_root: PathBuf,
    editor: Option<String>,
}

impl EditorPresenter {
    pub fn new(vault_root: PathBuf, editor_override: Option<String>) -> Self {
        let editor = resolve_editor(
            editor_override,
            env::var("VISUAL").ok(),
            env::var("EDITOR").ok(),
        );
        Self { vault_root, editor }
    }
}

impl Presenter for EditorPresenter {
    fn open_in_new_pane(&self, entry: &VaultEntry) -> PresentResult {
        let absolute = self.vault_root.join(&entry.path);
        let Some(editor) = self.editor.as_deref() else {
            println!("{}", absolute.display());
            return Ok(());
        };

        // The editor value may carry arguments, e.g. `code --wait`.
        let mut parts = editor.split_whitespace();
        let Some(program) = parts.next() else {
            return Err(PresentError::new("editor command is blank"));
        };
        let status = Command::new(program)
            .args(parts)
            .arg(&absolute)
            .status()
            .map_err(|err| {
                PresentError::new(format!("failed to launch editor `{editor}`: {err}"))
            })?;
        if !status.success() {
            return Err(PresentError::new(format!(
                "editor `{editor}` exited with {status} for {}",
                absolute.display()
            )));
        }
        info!(
            "event=note_present module=cli status=ok editor={program} path={}",
            entry.path
        );
        Ok(())
    }
}

/// First non-blank candidate wins; all-blank means no editor.
fn resolve_editor(
    override_cmd: Option<String>,
    visual: Option<String>,
    fallback: Option<String>,
) -> Option<String> {
    [override_cmd, visual, fallback]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
