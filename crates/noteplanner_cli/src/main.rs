//! NotePlanner host binary.
//!
//! # Responsibility
//! - Wire a filesystem vault, an editor presenter and the JSON settings
//!   store into the plugin host.
//! - Expose the built-in settings surface as subcommands.

mod editor;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use editor::EditorPresenter;
use noteplanner_core::{
    default_log_level, init_logging, parse_setting_key, FieldControl, FsVault, HostServices,
    JsonSettingsStore, PlannerPlugin, PluginHost, PLANNER_PLUGIN_ID,
};
use std::path::{Path, PathBuf};

const SETTINGS_REL_PATH: &str = ".noteplanner/settings.json";
const LOGS_REL_PATH: &str = ".noteplanner/logs";

#[derive(Parser)]
#[command(
    name = "noteplanner",
    version,
    about = "Keeps today's daily and weekly notes ready in a Markdown vault"
)]
struct Cli {
    /// Vault directory holding the notes.
    #[arg(long, default_value = ".")]
    vault: PathBuf,

    /// Log directory. Defaults to `.noteplanner/logs` inside the vault.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long)]
    log_level: Option<String>,

    /// Editor command for opening notes. Defaults to $VISUAL, then $EDITOR;
    /// with neither set, note paths are printed instead.
    #[arg(long)]
    editor: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Ensure today's notes exist and open them (the default).
    Open,
    /// Inspect or edit the planner settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the settings surface with current values.
    Show,
    /// Set one field and persist the whole record.
    Set {
        /// Field key, e.g. `dailyNoteFormat`.
        key: String,
        /// Raw value; the emoji list is comma-separated.
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vault_root = cli
        .vault
        .canonicalize()
        .with_context(|| format!("vault directory not found: {}", cli.vault.display()))?;

    let log_dir = match cli.log_dir.clone() {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => std::env::current_dir()?.join(dir),
        None => vault_root.join(LOGS_REL_PATH),
    };
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, &log_dir)?;

    match cli.command.unwrap_or(Command::Open) {
        Command::Open => run_open(&vault_root, cli.editor),
        Command::Settings { action } => run_settings(&vault_root, action),
    }
}

fn run_open(vault_root: &Path, editor_override: Option<String>) -> Result<()> {
    let vault = FsVault::open(vault_root)?;
    let presenter = EditorPresenter::new(vault_root.to_path_buf(), editor_override);
    let store = JsonSettingsStore::new(vault_root.join(SETTINGS_REL_PATH));
    let plugin = PlannerPlugin::from_store(store).context("settings could not be loaded")?;

    let mut host = PluginHost::new();
    host.register(Box::new(plugin))?;

    let services = HostServices {
        vault: &vault,
        presenter: &presenter,
        today: Local::now().date_naive(),
    };
    // Load failures are per plugin and non-fatal to the host.
    for report in host.load_all(&services) {
        if let Err(err) = report.result {
            eprintln!("plugin {} failed to load: {err}", report.plugin_id);
        }
    }
    host.unload_all();
    Ok(())
}

fn run_settings(vault_root: &Path, action: SettingsAction) -> Result<()> {
    let store = JsonSettingsStore::new(vault_root.join(SETTINGS_REL_PATH));
    let plugin = PlannerPlugin::from_store(store).context("settings could not be loaded")?;

    let mut host = PluginHost::new();
    host.register(Box::new(plugin))?;
    let surface = host.settings_surface(PLANNER_PLUGIN_ID)?;

    match action {
        SettingsAction::Show => {
            println!("{}", surface.title());
            for field in surface.fields() {
                println!();
                println!("{} ({})", field.label, field.key.as_str());
                println!("  {}", field.description);
                if field.value.is_empty() {
                    println!("  value: (empty, placeholder: {})", field.placeholder);
                } else {
                    println!("  value: {}", field.value);
                }
                if field.control == FieldControl::MultiLine {
                    println!("  edit as a comma-separated list");
                }
            }
        }
        SettingsAction::Set { key, value } => {
            let key = parse_setting_key(&key)?;
            surface.apply(key, &value)?;
            println!("{} saved", key.as_str());
        }
    }
    Ok(())
}
