//! NoteBoard CLI: launches the terminal note board.
//!
//! # Usage
//!
//! ```text
//! noteboard
//! noteboard --theme light
//! noteboard --data-dir ~/notes --log-level debug
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use log::info;

use noteboard_core::config::{self, CONFIG_FILE_NAME};
use noteboard_core::logging::{default_log_level, init_logging, log_dir};
use noteboard_core::{FileStore, NoteStore, Settings};
use noteboard_tui::session::Session;
use noteboard_tui::theme::Theme;
use noteboard_tui::tui::Tui;

const CONFIG_DIR_ENV: &str = "NOTEBOARD_CONFIG_DIR";


/// Keep short notes on a board of cards.
#[derive(Debug, Parser)]
#[command(name = "noteboard", version, about)]
struct Args {
    /// Directory holding config.yaml [env: NOTEBOARD_CONFIG_DIR]
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Directory for the note data and logs (overrides config.yaml)
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Log level: error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
    /// Color theme: dark, light or minimal
    #[arg(long)]
    theme: Option<String>,
}


fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("noteboard: {}", e);
        process::exit(1);
    }
}


fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config_dir = resolve_config_dir(args.config_dir.clone());
    let mut settings = config::load(&config_dir.join(CONFIG_FILE_NAME))?;
    apply_overrides(&mut settings, &args);

    let data_dir = settings.resolve_data_dir(&config_dir);
    let level = settings
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let _logger = init_logging(&level, &log_dir(&data_dir))?;

    let theme = resolve_theme(&settings.theme)?;
    let store = NoteStore::load_with_key(FileStore::new(data_dir.clone()), &settings.storage_key);
    info!(
        "event=store_opened module=cli data_dir={} key={} notes={}",
        data_dir.display(),
        store.key(),
        store.len()
    );

    let session = Session::new(store, theme).with_status_ttl(settings.status_ttl_ms);
    let mut tui = Tui::new(session)
        .map_err(|e| format!("failed to start terminal: {}", e))?
        .with_tick_rate(Duration::from_millis(settings.tick_rate_ms));
    tui.run()?;
    Ok(())
}


/// Config directory: `--config-dir`, then `NOTEBOARD_CONFIG_DIR`, then
/// `~/.config/noteboard`.
fn resolve_config_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".config").join("noteboard")
}


/// Command-line flags win over config.yaml.
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if let Some(dir) = &args.data_dir {
        settings.data_dir = Some(dir.clone());
    }
    if let Some(level) = &args.log_level {
        settings.log_level = Some(level.clone());
    }
    if let Some(theme) = &args.theme {
        settings.theme = theme.clone();
    }
}


fn resolve_theme(name: &str) -> Result<Theme, String> {
    Theme::by_name(name)
        .ok_or_else(|| format!("unknown theme `{}` (expected dark, light or minimal)", name))
}
