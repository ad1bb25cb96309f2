use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tabgrid_session::{SnapshotFile, TabSource};
use tabgrid_util::UserPreferences;
use tracing::Level;

#[derive(Parser)]
#[command(name = "tabgrid", about = "Terminal tab switcher over a browser session snapshot")]
struct Cli {
    /// Path to the session snapshot JSON. Falls back to the saved
    /// preference, then ./session.json.
    #[arg(long, short = 's', global = true)]
    session: Option<PathBuf>,

    /// Remember the given --session path as the default for future runs
    #[arg(long, requires = "session")]
    save_default: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the grouped tab hierarchy as JSON and exit
    Groups,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let preferences = UserPreferences::new().unwrap_or_else(|error| {
        tracing::warn!(%error, "preferences unavailable; continuing without persistence");
        UserPreferences::ephemeral()
    });

    let session_path = cli
        .session
        .clone()
        .or_else(|| preferences.session_path().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("session.json"));

    if cli.save_default
        && let Some(path) = &cli.session
    {
        preferences
            .set_session_path(Some(path.display().to_string()))
            .context("failed to save default session path")?;
    }

    let session = SnapshotFile::new(session_path);

    // No subcommand => TUI
    match cli.command {
        Some(Command::Groups) => print_groups(&session).await,
        None => tabgrid_tui::run(session).await,
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn print_groups(session: &SnapshotFile) -> Result<()> {
    let tabs = session
        .list_tabs()
        .await
        .with_context(|| format!("failed to read session snapshot {}", session.path().display()))?;
    let groups = tabgrid_engine::build_hierarchy(&tabs);
    println!("{}", serde_json::to_string_pretty(&groups)?);
    Ok(())
}
