//! Tabgrid terminal user interface.
//!
//! A full-screen overlay for switching between the tabs of a captured
//! browser session: a hotkey opens the switcher, arrow keys move a 2D
//! cursor through the category/domain hierarchy, and Enter commits the
//! selection back to the session. The state machine follows the same
//! message/effect shape as the rest of the workspace: input becomes `Msg`s,
//! `App::update` returns `Effect`s, and the runtime executes them.

mod app;
mod cmd;
mod navigator;
mod runtime;
mod theme;
mod ui;

use anyhow::Result;
use tabgrid_session::SnapshotFile;

pub use navigator::{NavGroup, Navigator};

/// Runs the TUI event loop against the given session snapshot until the
/// user quits.
pub async fn run(session: SnapshotFile) -> Result<()> {
    runtime::run_app(session).await
}
