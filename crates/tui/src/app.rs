//! Application state and update logic for the tabgrid TUI.
//!
//! `App` owns the overlay lifecycle and the navigator; every state change
//! goes through [`App::update`], which maps a [`Msg`] to zero or more
//! [`Effect`]s for the runtime to execute. Nothing here touches the
//! terminal or the filesystem.

use std::path::PathBuf;

use tabgrid_engine::build_hierarchy;
use tabgrid_types::{Effect, FetchOutcome, Msg, TabId};
use tracing::{debug, warn};

use crate::navigator::Navigator;

/// Number of throbber animation frames (see `ui::THROBBER_FRAMES`).
pub const THROBBER_FRAME_COUNT: usize = 10;

pub struct App {
    /// Snapshot path shown on the home screen
    pub session_path: PathBuf,
    /// Whether the switcher overlay is currently shown
    pub overlay_open: bool,
    /// Whether a snapshot fetch is in flight for the current overlay
    pub loading: bool,
    /// Pairs each fetch with the overlay generation that requested it;
    /// results carrying an older epoch are discarded
    pub fetch_epoch: u64,
    /// Flattened view + 2D cursor
    pub navigator: Navigator,
    /// Animation frame for the loading throbber
    pub throbber_idx: usize,
    /// Most recently committed tab, shown on the home screen
    pub last_activated: Option<TabId>,
    /// One-line status message (fetch failures, snapshot change notes)
    pub status: Option<String>,
}

impl App {
    pub fn new(session_path: PathBuf) -> Self {
        Self {
            session_path,
            overlay_open: false,
            loading: false,
            fetch_epoch: 0,
            navigator: Navigator::new(),
            throbber_idx: 0,
            last_activated: None,
            status: None,
        }
    }

    /// Processes one message and returns the side effects to execute.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Msg::ToggleOverlay => {
                if self.overlay_open {
                    self.close_overlay();
                } else {
                    effects.push(self.open_overlay());
                }
            }
            Msg::CloseOverlay => {
                self.close_overlay();
            }
            Msg::MoveLeft => {
                if self.overlay_open {
                    self.navigator.move_horizontal(-1);
                }
            }
            Msg::MoveRight => {
                if self.overlay_open {
                    self.navigator.move_horizontal(1);
                }
            }
            Msg::MoveUp => {
                if self.overlay_open {
                    self.navigator.move_vertical(-1);
                }
            }
            Msg::MoveDown => {
                if self.overlay_open {
                    self.navigator.move_vertical(1);
                }
            }
            Msg::Select => {
                if self.overlay_open
                    && let Some(tab) = self.navigator.commit()
                {
                    let id = tab.id;
                    self.last_activated = Some(id);
                    self.status = Some(format!("Switched to tab {id}"));
                    effects.push(Effect::ActivateTabRequested(id));
                    self.close_overlay();
                }
            }
            Msg::TabsLoaded { epoch, outcome } => {
                if !self.overlay_open || *epoch != self.fetch_epoch {
                    debug!(epoch, current = self.fetch_epoch, open = self.overlay_open, "discarding stale tab fetch");
                    return effects;
                }
                self.loading = false;
                match outcome {
                    FetchOutcome::Tabs(tabs) => {
                        let groups = build_hierarchy(tabs);
                        self.navigator.set_groups(&groups);
                    }
                    FetchOutcome::Failed(error) => {
                        warn!(%error, "tab fetch failed; showing empty overlay");
                        self.navigator.set_groups(&[]);
                        self.status = Some(format!("Failed to load session: {error}"));
                    }
                }
            }
            Msg::SessionChanged => {
                if self.overlay_open {
                    // Structural change: re-supply groups under a new epoch
                    // rather than mutating the live view.
                    effects.push(self.request_fetch());
                } else {
                    self.status = Some("Session snapshot changed on disk".to_string());
                }
            }
            Msg::Tick => {
                if self.loading {
                    self.throbber_idx = (self.throbber_idx + 1) % THROBBER_FRAME_COUNT;
                }
            }
            Msg::Resize(_, _) => {}
        }
        effects
    }

    fn open_overlay(&mut self) -> Effect {
        self.overlay_open = true;
        self.status = None;
        self.request_fetch()
    }

    fn request_fetch(&mut self) -> Effect {
        self.fetch_epoch += 1;
        self.loading = true;
        self.throbber_idx = 0;
        self.navigator.clear();
        Effect::FetchTabsRequested { epoch: self.fetch_epoch }
    }

    fn close_overlay(&mut self) {
        self.overlay_open = false;
        self.loading = false;
        self.navigator.clear();
    }
}
