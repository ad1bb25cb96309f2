//! Runtime: terminal lifecycle, input routing, and effect execution.
//!
//! A single `tokio::select!` loop owns the `App`: terminal input, snapshot
//! watcher notifications, animation ticks, and completed background tasks
//! all arrive here, are translated to `Msg`s, and the resulting `Effect`s
//! are spawned through `cmd`. Rendering happens only when something visible
//! changed. Input is read on a dedicated blocking thread and forwarded over
//! a channel so `event::read()` never stalls the async loop.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{Terminal, prelude::*};
use tabgrid_session::{ActivationSink, SnapshotFile, TabSource};
use tabgrid_types::{Effect, Msg};
use tokio::task::JoinHandle;
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::warn;

use crate::app::App;
use crate::{cmd, ui};

/// Outcome of mapping a raw key event.
enum KeyAction {
    Quit,
    Forward(Msg),
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Spawn a dedicated blocking thread that forwards crossterm events over a
/// channel. Keeping `read()` off the async loop ensures reliable delivery.
fn spawn_input_task() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "failed to read terminal event");
                    break;
                }
            }
        }
    });
    receiver
}

/// Watch the snapshot file for rewrites by the exporter. The watcher handle
/// must stay alive for notifications to keep flowing.
fn spawn_snapshot_watcher(path: &Path) -> notify::Result<(RecommendedWatcher, mpsc::Receiver<()>)> {
    let (sender, receiver) = mpsc::channel(8);
    let mut watcher = notify::recommended_watcher(move |result: notify::Result<notify::Event>| match result {
        Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
            // Coalesce bursts: a full channel already has a pending wakeup.
            let _ = sender.try_send(());
        }
        Ok(_) => {}
        Err(error) => warn!(%error, "snapshot watcher error"),
    })?;
    watcher.watch(path, RecursiveMode::NonRecursive)?;
    Ok((watcher, receiver))
}

fn map_key(key: KeyEvent, overlay_open: bool) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyAction::Quit);
    }
    let action = match key.code {
        KeyCode::Char(' ') | KeyCode::Tab => KeyAction::Forward(Msg::ToggleOverlay),
        KeyCode::Esc if overlay_open => KeyAction::Forward(Msg::CloseOverlay),
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('q') if !overlay_open => KeyAction::Quit,
        KeyCode::Left | KeyCode::Char('h') if overlay_open => KeyAction::Forward(Msg::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') if overlay_open => KeyAction::Forward(Msg::MoveRight),
        KeyCode::Up | KeyCode::Char('k') if overlay_open => KeyAction::Forward(Msg::MoveUp),
        KeyCode::Down | KeyCode::Char('j') if overlay_open => KeyAction::Forward(Msg::MoveDown),
        KeyCode::Enter if overlay_open => KeyAction::Forward(Msg::Select),
        _ => return None,
    };
    Some(action)
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the event
/// producers, runs the select loop, and restores the terminal on exit.
pub(crate) async fn run_app(session: SnapshotFile) -> Result<()> {
    let source: Arc<dyn TabSource> = Arc::new(session.clone());
    let sink: Arc<dyn ActivationSink> = Arc::new(session.clone());

    let mut input_rx = spawn_input_task();
    let (_watcher, mut watch_rx) = match spawn_snapshot_watcher(session.path()) {
        Ok((watcher, receiver)) => (Some(watcher), Some(receiver)),
        Err(error) => {
            warn!(%error, path = %session.path().display(), "snapshot watching unavailable");
            (None, None)
        }
    };

    let mut app = App::new(session.path().to_path_buf());
    let mut terminal = setup_terminal()?;

    let mut pending: FuturesUnordered<JoinHandle<Option<Msg>>> = FuturesUnordered::new();

    // Ticking strategy: fast while animating, slow when idle.
    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(1000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    terminal.draw(|frame| ui::draw(frame, &app))?;

    loop {
        let needs_animation = app.loading || !pending.is_empty();
        let target_interval = if needs_animation { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut effects: Vec<Effect> = Vec::new();
        let mut needs_render = false;

        tokio::select! {
            maybe_event = input_rx.recv() => {
                match maybe_event {
                    Some(Event::Key(key)) => match map_key(key, app.overlay_open) {
                        Some(KeyAction::Quit) => break,
                        Some(KeyAction::Forward(msg)) => {
                            effects.extend(app.update(&msg));
                            needs_render = true;
                        }
                        None => {}
                    },
                    Some(Event::Resize(width, height)) => {
                        effects.extend(app.update(&Msg::Resize(width, height)));
                        needs_render = true;
                    }
                    Some(_) => {}
                    // Input channel closed; shut down cleanly.
                    None => break,
                }
            }

            Some(()) = async {
                match watch_rx.as_mut() {
                    Some(receiver) => receiver.recv().await,
                    None => None,
                }
            }, if watch_rx.is_some() => {
                effects.extend(app.update(&Msg::SessionChanged));
                needs_render = true;
            }

            _ = ticker.tick() => {
                effects.extend(app.update(&Msg::Tick));
                needs_render = needs_animation;
            }

            Some(joined) = pending.next(), if !pending.is_empty() => {
                match joined {
                    Ok(Some(msg)) => effects.extend(app.update(&msg)),
                    Ok(None) => {}
                    Err(error) => warn!(%error, "background task failed"),
                }
                needs_render = true;
            }

            _ = signal::ctrl_c() => break,
        }

        if !effects.is_empty() {
            let batch = cmd::run_from_effects(effects, &source, &sink);
            pending.extend(batch.pending);
            needs_render = true;
        }

        if needs_render {
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn space_and_tab_toggle_the_overlay() {
        assert!(matches!(
            map_key(key(KeyCode::Char(' ')), false),
            Some(KeyAction::Forward(Msg::ToggleOverlay))
        ));
        assert!(matches!(
            map_key(key(KeyCode::Tab), true),
            Some(KeyAction::Forward(Msg::ToggleOverlay))
        ));
    }

    #[test]
    fn escape_closes_when_open_and_quits_when_closed() {
        assert!(matches!(map_key(key(KeyCode::Esc), true), Some(KeyAction::Forward(Msg::CloseOverlay))));
        assert!(matches!(map_key(key(KeyCode::Esc), false), Some(KeyAction::Quit)));
    }

    #[test]
    fn movement_keys_only_apply_while_open() {
        assert!(matches!(map_key(key(KeyCode::Left), true), Some(KeyAction::Forward(Msg::MoveLeft))));
        assert!(matches!(map_key(key(KeyCode::Char('j')), true), Some(KeyAction::Forward(Msg::MoveDown))));
        assert!(map_key(key(KeyCode::Left), false).is_none());
        assert!(map_key(key(KeyCode::Enter), false).is_none());
    }

    #[test]
    fn ctrl_c_always_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(map_key(event, true), Some(KeyAction::Quit)));
        assert!(matches!(map_key(event, false), Some(KeyAction::Quit)));
    }
}
