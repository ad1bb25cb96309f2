//! Effect execution: translates `Effect`s into spawned background tasks.
//!
//! Each task resolves to an optional `Msg` that the runtime feeds back into
//! `App::update`. Fetches always produce a message (success or failure);
//! activations are fire-and-forget because the core does not depend on a
//! return value from the sink.

use std::sync::Arc;

use tabgrid_session::{ActivationSink, TabSource};
use tabgrid_types::{Effect, FetchOutcome, Msg};
use tokio::task::JoinHandle;
use tracing::warn;

/// Background work produced by one round of effects.
pub struct CommandBatch {
    pub pending: Vec<JoinHandle<Option<Msg>>>,
}

/// Spawns the tasks for a batch of effects.
pub fn run_from_effects(
    effects: Vec<Effect>,
    source: &Arc<dyn TabSource>,
    sink: &Arc<dyn ActivationSink>,
) -> CommandBatch {
    let mut pending = Vec::with_capacity(effects.len());
    for effect in effects {
        match effect {
            Effect::FetchTabsRequested { epoch } => {
                let source = Arc::clone(source);
                pending.push(tokio::spawn(async move {
                    let outcome = match source.list_tabs().await {
                        Ok(tabs) => FetchOutcome::Tabs(tabs),
                        Err(error) => FetchOutcome::Failed(error.to_string()),
                    };
                    Some(Msg::TabsLoaded { epoch, outcome })
                }));
            }
            Effect::ActivateTabRequested(id) => {
                let sink = Arc::clone(sink);
                pending.push(tokio::spawn(async move {
                    if let Err(error) = sink.activate(id).await {
                        warn!(tab = %id, %error, "failed to record tab activation");
                    }
                    None
                }));
            }
        }
    }
    CommandBatch { pending }
}
