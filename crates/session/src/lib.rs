//! Session snapshot adapters.
//!
//! The browser itself is outside the process boundary: an external exporter
//! captures the current window's tabs into a JSON snapshot file, and this
//! crate adapts that file to the two seams the core depends on: a
//! [`TabSource`] that lists tabs and an [`ActivationSink`] that records which
//! tab the user committed to.

mod file;

use async_trait::async_trait;
use tabgrid_types::{Tab, TabId};
use thiserror::Error;

pub use file::SnapshotFile;

/// Errors surfaced at the session boundary.
#[derive(Debug, Error)]
pub enum SessionError {
    /// I/O failure reading or writing the snapshot file.
    #[error("session I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The snapshot file is not valid JSON for the expected shape.
    #[error("session parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// An activation referenced a tab id not present in the snapshot.
    #[error("unknown tab id {0}")]
    UnknownTab(TabId),
}

/// Provides the ordered tab list for the current window.
#[async_trait]
pub trait TabSource: Send + Sync {
    async fn list_tabs(&self) -> Result<Vec<Tab>, SessionError>;
}

/// Consumes the committed selection. Idempotent: activating the already
/// active tab is a no-op from the caller's point of view.
#[async_trait]
pub trait ActivationSink: Send + Sync {
    async fn activate(&self, id: TabId) -> Result<(), SessionError>;
}
