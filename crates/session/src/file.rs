//! File-backed snapshot source and activation sink.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tabgrid_types::{SessionSnapshot, Tab, TabId};
use tracing::debug;

use crate::{ActivationSink, SessionError, TabSource};

/// Adapter over the JSON snapshot file an external exporter maintains.
///
/// `list_tabs` reads the file fresh on every call, matching the overlay's
/// fetch-on-open lifecycle. `activate` rewrites the file with exactly one
/// active tab, mirroring the browser's single-focused-tab invariant.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole snapshot.
    pub async fn load(&self) -> Result<SessionSnapshot, SessionError> {
        let data = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&data)?)
    }

    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionError> {
        let data = serde_json::to_string_pretty(snapshot)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}

#[async_trait]
impl TabSource for SnapshotFile {
    async fn list_tabs(&self) -> Result<Vec<Tab>, SessionError> {
        let snapshot = self.load().await?;
        debug!(path = %self.path.display(), tabs = snapshot.tabs.len(), "snapshot loaded");
        Ok(snapshot.tabs)
    }
}

#[async_trait]
impl ActivationSink for SnapshotFile {
    async fn activate(&self, id: TabId) -> Result<(), SessionError> {
        let mut snapshot = self.load().await?;
        if !snapshot.tabs.iter().any(|tab| tab.id == id) {
            return Err(SessionError::UnknownTab(id));
        }
        for tab in &mut snapshot.tabs {
            tab.active = tab.id == id;
        }
        self.save(&snapshot).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn snapshot(ids: &[u64]) -> SessionSnapshot {
        SessionSnapshot {
            captured_at: Utc::now(),
            window_id: Some(1),
            tabs: ids
                .iter()
                .map(|&id| Tab {
                    id: TabId(id),
                    title: format!("tab {id}"),
                    url: format!("https://example.com/{id}"),
                    icon_url: None,
                    active: false,
                })
                .collect(),
        }
    }

    fn write_snapshot(dir: &tempfile::TempDir, snapshot: &SessionSnapshot) -> SnapshotFile {
        let path = dir.path().join("session.json");
        std::fs::write(&path, serde_json::to_string_pretty(snapshot).unwrap()).unwrap();
        SnapshotFile::new(path)
    }

    #[tokio::test]
    async fn lists_tabs_in_snapshot_order() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_snapshot(&dir, &snapshot(&[3, 1, 2]));
        let tabs = file.list_tabs().await.unwrap();
        let ids: Vec<u64> = tabs.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("absent.json"));
        assert!(matches!(file.list_tabs().await, Err(SessionError::Io(_))));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();
        let file = SnapshotFile::new(path);
        assert!(matches!(file.list_tabs().await, Err(SessionError::Parse(_))));
    }

    #[tokio::test]
    async fn activate_flips_exactly_one_tab() {
        let dir = tempfile::tempdir().unwrap();
        let mut initial = snapshot(&[1, 2, 3]);
        initial.tabs[0].active = true;
        let file = write_snapshot(&dir, &initial);

        file.activate(TabId(2)).await.unwrap();
        let tabs = file.list_tabs().await.unwrap();
        let active: Vec<u64> = tabs.iter().filter(|t| t.active).map(|t| t.id.0).collect();
        assert_eq!(active, vec![2]);

        // Idempotent: activating again changes nothing further.
        file.activate(TabId(2)).await.unwrap();
        let tabs_again = file.list_tabs().await.unwrap();
        assert_eq!(tabs, tabs_again);
    }

    #[tokio::test]
    async fn activate_unknown_tab_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_snapshot(&dir, &snapshot(&[1]));
        assert!(matches!(file.activate(TabId(9)).await, Err(SessionError::UnknownTab(TabId(9)))));
    }
}
