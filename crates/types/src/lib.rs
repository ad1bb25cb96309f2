//! Shared type definitions for tabgrid.
//!
//! This crate holds the data model that crosses crate boundaries: tabs and
//! their snapshot container, the grouping hierarchy produced by the engine,
//! and the `Msg`/`Effect` pairs that drive the TUI state machine.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque tab identifier assigned by the browser and carried through the
/// session snapshot unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single browser tab as captured by the session exporter.
///
/// The core only ever holds transient copies; the snapshot file owns the
/// canonical state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Browser-assigned identifier
    pub id: TabId,
    /// Page title at capture time
    #[serde(default)]
    pub title: String,
    /// Full page address
    pub url: String,
    /// Favicon reference, when the browser reported one
    #[serde(default, alias = "favIconUrl")]
    pub icon_url: Option<String>,
    /// Whether this tab was focused at capture time
    #[serde(default)]
    pub active: bool,
}

/// The JSON document an external browser exporter writes and the session
/// adapters read and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// When the exporter captured the window
    pub captured_at: DateTime<Utc>,
    /// Browser window the tabs belong to, when known
    #[serde(default)]
    pub window_id: Option<u64>,
    /// Tabs in browser order
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

/// Coarse-grained label grouping related domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Social,
    Work,
    Development,
    Media,
    Shopping,
    Other,
}

impl Category {
    /// Display label, also used as the group label in the hierarchy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Social => "Social",
            Category::Work => "Work",
            Category::Development => "Development",
            Category::Media => "Media",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One domain's tabs inside a nested category group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainGroup {
    /// Normalized host label
    pub domain: String,
    /// Tabs in first-encounter order
    pub tabs: Vec<Tab>,
}

/// Group payload: flat when a category collapsed to a single small domain,
/// nested when it spans domains or a domain grew past the flatten threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Flat(Vec<Tab>),
    Nested(Vec<DomainGroup>),
}

/// A renderable, navigable bucket of tabs, possibly two-level
/// (category → domain).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabGroup {
    /// Category name, or "Tabs" for the ungrouped short-circuit
    pub label: String,
    /// Flat tab list or per-domain subgroups
    pub kind: GroupKind,
}

impl TabGroup {
    /// Total number of tabs across all leaf lists.
    pub fn tab_count(&self) -> usize {
        match &self.kind {
            GroupKind::Flat(tabs) => tabs.len(),
            GroupKind::Nested(domains) => domains.iter().map(|d| d.tabs.len()).sum(),
        }
    }

    /// Leaf tabs in render order, nested subgroups concatenated.
    pub fn leaf_tabs(&self) -> Box<dyn Iterator<Item = &Tab> + '_> {
        match &self.kind {
            GroupKind::Flat(tabs) => Box::new(tabs.iter()),
            GroupKind::Nested(domains) => Box::new(domains.iter().flat_map(|d| d.tabs.iter())),
        }
    }
}

/// Result of an asynchronous snapshot fetch, delivered back into the event
/// loop as a `Msg::TabsLoaded`.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Snapshot read and parsed
    Tabs(Vec<Tab>),
    /// Fetch failed; the overlay shows an empty hierarchy
    Failed(String),
}

/// Messages that drive the application state machine.
///
/// Input keys, timer ticks, and completed background work all arrive as
/// messages; `App::update` is the single place state changes.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Hotkey: open the overlay if closed, close it if open
    ToggleOverlay,
    /// Close the overlay (Escape, or programmatic teardown)
    CloseOverlay,
    /// Move the selection cursor left within the current group
    MoveLeft,
    /// Move the selection cursor right within the current group
    MoveRight,
    /// Move the selection cursor to the previous group
    MoveUp,
    /// Move the selection cursor to the next group
    MoveDown,
    /// Commit the current selection
    Select,
    /// Background snapshot fetch completed
    TabsLoaded { epoch: u64, outcome: FetchOutcome },
    /// The snapshot file changed on disk
    SessionChanged,
    /// Periodic UI tick (throbber animation)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects requested by state changes and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Spawn a snapshot fetch; the epoch pairs the eventual result with the
    /// overlay generation that requested it
    FetchTabsRequested { epoch: u64 },
    /// Record the committed tab in the activation sink
    ActivateTabRequested(TabId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_accepts_exporter_field_names() {
        let json = r#"{
            "id": 42,
            "title": "Example",
            "url": "https://example.com/",
            "favIconUrl": "https://example.com/favicon.ico",
            "active": true
        }"#;
        let tab: Tab = serde_json::from_str(json).expect("deserialize Tab");
        assert_eq!(tab.id, TabId(42));
        assert_eq!(tab.icon_url.as_deref(), Some("https://example.com/favicon.ico"));
        assert!(tab.active);
    }

    #[test]
    fn tab_optional_fields_default() {
        let json = r#"{ "id": 1, "url": "https://example.com/" }"#;
        let tab: Tab = serde_json::from_str(json).expect("deserialize Tab");
        assert_eq!(tab.title, "");
        assert!(tab.icon_url.is_none());
        assert!(!tab.active);
    }

    #[test]
    fn group_tab_count_sums_nested_domains() {
        let tab = |id: u64| Tab {
            id: TabId(id),
            title: String::new(),
            url: "https://example.com/".into(),
            icon_url: None,
            active: false,
        };
        let group = TabGroup {
            label: "Work".into(),
            kind: GroupKind::Nested(vec![
                DomainGroup { domain: "github.com".into(), tabs: vec![tab(1), tab(2)] },
                DomainGroup { domain: "gitlab.com".into(), tabs: vec![tab(3)] },
            ]),
        };
        assert_eq!(group.tab_count(), 3);
        let ids: Vec<u64> = group.leaf_tabs().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
