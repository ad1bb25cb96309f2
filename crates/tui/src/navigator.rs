//! 2D selection state over the flattened group view.
//!
//! The navigator owns the linearized form of the hierarchy (one navigable
//! group per rendered top-level group, nested leaf lists concatenated) and
//! a (group, item) cursor into it. Horizontal moves wrap within the current
//! group; vertical moves wrap across groups but cap the item index so the
//! cursor never points past a shorter group's end.

use tabgrid_types::{Tab, TabGroup};

/// One navigable row: a group label plus its leaf tabs in render order.
#[derive(Debug, Clone)]
pub struct NavGroup {
    pub label: String,
    pub tabs: Vec<Tab>,
}

/// Flattened view plus cursor. Rebuilt via [`Navigator::set_groups`] whenever
/// the tab set changes; the navigator never observes external mutation on its
/// own.
#[derive(Debug, Default)]
pub struct Navigator {
    groups: Vec<NavGroup>,
    group_idx: usize,
    item_idx: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the flattened view and resets the cursor to the origin.
    pub fn set_groups(&mut self, groups: &[TabGroup]) {
        self.groups = groups
            .iter()
            .map(|group| NavGroup {
                label: group.label.clone(),
                tabs: group.leaf_tabs().cloned().collect(),
            })
            .collect();
        self.group_idx = 0;
        self.item_idx = 0;
    }

    /// Drops the view entirely (overlay teardown).
    pub fn clear(&mut self) {
        self.groups.clear();
        self.group_idx = 0;
        self.item_idx = 0;
    }

    pub fn groups(&self) -> &[NavGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Current (group index, item index) pair.
    pub fn cursor(&self) -> (usize, usize) {
        (self.group_idx, self.item_idx)
    }

    /// Moves the item index by `direction` (−1 or +1), wrapping in both
    /// directions within the current group. No-op when the current group has
    /// no tabs.
    pub fn move_horizontal(&mut self, direction: isize) {
        let Some(group) = self.groups.get(self.group_idx) else {
            return;
        };
        let count = group.tabs.len();
        if count == 0 {
            return;
        }
        let next = self.item_idx as isize + direction;
        self.item_idx = next.rem_euclid(count as isize) as usize;
    }

    /// Moves the group index by `direction`, wrapping across groups. The item
    /// index is capped to the new group's last tab, never wrapped.
    pub fn move_vertical(&mut self, direction: isize) {
        let count = self.groups.len();
        if count == 0 {
            return;
        }
        let next = self.group_idx as isize + direction;
        self.group_idx = next.rem_euclid(count as isize) as usize;
        let tab_count = self.groups[self.group_idx].tabs.len();
        self.item_idx = self.item_idx.min(tab_count.saturating_sub(1));
    }

    /// Tab under the cursor, or `None` when the view (or the current group)
    /// is empty.
    pub fn commit(&self) -> Option<&Tab> {
        self.groups.get(self.group_idx).and_then(|group| group.tabs.get(self.item_idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabgrid_types::{DomainGroup, GroupKind, TabId};

    fn tab(id: u64) -> Tab {
        Tab {
            id: TabId(id),
            title: format!("tab {id}"),
            url: format!("https://example.com/{id}"),
            icon_url: None,
            active: false,
        }
    }

    fn flat(label: &str, ids: &[u64]) -> TabGroup {
        TabGroup {
            label: label.to_string(),
            kind: GroupKind::Flat(ids.iter().copied().map(tab).collect()),
        }
    }

    fn ragged_view() -> Vec<TabGroup> {
        vec![flat("Work", &[1, 2, 3, 4]), flat("Social", &[5]), flat("Media", &[6, 7])]
    }

    #[test]
    fn set_groups_flattens_nested_leaf_lists_in_order() {
        let groups = vec![TabGroup {
            label: "Work".into(),
            kind: GroupKind::Nested(vec![
                DomainGroup { domain: "github.com".into(), tabs: vec![tab(1), tab(2)] },
                DomainGroup { domain: "gitlab.com".into(), tabs: vec![tab(3)] },
            ]),
        }];
        let mut nav = Navigator::new();
        nav.set_groups(&groups);
        assert_eq!(nav.groups().len(), 1);
        let ids: Vec<u64> = nav.groups()[0].tabs.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(nav.cursor(), (0, 0));
    }

    #[test]
    fn horizontal_wraps_both_directions() {
        let mut nav = Navigator::new();
        nav.set_groups(&ragged_view());
        nav.move_horizontal(-1);
        assert_eq!(nav.cursor(), (0, 3), "left from origin wraps to the end");
        nav.move_horizontal(1);
        assert_eq!(nav.cursor(), (0, 0), "right from the end wraps to the start");
    }

    #[test]
    fn full_horizontal_cycle_returns_to_origin() {
        let mut nav = Navigator::new();
        nav.set_groups(&ragged_view());
        let (_, start) = nav.cursor();
        for _ in 0..4 {
            nav.move_horizontal(1);
        }
        assert_eq!(nav.cursor().1, start);
    }

    #[test]
    fn vertical_wraps_groups_and_clamps_item_index() {
        let mut nav = Navigator::new();
        nav.set_groups(&ragged_view());
        for _ in 0..3 {
            nav.move_horizontal(1);
        }
        assert_eq!(nav.cursor(), (0, 3));

        nav.move_vertical(1);
        assert_eq!(nav.cursor(), (1, 0), "item index capped to the shorter group");

        nav.move_vertical(-1);
        assert_eq!(nav.cursor(), (0, 0), "clamping is not undone by moving back");

        nav.move_vertical(-1);
        assert_eq!(nav.cursor().0, 2, "vertical wraps from the first group to the last");
    }

    #[test]
    fn vertical_never_exceeds_new_group_bounds() {
        let mut nav = Navigator::new();
        nav.set_groups(&ragged_view());
        for _ in 0..3 {
            nav.move_horizontal(1);
        }
        for _ in 0..10 {
            nav.move_vertical(1);
            let (group, item) = nav.cursor();
            let count = nav.groups()[group].tabs.len();
            assert!(item < count, "item {item} out of bounds for group of {count}");
        }
    }

    #[test]
    fn empty_view_is_inert() {
        let mut nav = Navigator::new();
        nav.set_groups(&[]);
        nav.move_horizontal(1);
        nav.move_vertical(-1);
        assert_eq!(nav.cursor(), (0, 0));
        assert!(nav.commit().is_none());
    }

    #[test]
    fn zero_tab_group_makes_horizontal_a_noop() {
        let mut nav = Navigator::new();
        nav.set_groups(&[flat("Tabs", &[])]);
        nav.move_horizontal(1);
        assert_eq!(nav.cursor(), (0, 0));
        assert!(nav.commit().is_none());
    }

    #[test]
    fn commit_returns_tab_under_cursor() {
        let mut nav = Navigator::new();
        nav.set_groups(&ragged_view());
        nav.move_vertical(1);
        assert_eq!(nav.commit().map(|t| t.id.0), Some(5));

        nav.move_vertical(1);
        nav.move_horizontal(1);
        assert_eq!(nav.commit().map(|t| t.id.0), Some(7));
    }

    #[test]
    fn set_groups_resets_cursor() {
        let mut nav = Navigator::new();
        nav.set_groups(&ragged_view());
        nav.move_vertical(1);
        nav.move_horizontal(0);
        nav.set_groups(&ragged_view());
        assert_eq!(nav.cursor(), (0, 0));
    }
}
