//! Hierarchy construction: flat tab list → category/domain groups.

use indexmap::IndexMap;
use tabgrid_types::{Category, DomainGroup, GroupKind, Tab, TabGroup};

use crate::categorize::classify_domain;
use crate::domain::normalize_host;

/// At or below this many tabs, grouping is skipped entirely and a single
/// ungrouped bucket is returned.
pub const SINGLE_GROUP_MAX_TABS: usize = 5;

/// A category holding exactly one domain collapses to a flat group when the
/// domain has at most this many tabs.
pub const FLAT_GROUP_MAX_TABS: usize = 3;

/// Label for the single group emitted by the small-tab-count short-circuit.
pub const UNGROUPED_LABEL: &str = "Tabs";

/// Builds the navigable hierarchy for a tab list.
///
/// Every input tab appears in exactly one leaf list: unparseable addresses
/// land under the sentinel domain in [`Category::Other`] rather than being
/// dropped. Category and domain ordering follow first encounter while
/// iterating the input.
pub fn build_hierarchy(tabs: &[Tab]) -> Vec<TabGroup> {
    if tabs.is_empty() {
        return Vec::new();
    }
    if tabs.len() <= SINGLE_GROUP_MAX_TABS {
        return vec![TabGroup {
            label: UNGROUPED_LABEL.to_string(),
            kind: GroupKind::Flat(tabs.to_vec()),
        }];
    }

    let mut by_category: IndexMap<Category, IndexMap<String, Vec<Tab>>> = IndexMap::new();
    for tab in tabs {
        let domain = normalize_host(&tab.url);
        let category = classify_domain(&domain);
        by_category
            .entry(category)
            .or_default()
            .entry(domain)
            .or_default()
            .push(tab.clone());
    }

    by_category
        .into_iter()
        .map(|(category, domains)| {
            let single_small_domain =
                domains.len() == 1 && domains.values().next().is_some_and(|tabs| tabs.len() <= FLAT_GROUP_MAX_TABS);
            let kind = if single_small_domain {
                GroupKind::Flat(domains.into_values().next().unwrap_or_default())
            } else {
                GroupKind::Nested(
                    domains
                        .into_iter()
                        .map(|(domain, tabs)| DomainGroup { domain, tabs })
                        .collect(),
                )
            };
            TabGroup {
                label: category.to_string(),
                kind,
            }
        })
        .collect()
}
