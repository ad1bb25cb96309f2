//! Tab grouping and categorization engine.
//!
//! Pure functions from a flat tab list to a navigable hierarchy
//! (category → domain → tab): host normalization, curated-list
//! classification with a bounded registrable-domain fallback, and the
//! flatten-vs-nest grouping pass. No I/O and no shared state; everything
//! here is deterministic over its inputs.

mod categorize;
mod domain;
mod hierarchy;

pub use categorize::classify_domain;
pub use domain::{MISC_DOMAIN, normalize_host};
pub use hierarchy::{FLAT_GROUP_MAX_TABS, SINGLE_GROUP_MAX_TABS, UNGROUPED_LABEL, build_hierarchy};
