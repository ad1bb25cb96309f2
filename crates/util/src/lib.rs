//! Utility helpers shared across tabgrid crates.

pub mod preferences;
pub mod text;

pub use preferences::{PreferencesError, UserPreferences};
pub use text::truncate_to_width;
