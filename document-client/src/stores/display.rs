use super::Writable;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Which parts of a document card the UI renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPreferences {
    pub show_image: bool,
    pub show_filename: bool,
    pub show_tags: bool,
    pub show_buttons: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            show_image: true,
            show_filename: true,
            show_tags: true,
            show_buttons: true,
        }
    }
}

/// Process-wide display preferences, created with everything shown on first use.
pub static DISPLAY_PREFERENCES: Lazy<Writable<DisplayPreferences>> =
    Lazy::new(|| Writable::new(DisplayPreferences::default()));
