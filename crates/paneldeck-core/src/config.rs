//! Panel properties.
//!
//! Already-parsed panel configuration consumed at construction. Loading
//! and validation belong to the embedding layer.

use serde::{Deserialize, Serialize};

/// Header layout style for the panel surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    /// Compact header with a room button that toggles the room popup.
    #[default]
    Habanero,
    /// Expanded header; room controls live elsewhere.
    Verbose,
}

/// Touch panel properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Header layout style.
    #[serde(default)]
    pub header_style: HeaderStyle,
    /// Show the date in the top bar.
    #[serde(default = "default_true")]
    pub show_date: bool,
    /// Show the time in the top bar.
    #[serde(default = "default_true")]
    pub show_time: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { header_style: HeaderStyle::default(), show_date: true, show_time: true }
    }
}

fn default_true() -> bool {
    true
}
