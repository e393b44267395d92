//! Source catalog types.
//!
//! Named, orderable catalog entries describing selectable inputs.
//! Instantiated from configuration by an outer layer; read-only here.

use serde::{Deserialize, Serialize};

use crate::device::DeviceProfile;

/// Routing key of a source catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceKey(String);

impl SourceKey {
    /// Wrap a configured route key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Reserved route key that lands presentation on the codec's
    /// on-screen display. Used to stop sharing and to displace sources
    /// that cannot remain selected inside a call.
    pub fn codec_osd() -> Self {
        Self("codec-osd".into())
    }

    /// Route key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selectable input in the room's source catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Routing key. Selecting the entry runs this route.
    pub key: SourceKey,
    /// Name shown on staging buttons and the current-source header.
    pub preferred_name: String,
    /// Icon key. Defaults to blank.
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Display order within the staging list, ascending.
    #[serde(default)]
    pub order: u32,
    /// Entry appears in the staging list at all.
    #[serde(default = "default_true")]
    pub include_in_list: bool,
    /// Entry cannot be shared through the codec; filtered out while a
    /// call is active or being staged.
    #[serde(default)]
    pub disable_codec_sharing: bool,
    /// Control-capable device bound to this source, when it has one.
    #[serde(default)]
    pub device: Option<DeviceProfile>,
}

fn default_icon() -> String {
    "blank".into()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_defaults_from_minimal_config() {
        let entry: SourceEntry = serde_json::from_str(
            r#"{ "key": "pc-1", "preferred_name": "Laptop" }"#,
        )
        .unwrap();

        assert!(entry.include_in_list);
        assert!(!entry.disable_codec_sharing);
        assert_eq!(entry.icon, "blank");
        assert_eq!(entry.order, 0);
        assert!(entry.device.is_none());
    }
}
