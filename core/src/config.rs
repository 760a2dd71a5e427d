//! Keyboard configuration.
//!
//! Plain data loaded from TOML. Every field has a default so a partial file
//! (or none at all) is valid. Front ends that need extra settings flatten this
//! struct into their own config.

use crate::ad::{AdPosition, AdSlot, DEFAULT_AD_CLIENT, DEFAULT_BOTTOM_SLOT, DEFAULT_TOP_SLOT};
use crate::buffer::DeletionUnit;
use crate::layout::LayoutTable;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_DOWNLOAD_FILENAME: &str = "arabic_text.txt";
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://www.google.com/search?q=";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// File name offered for "Save .txt"
    pub download_filename: String,

    /// How long a notice stays on screen, in milliseconds
    pub notice_duration_ms: u64,

    /// Search URL prefix; the percent-encoded query is appended
    pub search_base_url: String,

    /// What a collapsed backspace removes
    pub deletion_unit: DeletionUnit,

    /// Render the optional Latin digit row
    pub show_latin_digits: bool,

    // Ad slots
    pub ad_client: String,
    pub top_ad_slot: String,
    pub bottom_ad_slot: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download_filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
            notice_duration_ms: 3000,
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            deletion_unit: DeletionUnit::Char,
            show_latin_digits: false,
            ad_client: DEFAULT_AD_CLIENT.to_string(),
            top_ad_slot: DEFAULT_TOP_SLOT.to_string(),
            bottom_ad_slot: DEFAULT_BOTTOM_SLOT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    /// Layout variant selected by `show_latin_digits`.
    pub fn layout(&self) -> LayoutTable {
        if self.show_latin_digits {
            LayoutTable::with_latin_digits()
        } else {
            LayoutTable::standard()
        }
    }

    /// The two ad slots, top first.
    pub fn ad_slots(&self) -> [AdSlot; 2] {
        [
            AdSlot::new(&self.top_ad_slot, &self.ad_client, AdPosition::Top),
            AdSlot::new(&self.bottom_ad_slot, &self.ad_client, AdPosition::Bottom),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.download_filename, "arabic_text.txt");
        assert_eq!(cfg.notice_duration(), Duration::from_secs(3));
        assert_eq!(cfg.deletion_unit, DeletionUnit::Char);
        assert_eq!(cfg.layout(), LayoutTable::standard());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let cfg = Config::from_toml_str(
            r#"
            deletion_unit = "grapheme"
            show_latin_digits = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.deletion_unit, DeletionUnit::Grapheme);
        assert_eq!(cfg.layout(), LayoutTable::with_latin_digits());
        assert_eq!(cfg.search_base_url, DEFAULT_SEARCH_BASE_URL);
    }

    #[test]
    fn test_toml_string_round_trip() {
        let mut cfg = Config::default();
        cfg.download_filename = "نص.txt".into();
        let s = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&s).unwrap(), cfg);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clavier.toml");
        let mut cfg = Config::default();
        cfg.notice_duration_ms = 1500;
        cfg.save_toml(&path).unwrap();
        assert_eq!(Config::load_toml(&path).unwrap(), cfg);
    }

    #[test]
    fn test_ad_slots_follow_config() {
        let mut cfg = Config::default();
        cfg.ad_client = "ca-pub-1".into();
        let [top, bottom] = cfg.ad_slots();
        assert_eq!(top.position, AdPosition::Top);
        assert_eq!(top.client, "ca-pub-1");
        assert_eq!(bottom.slot_id, DEFAULT_BOTTOM_SLOT);
    }
}
