//! Front-end configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Front-end configuration that extends the core `Config`.
///
/// Adds the browser opener command, an optional clipboard command overriding
/// the system clipboard, and the directory exported files are written to. All
/// core fields are flattened so a single TOML file configures both.
///
/// # Example
///
/// ```rust
/// use clavier::ClavierConfig;
///
/// let config = ClavierConfig::default();
/// assert_eq!(config.base().download_filename, "arabic_text.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClavierConfig {
    /// Core keyboard settings (file name, notices, search URL, deletion unit...)
    #[serde(flatten)]
    pub base: clavier_core::Config,

    /// Program and arguments that read clipboard text from stdin. When unset
    /// the system clipboard is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clipboard_command: Option<Vec<String>>,

    /// Program and arguments that open a URL; the URL is appended
    pub open_command: Vec<String>,

    /// Where "Save .txt" writes files
    pub export_dir: PathBuf,
}

impl Default for ClavierConfig {
    fn default() -> Self {
        Self {
            base: clavier_core::Config::default(),
            clipboard_command: None,
            open_command: default_open_command(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl ClavierConfig {
    /// Convert into the core config.
    pub fn into_base(self) -> clavier_core::Config {
        self.base
    }

    pub fn base(&self) -> &clavier_core::Config {
        &self.base
    }

    /// Load from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

fn default_open_command() -> Vec<String> {
    let cmd: &[&str] = if cfg!(target_os = "macos") {
        &["open"]
    } else if cfg!(target_os = "windows") {
        &["cmd", "/C", "start", ""]
    } else {
        &["xdg-open"]
    };
    cmd.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clavier_core::DeletionUnit;

    #[test]
    fn test_flattened_toml() {
        let cfg = ClavierConfig::from_toml_str(
            r#"
            download_filename = "notes.txt"
            deletion_unit = "grapheme"
            clipboard_command = ["xclip", "-selection", "clipboard"]
            export_dir = "/tmp"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.base().download_filename, "notes.txt");
        assert_eq!(cfg.base().deletion_unit, DeletionUnit::Grapheme);
        assert_eq!(
            cfg.clipboard_command.as_deref().and_then(|c| c.first()).map(String::as_str),
            Some("xclip")
        );
        assert_eq!(cfg.export_dir, PathBuf::from("/tmp"));
        assert_eq!(cfg.open_command, default_open_command());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let cfg = ClavierConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, ClavierConfig::default());
        assert_eq!(cfg.clipboard_command, None);
    }
}
