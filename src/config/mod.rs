//! Configuration management
//!
//! Window and layout settings for the editor front-end, loaded from TOML.
//! Parameter definitions files are handled by [`definitions`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod definitions;

/// Editor front-end configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Form and navigation layout
    pub layout: LayoutConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown in the window decoration (" *" is appended while dirty)
    pub title: String,

    /// Initial window width in logical pixels
    pub width: f32,

    /// Initial window height in logical pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Parameters".to_string(),
            width: 640.0,
            height: 480.0,
        }
    }
}

/// Layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the label column in the form
    pub label_width: f32,

    /// Width of the navigation pane in the tree view
    pub navigation_width: f32,

    /// Show tooltip text under each row
    pub show_help: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            label_width: 180.0,
            navigation_width: 220.0,
            show_help: true,
        }
    }
}

impl EditorConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: EditorConfig = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                debug!("Loaded editor config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Using default editor config: {:#}", e);
                Self::default_config()
            }
        }
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Default config file location (`~/.config/lamco-param-editor/editor.toml`)
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lamco-param-editor")
            .join("editor.toml")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.window.title.trim().is_empty() {
            anyhow::bail!("Window title cannot be empty");
        }

        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            anyhow::bail!(
                "Invalid window size: {}x{}",
                self.window.width,
                self.window.height
            );
        }

        if !(self.layout.label_width > 0.0) {
            anyhow::bail!("Invalid label width: {}", self.layout.label_width);
        }
        if !(self.layout.navigation_width > 0.0) {
            anyhow::bail!(
                "Invalid navigation width: {}",
                self.layout.navigation_width
            );
        }

        Ok(())
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default_config();
        assert_eq!(config.window.title, "Parameters");
        assert_eq!(config.window.width, 640.0);
        assert_eq!(config.layout.label_width, 180.0);
        assert!(config.layout.show_help);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[window]\ntitle = \"Scan settings\"").unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.window.title, "Scan settings");
        assert_eq!(config.window.height, 480.0);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_round_trip() {
        let mut config = EditorConfig::default_config();
        config.layout.show_help = false;
        let parsed: EditorConfig = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = EditorConfig::default_config();
        config.window.title = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = EditorConfig::default_config();
        config.window.width = 0.0;
        assert!(config.validate().is_err());

        let mut config = EditorConfig::default_config();
        config.layout.navigation_width = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load_or_default(dir.path().join("absent.toml"));
        assert_eq!(config, EditorConfig::default());
    }
}
