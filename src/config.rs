use crate::view::theme::ColorMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory and file stem
pub const APP_DIR_NAME: &str = "filetree";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Initial color mode
    #[serde(default)]
    pub theme: ColorMode,

    #[serde(default)]
    pub file_explorer: FileExplorerConfig,
}

/// Explorer presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FileExplorerConfig {
    /// Columns per nesting level
    #[serde(default = "default_indent_width")]
    pub indent_width: u16,

    /// Minimum width of the inline name input
    #[serde(default = "default_input_width")]
    pub input_width: u16,

    /// Show key hints in the status line when there is no message
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

fn default_indent_width() -> u16 {
    2
}

fn default_input_width() -> u16 {
    24
}

fn default_true() -> bool {
    true
}

impl Default for FileExplorerConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            input_width: default_input_width(),
            show_hints: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// `<config dir>/filetree/config.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.json"))
    }

    /// Load the user's config file, falling back to defaults when there is
    /// none. A file that exists but cannot be loaded is an error.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from {:?}", path);
                Self::load_from_file(&path)
            }
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let indent_width = self.file_explorer.indent_width;
        if !(1..=8).contains(&indent_width) {
            return Err(ConfigError::ValidationError(format!(
                "file_explorer.indent_width must be between 1 and 8, got {indent_width}"
            )));
        }

        if self.file_explorer.input_width < 4 {
            return Err(ConfigError::ValidationError(
                "file_explorer.input_width must be at least 4".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
