//! User configuration merged over built-in defaults.
//!
//! The config file is plain JSON under the scratchpad config directory. Every
//! field is optional; anything left out keeps its default value.

use crate::core::dirs::{get_config_directory, get_config_file};
use crate::core::error::{Result, ScratchpadError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which selection UI presents the scratch file list
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PickerProvider {
    #[default]
    Builtin,
    Fzf,
    Skim,
    Gum,
}

impl FromStr for PickerProvider {
    type Err = ScratchpadError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "builtin" => Ok(Self::Builtin),
            "fzf" => Ok(Self::Fzf),
            "skim" | "sk" => Ok(Self::Skim),
            "gum" => Ok(Self::Gum),
            other => Err(ScratchpadError::invalid_argument(format!(
                "unknown picker provider '{other}' (expected builtin, fzf, skim or gum)"
            ))),
        }
    }
}

impl fmt::Display for PickerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Builtin => "builtin",
            Self::Fzf => "fzf",
            Self::Skim => "skim",
            Self::Gum => "gum",
        };
        f.write_str(name)
    }
}

/// Gates whether diagnostic lines reach the log file
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    Off,
    Debug,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Off => log::LevelFilter::Off,
            Self::Debug => log::LevelFilter::Debug,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowPosition {
    #[default]
    Center,
    Top,
    Bottom,
}

/// Layout handed through to the host when it creates the floating window.
///
/// `width` and `height` are fractions of the editor area.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FloatWindowStyle {
    pub position: WindowPosition,
    pub width: f64,
    pub height: f64,
    pub border: String,
}

impl Default for FloatWindowStyle {
    fn default() -> Self {
        Self {
            position: WindowPosition::Center,
            width: 0.6,
            height: 0.6,
            border: "rounded".to_string(),
        }
    }
}

/// Absolute placement of a floating window, in editor cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub row: u16,
    pub col: u16,
    pub width: u16,
    pub height: u16,
}

impl FloatWindowStyle {
    /// Resolve the fractional style against an editor of `columns` x `lines`
    pub fn geometry(&self, columns: u16, lines: u16) -> WindowGeometry {
        let scale = |fraction: f64, total: u16| -> u16 {
            let cells = (f64::from(total) * fraction.clamp(0.0, 1.0)).floor() as u16;
            cells.clamp(1u16.min(total), total)
        };
        let width = scale(self.width, columns);
        let height = scale(self.height, lines);
        let col = (columns - width) / 2;
        let row = match self.position {
            WindowPosition::Center => (lines - height) / 2,
            WindowPosition::Top => 0,
            WindowPosition::Bottom => lines - height,
        };

        WindowGeometry {
            row,
            col,
            width,
            height,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub scratch_root: PathBuf,
    pub default_file_extension: String,
    pub picker_provider: PickerProvider,
    pub log_level: LogLevel,
    pub float_window_style: FloatWindowStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scratch_root: std::env::temp_dir(),
            default_file_extension: "md".to_string(),
            picker_provider: PickerProvider::default(),
            log_level: LogLevel::default(),
            float_window_style: FloatWindowStyle::default(),
        }
    }
}

/// Values supplied on the command line, applied last
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub scratch_root: Option<PathBuf>,
    pub default_file_extension: Option<String>,
    pub picker_provider: Option<PickerProvider>,
    pub debug: bool,
}

impl Config {
    /// Load the user's config file, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ScratchpadError::config_parse_failed(path, e))
    }

    /// Write the defaults out unless a config file already exists.
    /// Returns the path of the config file.
    pub fn init_default_file() -> Result<PathBuf> {
        let config_file = get_config_file()?;
        if !config_file.exists() {
            std::fs::create_dir_all(get_config_directory()?)?;
            let content = serde_json::to_string_pretty(&Self::default())?;
            std::fs::write(&config_file, content)?;
        }
        Ok(config_file)
    }

    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(root) = overrides.scratch_root {
            self.scratch_root = root;
        }
        if let Some(ext) = overrides.default_file_extension {
            self.default_file_extension = ext;
        }
        if let Some(provider) = overrides.picker_provider {
            self.picker_provider = provider;
        }
        if overrides.debug {
            self.log_level = LogLevel::Debug;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_file_extension, "md");
        assert_eq!(config.picker_provider, PickerProvider::Builtin);
        assert_eq!(config.log_level, LogLevel::Off);
        assert_eq!(config.scratch_root, std::env::temp_dir());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "default_file_extension": "txt", "log_level": "DEBUG" }"#)
                .unwrap();
        assert_eq!(config.default_file_extension, "txt");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.picker_provider, PickerProvider::Builtin);
        assert_eq!(config.float_window_style, FloatWindowStyle::default());
    }

    #[test]
    fn test_nested_style_merges_field_by_field() {
        let config: Config =
            serde_json::from_str(r#"{ "float_window_style": { "border": "single" } }"#).unwrap();
        assert_eq!(config.float_window_style.border, "single");
        assert_eq!(config.float_window_style.width, 0.6);
    }

    #[test]
    fn test_picker_provider_parsing() {
        assert_eq!("FZF".parse::<PickerProvider>().unwrap(), PickerProvider::Fzf);
        assert_eq!("sk".parse::<PickerProvider>().unwrap(), PickerProvider::Skim);
        assert!("telescope".parse::<PickerProvider>().is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::default().apply(ConfigOverrides {
            scratch_root: Some(PathBuf::from("/notes")),
            default_file_extension: Some("txt".to_string()),
            picker_provider: Some(PickerProvider::Gum),
            debug: true,
        });
        assert_eq!(config.scratch_root, PathBuf::from("/notes"));
        assert_eq!(config.default_file_extension, "txt");
        assert_eq!(config.picker_provider, PickerProvider::Gum);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ScratchpadError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_geometry_centered() {
        let geometry = FloatWindowStyle::default().geometry(100, 50);
        assert_eq!(
            geometry,
            WindowGeometry {
                row: 10,
                col: 20,
                width: 60,
                height: 30
            }
        );
    }

    #[test]
    fn test_geometry_bottom_and_clamped() {
        let style = FloatWindowStyle {
            position: WindowPosition::Bottom,
            width: 2.0,
            height: 0.5,
            border: "none".to_string(),
        };
        let geometry = style.geometry(80, 24);
        assert_eq!(geometry.width, 80);
        assert_eq!(geometry.col, 0);
        assert_eq!(geometry.height, 12);
        assert_eq!(geometry.row, 12);
    }
}
