//! Configuration file support for the harmony wheel.
//!
//! This module provides serialization and deserialization of user settings:
//! log verbosity, the initial color and harmony rule, and the wheel layout.

use serde::{Deserialize, Serialize};

use crate::color_utils::normalize_hex;
use crate::constants::{DEFAULT_COLOR, DEFAULT_WHEEL_MARGIN, DEFAULT_WHEEL_SIZE};
use crate::harmony::HarmonyType;
use crate::wheel_layout::WheelLayout;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,
}

fn default_app_name() -> String {
    "Harmony Wheel".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Harmony rule selected at startup
    #[serde(default)]
    pub default_harmony: HarmonyType,

    /// Base color selected at startup
    #[serde(default = "default_initial_color")]
    pub initial_color: String,

    /// Wheel canvas settings
    #[serde(default)]
    pub wheel: WheelSettings,

    /// Default folder for exported wheel images
    #[serde(default)]
    pub export_folder: String,
}

fn default_initial_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            default_harmony: HarmonyType::default(),
            initial_color: default_initial_color(),
            wheel: WheelSettings::default(),
            export_folder: String::new(),
        }
    }
}

/// Wheel canvas settings, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelSettings {
    /// Canvas edge length
    #[serde(default = "default_wheel_size")]
    pub size: f64,
    /// Gap between the rim and the canvas edge
    #[serde(default = "default_wheel_margin")]
    pub margin: f64,
    /// Device pixels per logical pixel
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
}

fn default_wheel_size() -> f64 {
    DEFAULT_WHEEL_SIZE
}

fn default_wheel_margin() -> f64 {
    DEFAULT_WHEEL_MARGIN
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            size: default_wheel_size(),
            margin: default_wheel_margin(),
            device_pixel_ratio: default_device_pixel_ratio(),
        }
    }
}

impl WheelSettings {
    /// Check that the settings describe a drawable wheel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "wheel size must be positive, got {}",
                self.size
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 || self.margin >= self.size / 2.0 {
            return Err(ConfigError::InvalidValue(format!(
                "wheel margin must be in [0, {}), got {}",
                self.size / 2.0,
                self.margin
            )));
        }
        if !self.device_pixel_ratio.is_finite() || self.device_pixel_ratio <= 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "device pixel ratio must be positive, got {}",
                self.device_pixel_ratio
            )));
        }
        Ok(())
    }

    /// The wheel layout these settings describe.
    pub fn layout(&self) -> WheelLayout {
        WheelLayout::new(self.size, self.margin, self.device_pixel_ratio)
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: UserPreferences::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.preferences.wheel.validate()?;
        config.preferences.initial_color = normalize_hex(&config.preferences.initial_color)
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "harmony-wheel.json"
    }

    /// Get the default config file path for auto-load/save.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        Self::path_under(dirs::config_dir(), dirs::home_dir())
    }

    /// Config file location under the XDG config directory, falling back
    /// to `~/.config` when only a home directory is known.
    #[cfg(not(target_arch = "wasm32"))]
    fn path_under(
        config_dir: Option<std::path::PathBuf>,
        home_dir: Option<std::path::PathBuf>,
    ) -> Option<std::path::PathBuf> {
        config_dir
            .or_else(|| home_dir.map(|home| home.join(".config")))
            .map(|dir| dir.join("harmony-wheel").join(Self::default_filename()))
    }

    /// Load configuration from a file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load_from_path(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to a file, creating parent directories if needed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save_to_path(&path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A setting is out of range
    #[error("Invalid setting: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_json() {
        let config = AppConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(AppConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = AppConfig::from_json(
            r#"{ "version": 1, "preferences": { "default_harmony": "triadic" } }"#,
        )
        .unwrap();

        assert_eq!(config.app_name, "Harmony Wheel");
        assert_eq!(config.preferences.default_harmony, HarmonyType::Triadic);
        assert_eq!(config.preferences.initial_color, "#ffffff");
        assert_eq!(config.preferences.wheel, WheelSettings::default());
        assert_eq!(config.preferences.log_level, LogLevel::Info);
    }

    #[test]
    fn test_initial_color_is_normalized() {
        let config = AppConfig::from_json(
            r#"{ "version": 1, "preferences": { "initial_color": "3366CC" } }"#,
        )
        .unwrap();
        assert_eq!(config.preferences.initial_color, "#3366cc");
    }

    #[test]
    fn test_invalid_initial_color_is_rejected() {
        let result = AppConfig::from_json(
            r##"{ "version": 1, "preferences": { "initial_color": "#abc" } }"##,
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let result = AppConfig::from_json(r#"{ "version": 99 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_wheel_validation() {
        let mut wheel = WheelSettings::default();
        assert!(wheel.validate().is_ok());

        wheel.margin = 150.0;
        assert!(wheel.validate().is_err());

        wheel = WheelSettings {
            device_pixel_ratio: 0.0,
            ..WheelSettings::default()
        };
        assert!(wheel.validate().is_err());

        wheel = WheelSettings {
            size: -1.0,
            ..WheelSettings::default()
        };
        assert!(wheel.validate().is_err());
    }

    #[test]
    fn test_wheel_layout_from_settings() {
        let wheel = WheelSettings {
            size: 400.0,
            margin: 10.0,
            device_pixel_ratio: 2.0,
        };
        let layout = wheel.layout();
        assert_eq!(layout.radius(), 190.0);
        assert_eq!(layout.buffer_size(), 800);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
        let level: LogLevel = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(level, LogLevel::Warn);
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(AppConfig::default_filename());

        let mut config = AppConfig::default();
        config.preferences.default_harmony = HarmonyType::Tetradic;
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_path_layout() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("xdg");
        let home_dir = dir.path().join("home");

        assert_eq!(
            AppConfig::path_under(Some(config_dir.clone()), Some(home_dir.clone())),
            Some(config_dir.join("harmony-wheel").join("harmony-wheel.json"))
        );
        assert_eq!(
            AppConfig::path_under(None, Some(home_dir.clone())),
            Some(
                home_dir
                    .join(".config")
                    .join("harmony-wheel")
                    .join("harmony-wheel.json")
            )
        );
        assert_eq!(AppConfig::path_under(None, None), None);
    }

    #[test]
    fn test_save_to_default_location_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = AppConfig::path_under(Some(dir.path().to_path_buf()), None).unwrap();

        let mut config = AppConfig::default();
        config.preferences.log_level = LogLevel::Trace;
        config.save_to_path(&path).unwrap();

        assert!(dir.path().join("harmony-wheel").is_dir());
        assert_eq!(AppConfig::load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_default_path_ends_with_app_file() {
        if let Some(path) = AppConfig::default_path() {
            assert!(path.ends_with("harmony-wheel/harmony-wheel.json"));
        }
    }
}
