//! Configuration management for Tomo.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `tomo.toml` file
//! 3. User config `~/.config/tomo/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the records come from.
    pub data: DataConfig,

    /// Local viewer configuration.
    pub server: ServerConfig,

    /// Chord diagram geometry.
    pub chord: ChordConfig,

    /// Detail view configuration.
    pub detail: DetailConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./tomo.toml` (project local)
    /// 2. `~/.config/tomo/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new("tomo.toml").exists() {
            return Self::from_file("tomo.toml");
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tomo").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("TOMO_DATA_DIR") {
            self.data.data_dir = dir;
        }
        if let Ok(port) = std::env::var("TOMO_PORT") {
            if let Ok(n) = port.parse() {
                self.server.port = n;
            }
        }
        if let Ok(angle) = std::env::var("TOMO_PAD_ANGLE") {
            if let Ok(a) = angle.parse() {
                self.chord.pad_angle = a;
            }
        }
    }

    /// Reject values the layout cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let chord = &self.chord;
        if !chord.pad_angle.is_finite() || chord.pad_angle < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "chord.pad_angle must be a non-negative number, got {}",
                chord.pad_angle
            )));
        }
        if chord.base_size <= 0.0 {
            return Err(ConfigError::Invalid("chord.base_size must be positive".into()));
        }
        if chord.arc_thickness < 0.0 || chord.ribbon_inset < 0.0 {
            return Err(ConfigError::Invalid(
                "chord.arc_thickness and chord.ribbon_inset must not be negative".into(),
            ));
        }
        if self.data.data_dir.trim().is_empty() {
            return Err(ConfigError::Invalid("data.data_dir must not be empty".into()));
        }
        Ok(())
    }

    /// This configuration as TOML.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory or `http(s)://` base URL of the extracted records.
    pub data_dir: String,

    /// Summary index file name.
    pub summary_file: String,

    /// Face image file name inside each character folder.
    pub face_image: String,

    /// Body image file name inside each character folder.
    pub body_image: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            summary_file: DEFAULT_SUMMARY_FILE.to_string(),
            face_image: DEFAULT_FACE_IMAGE.to_string(),
            body_image: DEFAULT_BODY_IMAGE.to_string(),
        }
    }
}

impl DataConfig {
    /// Whether the records are fetched over HTTP rather than read from disk.
    pub fn is_remote(&self) -> bool {
        self.data_dir.starts_with("http://") || self.data_dir.starts_with("https://")
    }
}

/// Local viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,

    /// Whether to open the browser automatically.
    pub open_browser: bool,

    /// URL prefix for image assets.
    pub asset_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            open_browser: true,
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
        }
    }
}

/// Chord diagram geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordConfig {
    /// Padding between adjacent arcs, in radians.
    pub pad_angle: f64,

    /// Upper bound of the square drawing area.
    pub base_size: f64,

    /// Extra room for labels outside the circle.
    pub label_offset: f64,

    /// Subtracted from half the base size to get the outer radius.
    pub radius_offset: f64,

    /// Arc band thickness.
    pub arc_thickness: f64,

    /// Gap between arcs and ribbons.
    pub ribbon_inset: f64,

    /// Label distance from the outer radius.
    pub label_gap: f64,
}

impl Default for ChordConfig {
    fn default() -> Self {
        Self {
            pad_angle: DEFAULT_PAD_ANGLE,
            base_size: DEFAULT_BASE_SIZE,
            label_offset: DEFAULT_LABEL_OFFSET,
            radius_offset: DEFAULT_RADIUS_OFFSET,
            arc_thickness: DEFAULT_ARC_THICKNESS,
            ribbon_inset: DEFAULT_RIBBON_INSET,
            label_gap: DEFAULT_LABEL_GAP,
        }
    }
}

impl ChordConfig {
    /// Outer radius of the arc band.
    pub fn outer_radius(&self) -> f64 {
        (self.base_size / 2.0 - self.radius_offset).max(0.0)
    }

    /// Inner radius of the arc band.
    pub fn inner_radius(&self) -> f64 {
        (self.outer_radius() - self.arc_thickness).max(0.0)
    }

    /// Radius the ribbons end at.
    pub fn ribbon_radius(&self) -> f64 {
        (self.inner_radius() - self.ribbon_inset).max(0.0)
    }

    /// Width and height of the drawing, labels included.
    pub fn canvas_size(&self) -> f64 {
        self.base_size + self.label_offset
    }
}

/// Detail view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailConfig {
    /// Relationships listed before collapsing the rest.
    pub top_relationships: usize,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            top_relationships: DEFAULT_TOP_RELATIONSHIPS,
        }
    }
}
