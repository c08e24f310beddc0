//! qrcrop runtime configuration handling

use crate::crop::{CropFractions, DEFAULT_BOTTOM, DEFAULT_LEFT, DEFAULT_RIGHT, DEFAULT_TOP};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Source photo used when nothing else is configured
pub const DEFAULT_INPUT_PATH: &str = "c:/fle/site/public/IMG_6328.jpg";
/// Destination used when nothing else is configured
pub const DEFAULT_OUTPUT_PATH: &str = "c:/fle/site/public/qrcode_extracted.jpg";

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QrCropConfig {
    /// Paths and crop geometry
    pub crop: CropOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl QrCropConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    ///
    /// Fractions are not validated here so that command-line overrides can be
    /// merged first; call [`QrCropConfig::validate`] once everything is applied.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No qrcrop.toml / qrcrop.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["qrcrop.toml", "qrcrop.yaml", "qrcrop.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("qrcrop");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        self.crop.apply_env_overrides();
        self.logging.apply_env_overrides();
    }

    /// Reject crop geometry that cannot describe a region.
    pub fn validate(&self) -> Result<()> {
        self.crop.fractions().validate()
    }
}

/// Input/output paths and crop fractions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CropOptions {
    /// Image to read
    pub input_path: PathBuf,
    /// Image to write; its extension selects the codec
    pub output_path: PathBuf,
    /// Left edge as a fraction of width
    pub left_fraction: f64,
    /// Top edge as a fraction of height
    pub top_fraction: f64,
    /// Right edge as a fraction of width
    pub right_fraction: f64,
    /// Bottom edge as a fraction of height
    pub bottom_fraction: f64,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            left_fraction: DEFAULT_LEFT,
            top_fraction: DEFAULT_TOP,
            right_fraction: DEFAULT_RIGHT,
            bottom_fraction: DEFAULT_BOTTOM,
        }
    }
}

impl CropOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(input) = env::var("QRCROP_INPUT") {
            self.input_path = PathBuf::from(input);
        }
        if let Ok(output) = env::var("QRCROP_OUTPUT") {
            self.output_path = PathBuf::from(output);
        }
        for (var, slot) in [
            ("QRCROP_LEFT", &mut self.left_fraction),
            ("QRCROP_TOP", &mut self.top_fraction),
            ("QRCROP_RIGHT", &mut self.right_fraction),
            ("QRCROP_BOTTOM", &mut self.bottom_fraction),
        ] {
            if let Ok(value) = env::var(var) {
                if let Ok(parsed) = value.trim().parse::<f64>() {
                    *slot = parsed;
                }
            }
        }
    }

    /// Crop fractions assembled from the individual options
    pub fn fractions(&self) -> CropFractions {
        CropFractions::new(
            self.left_fraction,
            self.top_fraction,
            self.right_fraction,
            self.bottom_fraction,
        )
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRCROP_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// ANSI colors in stderr logging (defaults to whether stderr is a terminal)
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            color: io::stderr().is_terminal(),
            rotation: None,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QRCROP_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("QRCROP_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("QRCROP_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("QRCROP_LOG_ROTATION") {
            if let Some(parsed) = LogRotation::from_str(&rotation) {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}
