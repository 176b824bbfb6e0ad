//! TOML-based application configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::load::WorkshopTotals;

/// Top-level configuration parsed from TOML.
///
/// All fields have defaults matching the reference workshop. Load from
/// TOML with [`AppConfig::from_toml_file`] or use [`AppConfig::baseline`]
/// for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Whole-workshop survey totals for the busbar calculation.
    #[serde(default)]
    pub workshop: WorkshopTotals,
    /// HTTP server parameters.
    #[serde(default)]
    pub server: ServerConfig,
    /// Log filter defaults.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind: String,
    /// Port to listen on (must be > 0).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Log filter defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl AppConfig {
    /// Returns the reference configuration.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Reference survey, with the API listening on every interface so the
    /// shop network can reach it.
    pub fn lan() -> Self {
        let mut cfg = Self::baseline();
        cfg.server.bind = "0.0.0.0".to_string();
        cfg
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["reference", "lan"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "reference" => Ok(Self::baseline()),
            "lan" => Ok(Self::lan()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = validate_workshop_totals(&self.workshop, "workshop");

        if self.server.port == 0 {
            errors.push(ConfigError::new("server.port", "must be > 0"));
        }
        if self.server.bind.trim().is_empty() {
            errors.push(ConfigError::new("server.bind", "must not be empty"));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigError::new(
                "logging.level",
                format!(
                    "must be one of {}, got \"{}\"",
                    LOG_LEVELS.join(", "),
                    self.logging.level
                ),
            ));
        }

        errors
    }
}

/// Checks injected workshop totals; `prefix` names the source in errors.
///
/// Totals must be finite; power and squared power must be positive, the
/// utilization and reactive sums non-negative.
pub fn validate_workshop_totals(totals: &WorkshopTotals, prefix: &str) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    let fields = [
        ("total_power", totals.total_power, true),
        ("total_utilization_power", totals.total_utilization_power, false),
        ("total_reactive_power", totals.total_reactive_power, false),
        ("total_squared_power", totals.total_squared_power, true),
    ];

    for (name, value, strictly_positive) in fields {
        let field = format!("{prefix}.{name}");
        if !value.is_finite() {
            errors.push(ConfigError::new(field, "must be finite"));
        } else if strictly_positive && value <= 0.0 {
            errors.push(ConfigError::new(field, "must be > 0"));
        } else if value < 0.0 {
            errors.push(ConfigError::new(field, "must be >= 0"));
        }
    }

    errors
}

/// Reads standalone whole-workshop totals from a TOML file and validates them.
///
/// The file holds the four totals as top-level keys, in the same form as the
/// `[workshop]` table of the main configuration.
///
/// # Errors
///
/// Returns the first `ConfigError` found while reading, parsing, or
/// validating the totals.
pub fn load_workshop_totals(path: &Path) -> Result<WorkshopTotals, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        ConfigError::new(
            "workshop_totals",
            format!("cannot read \"{}\": {e}", path.display()),
        )
    })?;
    let totals: WorkshopTotals = toml::from_str(&content)
        .map_err(|e| ConfigError::new("workshop_totals", e.to_string()))?;

    match validate_workshop_totals(&totals, "workshop_totals")
        .into_iter()
        .next()
    {
        Some(err) => Err(err),
        None => Ok(totals),
    }
}
