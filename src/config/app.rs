//! Main application configuration
//!
//! This module defines the top level configuration of the `ttlive` tool,
//! including environment variable overrides, TOML files and validation.

use crate::config::rating::RatingSettings;
use crate::error::{LeagueError, Result};
use crate::team_match::TeamMatchSystem;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogSettings,
    pub rating: RatingSettings,
    pub team_match: TeamMatchSettings,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

/// Team match settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMatchSettings {
    /// System used when none is given explicitly
    pub default_system: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for TeamMatchSettings {
    fn default() -> Self {
        Self {
            default_system: TeamMatchSystem::WERNER_SCHEFFLER.name().to_string(),
        }
    }
}

fn invalid(message: String) -> anyhow::Error {
    LeagueError::ConfigurationError { message }.into()
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let config = Self::load(None)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = Self::load(Some(path))?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text, missing keys take their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = Self::parse_toml(content)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Read the optional file and the environment without validating
    ///
    /// Callers that apply further overrides (e.g. command line flags) run
    /// [`validate_config`] once they are done.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::parse_toml(&content)?
            }
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| invalid(format!("Invalid TOML: {}", e)))
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(level) = env::var("TTLIVE_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Ok(constant) = env::var("TTLIVE_CHANGE_CONSTANT") {
            self.rating.change_constant = constant.parse().map_err(|_| {
                invalid(format!("Invalid TTLIVE_CHANGE_CONSTANT value: {}", constant))
            })?;
        }
        if let Ok(scale) = env::var("TTLIVE_RATING_SCALE") {
            self.rating.rating_scale = scale
                .parse()
                .map_err(|_| invalid(format!("Invalid TTLIVE_RATING_SCALE value: {}", scale)))?;
        }
        if let Ok(system) = env::var("TTLIVE_DEFAULT_SYSTEM") {
            self.team_match.default_system = system;
        }
        Ok(())
    }

    /// The configured default team match system
    pub fn default_system(&self) -> Result<&'static TeamMatchSystem> {
        TeamMatchSystem::by_name(&self.team_match.default_system)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.log.level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(invalid(format!("Invalid log level: {}", config.log.level))),
    }

    config.rating.validate()?;
    config.default_system()?;

    Ok(())
}
