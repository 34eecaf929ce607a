//! Engine configuration loaded from TOML.
//!
//! Defaults are embedded via `include_str!`; hosts may parse their own
//! TOML with `parse_config_toml` and hand the result to the session.

use serde::Deserialize;

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub display: DisplayConfig,
    pub candidates: CandidateConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub reading_marker: String,
    pub candidate_marker: String,
    pub okuri_separator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateConfig {
    pub inline_cycle: usize,
    pub page_size: usize,
    pub selection_keys: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        parse_config_toml(DEFAULT_CONFIG_TOML).expect("embedded default config must be valid")
    }
}

pub fn parse_config_toml(toml_str: &str) -> Result<EngineConfig, ConfigError> {
    let config: EngineConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(c: &EngineConfig) -> Result<(), ConfigError> {
    if c.display.reading_marker.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "display.reading_marker",
            reason: "must not be empty",
        });
    }
    if c.display.candidate_marker.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "display.candidate_marker",
            reason: "must not be empty",
        });
    }
    if c.candidates.inline_cycle == 0 {
        return Err(ConfigError::InvalidValue {
            field: "candidates.inline_cycle",
            reason: "must be positive",
        });
    }
    if c.candidates.page_size == 0 {
        return Err(ConfigError::InvalidValue {
            field: "candidates.page_size",
            reason: "must be positive",
        });
    }
    if c.candidates.page_size > c.candidates.selection_keys.chars().count() {
        return Err(ConfigError::InvalidValue {
            field: "candidates.page_size",
            reason: "must not exceed the number of selection keys",
        });
    }
    Ok(())
}
