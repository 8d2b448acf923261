// Rust guideline compliant 2026-10-18

//! Configuration management for the approval queue.

use crate::{Error, Priority, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for approval queue behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Priority filter applied when `--priority` is not given. `None` shows all tiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_priority_filter: Option<Priority>,

    /// Reviewer name recorded with decisions when `--reviewer` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,

    /// Whether table output shows the priority legend and scheduling note.
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
}

fn default_show_legend() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            default_priority_filter: None,
            reviewer: None,
            show_legend: default_show_legend(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.approvals/config.toml`
    /// 3. Environment variables with `APPROVALS_` prefix
    ///
    /// # Arguments
    ///
    /// * `approvals_dir` - Path to the `.approvals` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(approvals_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = approvals_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        tracing::debug!(path = %config_path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `APPROVALS_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `APPROVALS_DEFAULT_PRIORITY_FILTER` - high/medium/normal, or all
    /// - `APPROVALS_REVIEWER` - Reviewer name
    /// - `APPROVALS_SHOW_LEGEND` - Show legend (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("APPROVALS_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "APPROVALS_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("APPROVALS_DEFAULT_PRIORITY_FILTER") {
            self.default_priority_filter = if val.eq_ignore_ascii_case("all") {
                None
            } else {
                Some(Priority::parse(&val).map_err(|_| {
                    Error::Config(
                        "APPROVALS_DEFAULT_PRIORITY_FILTER must be high, medium, normal, or all"
                            .to_string(),
                    )
                })?)
            };
        }

        if let Ok(val) = std::env::var("APPROVALS_REVIEWER") {
            self.reviewer = Some(val);
        }

        if let Ok(val) = std::env::var("APPROVALS_SHOW_LEGEND") {
            self.show_legend = val.parse().map_err(|_| {
                Error::Config("APPROVALS_SHOW_LEGEND must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the reviewer name is present but blank.
    fn validate(&self) -> Result<()> {
        if let Some(reviewer) = &self.reviewer {
            if reviewer.trim().is_empty() {
                return Err(Error::Config("reviewer cannot be blank".to_string()));
            }
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `approvals_dir` - Path to the `.approvals` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, approvals_dir: &Path) -> Result<()> {
        let config_path = approvals_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
