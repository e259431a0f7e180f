use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// HTML files the restyle passes are applied to, in order
    #[serde(default = "default_targets")]
    pub targets: Vec<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(anyhow!("At least one target file is required"));
        }

        for target in &self.targets {
            if target.file_name().is_none() {
                return Err(anyhow!("Target is not a file path: {:?}", target));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            targets: default_targets(),
            log_level: LogLevel::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

// The two agenda pages the original pair of passes was written for.
fn default_targets() -> Vec<PathBuf> {
    vec![PathBuf::from("dia1.html"), PathBuf::from("dia2.html")]
}
