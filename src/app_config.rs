use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::errors::ConfigError;
use crate::reflow::engine::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, MAX_LENGTH_LIMIT};
use crate::reflow::ReflowLimits;
use crate::text_processor::PreviewLimits;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Line-length bounds
    #[serde(default)]
    pub reflow: ReflowConfig,

    /// Interactive preview bounds
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Batch processing settings
    #[serde(default)]
    pub batch: BatchConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Line-length bounds used when reformatting
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReflowConfig {
    /// Units at or below this many characters get merged
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Units above this many characters get split
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

impl ReflowConfig {
    // @returns: Engine limits for these bounds
    pub fn limits(&self) -> ReflowLimits {
        ReflowLimits::new(self.min_length, self.max_length)
    }
}

/// Preview configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PreviewConfig {
    // @field: Characters of input looked at
    #[serde(default = "default_preview_input_chars")]
    pub max_input_chars: usize,

    // @field: Parsed units looked at
    #[serde(default = "default_preview_units")]
    pub max_units: usize,

    // @field: Output lines shown
    #[serde(default = "default_preview_lines")]
    pub max_lines: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_preview_input_chars(),
            max_units: default_preview_units(),
            max_lines: default_preview_lines(),
        }
    }
}

impl PreviewConfig {
    // @returns: Processor limits for these settings
    pub fn limits(&self) -> PreviewLimits {
        PreviewLimits {
            max_input_chars: self.max_input_chars,
            max_units: self.max_units,
            max_lines: self.max_lines,
        }
    }
}

/// Batch processing configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BatchConfig {
    /// Pause between two files, in milliseconds
    #[serde(default = "default_file_delay_ms")]
    pub file_delay_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            file_delay_ms: default_file_delay_ms(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
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

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_preview_input_chars() -> usize {
    5000
}

fn default_preview_units() -> usize {
    8
}

fn default_preview_lines() -> usize {
    5
}

fn default_file_delay_ms() -> u64 {
    50 // Short cosmetic pause so progress stays readable
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ReflowConfig { min_length, max_length } = self.reflow;
        if min_length < 1 || min_length > max_length || max_length > MAX_LENGTH_LIMIT {
            return Err(ConfigError::InvalidBounds {
                min: min_length,
                max: max_length,
                limit: MAX_LENGTH_LIMIT,
            });
        }

        if self.preview.max_input_chars == 0 {
            return Err(ConfigError::InvalidPreviewLimit("max_input_chars"));
        }
        if self.preview.max_units == 0 {
            return Err(ConfigError::InvalidPreviewLimit("max_units"));
        }
        if self.preview.max_lines == 0 {
            return Err(ConfigError::InvalidPreviewLimit("max_lines"));
        }

        Ok(())
    }

    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
