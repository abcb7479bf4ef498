//! Configuration loading and management
//!
//! Handles parsing of `.taskgrid.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::axis;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the CSV data source
    #[serde(default = "default_source")]
    pub source: String,

    /// Year range of the grid
    #[serde(default)]
    pub range: RangeConfig,

    /// Display labels
    #[serde(default)]
    pub labels: LabelsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            range: RangeConfig::default(),
            labels: LabelsConfig::default(),
        }
    }
}

fn default_source() -> String {
    "data.csv".to_string()
}

/// Inclusive year range for the month axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    #[serde(default = "default_end_year")]
    pub end_year: i32,
}

fn default_start_year() -> i32 {
    2026
}

fn default_end_year() -> i32 {
    2027
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
        }
    }
}

/// Label configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// Month labels, indexed 1-12
    #[serde(default = "default_months")]
    pub months: Vec<String>,

    /// Placeholder shown for empty status/comment values
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_months() -> Vec<String> {
    axis::MONTH_LABELS.iter().map(|s| s.to_string()).collect()
}

fn default_placeholder() -> String {
    "\u{2014}".to_string()
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            months: default_months(),
            placeholder: default_placeholder(),
        }
    }
}

impl LabelsConfig {
    /// The month table as the fixed-size array the axis builder expects.
    pub fn month_table(&self) -> [String; 12] {
        let mut table = axis::default_labels();
        for (slot, label) in table.iter_mut().zip(self.months.iter()) {
            *slot = label.clone();
        }
        table
    }
}

impl Config {
    /// Load configuration from a `.taskgrid.toml` file
    pub fn load(path: &PathBuf) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(".taskgrid.toml");
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &PathBuf) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.source.trim().is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "source cannot be empty".to_string(),
            ));
        }
        if self.range.start_year > self.range.end_year {
            return Err(crate::error::Error::InvalidConfig(format!(
                "range.start_year {} is after range.end_year {}",
                self.range.start_year, self.range.end_year
            )));
        }
        if self.labels.months.len() != 12 {
            return Err(crate::error::Error::InvalidConfig(format!(
                "labels.months must have 12 entries, got {}",
                self.labels.months.len()
            )));
        }
        for label in &self.labels.months {
            if label.trim().is_empty() {
                return Err(crate::error::Error::InvalidConfig(
                    "labels.months cannot include empty entries".to_string(),
                ));
            }
        }
        Ok(())
    }
}
