//! Serializable analysis configuration.
//!
//! Everything the report depends on is explicit: the SMA window, the
//! return kind, and the display-filter tunables. There is deliberately no
//! default return kind; the caller must pick simple or log, on the
//! command line or in the file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use trendsight_core::analytics::{DisplayOptions, ReturnKind};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Analysis configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub analysis: AnalysisSection,

    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisSection {
    /// Trailing window for the SMA column.
    pub sma_window: usize,

    /// Which return definition to compute; required here or on the
    /// command line.
    pub return_kind: Option<ReturnKind>,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            sma_window: 20,
            return_kind: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplaySection {
    pub max_count: usize,
    pub min_gap: usize,
    pub min_hold_days: usize,
}

impl Default for DisplaySection {
    fn default() -> Self {
        let defaults = DisplayOptions::default();
        Self {
            max_count: defaults.max_count,
            min_gap: defaults.min_gap,
            min_hold_days: defaults.min_hold_days,
        }
    }
}

impl AnalysisConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            max_count: self.display.max_count,
            min_gap: self.display.min_gap,
            min_hold_days: self.display.min_hold_days,
        }
    }
}
