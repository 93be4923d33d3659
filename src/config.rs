//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the bca-config.toml file.
//! It provides a centralized way to configure the analysis mode and smoothing window,
//! the text report, and the synthetic decline used in demo runs.

use crate::{synthetic::SyntheticParams, AnalysisMode, DEFAULT_WINDOW_HALF_WIDTH};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "bca-config.toml";

/// Application configuration loaded from bca-config.toml
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Analysis mode and smoothing window
    pub analysis: AnalysisConfig,
    /// Text report layout
    pub report: ReportConfig,
    /// Synthetic decline for demo runs
    pub synthetic: SyntheticParams,
}

/// Before-closure analysis settings
#[derive(Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Time transform: "square_root_time" or "g_function"
    pub mode: AnalysisMode,
    /// Half-width of the derivative smoothing window, in samples
    pub window_half_width: usize,
}

/// Text report settings
#[derive(Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum number of table rows printed
    pub rows: usize,
    /// Decimal places for printed values
    pub precision: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            mode: AnalysisMode::GFunction,
            window_half_width: DEFAULT_WINDOW_HALF_WIDTH,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            rows: 20,
            precision: 4,
        }
    }
}

impl Config {
    /// Load configuration from bca-config.toml file
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Invalid config file format in {}: {}", path.display(), e);
                    warn!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                info!("No config file at {}, using default configuration", path.display());
                Self::default()
            }
        }
    }

    /// Save current configuration to the given path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }
}
