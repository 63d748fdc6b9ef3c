use anyhow::{anyhow, Context, Result};
use chrono::format::{Item, StrftimeItems};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::exam::model::ClinicProfile;
use crate::language_utils::ReportLanguage;
use crate::report::compiler::DEFAULT_DATE_FORMAT;
use crate::report::layout::LayoutConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Default report language code ("pt" or "en")
    #[serde(default = "default_report_language")]
    pub report_language: String,

    /// chrono strftime pattern for exam dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Clinic identity printed in every report header
    #[serde(default = "default_clinic")]
    pub clinic: ClinicProfile,

    /// Page and image grid geometry
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
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
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_report_language() -> String {
    ReportLanguage::default().code().to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_clinic() -> ClinicProfile {
    ClinicProfile {
        name: "TVUSVET Laudos".to_string(),
        ..ClinicProfile::default()
    }
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        ReportLanguage::parse(&self.report_language)?;

        if self.date_format.trim().is_empty() {
            return Err(anyhow!("Date format must not be empty"));
        }
        if StrftimeItems::new(&self.date_format).any(|item| item == Item::Error) {
            return Err(anyhow!("Invalid date format: '{}'", self.date_format));
        }

        let layout = &self.layout;
        if layout.images_per_page == 0 {
            return Err(anyhow!("layout.images_per_page must be at least 1"));
        }
        if layout.grid_columns == 0 || layout.grid_columns > layout.images_per_page {
            return Err(anyhow!(
                "layout.grid_columns must be between 1 and images_per_page ({})",
                layout.images_per_page
            ));
        }
        if layout.letterhead_width == 0
            || layout.letterhead_height == 0
            || layout.image_width == 0
            || layout.image_height == 0
        {
            return Err(anyhow!("Image boxes in layout must have non-zero width and height"));
        }

        Ok(())
    }

    /// The configured report language, parsed.
    pub fn language(&self) -> Result<ReportLanguage> {
        Ok(ReportLanguage::parse(&self.report_language)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;
        Ok(())
    }

    /// Load the file at `path`, or write and return the defaults when it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            report_language: default_report_language(),
            date_format: default_date_format(),
            clinic: default_clinic(),
            layout: LayoutConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
