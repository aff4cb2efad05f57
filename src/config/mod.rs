// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for pitchbot

use crate::error::{PitchbotError, Result};
use crate::report::{FindingOptions, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Redirect hops followed before giving up
    pub max_redirects: usize,
    /// Whole-request timeout
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Larger bodies are truncated before analysis
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_path: PathBuf,
    pub format: OutputFormat,
    /// Evaluate the navigation/structure finding
    pub include_navigation: bool,
    /// Evaluate the heavy-page finding
    pub include_page_weight: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_redirects: 5,
            timeout_secs: 15,
            user_agent: concat!("pitchbot/", env!("CARGO_PKG_VERSION")).to_string(),
            max_body_bytes: 5 * 1024 * 1024,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("SALES-REPORT.txt"),
            format: OutputFormat::Text,
            include_navigation: true,
            include_page_weight: true,
        }
    }
}

impl ReportConfig {
    pub fn finding_options(&self) -> FindingOptions {
        FindingOptions {
            include_navigation: self.include_navigation,
            include_page_weight: self.include_page_weight,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pitchbot")
        .join("config.yml")
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    if path.extension().and_then(|s| s.to_str()) == Some("toml") {
        toml::from_str(&content)
            .map_err(|e| PitchbotError::Config(format!("TOML parse error: {}", e)))
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| PitchbotError::Config(format!("YAML parse error: {}", e)))
    }
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
        toml::to_string_pretty(&config)
            .map_err(|e| PitchbotError::Config(format!("TOML serialize error: {}", e)))?
    } else {
        serde_yaml::to_string(&config)?
    };

    std::fs::write(path, content)?;
    Ok(())
}
