// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for pitchbot
//!
//! Only the plumbing around the analysis engine can fail. `extract` and
//! `synthesize` are total and never produce these.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PitchbotError>;

#[derive(Error, Debug)]
pub enum PitchbotError {
    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),

    #[error("Too many redirects (limit {limit})")]
    TooManyRedirects { limit: usize },

    #[error("Target unreachable: {url} returned HTTP {status}")]
    Unreachable { url: String, status: u16 },

    #[error("Unsupported content type: {0}")]
    UnsupportedContent(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
