// SPDX-License-Identifier: PMPL-1.0-or-later
//! Low-contrast text indicators.
//!
//! Two independent pattern families are scanned in order:
//! - `class="..."` attributes carrying a muted utility class token
//! - `style="..."` attributes setting `color` to a hex or rgb(a) value
//!
//! Only the first [`MAX_CONTRAST_EXAMPLES`] matches are described, but every
//! match is counted. The risk level is derived from the full count, so a page
//! with more than five matches is `High` even though the example list stops
//! at five.

use super::rules::{CLASS_EXCERPT_CHARS, MAX_CONTRAST_EXAMPLES, MUTED_CLASS_TOKENS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static MUTED_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = MUTED_CLASS_TOKENS
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r#"(?i)class\s*=\s*"([^"]*?({alternatives})[^"]*)""#))
        .expect("valid regex")
});

// Text `color` only: the declaration must open the attribute or follow a `;`,
// which keeps `background-color` out.
static INLINE_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)style\s*=\s*"(?:[^"]*;)?\s*color\s*:\s*(#[0-9a-f]{3,6}|rgba?\([^)"]*\))"#)
        .expect("valid regex")
});

/// Heuristic estimate of low text/background contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastRisk {
    Low,
    Medium,
    High,
}

impl ContrastRisk {
    /// 0 matches is low, 1 to 5 medium, more than 5 high.
    pub fn from_match_count(count: usize) -> Self {
        if count > MAX_CONTRAST_EXAMPLES {
            ContrastRisk::High
        } else if count > 0 {
            ContrastRisk::Medium
        } else {
            ContrastRisk::Low
        }
    }
}

impl fmt::Display for ContrastRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContrastRisk::Low => write!(f, "low"),
            ContrastRisk::Medium => write!(f, "medium"),
            ContrastRisk::High => write!(f, "high"),
        }
    }
}

/// Result of a contrast scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContrastScan {
    /// Up to five human-readable descriptions, scan order.
    pub examples: Vec<String>,
    /// Total matches, not capped.
    pub match_count: usize,
}

impl ContrastScan {
    pub fn risk(&self) -> ContrastRisk {
        ContrastRisk::from_match_count(self.match_count)
    }

    fn record(&mut self, description: impl FnOnce() -> String) {
        self.match_count += 1;
        if self.examples.len() < MAX_CONTRAST_EXAMPLES {
            self.examples.push(description());
        }
    }
}

/// Scan raw markup for low-contrast indicators.
pub fn scan(markup: &str) -> ContrastScan {
    let mut scan = ContrastScan::default();

    for caps in MUTED_CLASS_RE.captures_iter(markup) {
        let class_value = &caps[1];
        let token = caps[2].to_lowercase();
        scan.record(|| {
            let excerpt: String = class_value.chars().take(CLASS_EXCERPT_CHARS).collect();
            format!("class: {token} (in \"{excerpt}...\")")
        });
    }

    for caps in INLINE_COLOR_RE.captures_iter(markup) {
        let value = &caps[1];
        scan.record(|| format!("color value: {value}"));
    }

    scan
}
