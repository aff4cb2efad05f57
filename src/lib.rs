// SPDX-License-Identifier: PMPL-1.0-or-later
//! pitchbot: Single-page Weakness Reporter
//!
//! Fetches one web page and turns shallow markup heuristics into a
//! sales-oriented weakness report:
//!
//! - **Signals**: visible text volume, service headings, FAQ, JSON-LD
//!   structured data, low-contrast text styles, links and navigation
//! - **Scores**: SEO, AI visibility and accessibility, penalty based
//! - **Findings**: evidence and impact bullets in a fixed priority order
//!
//! The analysis core (`extract` + `synthesize`) is pure and never fails.
//! Fetching and writing the report live in [`fetch`] and [`sink`].

pub mod config;
pub mod error;
pub mod fetch;
pub mod report;
pub mod signals;
pub mod sink;

pub use config::Config;
pub use error::{PitchbotError, Result};
pub use fetch::Fetcher;
pub use report::{build_report, render, synthesize, Finding, FindingKind, OutputFormat, Report};
pub use signals::{extract, ContrastRisk, Scores, SignalSet};
pub use sink::write_report;
