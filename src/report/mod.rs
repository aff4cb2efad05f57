// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report synthesis: signals to findings to report text.
//!
//! Supports two output formats:
//! - Text: the sales report, findings as numbered sections with evidence
//!   (`*`) and impact (`→`) bullets
//! - JSON: the assembled [`Report`] for programmatic consumption

pub mod findings;
pub mod ranking;

pub use findings::{build_findings, Finding, FindingKind, FindingOptions};
pub use ranking::RankingRow;

use crate::signals::{scoring::seo_label, SignalSet};
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sales report
    #[default]
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Everything needed to render a report for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub target: String,
    pub seo_label: String,
    pub signals: SignalSet,
    pub ranking: Vec<RankingRow>,
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// Assemble the structured report.
pub fn build_report(signals: &SignalSet, target_label: &str, options: FindingOptions) -> Report {
    let seo = signals.scores.seo;
    Report {
        target: target_label.to_string(),
        seo_label: seo_label(seo).to_string(),
        signals: signals.clone(),
        ranking: ranking::ranking_rows(&signals.main_keyword, seo),
        findings: build_findings(signals, options),
    }
}

/// Render the text report with every finding enabled.
pub fn synthesize(signals: &SignalSet, target_label: &str) -> String {
    let report = build_report(signals, target_label, FindingOptions::default());
    render_text(&report)
}

/// Render a report in the given format.
pub fn render(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report),
    }
}

fn render_json(report: &Report) -> String {
    serde_json::to_string_pretty(report)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize report: {}\"}}", e))
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let scores = &report.signals.scores;

    out.push_str(&format!("Your page ({})\n", report.target));
    out.push_str("has an SEO score of\n");
    out.push_str(&format!("{} / 100 ({})\n", scores.seo, report.seo_label));
    out.push_str(&format!("AI visibility: {} / 100\n", scores.ai_visibility));
    out.push_str(&format!("Accessibility: {} / 100\n\n", scores.accessibility));

    render_ranking(&mut out, report);
    out.push_str("\n\n");

    if report.has_findings() {
        out.push_str(&format!("Why {} scores poorly in search\n\n", report.target));
        out.push_str("The biggest problems\n");
        for (i, finding) in report.findings.iter().enumerate() {
            render_finding(&mut out, i + 1, finding);
        }
        out.push_str("\n\nWhat we found\n");
        out.push_str("This site has several weaknesses that affect:\n");
        out.push_str("* visibility in search\n");
        out.push_str("* user experience\n");
        out.push_str("* credibility\n");
        out.push_str("* conversions (how many actually get in touch)\n");
        out.push_str("* risk of breaching accessibility law (universal design requirements)\n\n");
    } else {
        out.push_str("Automated check\n");
        out.push_str(
            "No major issues were found by the automated check. \
             A manual review can still uncover improvements in content, speed and design.\n\n",
        );
    }

    out.push_str("How we can help\n");
    out.push_str("We deliver:\n");
    out.push_str("* Faster pages\n");
    out.push_str("* Better SEO\n");
    out.push_str("* Better accessibility (universal design)\n");
    out.push_str("* Structured data + AI optimisation\n");
    out.push_str("* Better conversion and a more professional presentation\n");

    out
}

fn render_ranking(out: &mut String, report: &Report) {
    let keyword = &report.signals.main_keyword;

    out.push_str(
        "Estimated search ranking for the site (based on the page content, not actual measurements)\n",
    );
    out.push_str(&format!(
        "{}.\n",
        ranking::visibility_summary(report.signals.scores.seo)
    ));
    out.push_str("Query\tExpected visibility\tWhy\n");
    for row in &report.ranking {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            row.query, row.expected_visibility, row.reason
        ));
    }
    out.push_str(&format!(
        "\nThe site probably ranks weaker than it could on industry searches such as \
         \"{keyword} in your area\", \"best {keyword}\" and \"{keyword} price\".\n"
    ));
}

fn render_finding(out: &mut String, ordinal: usize, finding: &Finding) {
    out.push_str(&format!("\n{}) {}\n", ordinal, finding.title));
    for bullet in &finding.evidence {
        out.push_str(&format!("* {}\n", bullet));
    }
    for impact in &finding.impacts {
        out.push_str(&format!("→ {}\n", impact));
    }
}
