// SPDX-License-Identifier: PMPL-1.0-or-later
//! Finding construction.
//!
//! Each builder collects evidence bullets from the signal set. A finding is
//! only emitted when at least one evidence bullet was collected, and the
//! builders run in a fixed priority order.

use crate::signals::{ContrastRisk, SignalSet};
use serde::{Deserialize, Serialize};

/// Visible text below this weakens discoverability.
pub const DISCOVERABILITY_TEXT_THRESHOLD: usize = 3000;

/// Visible text below this is too little for a page to explain itself.
pub const EXPLAINS_ITSELF_THRESHOLD: usize = 2000;

/// Fewer links than this suggests thin navigation.
pub const MIN_NAV_LINKS: usize = 5;

/// Visible text above this indicates a page that may be heavy on mobile.
pub const HEAVY_PAGE_THRESHOLD: usize = 8000;

/// Contrast examples quoted in the accessibility finding.
const QUOTED_CONTRAST_EXAMPLES: usize = 3;

/// Stable identifier for each finding, independent of its copy text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    WeakDiscoverability,
    AccessibilityRisk,
    ThinContent,
    LowAiVisibility,
    NavigationClarity,
    HeavyPage,
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub title: String,
    pub evidence: Vec<String>,
    pub impacts: Vec<String>,
}

impl Finding {
    /// Returns `None` when there is no evidence.
    fn from_evidence(
        kind: FindingKind,
        title: &str,
        evidence: Vec<String>,
        impacts: &[&str],
    ) -> Option<Self> {
        if evidence.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            title: title.to_string(),
            evidence,
            impacts: impacts.iter().map(|s| s.to_string()).collect(),
        })
    }
}

/// Which optional findings to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindingOptions {
    pub include_navigation: bool,
    pub include_page_weight: bool,
}

impl Default for FindingOptions {
    fn default() -> Self {
        Self {
            include_navigation: true,
            include_page_weight: true,
        }
    }
}

/// Build all triggered findings in priority order.
pub fn build_findings(signals: &SignalSet, options: FindingOptions) -> Vec<Finding> {
    let mut findings = vec![
        weak_discoverability(signals),
        accessibility_risk(signals),
        thin_content(signals),
        low_ai_visibility(signals),
    ];
    if options.include_navigation {
        findings.push(navigation_clarity(signals));
    }
    if options.include_page_weight {
        findings.push(heavy_page(signals));
    }
    findings.into_iter().flatten().collect()
}

fn weak_discoverability(s: &SignalSet) -> Option<Finding> {
    let mut evidence = Vec::new();
    if !s.has_structured_data {
        evidence.push("Missing structured data (schema.org JSON-LD).".to_string());
    }
    if s.visible_text_length < DISCOVERABILITY_TEXT_THRESHOLD {
        evidence.push(format!(
            "Little explanatory text (about {} characters of visible text).",
            s.visible_text_length
        ));
    }
    if !s.has_service_language {
        evidence.push(
            "Few clear service headings matching the search terms customers use.".to_string(),
        );
    }
    Finding::from_evidence(
        FindingKind::WeakDiscoverability,
        "Weak discoverability - search engines do not understand the content",
        evidence,
        &[
            "Lower visibility in search for important industry queries.",
            "Customers are less likely to find you when searching for what you actually offer.",
        ],
    )
}

fn accessibility_risk(s: &SignalSet) -> Option<Finding> {
    let mut evidence = Vec::new();
    match s.contrast_risk {
        ContrastRisk::High => evidence.push(
            "Weak contrast: many light or faded text styles that can be hard to read.".to_string(),
        ),
        ContrastRisk::Medium => evidence
            .push("Some risk of weak contrast, with several light text styles.".to_string()),
        ContrastRisk::Low => {}
    }
    if !s.contrast_risk_examples.is_empty() {
        evidence.push("Examples of potentially problematic text styles:".to_string());
        evidence.extend(
            s.contrast_risk_examples
                .iter()
                .take(QUOTED_CONTRAST_EXAMPLES)
                .map(|ex| format!("- {ex}")),
        );
    }
    Finding::from_evidence(
        FindingKind::AccessibilityRisk,
        "Accessibility requirements at risk - indications",
        evidence,
        &[
            "Some users will have trouble reading the content.",
            "Risk of complaints or orders from regulators, and a less professional impression.",
        ],
    )
}

fn thin_content(s: &SignalSet) -> Option<Finding> {
    let mut evidence = Vec::new();
    if s.visible_text_length < EXPLAINS_ITSELF_THRESHOLD {
        evidence.push(
            "Little overall content explaining who you are, what you do and why customers should choose you."
                .to_string(),
        );
    }
    if !s.has_service_language {
        evidence.push("No clear sections highlighting the most important services.".to_string());
    }
    if s.contrast_risk >= ContrastRisk::Medium {
        evidence.push("Readability suffers from weak contrast in places.".to_string());
    }
    Finding::from_evidence(
        FindingKind::ThinContent,
        "Customers miss important content",
        evidence,
        &[
            "Lost selling points - your key messages do not come across clearly.",
            "Fewer people get in touch than would with clearer, more readable content.",
        ],
    )
}

fn low_ai_visibility(s: &SignalSet) -> Option<Finding> {
    let mut evidence = Vec::new();
    if !s.has_faq_section {
        evidence.push(
            "No FAQ or clear question/answer section that AI answers can draw on.".to_string(),
        );
    }
    if !s.has_structured_data {
        evidence.push(
            "No structured data that makes it easy for AI services to understand who you are and what you offer."
                .to_string(),
        );
    }
    Finding::from_evidence(
        FindingKind::LowAiVisibility,
        "No FAQ or answer-engine optimisation (AEO)",
        evidence,
        &[
            "The site rarely shows up in AI-generated answers (ChatGPT, Bing, Google AI).",
            "Competitors with FAQ and structured data get ahead in new search channels.",
        ],
    )
}

fn navigation_clarity(s: &SignalSet) -> Option<Finding> {
    let mut evidence = Vec::new();
    if !s.has_nav_landmark {
        evidence.push("No navigation landmark (<nav>) found on the page.".to_string());
    }
    if s.link_count < MIN_NAV_LINKS {
        evidence.push(format!(
            "Only {} link(s) found, which makes it hard to move on from this page.",
            s.link_count
        ));
    }
    Finding::from_evidence(
        FindingKind::NavigationClarity,
        "Unclear navigation and structure",
        evidence,
        &[
            "Visitors struggle to find the next step and leave instead.",
            "Search engines find fewer pages to index from this one.",
        ],
    )
}

fn heavy_page(s: &SignalSet) -> Option<Finding> {
    let mut evidence = Vec::new();
    if s.visible_text_length > HEAVY_PAGE_THRESHOLD {
        evidence.push(
            "A lot of content is loaded on a single page, which can make it heavy on mobile."
                .to_string(),
        );
    }
    Finding::from_evidence(
        FindingKind::HeavyPage,
        "Slow page - heavy to load (indication)",
        evidence,
        &[
            "Customers lose patience when a page feels slow, especially on mobile.",
            "Search engines favour fast pages, so slowness can mean fewer clicks and enquiries.",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::Scores;

    fn signals() -> SignalSet {
        SignalSet {
            visible_text_length: 4000,
            has_service_language: true,
            has_faq_section: true,
            has_structured_data: true,
            contrast_risk_examples: Vec::new(),
            contrast_match_count: 0,
            contrast_risk: ContrastRisk::Low,
            link_count: 20,
            has_nav_landmark: true,
            main_keyword: "Acme Plumbing".to_string(),
            scores: Scores { seo: 100, ai_visibility: 70, accessibility: 75 },
        }
    }

    fn kinds(findings: &[Finding]) -> Vec<FindingKind> {
        findings.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_healthy_page_has_no_findings() {
        assert!(build_findings(&signals(), FindingOptions::default()).is_empty());
    }

    #[test]
    fn test_priority_order() {
        let s = SignalSet {
            visible_text_length: 10,
            has_service_language: false,
            has_faq_section: false,
            has_structured_data: false,
            contrast_risk_examples: vec!["class: text-muted (in \"text-muted...\")".to_string()],
            contrast_match_count: 1,
            contrast_risk: ContrastRisk::Medium,
            link_count: 0,
            has_nav_landmark: false,
            ..signals()
        };
        assert_eq!(
            kinds(&build_findings(&s, FindingOptions::default())),
            vec![
                FindingKind::WeakDiscoverability,
                FindingKind::AccessibilityRisk,
                FindingKind::ThinContent,
                FindingKind::LowAiVisibility,
                FindingKind::NavigationClarity,
            ]
        );
    }

    #[test]
    fn test_discoverability_reports_exact_count() {
        let s = SignalSet { visible_text_length: 2500, ..signals() };
        let findings = build_findings(&s, FindingOptions::default());
        assert_eq!(kinds(&findings), vec![FindingKind::WeakDiscoverability]);
        assert_eq!(findings[0].evidence.len(), 1);
        assert!(findings[0].evidence[0].contains("2500 characters"));
    }

    #[test]
    fn test_accessibility_quotes_at_most_three_examples() {
        let examples: Vec<String> = (0..5).map(|i| format!("color value: #{i}{i}{i}")).collect();
        let s = SignalSet {
            contrast_risk_examples: examples,
            contrast_match_count: 9,
            contrast_risk: ContrastRisk::High,
            ..signals()
        };
        let finding = accessibility_risk(&s).unwrap();
        assert!(finding.evidence[0].starts_with("Weak contrast"));
        assert_eq!(finding.evidence.len(), 2 + QUOTED_CONTRAST_EXAMPLES);
        assert_eq!(finding.evidence[2], "- color value: #000");
        assert_eq!(finding.evidence[4], "- color value: #222");
    }

    #[test]
    fn test_contrast_compounds_thin_content() {
        let s = SignalSet {
            contrast_risk: ContrastRisk::High,
            contrast_match_count: 6,
            ..signals()
        };
        let finding = thin_content(&s).unwrap();
        assert_eq!(finding.evidence, vec!["Readability suffers from weak contrast in places."]);
    }

    #[test]
    fn test_optional_findings_can_be_disabled() {
        let s = SignalSet {
            link_count: 1,
            has_nav_landmark: false,
            visible_text_length: 9000,
            ..signals()
        };
        let all = build_findings(&s, FindingOptions::default());
        assert_eq!(kinds(&all), vec![FindingKind::NavigationClarity, FindingKind::HeavyPage]);

        let none = build_findings(
            &s,
            FindingOptions { include_navigation: false, include_page_weight: false },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_every_finding_has_evidence_and_impacts() {
        let s = SignalSet {
            visible_text_length: 0,
            has_service_language: false,
            has_faq_section: false,
            has_structured_data: false,
            link_count: 0,
            has_nav_landmark: false,
            ..signals()
        };
        for finding in build_findings(&s, FindingOptions::default()) {
            assert!(!finding.evidence.is_empty(), "{:?} has no evidence", finding.kind);
            assert!(!finding.impacts.is_empty());
        }
    }
}
