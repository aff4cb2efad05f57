// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for the analysis engine

use pitchbot::report::{build_report, FindingOptions};
use pitchbot::{extract, synthesize, ContrastRisk, FindingKind, SignalSet};

const TARGET: &str = "https://acme.example";

/// A page that should trip none of the heuristics
fn well_formed_page() -> String {
    let paragraph = "<p>We repair leaking pipes, install bathrooms and service heating systems across the city. \
        Every job comes with a written quote and a five year guarantee on labour.</p>\n";
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <title>Acme Plumbing</title>
  <script type="application/ld+json">{{"@context":"https://schema.org","@type":"Plumber","name":"Acme"}}</script>
  <style>body {{ color: #111; }}</style>
</head>
<body>
  <nav>
    <a href="/">Home</a><a href="/services">Services</a><a href="/prices">Prices</a>
    <a href="/about">About</a><a href="/contact">Contact</a>
  </nav>
  <h1>Acme Plumbing</h1>
  <h2>Our services</h2>
  {body}
  <h2>FAQ</h2>
  <details><summary>Do you work weekends?</summary>Yes.</details>
</body>
</html>"#,
        body = paragraph.repeat(25)
    )
}

fn kinds(markup: &str) -> Vec<FindingKind> {
    let signals = extract(markup, TARGET);
    build_report(&signals, TARGET, FindingOptions::default())
        .findings
        .iter()
        .map(|f| f.kind)
        .collect()
}

#[test]
fn test_well_formed_page_has_no_findings() {
    let page = well_formed_page();
    let signals = extract(&page, TARGET);

    assert!(signals.has_structured_data);
    assert!(signals.has_service_language);
    assert!(signals.has_faq_section);
    assert!(signals.has_nav_landmark);
    assert_eq!(signals.link_count, 5);
    assert!(signals.visible_text_length >= 3000);
    assert!(signals.visible_text_length <= 8000);
    assert_eq!(signals.contrast_risk, ContrastRisk::Low);
    assert_eq!(signals.scores.seo, 100);
    assert_eq!(signals.scores.ai_visibility, 70);
    assert_eq!(signals.scores.accessibility, 75);

    let text = synthesize(&signals, TARGET);
    assert!(text.contains("No major issues were found by the automated check"));
}

#[test]
fn test_example_scenario() {
    let markup = "<title>Acme Plumbing</title><h1>Acme Plumbing</h1><p>short</p>";
    let signals = extract(markup, TARGET);

    assert!(!signals.has_service_language);
    assert!(!signals.has_structured_data);
    assert_eq!(signals.visible_text_length, "Acme Plumbing Acme Plumbing short".len());
    assert_eq!(signals.scores.seo, 40);
    assert_eq!(signals.main_keyword, "Acme Plumbing");

    let text = synthesize(&signals, TARGET);
    assert!(text.contains("1) Weak discoverability"));
    assert!(text.contains(&format!(
        "about {} characters of visible text",
        signals.visible_text_length
    )));
}

#[test]
fn test_empty_markup_still_produces_full_report() {
    let signals = extract("", TARGET);

    assert_eq!(signals.visible_text_length, 0);
    assert!(!signals.has_service_language);
    assert!(!signals.has_faq_section);
    assert!(!signals.has_structured_data);
    assert_eq!(signals.link_count, 0);
    assert_eq!(signals.main_keyword, "acme.example");
    assert_eq!(signals.scores.seo, 40);
    assert_eq!(signals.scores.ai_visibility, 30);
    assert_eq!(signals.scores.accessibility, 65);

    let text = synthesize(&signals, TARGET);
    assert!(!text.is_empty());
    assert!(!text.contains("No major issues"));
    assert!(text.contains("1) Weak discoverability"));
    assert!(text.contains("What we found"));

    assert_eq!(
        kinds(""),
        vec![
            FindingKind::WeakDiscoverability,
            FindingKind::ThinContent,
            FindingKind::LowAiVisibility,
            FindingKind::NavigationClarity,
        ]
    );
}

#[test]
fn test_report_is_deterministic() {
    let page = format!(
        "{}<p class=\"text-gray-300\">faded</p><p style=\"color: rgb(200,200,200)\">x</p>",
        well_formed_page()
    );
    let first = synthesize(&extract(&page, TARGET), TARGET);
    let second = synthesize(&extract(&page, TARGET), TARGET);
    assert_eq!(first, second);
}

#[test]
fn test_contrast_cap_with_seven_class_matches() {
    let markup: String = [
        "text-gray-300",
        "text-gray-200",
        "text-gray-400",
        "text-slate-300",
        "text-muted",
        "text-muted small",
        "lead text-gray-400",
    ]
    .iter()
    .map(|class| format!("<p class=\"{class}\">Light text</p>"))
    .collect();

    let signals = extract(&markup, TARGET);
    assert_eq!(signals.contrast_risk_examples.len(), 5);
    assert_eq!(signals.contrast_match_count, 7);
    assert_eq!(signals.contrast_risk, ContrastRisk::High);
    assert_eq!(signals.scores.accessibility, 45);

    let text = synthesize(&signals, TARGET);
    assert!(text.contains("* Weak contrast"));
    assert!(text.contains("* - class: text-gray-300"));
    assert!(!text.contains("* - class: text-slate-300"));
}

#[test]
fn test_lone_json_ld_block_is_structured_data() {
    let markup = r#"<script type="application/ld+json">{"@context":"https://schema.org","@type":"LocalBusiness"}</script>"#;
    let signals = extract(markup, TARGET);
    assert!(signals.has_structured_data);
    assert_eq!(signals.visible_text_length, 0);
    assert_eq!(signals.scores.seo, 60);

    // Still weak on text volume, but never on structured data.
    let text = synthesize(&signals, TARGET);
    assert!(text.contains("about 0 characters of visible text"));
    assert!(!text.contains("Missing structured data"));
    assert!(!text.contains("No structured data"));
}

fn signals_with_length(len: usize) -> SignalSet {
    let page = format!("<p>{}</p>", "a".repeat(len));
    extract(&page, TARGET)
}

#[test]
fn test_scores_monotonic_in_text_length() {
    let lengths = [0, 1499, 1500, 2999, 3000, 8001];
    let scores: Vec<_> = lengths
        .iter()
        .map(|&len| {
            let s = signals_with_length(len);
            assert_eq!(s.visible_text_length, len);
            s.scores
        })
        .collect();

    for pair in scores.windows(2) {
        assert!(pair[1].seo >= pair[0].seo);
        assert!(pair[1].ai_visibility >= pair[0].ai_visibility);
        assert!(pair[1].accessibility >= pair[0].accessibility);
    }
}

#[test]
fn test_scores_always_clamped() {
    let pages = [
        String::new(),
        well_formed_page(),
        "<p class=\"text-muted\">a</p>".repeat(50),
        "<<<>>><h1><h2></h3>".to_string(),
    ];
    for page in &pages {
        let s = extract(page, TARGET).scores;
        for score in [s.seo, s.ai_visibility, s.accessibility] {
            assert!(score <= 100);
        }
    }
}

#[test]
fn test_norwegian_page_signals() {
    let markup = "<h1>Rørlegger Hansen</h1><h2>Våre tjenester</h2>\
        <h2>Ofte stilte spørsmål</h2><p style=\"color:#999\">Ring oss</p>";
    let signals = extract(markup, "https://hansen.no/");
    assert!(signals.has_service_language);
    assert!(signals.has_faq_section);
    assert_eq!(signals.contrast_risk, ContrastRisk::Medium);
    assert_eq!(signals.contrast_risk_examples, vec!["color value: #999"]);
    assert_eq!(signals.main_keyword, "Rørlegger Hansen");
}

#[test]
fn test_optional_findings_follow_options() {
    let signals = extract("<p>short</p>", TARGET);
    let without_nav = build_report(
        &signals,
        TARGET,
        FindingOptions {
            include_navigation: false,
            include_page_weight: true,
        },
    );
    assert!(without_nav
        .findings
        .iter()
        .all(|f| f.kind != FindingKind::NavigationClarity));
}
