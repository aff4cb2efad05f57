// SPDX-License-Identifier: PMPL-1.0-or-later
//! Signal extraction from raw page markup.
//!
//! The extractor never builds a DOM. It pattern-matches tag fragments with a
//! fixed set of regexes, which is enough for the heuristic signals and keeps
//! it tolerant of unterminated or unbalanced markup: a pattern that does not
//! match simply yields `false`, `0` or an empty list.

pub mod contrast;
pub mod rules;
pub mod scoring;

pub use contrast::ContrastRisk;
pub use scoring::Scores;

use regex::Regex;
use rules::{FALLBACK_KEYWORD, FAQ_KEYWORDS, SERVICE_KEYWORDS};
use scoring::ScoreInputs;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script.*?</script>").expect("valid regex"));
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style.*?</style>").expect("valid regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h[1-3][^>]*>(.*?)</h[1-3]>").expect("valid regex"));
static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("valid regex"));
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid regex"));
static DETAILS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<details[^>]*>.*?<summary[^>]*>").expect("valid regex"));
static JSON_LD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)type\s*=\s*['"]application/ld\+json['"]"#).expect("valid regex")
});
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<a\s+[^>]*href=").expect("valid regex"));
static NAV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<nav\b[^>]*>").expect("valid regex"));
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid regex"));

/// Everything the report is built from. Computed once per page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    /// Characters of visible text after removing scripts, styles and tags
    pub visible_text_length: usize,
    /// An h1-h3 heading names services or offerings
    pub has_service_language: bool,
    /// FAQ wording or a `<details>`/`<summary>` disclosure widget
    pub has_faq_section: bool,
    /// A JSON-LD block is declared
    pub has_structured_data: bool,
    /// Up to five low-contrast examples, scan order
    pub contrast_risk_examples: Vec<String>,
    /// All low-contrast matches, including those past the example cap
    pub contrast_match_count: usize,
    pub contrast_risk: ContrastRisk,
    pub link_count: usize,
    pub has_nav_landmark: bool,
    /// Display label for the page subject
    pub main_keyword: String,
    pub scores: Scores,
}

/// Extract the signal set for `markup` fetched from `target_label`.
pub fn extract(markup: &str, target_label: &str) -> SignalSet {
    let without_noise = strip_noise(markup);
    let lowered = without_noise.to_lowercase();

    let visible_text_length = collapse_text(&without_noise).chars().count();

    let headings = heading_text(&without_noise);
    let has_service_language = rules::first_match(SERVICE_KEYWORDS, &headings).is_some();

    let has_faq_section =
        rules::first_match(FAQ_KEYWORDS, &lowered).is_some() || DETAILS_RE.is_match(&without_noise);

    // JSON-LD lives in a <script> block, so test the markup before noise removal.
    let has_structured_data = JSON_LD_RE.is_match(markup);

    let contrast = contrast::scan(markup);
    let contrast_risk = contrast.risk();

    let link_count = LINK_RE.find_iter(&without_noise).count();
    let has_nav_landmark = NAV_RE.is_match(&without_noise);

    let main_keyword = guess_main_keyword(markup, target_label);

    let scores = Scores::compute(&ScoreInputs {
        visible_text_length,
        has_service_language,
        has_faq_section,
        has_structured_data,
        contrast_risk,
    });

    debug!(
        visible_text_length,
        has_service_language,
        has_faq_section,
        has_structured_data,
        contrast_matches = contrast.match_count,
        link_count,
        "signals extracted"
    );

    SignalSet {
        visible_text_length,
        has_service_language,
        has_faq_section,
        has_structured_data,
        contrast_risk_examples: contrast.examples,
        contrast_match_count: contrast.match_count,
        contrast_risk,
        link_count,
        has_nav_landmark,
        main_keyword,
        scores,
    }
}

/// Remove `<script>` and `<style>` regions.
pub fn strip_noise(markup: &str) -> String {
    let no_scripts = SCRIPT_RE.replace_all(markup, "");
    STYLE_RE.replace_all(&no_scripts, "").into_owned()
}

/// Replace tags with spaces, collapse whitespace and trim.
fn collapse_text(fragment: &str) -> String {
    let no_tags = TAG_RE.replace_all(fragment, " ");
    WHITESPACE_RE.replace_all(&no_tags, " ").trim().to_string()
}

/// Lower-cased text of every h1-h3 heading, space separated.
fn heading_text(markup: &str) -> String {
    HEADING_RE
        .captures_iter(markup)
        .map(|caps| TAG_RE.replace_all(&caps[1], " ").into_owned())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Best-effort subject label: first h1, then `<title>`, then the host part of
/// the target. Keeps the first two words longer than two characters.
pub fn guess_main_keyword(markup: &str, target_label: &str) -> String {
    let first_capture = |re: &Regex| {
        re.captures(markup)
            .map(|caps| caps[1].to_string())
            .filter(|text| !text.is_empty())
    };

    let source = first_capture(&*H1_RE)
        .or_else(|| first_capture(&*TITLE_RE))
        .unwrap_or_else(|| host_part(target_label).to_string());

    let cleaned = collapse_text(&source);
    let words: Vec<&str> = cleaned
        .split(' ')
        .filter(|w| w.chars().count() > 2)
        .take(2)
        .collect();

    if words.is_empty() {
        FALLBACK_KEYWORD.to_string()
    } else {
        words.join(" ")
    }
}

fn host_part(target_label: &str) -> &str {
    let without_scheme = match SCHEME_RE.find(target_label) {
        Some(m) => &target_label[m.end()..],
        None => target_label,
    };
    without_scheme.split('/').next().unwrap_or_default()
}
