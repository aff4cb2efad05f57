// SPDX-License-Identifier: PMPL-1.0-or-later
//! Estimated search visibility for a handful of queries built from the main
//! keyword. Nothing here queries a search engine; the rows are derived from
//! the SEO score alone.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRow {
    pub query: String,
    pub expected_visibility: String,
    pub reason: String,
}

fn expected_visibility(seo_score: u8) -> &'static str {
    if seo_score >= 80 {
        "moderate to good"
    } else if seo_score >= 50 {
        "moderate to weak"
    } else {
        "weak"
    }
}

/// One-line verdict on overall visibility.
pub fn visibility_summary(seo_score: u8) -> &'static str {
    if seo_score >= 80 {
        "Probably visible for many relevant searches"
    } else if seo_score >= 50 {
        "Probably visible for some searches, but losing to competitors"
    } else {
        "Probably weak visibility for important searches"
    }
}

pub fn ranking_rows(main_keyword: &str, seo_score: u8) -> Vec<RankingRow> {
    let visibility = expected_visibility(seo_score);
    let local_reason = if seo_score < 80 {
        "little explanatory content and missing structured data"
    } else {
        "still lacks clear expert depth compared with the leading competitors"
    };

    [
        (format!("{main_keyword} in your area"), local_reason),
        (
            format!("{main_keyword} price"),
            "no clear section answering price and what is included",
        ),
        (
            format!("best {main_keyword}"),
            "little content building expertise, reviews or customer stories",
        ),
    ]
    .into_iter()
    .map(|(query, reason)| RankingRow {
        query,
        expected_visibility: visibility.to_string(),
        reason: reason.to_string(),
    })
    .collect()
}
