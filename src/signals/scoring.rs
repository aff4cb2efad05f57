// SPDX-License-Identifier: PMPL-1.0-or-later
//! Penalty-based scores derived from extracted signals.
//!
//! | Score          | Baseline | Penalties                                                   |
//! |----------------|----------|-------------------------------------------------------------|
//! | SEO            | 100      | -20 no JSON-LD, -20 text < 1500, -20 no service headings    |
//! | AI visibility  | 70       | -20 no FAQ, -10 no JSON-LD, -10 text < 3000                 |
//! | Accessibility  | 75       | -20 contrast high, -10 contrast medium, -10 text < 1500     |

use super::contrast::ContrastRisk;
use serde::{Deserialize, Serialize};

/// Visible text below this is "very low" text volume.
pub const LOW_TEXT_THRESHOLD: usize = 1500;

/// Visible text below this is too little for answer engines to quote from.
pub const ANSWER_TEXT_THRESHOLD: usize = 3000;

const SEO_BASELINE: i32 = 100;
const AI_VISIBILITY_BASELINE: i32 = 70;
const ACCESSIBILITY_BASELINE: i32 = 75;

/// The inputs scoring depends on.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs {
    pub visible_text_length: usize,
    pub has_service_language: bool,
    pub has_faq_section: bool,
    pub has_structured_data: bool,
    pub contrast_risk: ContrastRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub seo: u8,
    pub ai_visibility: u8,
    pub accessibility: u8,
}

impl Scores {
    pub fn compute(inputs: &ScoreInputs) -> Self {
        Self {
            seo: seo_score(inputs),
            ai_visibility: ai_visibility_score(inputs),
            accessibility: accessibility_score(inputs),
        }
    }
}

fn seo_score(i: &ScoreInputs) -> u8 {
    let mut score = SEO_BASELINE;
    if !i.has_structured_data {
        score -= 20;
    }
    if i.visible_text_length < LOW_TEXT_THRESHOLD {
        score -= 20;
    }
    if !i.has_service_language {
        score -= 20;
    }
    clamp(score)
}

fn ai_visibility_score(i: &ScoreInputs) -> u8 {
    let mut score = AI_VISIBILITY_BASELINE;
    if !i.has_faq_section {
        score -= 20;
    }
    if !i.has_structured_data {
        score -= 10;
    }
    if i.visible_text_length < ANSWER_TEXT_THRESHOLD {
        score -= 10;
    }
    clamp(score)
}

fn accessibility_score(i: &ScoreInputs) -> u8 {
    let mut score = ACCESSIBILITY_BASELINE;
    match i.contrast_risk {
        ContrastRisk::High => score -= 20,
        ContrastRisk::Medium => score -= 10,
        ContrastRisk::Low => {}
    }
    if i.visible_text_length < LOW_TEXT_THRESHOLD {
        score -= 10;
    }
    clamp(score)
}

fn clamp(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

/// Qualitative label for an SEO score.
pub fn seo_label(score: u8) -> &'static str {
    if score >= 80 {
        "strong"
    } else if score >= 50 {
        "moderate"
    } else {
        "weak"
    }
}
