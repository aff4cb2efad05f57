// SPDX-License-Identifier: PMPL-1.0-or-later
//! Fixed rule tables for signal extraction.
//!
//! Every keyword the extractor looks for lives here as a closed table, so the
//! rule set can be inspected and tested independently of the scanning code.
//!
//! | Table                | Signal                  | Matched against              |
//! |----------------------|-------------------------|------------------------------|
//! | `SERVICE_KEYWORDS`   | `has_service_language`  | lower-cased h1-h3 text       |
//! | `FAQ_KEYWORDS`       | `has_faq_section`       | lower-cased markup           |
//! | `MUTED_CLASS_TOKENS` | contrast examples       | `class="..."` attribute      |

use serde::{Deserialize, Serialize};

/// Audience language a keyword belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Norwegian,
    English,
}

/// A keyword and the audience language it targets. Keywords are lower-case.
#[derive(Debug, Clone, Copy)]
pub struct Keyword {
    pub text: &'static str,
    pub locale: Locale,
}

const fn kw(text: &'static str, locale: Locale) -> Keyword {
    Keyword { text, locale }
}

/// Heading words that say "this is what we offer".
pub const SERVICE_KEYWORDS: &[Keyword] = &[
    kw("tjenester", Locale::Norwegian),
    kw("produkter", Locale::Norwegian),
    kw("vi tilbyr", Locale::Norwegian),
    kw("våre tjenester", Locale::Norwegian),
    kw("services", Locale::English),
    kw("products", Locale::English),
    kw("what we offer", Locale::English),
    kw("we offer", Locale::English),
];

/// Phrases that indicate a question/answer section.
pub const FAQ_KEYWORDS: &[Keyword] = &[
    kw("faq", Locale::Norwegian),
    kw("ofte stilte spørsmål", Locale::Norwegian),
    kw("frequently asked questions", Locale::English),
];

/// Utility classes that render muted, light-gray text.
pub const MUTED_CLASS_TOKENS: &[&str] = &[
    "text-gray-300",
    "text-gray-200",
    "text-gray-400",
    "text-slate-300",
    "text-muted",
];

/// Maximum number of contrast examples kept for display.
pub const MAX_CONTRAST_EXAMPLES: usize = 5;

/// Characters of a class attribute quoted in a contrast example.
pub const CLASS_EXCERPT_CHARS: usize = 40;

/// Label used when no heading, title or host yields a usable keyword.
pub const FALLBACK_KEYWORD: &str = "your service";

/// Returns the first keyword of `table` contained in `haystack`.
///
/// `haystack` is expected to be lower-case already.
pub fn first_match<'a>(table: &'a [Keyword], haystack: &str) -> Option<&'a Keyword> {
    table.iter().find(|k| haystack.contains(k.text))
}

/// Keywords of `table` for a single locale.
pub fn keywords_for(table: &[Keyword], locale: Locale) -> impl Iterator<Item = &'static str> + '_ {
    table
        .iter()
        .filter(move |k| k.locale == locale)
        .map(|k| k.text)
}
