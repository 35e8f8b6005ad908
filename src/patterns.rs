//! Direct pattern matching.
//!
//! Four phrase categories flag a message on their own. They are scanned in a
//! fixed order and the first category with any match wins; within that
//! category the first matching phrase, in lexicon order, is reported.

use crate::lexicon::{Category, LexiconSet};
use crate::normalize::{NormalizedMessage, TokenSpan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority-ordered pattern categories. Declaration order is scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternCategory {
    Critical,
    SupportFailure,
    Technical,
    NegativeLanguage,
}

impl PatternCategory {
    pub const SCAN_ORDER: [PatternCategory; 4] = [
        PatternCategory::Critical,
        PatternCategory::SupportFailure,
        PatternCategory::Technical,
        PatternCategory::NegativeLanguage,
    ];

    /// Reporting rank, 1 being the most severe. Never used to reorder the scan.
    pub fn priority(self) -> u8 {
        match self {
            PatternCategory::Critical => 1,
            PatternCategory::SupportFailure => 2,
            PatternCategory::Technical => 3,
            PatternCategory::NegativeLanguage => 4,
        }
    }

    /// Lexicon backing this category.
    pub fn lexicon(self) -> Category {
        match self {
            PatternCategory::Critical => Category::Critical,
            PatternCategory::SupportFailure => Category::SupportFailure,
            PatternCategory::Technical => Category::Technical,
            PatternCategory::NegativeLanguage => Category::NegativeLanguage,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PatternCategory::Critical => "CRITICAL",
            PatternCategory::SupportFailure => "SUPPORT_FAILURE",
            PatternCategory::Technical => "TECHNICAL",
            PatternCategory::NegativeLanguage => "NEGATIVE_LANGUAGE",
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category hit with one representative phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub category: PatternCategory,
    pub phrase: String,
    pub span: TokenSpan,
}

/// Match a single category.
pub fn match_category(
    category: PatternCategory,
    msg: &NormalizedMessage,
    lexicons: &LexiconSet,
) -> Option<PatternMatch> {
    lexicons
        .get(category.lexicon())
        .find(msg.tokens())
        .map(|(entry, span)| PatternMatch {
            category,
            phrase: entry.phrase.source().to_string(),
            span,
        })
}

/// Scan the categories in order and return the first hit.
pub fn match_patterns(msg: &NormalizedMessage, lexicons: &LexiconSet) -> Option<PatternMatch> {
    PatternCategory::SCAN_ORDER
        .iter()
        .find_map(|&category| match_category(category, msg, lexicons))
}

/// Every category that matches, in scan order.
pub fn matched_categories(msg: &NormalizedMessage, lexicons: &LexiconSet) -> Vec<PatternCategory> {
    PatternCategory::SCAN_ORDER
        .iter()
        .copied()
        .filter(|&category| lexicons.get(category.lexicon()).matches_any(msg.tokens()))
        .collect()
}
