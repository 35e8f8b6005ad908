//! Rule-based triage of English and Hindi-Latin chat messages.
//!
//! Each message is labelled NEGATIVE or NEUTRAL by an ordered pipeline:
//!
//! - **Normalize**: lower-case and split on Unicode word boundaries
//! - **Exclusion**: coding, scheduling and thank-you messages are NEUTRAL
//!   unless they also carry a critical phrase or a negative contraction
//! - **Patterns**: four phrase categories, scanned in order, flag a message
//!   on their own
//! - **Context score**: ten weighted features; a score at or above the
//!   threshold (default 2) is NEGATIVE
//!
//! ## Usage
//!
//! ```
//! use hinglish_triage::{Classifier, Label, PatternCategory, Reason};
//!
//! let classifier = Classifier::bundled().unwrap();
//!
//! let result = classifier.classify("I want a refund, this is unacceptable");
//! assert_eq!(result.label, Label::Negative);
//! assert_eq!(result.reason, Reason::PatternMatch);
//! assert_eq!(result.matched_category, Some(PatternCategory::Critical));
//!
//! let result = classifier.classify("How do I write a loop in this language?");
//! assert_eq!(result.reason, Reason::Excluded);
//! ```
//!
//! Lexicons are loaded once and shared read-only; a [`Classifier`] can be
//! cloned into any number of threads.

mod classifier;
mod config;
mod context;
mod display;
mod error;
mod exclusion;
mod lexicon;
mod normalize;
mod patterns;

#[cfg(test)]
mod tests;

pub use classifier::{ClassificationResult, Classifier, Label, Reason};
pub use config::{ClassifierConfig, ProximityWindows};
pub use context::{
    analyze_context, ContextAnalysis, ContextAnalyzer, ContextFeature, Evidence, FeatureRule,
    FiredFeature,
};
pub use display::{Explanation, Highlight};
pub use error::{ConfigResult, ConfigurationError};
pub use exclusion::{find_exclusion, is_excluded, ExclusionHit, GUARD_CATEGORIES};
pub use lexicon::{
    Category, Language, Lexicon, LexiconEntry, LexiconSet, LexiconSource, Phrase, SourcePhrase,
    TermHit, TomlLexiconSource, BUNDLED_LEXICON,
};
pub use normalize::{normalize, NormalizedMessage, Token, TokenSpan};
pub use patterns::{match_category, match_patterns, matched_categories, PatternCategory, PatternMatch};
