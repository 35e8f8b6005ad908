//! Message normalization.
//!
//! Every classification starts by turning raw chat text into a
//! [`NormalizedMessage`]: lower-cased, split on Unicode word boundaries, with
//! edge punctuation stripped from each token. Internal apostrophes survive so
//! contractions like "don't" stay a single token, and romanized Hindi splits
//! exactly like English.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// A single word of a normalized message.
///
/// `start` and `end` are UTF-8 byte offsets into
/// [`NormalizedMessage::lowered`], not character counts, so
/// `&msg.lowered()[token.start..token.end]` is always a valid slice.
/// Lower-casing can change byte lengths, so they do not index the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lower-cased token text, typographic apostrophes folded to `'`.
    pub text: String,
    /// Byte offset of the token in the lower-cased message.
    pub start: usize,
    /// Byte offset one past the token in the lower-cased message.
    pub end: usize,
}

/// A half-open range of token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering exactly one token.
    pub fn single(index: usize) -> Self {
        Self::new(index, index + 1)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span containing both `self` and `other`.
    pub fn cover(self, other: TokenSpan) -> TokenSpan {
        TokenSpan::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// Immutable, per-call view of an input message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMessage {
    raw: String,
    lowered: String,
    punctuated: String,
    text: String,
    tokens: Vec<Token>,
    question_marks: usize,
}

impl NormalizedMessage {
    /// The original text, kept for logging.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lower-cased original; token offsets index into this string.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Lower-cased text with whitespace collapsed and punctuation intact.
    pub fn punctuated(&self) -> &str {
        &self.punctuated
    }

    /// Canonical form: tokens joined by single spaces.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of `?` characters in the original text.
    pub fn question_marks(&self) -> usize {
        self.question_marks
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whole-message span, or `None` when there are no tokens.
    pub fn full_span(&self) -> Option<TokenSpan> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(TokenSpan::new(0, self.tokens.len()))
        }
    }
}

/// Normalize raw chat text. Total over all inputs: empty, whitespace-only and
/// punctuation-only text yields a message with zero tokens.
pub fn normalize(raw: &str) -> NormalizedMessage {
    let question_marks = raw.chars().filter(|&c| c == '?').count();
    let lowered = raw.to_lowercase();
    let tokens = tokenize(&lowered);
    let text = tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let punctuated = lowered.split_whitespace().collect::<Vec<_>>().join(" ");

    NormalizedMessage {
        raw: raw.to_string(),
        lowered,
        punctuated,
        text,
        tokens,
        question_marks,
    }
}

/// Split already lower-cased text into tokens.
pub(crate) fn tokenize(lowered: &str) -> Vec<Token> {
    lowered
        .unicode_word_indices()
        .filter_map(|(offset, word)| {
            let trimmed = word.trim_matches(is_edge_punctuation);
            if trimmed.is_empty() {
                return None;
            }
            let start = offset + (word.len() - word.trim_start_matches(is_edge_punctuation).len());
            Some(Token {
                text: trimmed.replace('\u{2019}', "'"),
                start,
                end: start + trimmed.len(),
            })
        })
        .collect()
}

fn is_edge_punctuation(c: char) -> bool {
    !c.is_alphanumeric()
}
