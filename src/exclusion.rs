//! Exclusion filter for innocuous messages.
//!
//! Coding questions, scheduling questions and plain thanks should never be
//! flagged. An exclusion phrase only counts when the message carries no
//! stronger evidence: a critical-signal phrase or a negative contraction like
//! "didn't". Plain negation words do not count, so "No problem, thanks!"
//! stays excluded.

use crate::lexicon::{Category, LexiconSet};
use crate::normalize::{NormalizedMessage, TokenSpan};

/// Lexicons whose presence vetoes an exclusion.
pub const GUARD_CATEGORIES: [Category; 2] = [Category::Critical, Category::NegativeContraction];

/// The exclusion phrase that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionHit {
    pub phrase: String,
    pub span: TokenSpan,
}

/// Returns the first exclusion phrase when the message is excluded.
pub fn find_exclusion(msg: &NormalizedMessage, lexicons: &LexiconSet) -> Option<ExclusionHit> {
    let (entry, span) = lexicons.get(Category::Exclusion).find(msg.tokens())?;
    if is_guarded(msg, lexicons) {
        return None;
    }
    Some(ExclusionHit {
        phrase: entry.phrase.source().to_string(),
        span,
    })
}

pub fn is_excluded(msg: &NormalizedMessage, lexicons: &LexiconSet) -> bool {
    find_exclusion(msg, lexicons).is_some()
}

fn is_guarded(msg: &NormalizedMessage, lexicons: &LexiconSet) -> bool {
    GUARD_CATEGORIES
        .iter()
        .any(|&category| lexicons.get(category).matches_any(msg.tokens()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn excluded(text: &str) -> Option<ExclusionHit> {
        find_exclusion(&normalize(text), &LexiconSet::bundled().unwrap())
    }

    #[test]
    fn test_coding_question_is_excluded() {
        let hit = excluded("How do I write a loop in this language?").unwrap();
        assert_eq!(hit.phrase, "how do ... loop*");
        assert_eq!(hit.span, TokenSpan::new(0, 6));
    }

    #[test]
    fn test_thanks_and_scheduling() {
        assert_eq!(
            excluded("Thanks, everything is working great!").unwrap().phrase,
            "thank*"
        );
        assert_eq!(
            excluded("When is the next class scheduled?").unwrap().phrase,
            "schedule*"
        );
        assert!(excluded("shukriya bhai").is_some());
    }

    #[test]
    fn test_critical_signal_vetoes_exclusion() {
        assert!(excluded("Thanks for the code, but it is broken and I want a refund").is_none());
        assert!(excluded("thanks, but I want to quit").is_none());
    }

    #[test]
    fn test_negative_contraction_vetoes_exclusion() {
        assert!(excluded("How do I write a loop? I didn't get it").is_none());
        assert!(excluded("thanks, but the recording isn't there").is_none());
    }

    #[test]
    fn test_plain_negation_does_not_veto() {
        for text in ["No problem, thanks!", "No worries, thanks a lot", "Thanks, no more doubts now"] {
            assert_eq!(excluded(text).unwrap().phrase, "thank*", "{:?}", text);
        }
        assert!(excluded("shukriya, koi nahi").is_some());
    }

    #[test]
    fn test_consequence_does_not_veto() {
        assert!(excluded("thanks, you are wasting my time here").is_some());
        assert!(excluded("this is affecting my career").is_none());
    }

    #[test]
    fn test_no_exclusion_phrase() {
        assert!(excluded("Still waiting for days, no response, kab tak?").is_none());
        assert!(!is_excluded(&normalize(""), &LexiconSet::bundled().unwrap()));
    }
}
