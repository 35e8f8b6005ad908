//! Whole-pipeline properties.

use super::{classify, CLASSIFIER};
use crate::{ContextFeature, Label, PatternCategory, Reason};

#[test]
fn classification_is_total() {
    let long = "bahut problem hai ".repeat(2_000);
    let inputs = [
        "",
        " ",
        "\t\n\r",
        "?!?!...",
        "👍🔥😡",
        "\u{200b}\u{feff}",
        "नमस्ते, मदद चाहिए",
        "مرحبا",
        "'''",
        "...refund...",
        long.as_str(),
    ];
    for text in inputs {
        let result = classify(text);
        assert!(result.context_score <= 12, "{:?}", text);
    }
    assert_eq!(classify("").reason, Reason::Default);
    assert_eq!(classify("👍🔥😡").label, Label::Neutral);
}

#[test]
fn classification_is_idempotent() {
    let texts = [
        "How do I write a loop in this language?",
        "Still waiting for days, no response, kab tak?",
        "urgent issue, I am stressed, please help",
    ];
    for text in texts {
        assert_eq!(classify(text), classify(text));
    }
}

#[test]
fn concurrent_calls_agree() {
    let text = "This is not good at all, really stressed about this bug";
    let expected = classify(text);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| CLASSIFIER.classify(text)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn one_light_feature_stays_neutral() {
    let result = classify("What time? Which room?");
    assert_eq!(result.context_score, 1);
    assert_eq!((result.label, result.reason), (Label::Neutral, Reason::Default));
}

#[test]
fn two_light_features_are_negative() {
    let result = classify("Still waiting. Where? Why?");
    assert_eq!(
        result.fired_features,
        [ContextFeature::MultipleQuestions, ContextFeature::TimeFrustration]
            .into_iter()
            .collect()
    );
    assert_eq!(result.context_score, 2);
    assert_eq!(result.label, Label::Negative);
}

#[test]
fn one_heavy_feature_is_negative() {
    let result = classify("this is affecting my career");
    assert_eq!(
        result.fired_features,
        [ContextFeature::Consequence].into_iter().collect()
    );
    assert_eq!(result.context_score, 2);
    assert_eq!(result.label, Label::Negative);
}

#[test]
fn critical_phrase_wins_regardless_of_context() {
    let result = classify("Still waiting, no response, I am frustrated and want a refund??");
    assert_eq!(result.reason, Reason::PatternMatch);
    assert_eq!(result.matched_category, Some(PatternCategory::Critical));
    assert_eq!(result.matched_phrase.as_deref(), Some("refund"));
    assert_eq!(result.context_score, 0);
    assert!(result.fired_features.is_empty());
}

#[test]
fn exclusion_outranks_non_critical_patterns() {
    // Only critical phrases and negative contractions veto an exclusion.
    for text in ["Thanks, the video is stuck", "Thanks, the video is not working"] {
        assert_eq!(classify(text).reason, Reason::Excluded, "{:?}", text);
    }

    let result = classify("Thanks, but the video isn't working");
    assert_eq!(result.reason, Reason::ContextScore);
    assert!(result.fired_features.contains(&ContextFeature::NegatedPositivity));
}

#[test]
fn polite_negation_stays_excluded() {
    for text in ["No problem, thanks!", "No worries, thanks a lot", "Thanks, no more doubts now"] {
        let result = classify(text);
        assert_eq!((result.label, result.reason), (Label::Neutral, Reason::Excluded), "{:?}", text);
        assert_eq!(result.context_score, 0);
        assert!(result.fired_features.is_empty());
    }
}

#[test]
fn pure_exclusion_is_neutral() {
    for text in [
        "Great, thanks for the help!",
        "What is a variable?",
        "When is the next class?",
        "Can you share the course material",
    ] {
        let result = classify(text);
        assert_eq!(result.label, Label::Neutral, "{:?}", text);
        assert_eq!(result.reason, Reason::Excluded, "{:?}", text);
    }
}
