//! End-to-end scenarios through the bundled lexicon.

use super::classify;
use crate::{ContextFeature, Label, PatternCategory, Reason};

#[test]
fn coding_question_is_excluded() {
    let result = classify("How do I write a loop in this language?");
    assert_eq!(result.label, Label::Neutral);
    assert_eq!(result.reason, Reason::Excluded);
}

#[test]
fn refund_request_is_critical() {
    let result = classify("I want a refund, this is unacceptable");
    assert_eq!(result.label, Label::Negative);
    assert_eq!(result.reason, Reason::PatternMatch);
    assert_eq!(result.matched_category, Some(PatternCategory::Critical));
}

#[test]
fn negated_positive_scores_over_threshold() {
    let result = classify("This is not good at all");
    assert_eq!(result.label, Label::Negative);
    assert_eq!(result.reason, Reason::ContextScore);
    assert!(result.fired_features.contains(&ContextFeature::NegatedPositivity));
    assert!(result.context_score >= 2);
}

#[test]
fn thanks_is_neutral() {
    let result = classify("Thanks, everything is working great!");
    assert_eq!(result.label, Label::Neutral);
    assert!(matches!(result.reason, Reason::Excluded | Reason::Default));
    assert_eq!(result.context_score, 0);
}

#[test]
fn waiting_without_response() {
    let result = classify("Still waiting for days, no response, kab tak?");
    assert_eq!(result.label, Label::Negative);
    assert_eq!(result.reason, Reason::ContextScore);
    assert!(result.fired_features.contains(&ContextFeature::TimeFrustration));
    assert!(result.fired_features.contains(&ContextFeature::CommunicationFailure));
    assert!(result.context_score >= 2);
}

#[test]
fn broken_code_with_refund_is_not_excluded() {
    let result = classify("The code is broken and I want a refund");
    assert_eq!(result.reason, Reason::PatternMatch);
    assert_eq!(result.matched_category, Some(PatternCategory::Critical));
    assert_eq!(result.matched_phrase.as_deref(), Some("refund"));
}

#[test]
fn negative_contraction_overrides_thanks() {
    let result = classify("Thanks, but I didn't get a good answer");
    assert_eq!(result.label, Label::Negative);
    assert_eq!(result.reason, Reason::ContextScore);
    assert_eq!(
        result.fired_features,
        [ContextFeature::NegatedPositivity].into_iter().collect()
    );
}

#[test]
fn hinglish_messages() {
    let cases = [
        ("sir mujhe paisa wapas chahiye", Reason::PatternMatch, Label::Negative),
        ("video nahi aa raha hai", Reason::PatternMatch, Label::Negative),
        ("bahut dikkat hai, madad karo", Reason::ContextScore, Label::Negative),
        ("shukriya bhai", Reason::Excluded, Label::Neutral),
        ("kal milte hain", Reason::Default, Label::Neutral),
    ];
    for (text, reason, label) in cases {
        let result = classify(text);
        assert_eq!((result.reason, result.label), (reason, label), "{:?}", text);
    }
}

#[test]
fn bare_hindi_negation_is_negative_language() {
    // "nahi" sits in negative_language as well as negation.
    let result = classify("class mein sound nahi");
    assert_eq!(result.matched_category, Some(PatternCategory::NegativeLanguage));
    assert_eq!(result.matched_phrase.as_deref(), Some("nahi"));
}
