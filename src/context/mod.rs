//! Weighted context scoring.
//!
//! When no pattern category matches, a message is scored by ten independent
//! features over the role lexicons and token positions. Features are rows in a
//! table (`feature`, `weight`, `predicate`) evaluated uniformly; overlapping
//! evidence may fire several features for the same words.

mod features;

use features::FeatureInput;

use crate::config::ClassifierConfig;
use crate::lexicon::LexiconSet;
use crate::normalize::{NormalizedMessage, TokenSpan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The named context sub-features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContextFeature {
    /// Problem word and emotion word within a token window, either order.
    ProblemEmotionProximity,
    /// Intensifier shortly before a problem or emotion word.
    IntensifiedNegative,
    /// Negation shortly before a positive word ("not good").
    NegatedPositivity,
    /// Problem word and help-seeking word anywhere in the message.
    ProblemHelp,
    /// The same problem or emotion term used twice.
    RepeatedTheme,
    /// Two or more `?` in the raw text.
    MultipleQuestions,
    /// Urgency term together with a problem word.
    UrgentProblem,
    /// "no response" style phrases.
    CommunicationFailure,
    /// "still waiting" style phrases.
    TimeFrustration,
    /// "wasting money" style phrases.
    Consequence,
}

impl ContextFeature {
    pub const ALL: [ContextFeature; 10] = [
        ContextFeature::ProblemEmotionProximity,
        ContextFeature::IntensifiedNegative,
        ContextFeature::NegatedPositivity,
        ContextFeature::ProblemHelp,
        ContextFeature::RepeatedTheme,
        ContextFeature::MultipleQuestions,
        ContextFeature::UrgentProblem,
        ContextFeature::CommunicationFailure,
        ContextFeature::TimeFrustration,
        ContextFeature::Consequence,
    ];

    pub fn default_weight(self) -> u32 {
        match self {
            ContextFeature::NegatedPositivity | ContextFeature::Consequence => 2,
            _ => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContextFeature::ProblemEmotionProximity => "PROBLEM_EMOTION_PROXIMITY",
            ContextFeature::IntensifiedNegative => "INTENSIFIED_NEGATIVE",
            ContextFeature::NegatedPositivity => "NEGATED_POSITIVITY",
            ContextFeature::ProblemHelp => "PROBLEM_HELP",
            ContextFeature::RepeatedTheme => "REPEATED_THEME",
            ContextFeature::MultipleQuestions => "MULTIPLE_QUESTIONS",
            ContextFeature::UrgentProblem => "URGENT_PROBLEM",
            ContextFeature::CommunicationFailure => "COMMUNICATION_FAILURE",
            ContextFeature::TimeFrustration => "TIME_FRUSTRATION",
            ContextFeature::Consequence => "CONSEQUENCE",
        }
    }
}

impl fmt::Display for ContextFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What made a feature fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    Tokens(TokenSpan),
    /// Message-level evidence with no token position (question marks).
    Message,
}

impl Evidence {
    /// Token span to highlight, if any.
    pub fn span(&self, msg: &NormalizedMessage) -> Option<TokenSpan> {
        match self {
            Evidence::Tokens(span) => Some(*span),
            Evidence::Message => msg.full_span(),
        }
    }
}

type Predicate = fn(&FeatureInput<'_>) -> Option<Evidence>;

/// One row of the feature table.
#[derive(Clone)]
pub struct FeatureRule {
    pub feature: ContextFeature,
    pub weight: u32,
    predicate: Predicate,
}

impl FeatureRule {
    pub(crate) fn evaluate(&self, input: &FeatureInput<'_>) -> Option<Evidence> {
        (self.predicate)(input)
    }
}

impl fmt::Debug for FeatureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureRule")
            .field("feature", &self.feature)
            .field("weight", &self.weight)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredFeature {
    pub feature: ContextFeature,
    pub weight: u32,
    pub evidence: Evidence,
}

/// Score and the features that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextAnalysis {
    pub score: u32,
    pub fired: Vec<FiredFeature>,
}

impl ContextAnalysis {
    pub fn features(&self) -> BTreeSet<ContextFeature> {
        self.fired.iter().map(|f| f.feature).collect()
    }

    pub fn has_fired(&self, feature: ContextFeature) -> bool {
        self.fired.iter().any(|f| f.feature == feature)
    }
}

/// Evaluates the feature table against a message.
#[derive(Debug, Clone)]
pub struct ContextAnalyzer {
    rules: Vec<FeatureRule>,
    config: ClassifierConfig,
}

impl ContextAnalyzer {
    pub fn new(config: &ClassifierConfig) -> Self {
        let rules = features::RULES
            .iter()
            .map(|&(feature, predicate)| FeatureRule {
                feature,
                weight: config.weight_of(feature),
                predicate,
            })
            .collect();
        Self {
            rules,
            config: config.clone(),
        }
    }

    pub fn rules(&self) -> &[FeatureRule] {
        &self.rules
    }

    pub fn analyze(&self, msg: &NormalizedMessage, lexicons: &LexiconSet) -> ContextAnalysis {
        let input = FeatureInput::collect(msg, lexicons, &self.config.windows);
        let fired: Vec<FiredFeature> = self
            .rules
            .iter()
            .filter_map(|rule| {
                rule.evaluate(&input).map(|evidence| FiredFeature {
                    feature: rule.feature,
                    weight: rule.weight,
                    evidence,
                })
            })
            .collect();
        let score = fired.iter().fold(0u32, |acc, f| acc.saturating_add(f.weight));

        ContextAnalysis { score, fired }
    }
}

impl Default for ContextAnalyzer {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

/// Score a message with default weights and windows.
pub fn analyze_context(msg: &NormalizedMessage, lexicons: &LexiconSet) -> ContextAnalysis {
    ContextAnalyzer::default().analyze(msg, lexicons)
}
