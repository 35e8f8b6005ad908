//! The classification pipeline.

use crate::config::ClassifierConfig;
use crate::context::{ContextAnalysis, ContextAnalyzer, ContextFeature};
use crate::display::{Explanation, Highlight};
use crate::error::ConfigResult;
use crate::exclusion::{find_exclusion, ExclusionHit};
use crate::lexicon::LexiconSet;
use crate::normalize::{normalize, NormalizedMessage};
use crate::patterns::{self, match_patterns, PatternCategory, PatternMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    Negative,
    Neutral,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Negative => "NEGATIVE",
            Label::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which stage decided the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    Excluded,
    PatternMatch,
    ContextScore,
    /// Nothing fired strongly enough.
    Default,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::Excluded => "EXCLUDED",
            Reason::PatternMatch => "PATTERN_MATCH",
            Reason::ContextScore => "CONTEXT_SCORE",
            Reason::Default => "DEFAULT",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: Label,
    pub reason: Reason,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub matched_category: Option<PatternCategory>,
    /// Pattern phrase for PATTERN_MATCH, exclusion phrase for EXCLUDED.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub matched_phrase: Option<String>,
    pub context_score: u32,
    pub fired_features: BTreeSet<ContextFeature>,
}

impl ClassificationResult {
    pub fn is_negative(&self) -> bool {
        self.label == Label::Negative
    }
}

/// The stage that short-circuited the pipeline, with its evidence.
enum Stage {
    Excluded(ExclusionHit),
    Pattern(PatternMatch),
    Context(ContextAnalysis),
}

/// Immutable classifier. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    lexicons: Arc<LexiconSet>,
    analyzer: ContextAnalyzer,
    threshold: u32,
}

impl Classifier {
    pub fn new(lexicons: Arc<LexiconSet>, config: &ClassifierConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            lexicons,
            analyzer: ContextAnalyzer::new(config),
            threshold: config.threshold,
        })
    }

    /// Default configuration over the given lexicons.
    pub fn with_lexicons(lexicons: Arc<LexiconSet>) -> Self {
        Self {
            lexicons,
            analyzer: ContextAnalyzer::default(),
            threshold: ClassifierConfig::DEFAULT_THRESHOLD,
        }
    }

    /// Default configuration over the bundled lexicons.
    pub fn bundled() -> ConfigResult<Self> {
        Ok(Self::with_lexicons(LexiconSet::bundled()?))
    }

    pub fn lexicons(&self) -> &LexiconSet {
        &self.lexicons
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Classify one message. Total over all inputs.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let msg = normalize(text);
        let stage = self.run(&msg);
        self.result_of(&msg, &stage)
    }

    /// Classify and keep the evidence for rendering.
    pub fn explain(&self, text: &str) -> Explanation {
        let msg = normalize(text);
        let stage = self.run(&msg);
        let result = self.result_of(&msg, &stage);

        let highlights = match &stage {
            Stage::Excluded(hit) => vec![Highlight::new(
                Some(hit.span),
                format!("Exclusion {:?}", hit.phrase),
            )],
            Stage::Pattern(hit) => vec![Highlight::new(
                Some(hit.span),
                format!("{} {:?}", hit.category, hit.phrase),
            )],
            Stage::Context(analysis) => analysis
                .fired
                .iter()
                .map(|f| {
                    Highlight::new(f.evidence.span(&msg), format!("{} +{}", f.feature, f.weight))
                })
                .collect(),
        };

        Explanation::new(msg, result, highlights)
    }

    /// Every pattern category that matches, in scan order.
    pub fn matched_categories(&self, text: &str) -> Vec<PatternCategory> {
        patterns::matched_categories(&normalize(text), &self.lexicons)
    }

    fn run(&self, msg: &NormalizedMessage) -> Stage {
        if let Some(hit) = find_exclusion(msg, &self.lexicons) {
            return Stage::Excluded(hit);
        }
        if let Some(hit) = match_patterns(msg, &self.lexicons) {
            return Stage::Pattern(hit);
        }
        Stage::Context(self.analyzer.analyze(msg, &self.lexicons))
    }

    fn result_of(&self, msg: &NormalizedMessage, stage: &Stage) -> ClassificationResult {
        let result = match stage {
            Stage::Excluded(hit) => ClassificationResult {
                label: Label::Neutral,
                reason: Reason::Excluded,
                matched_category: None,
                matched_phrase: Some(hit.phrase.clone()),
                context_score: 0,
                fired_features: BTreeSet::new(),
            },
            Stage::Pattern(hit) => ClassificationResult {
                label: Label::Negative,
                reason: Reason::PatternMatch,
                matched_category: Some(hit.category),
                matched_phrase: Some(hit.phrase.clone()),
                context_score: 0,
                fired_features: BTreeSet::new(),
            },
            Stage::Context(analysis) => {
                let (label, reason) = if analysis.score >= self.threshold {
                    (Label::Negative, Reason::ContextScore)
                } else {
                    (Label::Neutral, Reason::Default)
                };
                ClassificationResult {
                    label,
                    reason,
                    matched_category: None,
                    matched_phrase: None,
                    context_score: analysis.score,
                    fired_features: analysis.features(),
                }
            }
        };

        trace!(text = msg.raw(), tokens = msg.tokens().len(), "classifying");
        debug!(
            label = %result.label,
            reason = %result.reason,
            category = ?result.matched_category,
            priority = ?result.matched_category.map(PatternCategory::priority),
            phrase = ?result.matched_phrase,
            score = result.context_score,
            "classified message"
        );
        result
    }
}
