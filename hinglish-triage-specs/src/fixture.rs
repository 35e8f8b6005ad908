//! Fixture file format.
//!
//! A fixture is a TOML file holding labelled messages:
//!
//! ```toml
//! title = "Negated positivity"
//!
//! [[case]]
//! id = "not-good"
//! message = "This is not good at all"
//! label = "NEGATIVE"
//! reason = "CONTEXT_SCORE"
//! features = ["NEGATED_POSITIVITY"]
//! ```
//!
//! Only `id`, `message` and `label` are required. `features` lists features
//! that must fire; others may fire too.

use crate::errors::{SpecError, SpecResult};
use hinglish_triage::{ContextFeature, Label, PatternCategory, Reason};
use serde::Deserialize;
use std::collections::HashSet;

/// A parsed fixture file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "case", default)]
    pub cases: Vec<Case>,
}

/// One labelled message.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Case {
    pub id: String,
    pub message: String,
    pub label: Label,
    #[serde(default)]
    pub reason: Option<Reason>,
    #[serde(default)]
    pub category: Option<PatternCategory>,
    /// Expected pattern or exclusion phrase, as written in the lexicon.
    #[serde(default)]
    pub phrase: Option<String>,
    #[serde(default)]
    pub features: Vec<ContextFeature>,
    #[serde(default)]
    pub score: Option<u32>,
}

impl Fixture {
    pub fn case(&self, id: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == id)
    }
}

/// Parse and validate fixture content. `path` is only used in errors.
pub fn parse_fixture(path: &str, content: &str) -> SpecResult<Fixture> {
    let fixture: Fixture = toml::from_str(content).map_err(|e| SpecError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    let mut seen = HashSet::new();
    for case in &fixture.cases {
        let invalid = |message: &str| SpecError::Invalid {
            path: path.to_string(),
            case: case.id.clone(),
            message: message.to_string(),
        };

        if case.id.trim().is_empty() {
            return Err(invalid("case id is empty"));
        }
        if !seen.insert(case.id.as_str()) {
            return Err(invalid("duplicate case id"));
        }
        if let Some(reason) = case.reason {
            if reason_label(reason) != case.label {
                return Err(invalid("reason contradicts label"));
            }
        }
        if case.category.is_some() && case.reason.map_or(false, |r| r != Reason::PatternMatch) {
            return Err(invalid("category is only reported for PATTERN_MATCH"));
        }
        let short_circuited = matches!(case.reason, Some(Reason::Excluded | Reason::PatternMatch));
        if short_circuited && (!case.features.is_empty() || case.score.map_or(false, |s| s > 0)) {
            return Err(invalid("features are only scored when no earlier stage fires"));
        }
    }

    Ok(fixture)
}

fn reason_label(reason: Reason) -> Label {
    match reason {
        Reason::PatternMatch | Reason::ContextScore => Label::Negative,
        Reason::Excluded | Reason::Default => Label::Neutral,
    }
}
