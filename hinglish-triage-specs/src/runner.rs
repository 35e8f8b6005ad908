//! Runs fixture cases through a classifier and compares the results.

use crate::failures::{ExpectedFailures, FailureState, HarnessResult};
use crate::fixture::{Case, Fixture};
use hinglish_triage::{ClassificationResult, Classifier};

/// One field that differs from the fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

/// Outcome of checking a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Failed(Vec<Mismatch>),
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

#[derive(Debug, Clone)]
pub struct CaseReport {
    pub id: String,
    pub message: String,
    pub result: ClassificationResult,
    pub outcome: CaseOutcome,
    /// Ledger state when the case failed.
    pub state: Option<FailureState>,
}

#[derive(Debug, Clone)]
pub struct FixtureReport {
    pub name: String,
    pub cases: Vec<CaseReport>,
}

impl FixtureReport {
    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|c| !c.outcome.is_passed())
    }

    pub fn regressions(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases
            .iter()
            .filter(|c| c.state == Some(FailureState::Regression))
    }
}

/// Compare a classification against a case's expectations.
pub fn check_case(case: &Case, result: &ClassificationResult) -> CaseOutcome {
    let mut mismatches = Vec::new();
    let mut expect = |field: &'static str, expected: String, actual: String| {
        if expected != actual {
            mismatches.push(Mismatch {
                field,
                expected,
                actual,
            });
        }
    };

    expect("label", case.label.to_string(), result.label.to_string());
    if let Some(reason) = case.reason {
        expect("reason", reason.to_string(), result.reason.to_string());
    }
    if let Some(category) = case.category {
        expect(
            "category",
            category.to_string(),
            result
                .matched_category
                .map_or_else(|| "none".to_string(), |c| c.to_string()),
        );
    }
    if let Some(phrase) = &case.phrase {
        expect(
            "phrase",
            phrase.clone(),
            result.matched_phrase.clone().unwrap_or_else(|| "none".to_string()),
        );
    }
    for feature in &case.features {
        if !result.fired_features.contains(feature) {
            expect("features", feature.to_string(), "not fired".to_string());
        }
    }
    if let Some(score) = case.score {
        expect("score", score.to_string(), result.context_score.to_string());
    }

    if mismatches.is_empty() {
        CaseOutcome::Passed
    } else {
        CaseOutcome::Failed(mismatches)
    }
}

/// Classify every case of a fixture and tally it into `harness`.
pub fn run_fixture(
    classifier: &Classifier,
    name: &str,
    fixture: &Fixture,
    expected: &ExpectedFailures,
    harness: &mut HarnessResult,
) -> FixtureReport {
    let cases = fixture
        .cases
        .iter()
        .map(|case| {
            let result = classifier.classify(&case.message);
            let outcome = check_case(case, &result);
            let state = if outcome.is_passed() {
                if expected.get_entry(name, &case.id).is_some() {
                    harness.record_fixed(name, &case.id);
                } else {
                    harness.record_pass();
                }
                None
            } else {
                let state = expected.is_expected(name, &case.id);
                harness.record_failure(state);
                Some(state)
            };
            CaseReport {
                id: case.id.clone(),
                message: case.message.clone(),
                result,
                outcome,
                state,
            }
        })
        .collect();

    FixtureReport {
        name: name.to_string(),
        cases,
    }
}

/// Run every fixture and return the per-fixture reports with the totals.
pub fn run_all(
    classifier: &Classifier,
    fixtures: &[(String, Fixture)],
    expected: &ExpectedFailures,
) -> (Vec<FixtureReport>, HarnessResult) {
    let mut harness = HarnessResult::new();
    let reports = fixtures
        .iter()
        .map(|(name, fixture)| run_fixture(classifier, name, fixture, expected, &mut harness))
        .collect();
    (reports, harness)
}
