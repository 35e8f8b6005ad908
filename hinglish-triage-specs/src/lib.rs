//! Fixture-driven regression harness for hinglish-triage.
//!
//! Labelled messages live in TOML fixture files under `fixtures/`. The runner
//! classifies each case with a [`Classifier`](hinglish_triage::Classifier)
//! and compares label, reason, category, phrase, fired features and score.
//! Cases listed in `expected_failures.toml` may fail without failing the
//! run; any other failure is a regression.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture format and validation
//! - [`loader`] - Loading fixture files from disk
//! - [`runner`] - Running cases and comparing results
//! - [`failures`] - Expected failures tracking via TOML
//! - [`formatter`] - Failure and summary reports
//! - [`errors`] - Error types for fixture loading

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, Case, Fixture};
pub use formatter::{format_failure, format_report, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{check_case, run_all, run_fixture, CaseOutcome, CaseReport, FixtureReport, Mismatch};

#[cfg(test)]
mod tests;
