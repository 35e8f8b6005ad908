//! Failure and summary formatting.

use crate::failures::{FailureState, HarnessResult};
use crate::runner::{CaseOutcome, CaseReport, FixtureReport};
use std::fmt::Write;

/// Format a failed case with its field-level differences.
pub fn format_failure(fixture_name: &str, case: &CaseReport) -> String {
    let mut output = String::new();

    let marker = match case.state {
        Some(FailureState::Known) => "KNOWN",
        Some(FailureState::Pending) => "PENDING",
        _ => "FAIL",
    };
    writeln!(output, "{}: {}#{}", marker, fixture_name, case.id).unwrap();
    writeln!(output, "  message: {:?}", case.message).unwrap();

    if let CaseOutcome::Failed(mismatches) = &case.outcome {
        for mismatch in mismatches {
            writeln!(
                output,
                "  \u{2717} {}: expected {}, got {}",
                mismatch.field, mismatch.expected, mismatch.actual
            )
            .unwrap();
        }
    }

    let result = &case.result;
    write!(
        output,
        "  got {} ({}), score {}",
        result.label, result.reason, result.context_score
    )
    .unwrap();
    if let Some(phrase) = &result.matched_phrase {
        write!(output, ", phrase {:?}", phrase).unwrap();
    }
    output
}

/// Format a single fixture's pass/fail line.
pub fn format_summary(report: &FixtureReport) -> String {
    let passed = report.cases.len() - report.failures().count();
    let failed = report.failures().count();
    let regressions = report.regressions().count();
    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    format!(
        "{}: {}\n  {} passed, {} failed ({} expected, {} regressions)",
        status,
        report.name,
        passed,
        failed,
        failed - regressions,
        regressions
    )
}

/// Format the whole harness run.
pub fn format_report(reports: &[FixtureReport], harness: &HarnessResult) -> String {
    let mut output = String::new();
    for report in reports {
        writeln!(output, "{}", format_summary(report)).unwrap();
        for case in report.failures() {
            writeln!(output, "{}", format_failure(&report.name, case)).unwrap();
        }
    }
    for fixed in &harness.fixed {
        writeln!(output, "FIXED: {} (remove it from expected_failures.toml)", fixed).unwrap();
    }
    write!(
        output,
        "total: {} passed of {}, {} expected failures, {} regressions",
        harness.passed, harness.total, harness.expected_failures, harness.regressions
    )
    .unwrap();
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failures::ExpectedFailures;
    use crate::fixture::parse_fixture;
    use crate::runner::run_all;
    use hinglish_triage::Classifier;

    #[test]
    fn test_format_report() {
        let fixture = parse_fixture(
            "inline",
            r#"
[[case]]
id = "refund"
message = "I want a refund"
label = "NEGATIVE"
category = "CRITICAL"

[[case]]
id = "one-question"
message = "Where is the recording?"
label = "NEGATIVE"
reason = "CONTEXT_SCORE"
"#,
        )
        .unwrap();
        let fixtures = vec![("inline.toml".to_string(), fixture)];
        let (reports, harness) = run_all(
            &Classifier::bundled().unwrap(),
            &fixtures,
            &ExpectedFailures::default(),
        );

        insta::assert_snapshot!(format_report(&reports, &harness), @r###"
        FAIL: inline.toml
          1 passed, 1 failed (0 expected, 1 regressions)
        FAIL: inline.toml#one-question
          message: "Where is the recording?"
          ✗ label: expected NEGATIVE, got NEUTRAL
          ✗ reason: expected CONTEXT_SCORE, got DEFAULT
          got NEUTRAL (DEFAULT), score 0
        total: 1 passed of 2, 0 expected failures, 1 regressions
        "###);
    }
}
