use crate::{load_all_fixtures, load_fixture, run_all, ExpectedFailures, Fixture};
use hinglish_triage::{Classifier, ContextFeature, Label, Reason};
use std::path::{Path, PathBuf};

fn crate_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

fn fixture(name: &str) -> Fixture {
    load_fixture(&crate_dir().join("fixtures").join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

#[test]
fn test_all_fixtures_without_regressions() {
    let fixtures = load_all_fixtures(&crate_dir().join("fixtures")).unwrap();
    let expected = ExpectedFailures::load(&crate_dir().join("expected_failures.toml")).unwrap();
    let (reports, harness) = run_all(&Classifier::bundled().unwrap(), &fixtures, &expected);

    let report = crate::format_report(&reports, &harness);
    println!("{}", report);
    assert!(harness.success(), "{}", report);
    assert!(harness.fixed.is_empty(), "{}", report);
    assert_eq!(harness.expected_failures, expected.count(), "{}", report);
}

#[test]
fn test_ledger_points_at_real_cases() {
    let expected = ExpectedFailures::load(&crate_dir().join("expected_failures.toml")).unwrap();
    for entry in expected.known.iter().chain(expected.pending.iter()) {
        let fixture = fixture(&entry.fixture);
        assert!(
            fixture.case(&entry.case).is_some(),
            "{}#{} is not a case",
            entry.fixture,
            entry.case
        );
        assert!(entry.reason.is_some(), "{}#{} needs a reason", entry.fixture, entry.case);
    }
}

#[test]
fn test_scenarios_fixture() {
    let fixture = fixture("scenarios.toml");
    assert_eq!(fixture.title.as_deref(), Some("Reference scenarios"));

    let waiting = fixture.case("still-waiting").unwrap();
    assert_eq!(waiting.label, Label::Negative);
    assert_eq!(waiting.reason, Some(Reason::ContextScore));
    assert_eq!(
        waiting.features,
        vec![ContextFeature::TimeFrustration, ContextFeature::CommunicationFailure]
    );
}

#[test]
fn test_every_feature_is_covered() {
    let fixtures = load_all_fixtures(&crate_dir().join("fixtures")).unwrap();
    for feature in ContextFeature::ALL {
        let covered = fixtures
            .iter()
            .flat_map(|(_, f)| &f.cases)
            .any(|case| case.features.contains(&feature));
        assert!(covered, "no fixture case expects {}", feature);
    }
}
