//! Fixture file loading.

use crate::fixture::{parse_fixture, Fixture};
use crate::SpecError;
use std::fs;
use std::path::Path;

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> Result<Fixture, SpecError> {
    let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_fixture(&path.display().to_string(), &content)
}

/// Load all fixtures from a directory (glob: **/*.toml), sorted by relative path.
pub fn load_all_fixtures(dir: &Path) -> Result<Vec<(String, Fixture)>, SpecError> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, Fixture)>,
) -> Result<(), SpecError> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| SpecError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    })? {
        let entry = entry.map_err(|e| SpecError::Load {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == "toml") {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let fixture = load_fixture(&path)?;
            fixtures.push((relative.display().to_string(), fixture));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("scenarios.toml");
        let fixture = load_fixture(&path).unwrap();
        assert!(fixture.title.is_some());
        assert_eq!(fixture.cases.len(), 5);
    }

    #[test]
    fn test_load_all_fixtures() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let fixtures = load_all_fixtures(&dir).unwrap();
        let names: Vec<&str> = fixtures.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "context_features.toml",
                "negation_patterns.toml",
                "neutral_messages.toml",
                "scenarios.toml"
            ]
        );
    }

    #[test]
    fn test_nested_directories_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("hinglish")).unwrap();
        let mut nested = std::fs::File::create(dir.path().join("hinglish").join("a.toml")).unwrap();
        writeln!(nested, "[[case]]\nid = \"a\"\nmessage = \"bekar\"\nlabel = \"NEGATIVE\"").unwrap();
        std::fs::write(dir.path().join("notes.md"), "not a fixture").unwrap();

        let fixtures = load_all_fixtures(dir.path()).unwrap();
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].1.cases[0].id, "a");
    }

    #[test]
    fn test_missing_file() {
        let err = load_fixture(Path::new("/nonexistent/fixture.toml")).unwrap_err();
        assert!(matches!(err, SpecError::Load { .. }));
    }
}
