//! TOML lexicon files.
//!
//! ```toml
//! [critical]
//! en = ["refund", "want ... refund"]
//! hi_latin = ["paisa wapas"]
//! ```

use super::{Category, Language, LexiconSource, SourcePhrase};
use crate::error::{ConfigResult, ConfigurationError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryTable {
    #[serde(default)]
    en: Vec<String>,
    #[serde(default)]
    hi_latin: Vec<String>,
}

/// Lexicon source backed by a parsed TOML document.
#[derive(Debug, Clone, Default)]
pub struct TomlLexiconSource {
    categories: BTreeMap<Category, CategoryTable>,
}

impl TomlLexiconSource {
    /// Parse lexicon TOML. `origin` names the document in error messages.
    pub fn parse(origin: &str, content: &str) -> ConfigResult<Self> {
        let categories = toml::from_str(content).map_err(|source| ConfigurationError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        Ok(Self { categories })
    }

    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&path.display().to_string(), &content)
    }
}

impl LexiconSource for TomlLexiconSource {
    fn list_category(&self, category: Category) -> Vec<SourcePhrase> {
        let table = match self.categories.get(&category) {
            Some(table) => table,
            None => return Vec::new(),
        };
        let english = table
            .en
            .iter()
            .map(|text| SourcePhrase::new(Language::English, text.as_str()));
        let hindi = table
            .hi_latin
            .iter()
            .map(|text| SourcePhrase::new(Language::HindiLatin, text.as_str()));
        english.chain(hindi).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::tests::minimal_toml;
    use crate::lexicon::LexiconSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_english_entries_precede_hindi() {
        let source = TomlLexiconSource::parse(
            "test",
            "[waiting]\nhi_latin = [\"kab tak\"]\nen = [\"still waiting\"]\n",
        )
        .unwrap();
        let phrases = source.list_category(Category::Waiting);
        assert_eq!(
            phrases,
            vec![
                SourcePhrase::new(Language::English, "still waiting"),
                SourcePhrase::new(Language::HindiLatin, "kab tak"),
            ]
        );
        assert!(source.list_category(Category::Impact).is_empty());
    }

    #[test]
    fn test_unknown_category_is_a_parse_error() {
        let err = TomlLexiconSource::parse("lexicon.toml", "[critcal]\nen = [\"refund\"]\n")
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse lexicon.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(minimal_toml().as_bytes()).unwrap();
        let set = LexiconSet::from_path(file.path()).unwrap();
        assert_eq!(set.phrase_count(), Category::ALL.len());
    }

    #[test]
    fn test_missing_file() {
        let err = TomlLexiconSource::from_path(Path::new("/nonexistent/lexicon.toml")).unwrap_err();
        assert!(matches!(err, ConfigurationError::Read { .. }));
    }
}
