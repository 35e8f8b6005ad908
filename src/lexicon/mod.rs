//! The lexicon store.
//!
//! Lexicons are human-maintained phrase lists, one per [`Category`], each
//! tagged with the language it was written in. A [`LexiconSet`] is compiled
//! once at startup and never mutated afterwards, so it can be shared across
//! threads behind an `Arc` without locking.

mod phrase;
mod toml_source;

pub use phrase::Phrase;
pub use toml_source::TomlLexiconSource;

use crate::error::{ConfigResult, ConfigurationError};
use crate::normalize::{Token, TokenSpan};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Lexicon shipped with the crate.
pub const BUNDLED_LEXICON: &str = include_str!("../../lexicons/default.toml");

/// Every lexicon the engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Critical,
    SupportFailure,
    Technical,
    NegativeLanguage,
    Exclusion,
    Problem,
    Emotion,
    Help,
    Intensifier,
    Negation,
    /// English negative contractions; also the exclusion veto vocabulary.
    NegativeContraction,
    PositiveContext,
    Urgency,
    CommunicationFailure,
    Waiting,
    Impact,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Critical,
        Category::SupportFailure,
        Category::Technical,
        Category::NegativeLanguage,
        Category::Exclusion,
        Category::Problem,
        Category::Emotion,
        Category::Help,
        Category::Intensifier,
        Category::Negation,
        Category::NegativeContraction,
        Category::PositiveContext,
        Category::Urgency,
        Category::CommunicationFailure,
        Category::Waiting,
        Category::Impact,
    ];

    /// Table name used in lexicon files.
    pub fn name(self) -> &'static str {
        match self {
            Category::Critical => "critical",
            Category::SupportFailure => "support_failure",
            Category::Technical => "technical",
            Category::NegativeLanguage => "negative_language",
            Category::Exclusion => "exclusion",
            Category::Problem => "problem",
            Category::Emotion => "emotion",
            Category::Help => "help",
            Category::Intensifier => "intensifier",
            Category::Negation => "negation",
            Category::NegativeContraction => "negative_contraction",
            Category::PositiveContext => "positive_context",
            Category::Urgency => "urgency",
            Category::CommunicationFailure => "communication_failure",
            Category::Waiting => "waiting",
            Category::Impact => "impact",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Language a phrase was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    /// Romanized Hindi.
    #[serde(rename = "hi-latin")]
    HindiLatin,
}

/// A raw phrase as handed over by a [`LexiconSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePhrase {
    pub language: Language,
    pub text: String,
}

impl SourcePhrase {
    pub fn new(language: Language, text: impl Into<String>) -> Self {
        Self {
            language,
            text: text.into(),
        }
    }
}

/// Provider of human-maintained phrase lists.
pub trait LexiconSource {
    /// Phrases for `category`, in the order they should be matched.
    fn list_category(&self, category: Category) -> Vec<SourcePhrase>;
}

/// One compiled phrase with its language tag.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub language: Language,
    pub phrase: Phrase,
}

/// Where a lexicon entry matched inside a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermHit {
    /// Index of the entry within its lexicon.
    pub entry: usize,
    pub span: TokenSpan,
}

/// A compiled, non-empty, duplicate-free phrase list.
#[derive(Debug, Clone)]
pub struct Lexicon {
    category: Category,
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    fn compile(category: Category, phrases: Vec<SourcePhrase>) -> ConfigResult<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(phrases.len());

        for SourcePhrase { language, text } in phrases {
            let phrase = Phrase::parse(&text).map_err(|reason| ConfigurationError::InvalidPhrase {
                category,
                phrase: text.clone(),
                reason,
            })?;
            if !seen.insert(phrase.canonical()) {
                warn!(%category, phrase = %text, "dropping duplicate lexicon phrase");
                continue;
            }
            entries.push(LexiconEntry { language, phrase });
        }

        if entries.is_empty() {
            return Err(ConfigurationError::EmptyCategory { category });
        }

        Ok(Self { category, entries })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries written in `language`.
    pub fn count_language(&self, language: Language) -> usize {
        self.entries.iter().filter(|e| e.language == language).count()
    }

    /// First entry, in lexicon order, that matches anywhere in `tokens`.
    pub fn find(&self, tokens: &[Token]) -> Option<(&LexiconEntry, TokenSpan)> {
        self.entries
            .iter()
            .find_map(|entry| entry.phrase.find(tokens).map(|span| (entry, span)))
    }

    pub fn matches_any(&self, tokens: &[Token]) -> bool {
        self.find(tokens).is_some()
    }

    /// Every occurrence of every entry, ordered by entry then position.
    pub fn hits(&self, tokens: &[Token]) -> Vec<TermHit> {
        self.entries
            .iter()
            .enumerate()
            .flat_map(|(entry, e)| {
                e.phrase
                    .occurrences(tokens)
                    .map(move |span| TermHit { entry, span })
            })
            .collect()
    }
}

/// All lexicons, indexed by [`Category`].
#[derive(Debug, Clone)]
pub struct LexiconSet {
    lexicons: Vec<Lexicon>,
}

impl LexiconSet {
    /// Compile every category from `source`, failing on the first category
    /// that is empty or holds a malformed phrase.
    pub fn load(source: &impl LexiconSource) -> ConfigResult<Self> {
        let lexicons = Category::ALL
            .iter()
            .map(|&category| Lexicon::compile(category, source.list_category(category)))
            .collect::<ConfigResult<Vec<_>>>()?;
        let set = Self { lexicons };

        info!(
            categories = set.lexicons.len(),
            phrases = set.phrase_count(),
            critical = set.get(Category::Critical).len(),
            exclusion = set.get(Category::Exclusion).len(),
            "lexicons loaded"
        );
        Ok(set)
    }

    /// Load a TOML lexicon file.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        Self::load(&TomlLexiconSource::from_path(path)?)
    }

    /// The lexicon shipped with the crate, compiled once per process.
    pub fn bundled() -> ConfigResult<Arc<LexiconSet>> {
        static BUNDLED: OnceCell<Arc<LexiconSet>> = OnceCell::new();
        BUNDLED
            .get_or_try_init(|| {
                let source = TomlLexiconSource::parse("bundled lexicon", BUNDLED_LEXICON)?;
                LexiconSet::load(&source).map(Arc::new)
            })
            .map(Arc::clone)
    }

    pub fn get(&self, category: Category) -> &Lexicon {
        &self.lexicons[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lexicon> {
        self.lexicons.iter()
    }

    pub fn phrase_count(&self) -> usize {
        self.lexicons.iter().map(Lexicon::len).sum()
    }
}
