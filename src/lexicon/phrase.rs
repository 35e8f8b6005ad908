//! Compiled lexicon phrases.
//!
//! A phrase is a sequence of segments separated by gaps (`...`). Words inside a
//! segment must match consecutive tokens; a word ending in `*` matches by
//! prefix. Segments after a gap may start any number of tokens later.

use crate::normalize::{tokenize, Token, TokenSpan};

const GAP: &str = "...";
const GAP_ELLIPSIS: &str = "\u{2026}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Word {
    Exact(String),
    Prefix(String),
}

impl Word {
    fn matches(&self, token: &str) -> bool {
        match self {
            Word::Exact(word) => token == word,
            Word::Prefix(prefix) => token.starts_with(prefix.as_str()),
        }
    }

    fn render(&self) -> String {
        match self {
            Word::Exact(word) => word.clone(),
            Word::Prefix(prefix) => format!("{}*", prefix),
        }
    }
}

/// A lexicon entry compiled for token matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    source: String,
    segments: Vec<Vec<Word>>,
}

impl Phrase {
    /// Compile a phrase. The error is a human-readable reason.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let source = raw.trim().to_lowercase();
        let mut segments = Vec::new();
        let mut current: Vec<Word> = Vec::new();

        for chunk in source.split_whitespace() {
            if chunk == GAP || chunk == GAP_ELLIPSIS {
                if current.is_empty() {
                    return Err(if segments.is_empty() {
                        "phrase starts with a gap".to_string()
                    } else {
                        "phrase contains adjacent gaps".to_string()
                    });
                }
                segments.push(std::mem::take(&mut current));
                continue;
            }

            let (body, is_prefix) = match chunk.strip_suffix('*') {
                Some(body) => (body, true),
                None => (chunk, false),
            };
            let mut words: Vec<String> = tokenize(body).into_iter().map(|t| t.text).collect();
            let last = match words.pop() {
                Some(last) => last,
                None => return Err(format!("`{}` contains no word characters", chunk)),
            };
            current.extend(words.into_iter().map(Word::Exact));
            current.push(if is_prefix {
                Word::Prefix(last)
            } else {
                Word::Exact(last)
            });
        }

        if current.is_empty() {
            return Err(if segments.is_empty() {
                "phrase is empty".to_string()
            } else {
                "phrase ends with a gap".to_string()
            });
        }
        segments.push(current);

        Ok(Self { source, segments })
    }

    /// The phrase as written in the lexicon, trimmed and lower-cased.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Normalized rendering used for duplicate detection.
    pub fn canonical(&self) -> String {
        self.segments
            .iter()
            .map(|segment| {
                segment
                    .iter()
                    .map(Word::render)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(" ... ")
    }

    /// Leftmost occurrence in `tokens`.
    pub fn find(&self, tokens: &[Token]) -> Option<TokenSpan> {
        (0..tokens.len()).find_map(|start| self.match_from(tokens, start))
    }

    /// Every start position at which the phrase matches.
    pub fn occurrences<'a>(&'a self, tokens: &'a [Token]) -> impl Iterator<Item = TokenSpan> + 'a {
        (0..tokens.len()).filter_map(move |start| self.match_from(tokens, start))
    }

    fn match_from(&self, tokens: &[Token], start: usize) -> Option<TokenSpan> {
        let (first, rest) = self.segments.split_first()?;
        let mut end = segment_end(first, tokens, start)?;
        for segment in rest {
            end = (end..tokens.len()).find_map(|at| segment_end(segment, tokens, at))?;
        }
        Some(TokenSpan::new(start, end))
    }
}

fn segment_end(segment: &[Word], tokens: &[Token], at: usize) -> Option<usize> {
    let window = tokens.get(at..at + segment.len())?;
    if segment
        .iter()
        .zip(window)
        .all(|(word, token)| word.matches(&token.text))
    {
        Some(at + segment.len())
    } else {
        None
    }
}
