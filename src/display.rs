//! Explanation rendering.

use crate::classifier::{ClassificationResult, Reason};
use crate::normalize::{NormalizedMessage, TokenSpan};
use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

/// One underlined piece of evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Tokens to underline; `None` for message-level evidence on an empty message.
    pub span: Option<TokenSpan>,
    pub label: String,
}

impl Highlight {
    pub fn new(span: Option<TokenSpan>, label: impl Into<String>) -> Self {
        Self {
            span,
            label: label.into(),
        }
    }
}

/// A classification with the evidence that produced it.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub message: NormalizedMessage,
    pub result: ClassificationResult,
    pub highlights: Vec<Highlight>,
}

impl Explanation {
    pub fn new(
        message: NormalizedMessage,
        result: ClassificationResult,
        highlights: Vec<Highlight>,
    ) -> Self {
        Self {
            message,
            result,
            highlights,
        }
    }
}

// i  want  a  refund  this  is  unacceptable
//             ╰────╯CRITICAL "refund"
// => NEGATIVE (PATTERN_MATCH, CRITICAL)
//
// this  is  not  good  at  all
//           ╰───────╯NEGATED_POSITIVITY +2
// => NEGATIVE (CONTEXT_SCORE, score 2)
impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_start_col = Vec::new();
        let mut token_end_col = Vec::new();

        let mut opening_line = String::new();
        for (i, token) in self.message.tokens().iter().enumerate() {
            if i > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_start_col.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.text);
            token_end_col.push(UnicodeWidthStr::width(&*opening_line));
        }
        f.write_str(&opening_line)?;

        for highlight in &self.highlights {
            f.write_char('\n')?;

            let span = highlight
                .span
                .filter(|s| !s.is_empty() && s.end <= token_end_col.len());
            let Some(span) = span else {
                write!(f, "· {}", highlight.label)?;
                continue;
            };

            let start_col = token_start_col[span.start];
            for _ in 0..start_col {
                f.write_char(' ')?;
            }
            f.write_char('╰')?;

            let end_col = token_end_col[span.end - 1];
            for _ in (start_col + 1)..end_col.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end_col - start_col > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&highlight.label)?;
        }

        let result = &self.result;
        write!(f, "\n=> {} ({}", result.label, result.reason)?;
        match (result.reason, result.matched_category) {
            (Reason::PatternMatch, Some(category)) => write!(f, ", {}", category)?,
            (Reason::ContextScore | Reason::Default, _) => {
                write!(f, ", score {}", result.context_score)?
            }
            _ => {}
        }
        f.write_char(')')
    }
}

#[cfg(test)]
mod tests {
    use crate::Classifier;

    fn explain(text: &str) -> String {
        Classifier::bundled().unwrap().explain(text).to_string()
    }

    #[test]
    fn test_pattern_match() {
        insta::assert_snapshot!(explain("I want a refund, this is unacceptable"), @r###"
        i  want  a  refund  this  is  unacceptable
                    ╰────╯CRITICAL "refund"
        => NEGATIVE (PATTERN_MATCH, CRITICAL)
        "###);
    }

    #[test]
    fn test_negated_positivity() {
        insta::assert_snapshot!(explain("This is not good at all"), @r###"
        this  is  not  good  at  all
                  ╰───────╯NEGATED_POSITIVITY +2
        => NEGATIVE (CONTEXT_SCORE, score 2)
        "###);
    }

    #[test]
    fn test_exclusion_gap_phrase() {
        insta::assert_snapshot!(explain("How do I write a loop?"), @r###"
        how  do  i  write  a  loop
        ╰────────────────────────╯Exclusion "how do ... loop*"
        => NEUTRAL (EXCLUDED)
        "###);
    }

    #[test]
    fn test_overlapping_features() {
        insta::assert_snapshot!(explain("a, error! so upset"), @r###"
        a  error  so  upset
           ╰──────────────╯PROBLEM_EMOTION_PROXIMITY +1
                  ╰───────╯INTENSIFIED_NEGATIVE +1
        => NEGATIVE (CONTEXT_SCORE, score 2)
        "###);
    }

    #[test]
    fn test_message_level_evidence_without_tokens() {
        assert_eq!(
            explain("??"),
            "\n· MULTIPLE_QUESTIONS +1\n=> NEUTRAL (DEFAULT, score 1)"
        );
    }
}
