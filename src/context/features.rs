//! Feature predicates and the rule table.

use super::{ContextFeature, Evidence, Predicate};
use crate::config::ProximityWindows;
use crate::lexicon::{Category, LexiconSet, TermHit};
use crate::normalize::NormalizedMessage;

/// Table order is evaluation and reporting order.
pub(super) const RULES: [(ContextFeature, Predicate); 10] = [
    (ContextFeature::ProblemEmotionProximity, problem_emotion_proximity),
    (ContextFeature::IntensifiedNegative, intensified_negative),
    (ContextFeature::NegatedPositivity, negated_positivity),
    (ContextFeature::ProblemHelp, problem_help),
    (ContextFeature::RepeatedTheme, repeated_theme),
    (ContextFeature::MultipleQuestions, multiple_questions),
    (ContextFeature::UrgentProblem, urgent_problem),
    (ContextFeature::CommunicationFailure, communication_failure),
    (ContextFeature::TimeFrustration, time_frustration),
    (ContextFeature::Consequence, consequence),
];

/// Role-lexicon hits for one message, computed once and shared by every rule.
pub(crate) struct FeatureInput<'a> {
    msg: &'a NormalizedMessage,
    lexicons: &'a LexiconSet,
    windows: &'a ProximityWindows,
    problem: Vec<TermHit>,
    emotion: Vec<TermHit>,
    help: Vec<TermHit>,
    intensifier: Vec<TermHit>,
    negation: Vec<TermHit>,
    positive: Vec<TermHit>,
    urgency: Vec<TermHit>,
}

impl<'a> FeatureInput<'a> {
    pub(crate) fn collect(
        msg: &'a NormalizedMessage,
        lexicons: &'a LexiconSet,
        windows: &'a ProximityWindows,
    ) -> Self {
        let hits = |category: Category| lexicons.get(category).hits(msg.tokens());
        Self {
            msg,
            lexicons,
            windows,
            problem: hits(Category::Problem),
            emotion: hits(Category::Emotion),
            help: hits(Category::Help),
            intensifier: hits(Category::Intensifier),
            negation: [Category::Negation, Category::NegativeContraction]
                .into_iter()
                .flat_map(hits)
                .collect(),
            positive: hits(Category::PositiveContext),
            urgency: hits(Category::Urgency),
        }
    }

    fn phrase(&self, category: Category) -> Option<Evidence> {
        self.lexicons
            .get(category)
            .find(self.msg.tokens())
            .map(|(_, span)| Evidence::Tokens(span))
    }
}

/// First `lead` hit followed by a `tail` hit starting 1..=window tokens later.
fn followed_within<'h>(
    lead: &[TermHit],
    tail: impl Iterator<Item = &'h TermHit> + Clone,
    window: usize,
) -> Option<Evidence> {
    lead.iter().find_map(|l| {
        tail.clone()
            .find(|t| t.span.start > l.span.start && t.span.start - l.span.start <= window)
            .map(|t| Evidence::Tokens(l.span.cover(t.span)))
    })
}

fn co_occur(a: &[TermHit], b: &[TermHit]) -> Option<Evidence> {
    let first = a.first()?;
    let second = b.first()?;
    Some(Evidence::Tokens(first.span.cover(second.span)))
}

fn problem_emotion_proximity(input: &FeatureInput<'_>) -> Option<Evidence> {
    let window = input.windows.problem_emotion;
    input.problem.iter().find_map(|p| {
        input
            .emotion
            .iter()
            .find(|e| p.span.start.abs_diff(e.span.start) <= window)
            .map(|e| Evidence::Tokens(p.span.cover(e.span)))
    })
}

fn intensified_negative(input: &FeatureInput<'_>) -> Option<Evidence> {
    followed_within(
        &input.intensifier,
        input.problem.iter().chain(input.emotion.iter()),
        input.windows.intensifier,
    )
}

fn negated_positivity(input: &FeatureInput<'_>) -> Option<Evidence> {
    followed_within(&input.negation, input.positive.iter(), input.windows.negation)
}

fn problem_help(input: &FeatureInput<'_>) -> Option<Evidence> {
    co_occur(&input.problem, &input.help)
}

fn repeated_theme(input: &FeatureInput<'_>) -> Option<Evidence> {
    // Hits are grouped by entry, so the first hit of an entry is its earliest.
    fn repeated(hits: &[TermHit]) -> Option<Evidence> {
        hits.iter().enumerate().find_map(|(i, first)| {
            hits.iter()
                .skip(i + 1)
                .filter(|h| h.entry == first.entry)
                .last()
                .map(|last| Evidence::Tokens(first.span.cover(last.span)))
        })
    }
    repeated(&input.problem).or_else(|| repeated(&input.emotion))
}

fn multiple_questions(input: &FeatureInput<'_>) -> Option<Evidence> {
    (input.msg.question_marks() >= 2).then_some(Evidence::Message)
}

fn urgent_problem(input: &FeatureInput<'_>) -> Option<Evidence> {
    co_occur(&input.urgency, &input.problem)
}

fn communication_failure(input: &FeatureInput<'_>) -> Option<Evidence> {
    input.phrase(Category::CommunicationFailure)
}

fn time_frustration(input: &FeatureInput<'_>) -> Option<Evidence> {
    input.phrase(Category::Waiting)
}

fn consequence(input: &FeatureInput<'_>) -> Option<Evidence> {
    input.phrase(Category::Impact)
}
