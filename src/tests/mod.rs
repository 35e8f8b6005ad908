mod properties;
mod scenarios;

use crate::{ClassificationResult, Classifier};
use once_cell::sync::Lazy;

static CLASSIFIER: Lazy<Classifier> =
    Lazy::new(|| Classifier::bundled().expect("bundled lexicon must load"));

pub(crate) fn classify(text: &str) -> ClassificationResult {
    CLASSIFIER.classify(text)
}
