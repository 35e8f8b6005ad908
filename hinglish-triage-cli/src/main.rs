//! Classify chat messages from the command line.
//!
//! Usage:
//!   hinglish-triage "I want a refund" "kab tak?"
//!   cat messages.txt | hinglish-triage --explain
//!   hinglish-triage --lexicons my.toml --config triage.toml --categories "..."
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use hinglish_triage::{
    ClassificationResult, Classifier, ClassifierConfig, LexiconSet, PatternCategory,
};

/// Label chat messages NEGATIVE or NEUTRAL.
#[derive(Parser, Debug)]
#[command(name = "hinglish-triage")]
#[command(about = "Classify English and Hindi-Latin chat messages")]
struct Args {
    /// Lexicon TOML file (defaults to the bundled lexicon)
    #[arg(long, value_name = "PATH")]
    lexicons: Option<PathBuf>,

    /// Classifier config TOML file (threshold, windows, weights)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the underlined evidence instead of JSON
    #[arg(long)]
    explain: bool,

    /// Also report every pattern category that matches
    #[arg(long)]
    categories: bool,

    /// Messages to classify; read one per line from stdin when empty
    messages: Vec<String>,
}

#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    result: &'a ClassificationResult,
    /// Severity rank of the matched category, 1 being the most severe.
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<PatternCategory>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let classifier = build_classifier(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.messages.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            writeln!(out, "{}", render(&classifier, &args, &line)?)?;
        }
    } else {
        for message in &args.messages {
            writeln!(out, "{}", render(&classifier, &args, message)?)?;
        }
    }

    Ok(())
}

fn build_classifier(args: &Args) -> Result<Classifier> {
    let lexicons = match &args.lexicons {
        Some(path) => Arc::new(
            LexiconSet::from_path(path)
                .with_context(|| format!("loading lexicons from {}", path.display()))?,
        ),
        None => LexiconSet::bundled().context("loading bundled lexicons")?,
    };
    let config = match &args.config {
        Some(path) => ClassifierConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ClassifierConfig::default(),
    };

    info!(
        phrases = lexicons.phrase_count(),
        threshold = config.threshold,
        "classifier ready"
    );
    Ok(Classifier::new(lexicons, &config)?)
}

fn render(classifier: &Classifier, args: &Args, message: &str) -> Result<String> {
    let categories = args
        .categories
        .then(|| classifier.matched_categories(message));

    if args.explain {
        let mut text = classifier.explain(message).to_string();
        if let Some(categories) = categories {
            let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
            text.push_str(&format!("\ncategories: {}", names.join(", ")));
        }
        text.push('\n');
        return Ok(text);
    }

    let result = classifier.classify(message);
    let output = Output {
        result: &result,
        priority: result.matched_category.map(PatternCategory::priority),
        categories,
    };
    Ok(serde_json::to_string(&output)?)
}
