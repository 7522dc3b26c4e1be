//! Description sentiment: lexicon, scorer and the record annotator.
//!
//! Scores are deterministic for a fixed lexicon; see [`LEXICON_VERSION`].

pub mod analyzer;
pub mod annotator;
mod default_words;
pub mod lexicon;

pub use analyzer::PolarityAnalyzer;
pub use annotator::SentimentAnnotator;
pub use lexicon::{LexiconError, PolarityLexicon, LEXICON_VERSION};
