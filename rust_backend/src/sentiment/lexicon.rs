//! Polarity lexicon for description scoring.
//!
//! Maps lower-cased words to a polarity in `[-1, 1]`, and additionally knows
//! which words intensify the next scored word and which negate it.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Identifier of the embedded lexicon. Bump whenever default word lists change,
/// since scores are only reproducible for a fixed lexicon.
pub const LEXICON_VERSION: &str = "catalog-lexicon-1";

static DEFAULT_LEXICON: Lazy<Arc<PolarityLexicon>> =
    Lazy::new(|| Arc::new(super::default_words::build_default_lexicon()));

/// Errors raised while loading a custom lexicon file.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse lexicon file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Polarity for '{word}' must be within [-1, 1], got {value}")]
    InvalidPolarity { word: String, value: f64 },

    #[error("Intensifier '{word}' must have a positive multiplier, got {value}")]
    InvalidIntensifier { word: String, value: f64 },
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    words: HashMap<String, f64>,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
    #[serde(default)]
    negations: Vec<String>,
}

/// Word-level polarity lexicon.
///
/// # Example
///
/// ```
/// use netflix_insights::sentiment::PolarityLexicon;
///
/// let mut lexicon = PolarityLexicon::new("custom");
/// lexicon.add_word("Thrilling", 0.6);
/// lexicon.add_intensifier("very", 1.3);
/// lexicon.add_negation("not");
///
/// assert_eq!(lexicon.polarity("thrilling"), Some(0.6));
/// assert_eq!(lexicon.intensity("VERY"), Some(1.3));
/// assert!(lexicon.is_negation("not"));
/// ```
#[derive(Debug, Clone)]
pub struct PolarityLexicon {
    version: String,
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl PolarityLexicon {
    /// Create an empty lexicon.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            words: HashMap::new(),
            intensifiers: HashMap::new(),
            negations: HashSet::new(),
        }
    }

    /// Shared handle to the embedded default lexicon.
    pub fn shared_default() -> Arc<PolarityLexicon> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    /// Load a lexicon from a TOML file.
    ///
    /// ```toml
    /// version = "my-lexicon-2"
    /// negations = ["not", "never"]
    ///
    /// [words]
    /// gripping = 0.5
    /// bleak = -0.4
    ///
    /// [intensifiers]
    /// very = 1.3
    /// ```
    ///
    /// The file replaces the default lexicon entirely.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = toml::from_str(content)?;
        let mut lexicon = Self::new(file.version.unwrap_or_else(|| "custom".to_string()));

        for (word, value) in file.words {
            if !(-1.0..=1.0).contains(&value) {
                return Err(LexiconError::InvalidPolarity { word, value });
            }
            lexicon.add_word(&word, value);
        }
        for (word, value) in file.intensifiers {
            if value.is_nan() || value <= 0.0 {
                return Err(LexiconError::InvalidIntensifier { word, value });
            }
            lexicon.add_intensifier(&word, value);
        }
        for word in file.negations {
            lexicon.add_negation(&word);
        }

        Ok(lexicon)
    }

    /// Add a scored word; polarity is clamped to `[-1, 1]`.
    pub fn add_word(&mut self, word: &str, polarity: f64) {
        self.words
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
    }

    pub fn add_intensifier(&mut self, word: &str, multiplier: f64) {
        self.intensifiers.insert(word.to_lowercase(), multiplier);
    }

    pub fn add_negation(&mut self, word: &str) {
        self.negations.insert(word.to_lowercase());
    }

    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    /// Negation words, plus any `n't` contraction.
    pub fn is_negation(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        lower.ends_with("n't") || self.negations.contains(&lower)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for PolarityLexicon {
    fn default() -> Self {
        DEFAULT_LEXICON.as_ref().clone()
    }
}
