//! Pattern-based polarity scorer.
//!
//! Each description is split into word and `!` tokens. A scored word
//! contributes its lexicon polarity, scaled by any preceding intensifiers
//! and flipped (at half strength) by a preceding negation. The text polarity
//! is the mean of the contributions, clamped to `[-1, 1]`.

use std::sync::Arc;

use super::lexicon::PolarityLexicon;

/// Multiplier applied to a negated word's polarity.
pub const NEGATION_FACTOR: f64 = -0.5;

/// Boost applied to a scored word directly followed by `!`.
pub const EXCLAMATION_BOOST: f64 = 1.1;

/// Articles that sit between a modifier and the word it modifies.
const TRANSPARENT_WORDS: [&str; 3] = ["a", "an", "the"];

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Exclamation,
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '\'' || ch == '\u{2019}' {
            if ch == '\u{2019}' {
                current.push('\'');
            } else {
                current.extend(ch.to_lowercase());
            }
            continue;
        }

        flush_word(&mut current, &mut tokens);
        if ch == '!' {
            tokens.push(Token::Exclamation);
        }
    }
    flush_word(&mut current, &mut tokens);

    tokens
}

fn flush_word(current: &mut String, tokens: &mut Vec<Token>) {
    if current.is_empty() {
        return;
    }
    // Leading quotes are never part of the word; trailing ones are, for n't
    let word = current.trim_start_matches('\'');
    let word = if word.ends_with("n't") {
        word
    } else {
        word.trim_end_matches('\'')
    };
    if !word.is_empty() {
        tokens.push(Token::Word(word.to_string()));
    }
    current.clear();
}

/// Lexicon-backed polarity scorer. Total over all strings.
///
/// # Example
///
/// ```
/// use netflix_insights::sentiment::PolarityAnalyzer;
///
/// let analyzer = PolarityAnalyzer::default();
/// assert!(analyzer.polarity("A wonderful, heartwarming story.") > 0.0);
/// assert!(analyzer.polarity("A brutal and deadly feud.") < 0.0);
/// assert_eq!(analyzer.polarity(""), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PolarityAnalyzer {
    lexicon: Arc<PolarityLexicon>,
}

impl Default for PolarityAnalyzer {
    fn default() -> Self {
        Self::new(PolarityLexicon::shared_default())
    }
}

impl PolarityAnalyzer {
    pub fn new(lexicon: Arc<PolarityLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &PolarityLexicon {
        &self.lexicon
    }

    /// Polarity of `text` in `[-1, 1]`; `0.0` when no word is scored.
    pub fn polarity(&self, text: &str) -> f64 {
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return 0.0;
        }

        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        if mean.is_finite() {
            mean.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    /// Per-word contributions, in text order.
    fn assess(&self, text: &str) -> Vec<f64> {
        let mut assessments: Vec<f64> = Vec::new();
        let mut multiplier = 1.0;
        let mut negated = false;
        let mut last_was_scored = false;

        for token in tokenize(text) {
            let word = match token {
                Token::Exclamation => {
                    if last_was_scored {
                        if let Some(last) = assessments.last_mut() {
                            *last = (*last * EXCLAMATION_BOOST).clamp(-1.0, 1.0);
                        }
                    }
                    last_was_scored = false;
                    continue;
                }
                Token::Word(word) => word,
            };

            if TRANSPARENT_WORDS.contains(&word.as_str()) {
                continue;
            }
            if self.lexicon.is_negation(&word) {
                negated = !negated;
                last_was_scored = false;
                continue;
            }
            if let Some(factor) = self.lexicon.intensity(&word) {
                multiplier *= factor;
                last_was_scored = false;
                continue;
            }

            last_was_scored = false;
            if let Some(polarity) = self.lexicon.polarity(&word) {
                let mut score = polarity * multiplier;
                if negated {
                    score *= NEGATION_FACTOR;
                }
                assessments.push(score.clamp(-1.0, 1.0));
                last_was_scored = true;
            }

            multiplier = 1.0;
            negated = false;
        }

        assessments
    }
}
