//! Serializable snapshot of a syllabified word

use serde::{Deserialize, Serialize};

use crate::grapheme::Grapheme;
use crate::models::{Word, WordClass};

/// Syllabification result, shared by the CLI's JSON output and the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllabification {
  /// Input as received
  pub word: String,
  /// Trimmed, lower-cased input
  pub normalized: String,
  /// Grapheme sequence
  pub graphemes: Vec<String>,
  /// Syllables, left to right
  pub syllables: Vec<String>,
  /// Number of syllables
  pub syllable_count: usize,
  /// Classification by syllable count
  pub word_class: WordClass,
  /// Portuguese label of the word class ("Monossílaba", "Bisílaba", ...)
  pub word_class_label: String,
}

impl From<&Word> for Syllabification {
  fn from(word: &Word) -> Self {
    Self {
      word: word.raw().to_string(),
      normalized: word.normalized().to_string(),
      graphemes: word.graphemes().iter().map(Grapheme::to_string).collect(),
      syllables: word.syllable_texts(),
      syllable_count: word.syllable_count(),
      word_class: word.word_class(),
      word_class_label: word.word_class().portuguese_name().to_string(),
    }
  }
}
