//! Word facade.
//!
//! Normalizes raw input, runs segmentation and boundary resolution, and
//! answers the derived queries (syllable count, word class, syllable by
//! distance from the end).

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grapheme::{Grapheme, segment};
use crate::models::Syllable;
use crate::resolver::{Decision, resolve};

/// Classification of a word by syllable count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
  /// One syllable
  Monosyllable,
  /// Two syllables
  Bisyllable,
  /// Three syllables
  Trisyllable,
  /// Four or more syllables, and also zero (empty input)
  Polysyllable,
}

impl WordClass {
  /// Classifies a syllable count. Zero falls through to `Polysyllable`.
  pub fn from_count(count: usize) -> Self {
    match count {
      1 => WordClass::Monosyllable,
      2 => WordClass::Bisyllable,
      3 => WordClass::Trisyllable,
      _ => WordClass::Polysyllable,
    }
  }

  /// English label.
  pub fn name(&self) -> &'static str {
    match self {
      WordClass::Monosyllable => "Monosyllable",
      WordClass::Bisyllable => "Bisyllable",
      WordClass::Trisyllable => "Trisyllable",
      WordClass::Polysyllable => "Polysyllable",
    }
  }

  /// Portuguese grammar term.
  pub fn portuguese_name(&self) -> &'static str {
    match self {
      WordClass::Monosyllable => "Monossílaba",
      WordClass::Bisyllable => "Bisílaba",
      WordClass::Trisyllable => "Trissílaba",
      WordClass::Polysyllable => "Polissílaba",
    }
  }
}

impl fmt::Display for WordClass {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Trims surrounding whitespace and lower-cases. Diacritics are kept.
pub fn normalize(raw: &str) -> String {
  raw.trim().to_lowercase()
}

/// One word and its syllabification.
///
/// Starts empty; [`Word::set`] replaces every derived field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
  raw: String,
  normalized: String,
  graphemes: Vec<Grapheme>,
  syllables: Vec<Syllable>,
  decisions: Vec<Decision>,
}

impl Word {
  /// Empty word (no syllables).
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds and syllabifies a word in one step.
  pub fn parse(raw: &str) -> Self {
    let mut word = Self::new();
    word.set(raw);
    word
  }

  /// Normalizes, segments and resolves `raw`, replacing all previous state.
  pub fn set(&mut self, raw: &str) {
    let normalized = normalize(raw);
    let graphemes = segment(&normalized);
    let resolution = resolve(&graphemes);

    debug!(
      word = %normalized,
      graphemes = graphemes.len(),
      syllables = resolution.syllables.len(),
      "word syllabified"
    );

    *self = Self {
      raw: raw.to_string(),
      normalized,
      graphemes,
      syllables: resolution.syllables,
      decisions: resolution.decisions,
    };
  }

  /// Input as given to [`Word::set`]
  pub fn raw(&self) -> &str {
    &self.raw
  }

  /// Trimmed, lower-cased input
  pub fn normalized(&self) -> &str {
    &self.normalized
  }

  /// Grapheme sequence of the normalized word
  pub fn graphemes(&self) -> &[Grapheme] {
    &self.graphemes
  }

  /// Syllables, left to right
  pub fn syllables(&self) -> &[Syllable] {
    &self.syllables
  }

  /// Rule decisions taken at each vowel, for diagnostics
  pub fn decisions(&self) -> &[Decision] {
    &self.decisions
  }

  /// Syllable texts, left to right
  pub fn syllable_texts(&self) -> Vec<String> {
    self.syllables.iter().map(Syllable::text).collect()
  }

  /// Number of syllables
  pub fn syllable_count(&self) -> usize {
    self.syllables.len()
  }

  /// Mono/Bi/Tri/Polysyllable by syllable count
  pub fn word_class(&self) -> WordClass {
    WordClass::from_count(self.syllable_count())
  }

  /// Syllable counted from the end, 1-based (1 = final syllable).
  ///
  /// `None` when `n` is outside `1..=syllable_count()`.
  pub fn syllable_from_end(&self, n: usize) -> Option<&Syllable> {
    if n == 0 {
      return None;
    }
    self.syllables.len().checked_sub(n).map(|i| &self.syllables[i])
  }

  /// Syllables joined with `separator`, e.g. `"ca - sa"`.
  pub fn hyphenate(&self, separator: &str) -> String {
    self.syllable_texts().join(separator)
  }
}

impl From<&str> for Word {
  fn from(raw: &str) -> Self {
    Self::parse(raw)
  }
}
