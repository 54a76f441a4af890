//! Grapheme segmentation.
//!
//! Splits a normalized word into the units the boundary resolver walks over:
//! single letters, the digraphs "nh"/"lh"/"ch", and "qu"/"gu" when a front
//! vowel follows.

use std::fmt;

use crate::classifier::{is_context_digraph, is_digraph};

/// One indivisible phonographic unit: a single character or a merged pair.
///
/// Graphemes carry no identity beyond their text and their position in the
/// sequence they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grapheme(String);

impl Grapheme {
  /// Returns the grapheme text.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for Grapheme {
  fn from(s: &str) -> Self {
    Self(s.to_string())
  }
}

impl AsRef<str> for Grapheme {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Grapheme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Segments a normalized word into graphemes.
///
/// Left to right, greedy, no backtracking:
/// 1. "nh", "lh", "ch" are merged.
/// 2. "qu", "gu" are merged when the character after them is "e" or "i".
/// 3. Anything else is emitted one character at a time.
///
/// The input is expected to be trimmed and lower-cased already.
pub fn segment(normalized: &str) -> Vec<Grapheme> {
  let chars: Vec<char> = normalized.chars().collect();
  let mut graphemes = Vec::with_capacity(chars.len());

  let mut i = 0;
  while i < chars.len() {
    if let Some(&second) = chars.get(i + 1) {
      let pair: String = [chars[i], second].iter().collect();
      let after = chars.get(i + 2).map(char::to_string);

      if is_digraph(&pair) || is_context_digraph(&pair, after.as_deref()) {
        graphemes.push(Grapheme(pair));
        i += 2;
        continue;
      }
    }

    graphemes.push(Grapheme(chars[i].to_string()));
    i += 1;
  }

  graphemes
}
