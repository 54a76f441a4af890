//! Syllable Definition

use std::fmt;

use crate::grapheme::Grapheme;

/// An ordered, non-empty run of graphemes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Syllable {
  graphemes: Vec<Grapheme>,
}

impl Syllable {
  /// Constructor for Syllable
  pub fn new(graphemes: Vec<Grapheme>) -> Self {
    Self { graphemes }
  }

  /// Graphemes of this syllable, in order
  pub fn graphemes(&self) -> &[Grapheme] {
    &self.graphemes
  }

  /// Number of graphemes
  pub fn len(&self) -> usize {
    self.graphemes.len()
  }

  /// `true` if the syllable holds no grapheme (never the case for resolver output)
  pub fn is_empty(&self) -> bool {
    self.graphemes.is_empty()
  }

  /// Concatenated grapheme text
  pub fn text(&self) -> String {
    self.graphemes.iter().map(Grapheme::as_str).collect()
  }
}

impl fmt::Display for Syllable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for g in &self.graphemes {
      f.write_str(g.as_str())?;
    }
    Ok(())
  }
}
