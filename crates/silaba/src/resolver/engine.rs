//! Syllable boundary resolution.
//!
//! Walks the grapheme sequence with a cursor. Consonants are appended to the
//! open syllable; at every vowel the rule battery picks an [`Action`], the
//! action's graphemes are appended and the syllable is closed. When no rule
//! matches, the rest of the word goes into the open syllable.

use tracing::trace;

use super::rules::{Action, Rule};
use super::window::Window;
use crate::classifier::is_vowel;
use crate::grapheme::Grapheme;
use crate::models::Syllable;

/// Outcome of the rule battery at one vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
  /// Cursor position (grapheme index) of the vowel
  pub position: usize,
  /// Matching rule, `None` when the fallback applied
  pub rule: Option<Rule>,
  /// Consumption performed
  pub action: Action,
}

impl Decision {
  /// `true` when no rule matched and the remainder was swallowed.
  pub fn is_fallback(&self) -> bool {
    self.rule.is_none()
  }
}

/// Syllables of one word together with the decision taken at each vowel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
  /// Syllables, left to right
  pub syllables: Vec<Syllable>,
  /// One entry per vowel the battery was evaluated at
  pub decisions: Vec<Decision>,
}

/// Graphemes of the syllable under construction.
#[derive(Debug, Default)]
struct SyllableBuilder {
  graphemes: Vec<Grapheme>,
}

impl SyllableBuilder {
  fn push(mut self, grapheme: &Grapheme) -> Self {
    self.graphemes.push(grapheme.clone());
    self
  }

  fn extend(mut self, graphemes: &[Grapheme]) -> Self {
    self.graphemes.extend_from_slice(graphemes);
    self
  }

  fn len(&self) -> usize {
    self.graphemes.len()
  }

  fn is_empty(&self) -> bool {
    self.graphemes.is_empty()
  }

  fn finish(self) -> Syllable {
    Syllable::new(self.graphemes)
  }
}

/// Splits a grapheme sequence into syllables.
///
/// Total: every grapheme ends up in exactly one syllable, in order, and no
/// syllable is empty. Each step moves the cursor forward by at least one.
pub fn resolve(graphemes: &[Grapheme]) -> Resolution {
  let mut resolution = Resolution::default();
  let mut builder = SyllableBuilder::default();
  let mut cursor = 0;

  while cursor < graphemes.len() {
    let current = &graphemes[cursor];

    if !is_vowel(current.as_str()) {
      builder = builder.push(current);
      cursor += 1;
      continue;
    }

    let window = Window::at(graphemes, cursor, builder.len());
    let rule = Rule::first_match(&window);
    let action = rule.map_or(Action::ConsumeRest, Rule::action);

    let end = match action.width() {
      Some(width) => (cursor + width).min(graphemes.len()),
      None => graphemes.len(),
    };

    let syllable = builder.extend(&graphemes[cursor..end]).finish();
    trace!(
      position = cursor,
      rule = rule.map_or("fallback", Rule::citation),
      %action,
      syllable = %syllable,
      "syllable closed"
    );

    resolution.decisions.push(Decision {
      position: cursor,
      rule,
      action,
    });
    resolution.syllables.push(syllable);
    builder = SyllableBuilder::default();
    cursor = end;
  }

  // a trailing consonant run with no vowel after it
  if !builder.is_empty() {
    resolution.syllables.push(builder.finish());
  }

  resolution
}
