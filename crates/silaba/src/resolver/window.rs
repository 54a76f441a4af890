//! Fixed-width context window around the cursor.

use crate::classifier::{
  is_consonant, is_fricative_consonant, is_glide, is_liquid_consonant, is_nasal_consonant,
  is_occlusive_consonant, is_vowel,
};
use crate::grapheme::Grapheme;

/// Position of a grapheme relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
  /// Two graphemes before the cursor
  Prev2,
  /// One grapheme before the cursor
  Prev1,
  /// The grapheme under the cursor (the candidate nucleus)
  Cur,
  /// One grapheme after the cursor
  Next1,
  /// Two graphemes after the cursor
  Next2,
  /// Three graphemes after the cursor
  Next3,
  /// Four graphemes after the cursor
  Next4,
}

impl Slot {
  fn offset(self) -> isize {
    match self {
      Slot::Prev2 => -2,
      Slot::Prev1 => -1,
      Slot::Cur => 0,
      Slot::Next1 => 1,
      Slot::Next2 => 2,
      Slot::Next3 => 3,
      Slot::Next4 => 4,
    }
  }

  fn index(self) -> usize {
    (self.offset() + 2) as usize
  }

  /// The slot right after this one, used as lookahead context by the
  /// two-argument classes. `Next4` has no successor inside the window.
  fn next(self) -> Option<Slot> {
    match self {
      Slot::Prev2 => Some(Slot::Prev1),
      Slot::Prev1 => Some(Slot::Cur),
      Slot::Cur => Some(Slot::Next1),
      Slot::Next1 => Some(Slot::Next2),
      Slot::Next2 => Some(Slot::Next3),
      Slot::Next3 => Some(Slot::Next4),
      Slot::Next4 => None,
    }
  }
}

/// Two-behind / four-ahead view of the grapheme sequence at one cursor
/// position, plus how many graphemes the open syllable already holds.
///
/// Slots past either end of the word are `None`; no class predicate ever
/// holds for an absent slot.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
  slots: [Option<&'a str>; 7],
  onset_len: usize,
}

impl<'a> Window<'a> {
  /// Builds the window centred on `cursor`.
  pub fn at(graphemes: &'a [Grapheme], cursor: usize, onset_len: usize) -> Self {
    let mut slots = [None; 7];
    for (i, slot) in slots.iter_mut().enumerate() {
      let pos = cursor as isize + i as isize - 2;
      if pos >= 0 {
        *slot = graphemes.get(pos as usize).map(Grapheme::as_str);
      }
    }
    Self { slots, onset_len }
  }

  /// `true` once consonants precede the nucleus in the open syllable.
  pub fn has_onset(&self) -> bool {
    self.onset_len != 0
  }

  /// Grapheme text at `slot`, or `None` past either end.
  pub fn get(&self, slot: Slot) -> Option<&'a str> {
    self.slots[slot.index()]
  }

  fn context(&self, slot: Slot) -> Option<&'a str> {
    slot.next().and_then(|s| self.get(s))
  }

  /// Exact text match.
  pub fn is(&self, slot: Slot, text: &str) -> bool {
    self.get(slot) == Some(text)
  }

  /// Text match against any of `texts`.
  pub fn is_any(&self, slot: Slot, texts: &[&str]) -> bool {
    self.get(slot).is_some_and(|g| texts.contains(&g))
  }

  /// End of word: the slot is absent or holds a blank.
  pub fn is_boundary(&self, slot: Slot) -> bool {
    matches!(self.get(slot), None | Some(" "))
  }

  pub(crate) fn vowel(&self, slot: Slot) -> bool {
    self.get(slot).is_some_and(is_vowel)
  }

  pub(crate) fn glide(&self, slot: Slot) -> bool {
    self.get(slot).is_some_and(is_glide)
  }

  pub(crate) fn nasal(&self, slot: Slot) -> bool {
    self.get(slot).is_some_and(is_nasal_consonant)
  }

  pub(crate) fn liquid(&self, slot: Slot) -> bool {
    self.get(slot).is_some_and(is_liquid_consonant)
  }

  pub(crate) fn consonant(&self, slot: Slot) -> bool {
    self.get(slot).is_some_and(|g| is_consonant(g, self.context(slot)))
  }

  pub(crate) fn occlusive(&self, slot: Slot) -> bool {
    self.get(slot).is_some_and(|g| is_occlusive_consonant(g, self.context(slot)))
  }

  pub(crate) fn fricative(&self, slot: Slot) -> bool {
    self.get(slot).is_some_and(|g| is_fricative_consonant(g, self.context(slot)))
  }
}
