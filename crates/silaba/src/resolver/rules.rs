//! The phonological rule battery.
//!
//! Each rule is a named pattern over a [`Window`]. Rules are evaluated in
//! [`Rule::PRIORITY`] order and the first one whose pattern holds decides
//! what happens at that vowel. Numbers in [`Rule::citation`] follow the
//! numbering of Braga (2008), the thesis the rules were derived from.

use std::fmt;


use super::window::{Slot, Window};

/// What the engine does once a rule has matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
  /// Append the vowel and close the syllable.
  CloseOne,
  /// Append the vowel and the next grapheme, then close.
  CloseTwo,
  /// Append the vowel and the next two graphemes, then close.
  CloseThree,
  /// Append everything left in the word, then close.
  ConsumeRest,
}

impl Action {
  /// Graphemes consumed from the cursor, `None` for the rest of the word.
  pub fn width(self) -> Option<usize> {
    match self {
      Action::CloseOne => Some(1),
      Action::CloseTwo => Some(2),
      Action::CloseThree => Some(3),
      Action::ConsumeRest => None,
    }
  }
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Action::CloseOne => "close-1",
      Action::CloseTwo => "close-2",
      Action::CloseThree => "close-3",
      Action::ConsumeRest => "consume-rest",
    };
    f.write_str(name)
  }
}

/// Which syllable state a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
  /// The vowel is the first grapheme of its syllable (no onset).
  NucleusInitial,
  /// One or more consonants already opened the syllable.
  PostOnset,
}

/// A named syllabification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
  /// Onsetless vowel before a consonant that opens the next syllable
  /// ("a-ve", "a-bra-ço").
  OpenVowelBeforeOnset,
  /// Onsetless vowel with a glide, nasal or s/r/l/x/c coda ("ar-te").
  OpenVowelWithCoda,
  /// Onsetless vowel followed by another vowel.
  OpenHiatus,
  /// Onsetless vowel followed by a two-consonant coda and an occlusive.
  OpenVowelWithComplexCoda,
  /// Onsetless vowel before a heterosyllabic consonant pair ("ad-vo-ga-do").
  OpenVowelBeforeSplitPair,
  /// Vowel after an onset, a single consonant, then a vowel ("ca-sa").
  OpenSyllable,
  /// Diphthong followed by "r" and a consonant.
  DiphthongBeforeRhotic,
  /// Nucleus of a consonant+liquid onset, with a nasal or "s" coda
  /// ("tran-spor-te").
  ClusterNucleusWithCoda,
  /// Nucleus of a consonant+liquid onset before a consonant.
  ClusterNucleusBeforeConsonant,
  /// Diphthong with an "s" coda before an occlusive.
  DiphthongWithSibilantCoda,
  /// Nasal + "s" coda before an occlusive ("cons-tru-ir").
  NasalWithSibilantCoda,
  /// The same vowel twice in a row.
  GeminateVowel,
  /// Vowel followed by another vowel and a nasal.
  HiatusBeforeNasal,
  /// Falling diphthong before a consonant ("sau-da-de", "quei-jo").
  FallingDiphthongBeforeConsonant,
  /// Falling diphthong before a vowel or at the end of the word ("pai").
  FallingDiphthongBeforeVowelOrEnd,
  /// Vowel after a consonant+glide, followed by a single consonant.
  AfterGlideBeforeOnset,
  /// Vowel before an occlusive+liquid cluster ("pe-dra").
  BeforeOcclusiveLiquid,
  /// Liquid, nasal, "s" or "c" coda before the next onset ("car-ro").
  CodaBeforeOnset,
  /// Word-final liquid, nasal, "i" or "s" tail ("tar", "sol").
  FinalCoda,
  /// "ã"/"õ" nasal diphthong tail ("mãe", "pão").
  NasalDiphthongTail,
  /// Vowel followed by another vowel ("lu-a", "po-e-ta").
  Hiatus,
  /// Hiatus followed by a nasal coda and a consonant.
  HiatusBeforeNasalCoda,
  /// Unstressed "i" + a/o after a stressed vowel, ending the word.
  PostTonicHiatusTail,
  /// "i" + a/o hiatus before a consonant or another "i".
  IHiatusBeforeCoda,
}

impl Rule {
  /// Evaluation order. The first matching rule wins.
  pub const PRIORITY: [Rule; 24] = [
    Rule::OpenVowelBeforeOnset,
    Rule::OpenVowelWithCoda,
    Rule::OpenHiatus,
    Rule::OpenVowelWithComplexCoda,
    Rule::OpenVowelBeforeSplitPair,
    Rule::OpenSyllable,
    Rule::DiphthongBeforeRhotic,
    Rule::ClusterNucleusWithCoda,
    Rule::ClusterNucleusBeforeConsonant,
    Rule::DiphthongWithSibilantCoda,
    Rule::NasalWithSibilantCoda,
    Rule::GeminateVowel,
    Rule::HiatusBeforeNasal,
    Rule::FallingDiphthongBeforeConsonant,
    Rule::FallingDiphthongBeforeVowelOrEnd,
    Rule::AfterGlideBeforeOnset,
    Rule::BeforeOcclusiveLiquid,
    Rule::CodaBeforeOnset,
    Rule::FinalCoda,
    Rule::NasalDiphthongTail,
    Rule::Hiatus,
    Rule::HiatusBeforeNasalCoda,
    Rule::PostTonicHiatusTail,
    Rule::IHiatusBeforeCoda,
  ];

  /// Returns the first rule, in priority order, whose pattern holds.
  pub fn first_match(window: &Window<'_>) -> Option<Rule> {
    Rule::PRIORITY.into_iter().find(|rule| rule.matches(window))
  }

  /// Rule number in the source literature.
  pub fn citation(self) -> &'static str {
    match self {
      Rule::OpenVowelBeforeOnset => "R5",
      Rule::OpenVowelWithCoda => "R3",
      Rule::OpenHiatus => "R1",
      Rule::OpenVowelWithComplexCoda => "R2",
      Rule::OpenVowelBeforeSplitPair => "R4",
      Rule::OpenSyllable => "R6",
      Rule::DiphthongBeforeRhotic => "R7",
      Rule::ClusterNucleusWithCoda => "R8b",
      Rule::ClusterNucleusBeforeConsonant => "R8",
      Rule::DiphthongWithSibilantCoda => "R9",
      Rule::NasalWithSibilantCoda => "R10",
      Rule::GeminateVowel => "R16",
      Rule::HiatusBeforeNasal => "R17",
      Rule::FallingDiphthongBeforeConsonant => "R11",
      Rule::FallingDiphthongBeforeVowelOrEnd => "R12",
      Rule::AfterGlideBeforeOnset => "R13",
      Rule::BeforeOcclusiveLiquid => "R20",
      Rule::CodaBeforeOnset => "R14",
      Rule::FinalCoda => "R15",
      Rule::NasalDiphthongTail => "R23",
      Rule::Hiatus => "R18",
      Rule::HiatusBeforeNasalCoda => "R19",
      Rule::PostTonicHiatusTail => "R21",
      Rule::IHiatusBeforeCoda => "R22",
    }
  }

  /// Syllable state the rule is restricted to.
  pub fn regime(self) -> Regime {
    match self {
      Rule::OpenVowelBeforeOnset
      | Rule::OpenVowelWithCoda
      | Rule::OpenHiatus
      | Rule::OpenVowelWithComplexCoda
      | Rule::OpenVowelBeforeSplitPair => Regime::NucleusInitial,
      _ => Regime::PostOnset,
    }
  }

  /// Consumption performed when the rule fires.
  pub fn action(self) -> Action {
    match self {
      Rule::OpenVowelBeforeOnset
      | Rule::OpenHiatus
      | Rule::OpenSyllable
      | Rule::DiphthongBeforeRhotic
      | Rule::ClusterNucleusBeforeConsonant
      | Rule::GeminateVowel
      | Rule::HiatusBeforeNasal
      | Rule::AfterGlideBeforeOnset
      | Rule::BeforeOcclusiveLiquid
      | Rule::Hiatus
      | Rule::IHiatusBeforeCoda => Action::CloseOne,

      Rule::OpenVowelWithCoda
      | Rule::OpenVowelBeforeSplitPair
      | Rule::ClusterNucleusWithCoda
      | Rule::FallingDiphthongBeforeConsonant
      | Rule::FallingDiphthongBeforeVowelOrEnd
      | Rule::CodaBeforeOnset => Action::CloseTwo,

      Rule::OpenVowelWithComplexCoda
      | Rule::DiphthongWithSibilantCoda
      | Rule::NasalWithSibilantCoda
      | Rule::HiatusBeforeNasalCoda => Action::CloseThree,

      Rule::FinalCoda | Rule::NasalDiphthongTail | Rule::PostTonicHiatusTail => {
        Action::ConsumeRest
      }
    }
  }

  /// Whether the rule's pattern holds over `w`.
  ///
  /// The cursor is expected to sit on a vowel.
  pub fn matches(self, w: &Window<'_>) -> bool {
    let regime_ok = match self.regime() {
      Regime::NucleusInitial => !w.has_onset(),
      Regime::PostOnset => w.has_onset(),
    };
    if !regime_ok || !w.vowel(Slot::Cur) {
      return false;
    }

    use Slot::{Cur, Next1, Next2, Next3, Prev1, Prev2};

    // consonant+liquid onset: occlusive or fricative, then a liquid
    let cluster_onset = || (w.occlusive(Prev2) || w.fricative(Prev2)) && w.liquid(Prev1);

    match self {
      Rule::OpenVowelBeforeOnset => w.consonant(Next1) && (w.vowel(Next2) || w.liquid(Next2)),
      Rule::OpenVowelWithCoda => {
        (w.glide(Next1) || w.nasal(Next1) || w.is_any(Next1, &["s", "r", "l", "x", "c"]))
          && w.consonant(Next2)
      }
      Rule::OpenHiatus => w.vowel(Next1),
      Rule::OpenVowelWithComplexCoda => {
        w.consonant(Next1) && w.consonant(Next2) && w.occlusive(Next3)
      }
      Rule::OpenVowelBeforeSplitPair => {
        (w.occlusive(Next1) || w.fricative(Next1) || w.is(Next1, "g"))
          && (w.occlusive(Next2) || w.nasal(Next2) || w.is(Next2, "v"))
          && w.vowel(Next3)
      }
      Rule::OpenSyllable => w.consonant(Prev1) && w.consonant(Next1) && w.vowel(Next2),
      Rule::DiphthongBeforeRhotic => {
        w.consonant(Prev1) && w.glide(Next1) && w.is(Next2, "r") && w.consonant(Next3)
      }
      Rule::ClusterNucleusWithCoda => cluster_onset() && (w.nasal(Next1) || w.is(Next1, "s")),
      Rule::ClusterNucleusBeforeConsonant => cluster_onset() && w.consonant(Next1),
      Rule::DiphthongWithSibilantCoda => {
        w.consonant(Prev1) && w.glide(Next1) && w.is(Next2, "s") && w.occlusive(Next3)
      }
      Rule::NasalWithSibilantCoda => {
        w.consonant(Prev1) && w.nasal(Next1) && w.is(Next2, "s") && w.occlusive(Next3)
      }
      Rule::GeminateVowel => w.vowel(Next1) && w.get(Next1) == w.get(Cur),
      Rule::HiatusBeforeNasal => w.consonant(Prev1) && w.vowel(Next1) && w.nasal(Next2),
      Rule::FallingDiphthongBeforeConsonant => {
        (w.consonant(Prev1) || w.glide(Prev1)) && w.glide(Next1) && w.consonant(Next2)
      }
      Rule::FallingDiphthongBeforeVowelOrEnd => {
        w.consonant(Prev1) && w.glide(Next1) && (w.vowel(Next2) || w.is_boundary(Next2))
      }
      Rule::AfterGlideBeforeOnset => {
        w.consonant(Prev2) && w.glide(Prev1) && w.consonant(Next1) && w.vowel(Next2)
      }
      Rule::BeforeOcclusiveLiquid => {
        (w.occlusive(Next1) || w.is_any(Next1, &["c", "g"])) && w.liquid(Next2) && w.vowel(Next3)
      }
      Rule::CodaBeforeOnset => {
        w.consonant(Prev1)
          && (w.liquid(Next1) || w.nasal(Next1) || w.is_any(Next1, &["s", "c"]))
          && w.consonant(Next2)
          && (w.vowel(Next3) || w.liquid(Next3))
      }
      Rule::FinalCoda => {
        w.consonant(Prev1)
          && (w.liquid(Next1) || w.nasal(Next1) || w.is(Next1, "i"))
          && (w.is_boundary(Next2) || w.is(Next2, "s"))
      }
      Rule::NasalDiphthongTail => {
        w.is_any(Cur, &["ã", "õ"])
          && w.consonant(Prev1)
          && (w.is_any(Next1, &["o", "e"]) || w.is(Next2, "s"))
      }
      Rule::Hiatus => w.consonant(Prev1) && w.vowel(Next1),
      Rule::HiatusBeforeNasalCoda => {
        w.consonant(Prev1) && w.vowel(Next1) && w.nasal(Next2) && w.consonant(Next3)
      }
      Rule::PostTonicHiatusTail => {
        w.is(Cur, "i")
          && w.is_any(Prev2, &["á", "é", "í", "ó", "ú"])
          && w.consonant(Prev1)
          && w.is_any(Next1, &["a", "o"])
      }
      Rule::IHiatusBeforeCoda => {
        w.is(Cur, "i")
          && w.consonant(Prev1)
          && w.is_any(Next1, &["a", "o"])
          && (w.consonant(Next2) || w.is(Next2, "i"))
      }
    }
  }
}

impl fmt::Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.citation())
  }
}
