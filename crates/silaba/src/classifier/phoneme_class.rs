//! Phonological character classes.
//!
//! Every predicate takes a grapheme as `&str` (one letter, or a two-letter
//! unit such as `"ch"` or `"qu"`). Predicates whose answer depends on the
//! following grapheme take it as `Option<&str>`; `None` (end of word) never
//! satisfies a context-sensitive branch.

/// Oral and nasal vowel graphemes.
const VOWELS: [&str; 16] = [
  "a", "e", "o", "i", "u", "á", "é", "ó", "ú", "í", "ã", "õ", "â", "ê", "ô", "à",
];

/// Plain consonant letters.
const CONSONANT_LETTERS: [&str; 20] = [
  "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "q", "r", "s", "t", "v", "w", "x",
  "z",
];

/// Digraphs that always form a single grapheme.
const DIGRAPHS: [&str; 3] = ["nh", "lh", "ch"];

/// Pairs that form a single grapheme only before a front vowel.
const CONTEXT_DIGRAPHS: [&str; 2] = ["qu", "gu"];

/// "c" and "g", whose class depends on the following vowel.
const VELARS: [&str; 2] = ["c", "g"];

const FRONT_VOWELS: [&str; 2] = ["e", "i"];
const BACK_VOWELS: [&str; 3] = ["a", "o", "u"];

fn followed_by(next: Option<&str>, set: &[&str]) -> bool {
  next.is_some_and(|n| set.contains(&n))
}

/// Returns `true` for vowel graphemes, plain or accented.
pub fn is_vowel(g: &str) -> bool {
  VOWELS.contains(&g)
}

/// Returns `true` for "i" and "u", which may act as semivowels.
pub fn is_glide(g: &str) -> bool {
  matches!(g, "i" | "u")
}

/// "m", "n"
pub fn is_nasal_consonant(g: &str) -> bool {
  matches!(g, "m" | "n")
}

/// "l", "r", "rr"
pub fn is_liquid_consonant(g: &str) -> bool {
  matches!(g, "l" | "r" | "rr")
}

/// Fricatives: f v s ç z j x, the digraphs "ss" and "ch", and "c"/"g"
/// before "e"/"i".
pub fn is_fricative_consonant(g: &str, next: Option<&str>) -> bool {
  if matches!(g, "f" | "v" | "s" | "ç" | "z" | "j" | "x" | "ss" | "ch") {
    return true;
  }

  VELARS.contains(&g) && followed_by(next, &FRONT_VOWELS)
}

/// Occlusives: p t b d, "c"/"g" before "a"/"o"/"u", and "qu"/"gu" before
/// "e"/"i".
pub fn is_occlusive_consonant(g: &str, next: Option<&str>) -> bool {
  if matches!(g, "p" | "t" | "b" | "d") {
    return true;
  }

  if VELARS.contains(&g) {
    return followed_by(next, &BACK_VOWELS);
  }

  CONTEXT_DIGRAPHS.contains(&g) && followed_by(next, &FRONT_VOWELS)
}

/// Generic consonant test, including the "lh"/"nh" digraphs and every
/// specialised class above.
pub fn is_consonant(g: &str, next: Option<&str>) -> bool {
  if CONSONANT_LETTERS.contains(&g) || matches!(g, "lh" | "nh") {
    return true;
  }

  is_occlusive_consonant(g, next)
    || is_fricative_consonant(g, next)
    || is_liquid_consonant(g)
    || is_nasal_consonant(g)
}

/// `true` when `pair` is a digraph that is always merged ("nh", "lh", "ch").
pub fn is_digraph(pair: &str) -> bool {
  DIGRAPHS.contains(&pair)
}

/// `true` when `pair` is "qu"/"gu" and `next` is "e" or "i".
pub fn is_context_digraph(pair: &str, next: Option<&str>) -> bool {
  CONTEXT_DIGRAPHS.contains(&pair) && followed_by(next, &FRONT_VOWELS)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn vowels_include_accented_and_nasal_forms() {
    for v in ["a", "é", "ô", "ã", "õ", "à", "í"] {
      assert!(is_vowel(v), "{v} should be a vowel");
    }
    assert!(!is_vowel("y"));
    assert!(!is_vowel("qu"));
    assert!(!is_vowel(""));
  }

  #[test]
  fn glides_are_i_and_u_only() {
    assert!(is_glide("i"));
    assert!(is_glide("u"));
    assert!(!is_glide("í"));
    assert!(!is_glide("e"));
  }

  #[test]
  fn liquid_includes_double_r() {
    assert!(is_liquid_consonant("rr"));
    assert!(is_liquid_consonant("l"));
    assert!(!is_liquid_consonant("lh"));
  }

  #[test]
  fn velar_fricative_needs_front_vowel() {
    assert!(is_fricative_consonant("c", Some("e")));
    assert!(is_fricative_consonant("g", Some("i")));
    assert!(!is_fricative_consonant("c", Some("a")));
    assert!(!is_fricative_consonant("c", None));
    assert!(is_fricative_consonant("ch", None));
    assert!(is_fricative_consonant("ç", None));
  }

  #[test]
  fn velar_occlusive_needs_back_vowel() {
    assert!(is_occlusive_consonant("c", Some("a")));
    assert!(is_occlusive_consonant("g", Some("u")));
    assert!(!is_occlusive_consonant("g", Some("e")));
    assert!(!is_occlusive_consonant("g", None));
    assert!(is_occlusive_consonant("t", None));
  }

  #[test]
  fn qu_gu_are_occlusive_before_front_vowel() {
    assert!(is_occlusive_consonant("qu", Some("e")));
    assert!(is_occlusive_consonant("gu", Some("i")));
    assert!(!is_occlusive_consonant("qu", Some("a")));
    assert!(!is_occlusive_consonant("qu", None));
  }

  #[test]
  fn consonant_covers_digraphs_and_specialised_classes() {
    assert!(is_consonant("nh", None));
    assert!(is_consonant("lh", None));
    assert!(is_consonant("ç", None));
    assert!(is_consonant("ch", None));
    assert!(is_consonant("rr", None));
    assert!(is_consonant("qu", Some("e")));
    assert!(!is_consonant("qu", None));
    assert!(!is_consonant("a", Some("b")));
    assert!(!is_consonant(" ", None));
  }

  #[test]
  fn digraph_tables() {
    assert!(is_digraph("ch"));
    assert!(!is_digraph("qu"));
    assert!(is_context_digraph("qu", Some("i")));
    assert!(!is_context_digraph("qu", Some("a")));
    assert!(!is_context_digraph("gu", None));
  }
}
