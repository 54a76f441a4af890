//! crates/silaba/tests/syllabification_tests.rs
//!
//! End-to-end syllabification through the public `Word` facade.
//! Expected syllables follow the reference rule set, including its known
//! quirks (e.g. "fluir" → "flui" + "r", "ritmo" kept whole).

use silaba::grapheme::segment;
use silaba::models::normalize;
use silaba::{Syllable, Word, WordClass};

/// (input, expected syllables)
const REFERENCE: &[(&str, &[&str])] = &[
  ("casa", &["ca", "sa"]),
  ("pedra", &["pe", "dra"]),
  ("carro", &["car", "ro"]),
  ("chave", &["cha", "ve"]),
  ("ninho", &["ni", "nho"]),
  ("olho", &["o", "lho"]),
  ("queijo", &["quei", "jo"]),
  ("guerra", &["guer", "ra"]),
  ("aqui", &["a", "qui"]),
  ("água", &["á", "gu", "a"]),
  ("saudade", &["sau", "da", "de"]),
  ("pneu", &["pneu"]),
  ("pai", &["pai"]),
  ("país", &["pa", "ís"]),
  ("caixa", &["cai", "xa"]),
  ("quero", &["que", "ro"]),
  ("guitarra", &["gui", "tar", "ra"]),
  ("lua", &["lu", "a"]),
  ("mãe", &["mãe"]),
  ("pão", &["pão"]),
  ("leões", &["le", "õ", "es"]),
  ("cantar", &["can", "tar"]),
  ("ar", &["ar"]),
  ("ave", &["a", "ve"]),
  ("abraço", &["a", "bra", "ço"]),
  ("advogado", &["ad", "vo", "ga", "do"]),
  ("obter", &["ob", "ter"]),
  ("transporte", &["tran", "spor", "te"]),
  ("muito", &["mui", "to"]),
  ("coelho", &["co", "e", "lho"]),
  ("tatu", &["ta", "tu"]),
  ("sol", &["sol"]),
  ("vêm", &["vêm"]),
  ("beleza", &["be", "le", "za"]),
  ("teatro", &["te", "a", "tro"]),
  ("poeta", &["po", "e", "ta"]),
  ("ideia", &["i", "dei", "a"]),
  ("caos", &["ca", "os"]),
  ("criança", &["cri", "an", "ça"]),
  ("estrela", &["es", "tre", "la"]),
  ("biblioteca", &["bi", "bli", "o", "te", "ca"]),
  ("barco", &["bar", "co"]),
  ("espelho", &["es", "pe", "lho"]),
  ("fluir", &["flui", "r"]),
  ("computador", &["com", "pu", "ta", "dor"]),
  ("borboleta", &["bor", "bo", "le", "ta"]),
  ("chocolate", &["cho", "co", "la", "te"]),
  ("ilha", &["i", "lha"]),
  ("sapato", &["sa", "pa", "to"]),
];

#[test]
fn reference_words_are_split_as_expected() {
  for (input, expected) in REFERENCE {
    let word = Word::parse(input);
    assert_eq!(word.syllable_texts(), *expected, "unexpected syllables for {input:?}");
  }
}

#[test]
fn syllables_partition_the_grapheme_sequence() {
  let extra = ["", "a", "xyz", "  Pássaro ", "QUEIJO", "rrr", "aaaa", "ã", "hífen"];
  let inputs = REFERENCE.iter().map(|(w, _)| *w).chain(extra);

  for input in inputs {
    let word = Word::parse(input);
    let expected = segment(&normalize(input));

    let rebuilt: Vec<_> =
      word.syllables().iter().flat_map(|s| s.graphemes().iter().cloned()).collect();
    assert_eq!(rebuilt, expected, "partition broken for {input:?}");
    assert!(word.syllables().iter().all(|s| !s.is_empty()), "empty syllable in {input:?}");

    let joined: String = word.syllable_texts().concat();
    assert_eq!(joined, word.normalized());

    // at most one decision per grapheme
    assert!(word.decisions().len() <= word.graphemes().len());
  }
}

#[test]
fn inner_blank_ends_the_word_for_coda_rules() {
  // "l" before a blank is a final coda: the rest stays in the syllable
  let word = Word::parse("sol a");
  assert_eq!(word.syllable_texts(), ["sol a"]);
  assert_eq!(word.decisions()[0].rule.map(|r| r.citation()), Some("R15"));

  // falling diphthong before a blank closes on the glide
  let word = Word::parse("pai x");
  assert_eq!(word.syllable_texts(), ["pai", " x"]);
  assert_eq!(word.decisions()[0].rule.map(|r| r.citation()), Some("R12"));
}

#[test]
fn word_class_follows_syllable_count() {
  for (input, expected) in REFERENCE {
    let word = Word::parse(input);
    assert_eq!(word.word_class(), WordClass::from_count(expected.len()));
  }
  assert_eq!(Word::parse("sol").word_class(), WordClass::Monosyllable);
  assert_eq!(Word::parse("casa").word_class(), WordClass::Bisyllable);
  assert_eq!(Word::parse("beleza").word_class(), WordClass::Trisyllable);
  assert_eq!(Word::parse("advogado").word_class(), WordClass::Polysyllable);
  assert_eq!(Word::parse("").word_class(), WordClass::Polysyllable);
}

#[test]
fn syllable_from_end_contract() {
  let word = Word::parse("biblioteca");
  let count = word.syllable_count();
  assert_eq!(count, 5);

  assert!(word.syllable_from_end(0).is_none());
  assert!(word.syllable_from_end(count + 1).is_none());
  assert_eq!(word.syllable_from_end(1), word.syllables().last());
  assert_eq!(word.syllable_from_end(count).map(Syllable::text).as_deref(), Some("bi"));
}

#[test]
fn empty_input() {
  let word = Word::parse("");
  assert!(word.graphemes().is_empty());
  assert!(word.syllables().is_empty());
  assert_eq!(word.syllable_count(), 0);
  assert_eq!(word.word_class(), WordClass::Polysyllable);
}

#[test]
fn vowelless_input_is_a_single_syllable() {
  let word = Word::parse("bcd");
  assert_eq!(word.syllable_texts(), ["bcd"]);
  assert!(word.decisions().is_empty());
}

#[test]
fn words_are_independent_across_threads() {
  let handles: Vec<_> = REFERENCE
    .iter()
    .map(|&(input, expected)| {
      std::thread::spawn(move || {
        let word = Word::parse(input);
        assert_eq!(word.syllable_texts(), expected);
      })
    })
    .collect();

  for handle in handles {
    handle.join().expect("worker panicked");
  }
}
