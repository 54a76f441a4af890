//! classifier モジュール
pub mod phoneme_class;

/// 再エクスポート
pub use phoneme_class::{
  is_consonant, is_context_digraph, is_digraph, is_fricative_consonant, is_glide,
  is_liquid_consonant, is_nasal_consonant, is_occlusive_consonant, is_vowel,
};
