//! grapheme モジュール
pub mod segmenter;

/// 再エクスポート
pub use segmenter::{Grapheme, segment};
