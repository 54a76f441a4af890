//! batch モジュール
pub mod word_list;

/// 再エクスポート
pub use word_list::{BatchReport, parse_word_list, read_word_list, render_line};
