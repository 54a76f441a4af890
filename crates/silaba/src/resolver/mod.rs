//! resolver モジュール
//!
//! 書記素列をカーソルで走査し、母音ごとに優先順位付きの規則群を評価して
//! 消費する書記素数と音節の閉鎖を決定する。
pub mod engine;
pub mod rules;
pub mod window;

/// 再エクスポート
pub use engine::{Decision, Resolution, resolve};
pub use rules::{Action, Regime, Rule};
pub use window::{Slot, Window};
