//! silaba ポルトガル語音節分割ライブラリー
//!
//! 音韻規則（母音・子音クラス、二重字、母音接続、二重母音、子音連結）に基づいて
//! ポルトガル語の単語を正書法上の音節に分割する

/// バッチモジュール - 単語リストの読み込みと結果行の整形
pub mod batch;

/// 文字分類モジュール - 母音・わたり音・各種子音の判定述語
pub mod classifier;

/// 設定モジュール - SilabaConfig 等の設定構造体を定義
pub mod config;

/// エラーモジュール - SilabaError, SilabaResult 等のエラー型を定義
pub mod errors;

/// 書記素モジュール - 単語を書記素（二重字を含む最小単位）の列に分割する
pub mod grapheme;

/// データモデルモジュール - Word, Syllable, WordClass 等のデータ構造を定義
pub mod models;

/// 音節境界モジュール - 優先順位付き規則群による音節境界の決定
pub mod resolver;

/// サービスモジュール - SilabaService 等の上位レベルAPIを提供
pub mod service;

/// 再エクスポート
pub use config::SilabaConfig;
pub use errors::{SilabaError, SilabaResult};
pub use models::{Syllabification, Syllable, Word, WordClass};
pub use service::SilabaService;
