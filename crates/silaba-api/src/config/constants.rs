//! API設定の定数定義

/// 入力単語の最大長（バイト単位）
///
/// 1 単語を対象とする API のため、256 バイトで十分とする。
pub const MAX_WORD_LENGTH: usize = 256;

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost のポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5540";
