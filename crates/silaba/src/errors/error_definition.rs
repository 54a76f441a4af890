//! エラー定義
//!
//! 音節分割そのもの（書記素分割・境界決定）は失敗しない。
//! ここで定義するのは設定ファイルや単語リストなど周辺処理のエラーのみ。

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定ファイル（SilabaConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// batch.separator が空
  #[error("batch.separator に空文字列は指定できません")]
  EmptySeparator,

  /// batch.word_list が空
  #[error("batch.word_list にファイルパスを指定してください")]
  EmptyWordListPath,

  /// 設定ファイルの読み込みに失敗
  #[error("設定ファイルを読み込めません: path={path:?}, error={source}")]
  Unreadable {
    /// 設定ファイルのパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 設定ファイルの TOML 解析に失敗
  #[error("設定ファイルの解析に失敗しました: {source}")]
  Parse {
    /// 元となった TOML エラー
    #[source]
    source: Arc<toml::de::Error>,
  },
}

/// 単語リスト関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum WordListError {
  /// 単語リストのファイルが存在しない
  #[error("単語リストが見つかりません: {0}")]
  NotFound(PathBuf),

  /// 単語リストの読み込みに失敗（権限、不正な UTF-8 等）
  #[error("単語リストの読み込みに失敗しました: path={path:?}, error={source}")]
  Io {
    /// 単語リストのパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `SilabaResult<T>` = `Result<T, SilabaError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum SilabaError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// 単語リスト関連エラー
  #[error(transparent)]
  WordList(#[from] WordListError),
}

/// silaba クレートの標準 Result 型エイリアス
pub type SilabaResult<T> = Result<T, SilabaError>;
