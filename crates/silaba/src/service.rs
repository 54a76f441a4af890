// crates/silaba/src/service.rs

//! SilabaService: silaba クレートの統合ファサード。
//!
//! - 設定 (SilabaConfig)
//! - 単語単位の音節分割 (Word)
//! - 単語リストのバッチ処理 (batch)
//!
//! CLI や HTTP API からは、この構造体だけを意識すればよい。

use std::path::Path;

use tracing::{info, warn};

use crate::batch::{BatchReport, read_word_list, render_line};
use crate::config::SilabaConfig;
use crate::errors::{SilabaResult, WordListError};
use crate::models::{Syllabification, Word};

/// silaba クレートの統合ファサード。
///
/// 単語ごとの処理は互いに独立しているため、本構造体は状態を持たない設定値のみを保持する。
#[derive(Debug, Clone)]
pub struct SilabaService {
  config: SilabaConfig,
}

impl SilabaService {
  /// 初期化（設定の妥当性検証のみ）
  ///
  /// # エラー
  /// - 設定が不正（区切り文字が空、単語リストのパスが空）
  pub fn init(config: SilabaConfig) -> SilabaResult<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  /// 保持している設定
  pub fn config(&self) -> &SilabaConfig {
    &self.config
  }

  /// 1 単語を音節分割する。
  pub fn syllabify(&self, raw: &str) -> Syllabification {
    Syllabification::from(&Word::parse(raw))
  }

  /// 複数の単語を順に音節分割する。
  pub fn syllabify_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<Syllabification> {
    words.iter().map(|w| self.syllabify(w.as_ref())).collect()
  }

  /// 設定の区切り文字で 1 行に整形する。
  pub fn render(&self, raw: &str) -> String {
    render_line(&Word::parse(raw), self.config.separator())
  }

  /// 単語列をバッチ処理する。
  pub fn run_words<S: AsRef<str>>(&self, words: &[S]) -> BatchReport {
    BatchReport::build(words, self.config.separator())
  }

  /// 設定された単語リストを読み込み、バッチ処理する。
  ///
  /// # エラー
  /// - 単語リストが存在しない（`WordListError::NotFound`）
  /// - 単語リストの読み込み失敗
  pub fn run_word_list(&self) -> SilabaResult<BatchReport> {
    self.run_word_list_at(self.config.word_list())
  }

  /// 指定した単語リストを読み込み、バッチ処理する。
  pub fn run_word_list_at(&self, path: &Path) -> SilabaResult<BatchReport> {
    let words = read_word_list(path).inspect_err(|e| {
      if matches!(e, WordListError::NotFound(_)) {
        warn!(path = %path.display(), "単語リストが見つかりません");
      }
    })?;

    info!(path = %path.display(), words = words.len(), "単語リストを処理します");
    Ok(self.run_words(&words))
  }
}
