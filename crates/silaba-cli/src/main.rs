//! silaba バッチドライバー
//!
//! 単語リスト（1 行 1 単語）を読み込み、各単語の音節を区切り文字で連結して出力する。
//! 位置引数で単語を直接渡すこともできる。

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use silaba::errors::{SilabaError, WordListError};
use silaba::{SilabaConfig, SilabaService};

use cli::Cli;

fn main() -> Result<(), SilabaError> {
  let cli = Cli::parse();

  // 設定の読み込み（ファイル指定がなければデフォルト）
  let config = match &cli.config {
    Some(path) => SilabaConfig::from_file(path)?,
    None => SilabaConfig::default(),
  };
  let config = cli.apply_overrides(config);

  // ロギングの初期化
  // RUST_LOG があればそれを優先し、なければ [logging].level を使う
  let env_filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.log_level().as_directive()));
  tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr).init();

  let service = SilabaService::init(config)?;
  tracing::debug!(separator = service.config().separator(), "設定を読み込みました");

  let report = if cli.words.is_empty() {
    match service.run_word_list() {
      Ok(report) => report,
      Err(SilabaError::WordList(WordListError::NotFound(path))) => {
        // 単語リストが無いのは回復可能な状況として扱う
        println!("Erro: O arquivo {} não foi encontrado.", path.display());
        return Ok(());
      }
      Err(e) => return Err(e),
    }
  } else {
    service.run_words(&cli.words)
  };

  if cli.json {
    println!("{}", report.to_json());
  } else {
    for line in &report.lines {
      println!("{line}");
    }
  }

  Ok(())
}
