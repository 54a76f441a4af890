//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use silaba::SilabaConfig;

/// Splits Portuguese words into syllables.
#[derive(Debug, Parser)]
#[command(name = "silaba", version, about)]
pub struct Cli {
  /// Words to syllabify. When omitted, the word list is read instead.
  pub words: Vec<String>,

  /// TOML configuration file
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Word list to read (overrides [batch].word_list)
  #[arg(short, long, value_name = "FILE")]
  pub word_list: Option<PathBuf>,

  /// Separator between syllables (overrides [batch].separator)
  #[arg(short, long)]
  pub separator: Option<String>,

  /// Print results as JSON instead of text lines
  #[arg(long)]
  pub json: bool,
}

impl Cli {
  /// Applies command line overrides on top of the loaded configuration.
  pub fn apply_overrides(&self, mut config: SilabaConfig) -> SilabaConfig {
    if let Some(path) = &self.word_list {
      config.batch.word_list = path.clone();
    }
    if let Some(separator) = &self.separator {
      config.batch.separator = separator.clone();
    }
    config
  }
}
