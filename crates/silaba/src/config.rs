// crates/silaba/src/config.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Default word list, one word per line
pub const DEFAULT_WORD_LIST: &str = "palavras.txt";

/// Default separator placed between syllables when rendering
pub const DEFAULT_SEPARATOR: &str = " - ";

/// Top-level configuration for silaba.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration and equals `SilabaConfig::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SilabaConfig {
  /// [batch] section
  pub batch: BatchConfig,
  /// [logging] section
  pub logging: LoggingConfig,
}

/// [batch] section configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
  /// Word list read by the batch driver (e.g., "palavras.txt")
  pub word_list: PathBuf,
  /// Separator placed between syllables (e.g., " - ")
  pub separator: String,
}

impl Default for BatchConfig {
  fn default() -> Self {
    Self {
      word_list: PathBuf::from(DEFAULT_WORD_LIST),
      separator: DEFAULT_SEPARATOR.to_string(),
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive usable with `tracing_subscriber::EnvFilter`.
  pub fn as_directive(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

// ===== Loading =====

impl SilabaConfig {
  /// Parses a TOML document.
  ///
  /// # Errors
  /// `ConfigError::Parse` if the document is not valid TOML or does not
  /// match the schema.
  pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
    toml::from_str(source).map_err(|e| ConfigError::Parse {
      source: Arc::new(e),
    })
  }

  /// Reads and parses a TOML file. The result is not validated.
  ///
  /// # Errors
  /// `ConfigError::Unreadable` if the file cannot be read,
  /// `ConfigError::Parse` if its contents are invalid.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_toml_str(&source)
  }
}

// ===== Accessor Methods =====

impl SilabaConfig {
  /// Returns the word list path.
  pub fn word_list(&self) -> &Path {
    &self.batch.word_list
  }

  /// Returns the syllable separator.
  pub fn separator(&self) -> &str {
    &self.batch.separator
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `batch.separator` is not empty
  /// - `batch.word_list` is not empty
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.batch.separator.is_empty() {
      return Err(ConfigError::EmptySeparator);
    }

    if self.batch.word_list.as_os_str().is_empty() {
      return Err(ConfigError::EmptyWordListPath);
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
