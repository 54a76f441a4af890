//! Word list reading and result rendering for the batch driver.

use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::WordListError;
use crate::models::{Syllabification, Word};

/// Splits word-list text into trimmed, non-blank entries.
pub fn parse_word_list(contents: &str) -> Vec<String> {
  contents.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect()
}

/// Reads a word list (UTF-8, one word per line, blank lines skipped).
///
/// # Errors
/// - `WordListError::NotFound` if the file does not exist
/// - `WordListError::Io` for any other read failure
pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<String>, WordListError> {
  let path = path.as_ref();
  let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
    io::ErrorKind::NotFound => WordListError::NotFound(path.to_path_buf()),
    _ => WordListError::Io {
      path: path.to_path_buf(),
      source: Arc::new(e),
    },
  })?;

  let words = parse_word_list(&contents);
  debug!(path = %path.display(), words = words.len(), "word list loaded");
  Ok(words)
}

/// Renders one output line: `Palavra: <input> Sílabas: <s1><sep><s2>...`
pub fn render_line(word: &Word, separator: &str) -> String {
  format!("Palavra: {} Sílabas: {}", word.raw(), word.hyphenate(separator))
}

/// Result of processing a whole word list.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
  /// One entry per processed word, in list order
  pub results: Vec<Syllabification>,
  /// Rendered lines, in list order
  #[serde(skip)]
  pub lines: Vec<String>,
}

impl BatchReport {
  /// Syllabifies every word of `words` in order.
  pub fn build<S: AsRef<str>>(words: &[S], separator: &str) -> Self {
    let mut results = Vec::with_capacity(words.len());
    let mut lines = Vec::with_capacity(words.len());

    for raw in words {
      let word = Word::parse(raw.as_ref());
      lines.push(render_line(&word, separator));
      results.push(Syllabification::from(&word));
    }

    info!(words = results.len(), "batch syllabified");
    Self { results, lines }
  }

  /// Number of processed words
  pub fn len(&self) -> usize {
    self.results.len()
  }

  /// `true` if the list was empty
  pub fn is_empty(&self) -> bool {
    self.results.is_empty()
  }

  /// Pretty-printed JSON array of the results.
  pub fn to_json(&self) -> String {
    // Syllabification only holds strings, numbers and unit enums
    serde_json::to_string_pretty(&self.results).unwrap_or_else(|_| "[]".to_string())
  }
}
