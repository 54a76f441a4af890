//! Syllabification Service

use std::time::Instant;

use silaba::{Syllabification, Word};

use crate::config::Config;
use crate::errors::{ApiError, Result};
use crate::models::{DecisionDto, SilabasRequest, SilabasResponse};

/// Common interface for syllabification service
///
/// This trait allows swapping production implementation (`SilabaApiServiceFull`) with
/// test stubs/mocks.
pub trait SilabaApiService: Send + Sync {
  /// Executes syllabification
  ///
  /// # Errors
  /// - Input error (empty word, length exceeded)
  /// - Internal error
  fn syllabify(&self, request: SilabasRequest) -> Result<SilabasResponse>;
}

/// Syllabification Service
#[derive(Debug, Clone)]
pub struct SilabaApiServiceFull {
  /// Maximum accepted word length (bytes)
  max_word_length: usize,
}

impl SilabaApiServiceFull {
  /// Initializes the service
  ///
  /// # Errors
  /// Returns an error if the configured word length limit is zero
  pub fn new(config: &Config) -> Result<Self> {
    if config.max_word_length == 0 {
      return Err(ApiError::config("max_word_length must be at least 1"));
    }

    Ok(Self {
      max_word_length: config.max_word_length,
    })
  }

  /// Executes syllabification of one word
  ///
  /// # Errors
  /// - If the word is empty or blank
  /// - If the word exceeds maximum length
  pub fn syllabify(&self, request: SilabasRequest) -> Result<SilabasResponse> {
    let word_bytes = request.word.len();
    if word_bytes > self.max_word_length {
      return Err(ApiError::word_too_long(word_bytes, self.max_word_length));
    }

    if request.word.trim().is_empty() {
      return Err(ApiError::invalid_input("Word is empty"));
    }

    let start = Instant::now();

    let word = Word::parse(&request.word);
    let result = Syllabification::from(&word);
    let decisions = word.decisions().iter().map(DecisionDto::from).collect();

    let elapsed_ms = start.elapsed().as_millis() as u64;

    tracing::debug!(
      word = %result.normalized,
      syllables = %word.hyphenate("-"),
      "単語を音節分割しました"
    );

    Ok(SilabasResponse {
      result,
      decisions,
      elapsed_ms,
    })
  }
}

/// Production implementation of trait `SilabaApiService`
impl SilabaApiService for SilabaApiServiceFull {
  fn syllabify(&self, request: SilabasRequest) -> Result<SilabasResponse> {
    // Note: Writing `self.syllabify(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    SilabaApiServiceFull::syllabify(self, request)
  }
}
