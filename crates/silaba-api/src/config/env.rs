//! Config loading from environment variables

use std::net::SocketAddr;

use super::constants::{DEFAULT_BIND_ADDR, MAX_WORD_LENGTH};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5540")
  pub bind_addr: String,
  /// Maximum accepted word length in bytes
  pub max_word_length: usize,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// - `SILABA_API_BIND_ADDR`: bind address (default `127.0.0.1:5540`)
  /// - `SILABA_API_MAX_WORD_LENGTH`: word length limit in bytes (default 256)
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    let bind_addr =
      std::env::var("SILABA_API_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let mut config = Self::with_bind_addr(bind_addr)?;

    if let Ok(value) = std::env::var("SILABA_API_MAX_WORD_LENGTH") {
      config.max_word_length = value.parse().map_err(|e| {
        ApiError::config(format!("invalid SILABA_API_MAX_WORD_LENGTH {value:?}: {e}"))
      })?;
    }

    Ok(config)
  }

  /// Builds a configuration from an explicit bind address
  ///
  /// # Errors
  /// Returns an error if `bind_addr` is not a valid socket address
  pub fn with_bind_addr(bind_addr: impl Into<String>) -> crate::errors::Result<Self> {
    let bind_addr = bind_addr.into();
    bind_addr
      .parse::<SocketAddr>()
      .map_err(|e| ApiError::config(format!("invalid bind address {bind_addr:?}: {e}")))?;
    Ok(Self {
      bind_addr,
      max_word_length: MAX_WORD_LENGTH,
    })
  }
}
