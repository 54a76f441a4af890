//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::SilabaApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Syllabification Service
  ///
  /// - Production: `Arc::new(SilabaApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubSilabaApiService)`
  pub service: Arc<dyn SilabaApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn SilabaApiService>) -> Self {
    Self { config, service }
  }
}
