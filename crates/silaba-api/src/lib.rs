//! silaba-api crate
//!
//! Web server providing Portuguese syllabification as HTTP API.
//!
//! ## Endpoints
//! - `POST /silabas` - Syllabification of one word
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5540/silabas \
//!   -H "Content-Type: application/json" \
//!   -d '{"word": "pedra"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{DecisionDto, SilabasRequest, SilabasResponse};
pub use service::SilabaApiServiceFull;
