//! crates/silaba-api/tests/api_integration.rs
//!
//! Router-level tests. The HTTP surface is exercised with a stub service so the
//! status/error mapping can be checked independently of the rule engine.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
  routing::{get, post},
};
use tower::ServiceExt;

use silaba::{Syllabification, Word};
use silaba_api::{
  api::{AppState, health_check, post_silabas},
  config::{Config, MAX_WORD_LENGTH},
  errors::{ApiError, Result as ApiResult},
  models::{SilabasRequest, SilabasResponse},
  service::{SilabaApiService, SilabaApiServiceFull},
};

/// Lightweight stub service for integration tests
///
/// - Blank word: `invalid_input` error
/// - Length exceeded: `word_too_long` error
/// - Otherwise: the word as a single syllable, no decisions
struct StubSilabaApiService;

impl SilabaApiService for StubSilabaApiService {
  fn syllabify(&self, request: SilabasRequest) -> ApiResult<SilabasResponse> {
    let word_bytes = request.word.len();

    if word_bytes > MAX_WORD_LENGTH {
      return Err(ApiError::word_too_long(word_bytes, MAX_WORD_LENGTH));
    }

    if request.word.trim().is_empty() {
      return Err(ApiError::invalid_input("単語が空です"));
    }

    let mut result = Syllabification::from(&Word::new());
    result.word = request.word.clone();
    result.syllables = vec![request.word];
    result.syllable_count = 1;

    Ok(SilabasResponse {
      result,
      decisions: Vec::new(),
      elapsed_ms: 0,
    })
  }
}

fn app_with(service: Arc<dyn SilabaApiService>) -> Router {
  let config = Config::with_bind_addr("127.0.0.1:0").expect("valid address");
  let state = AppState::new(config, service);

  Router::new()
    .route("/health", get(health_check))
    .route("/silabas", post(post_silabas))
    .with_state(state)
}

/// Builds a Router for testing
fn test_app() -> Router {
  app_with(Arc::new(StubSilabaApiService))
}

fn post_json(body: String) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri("/silabas")
    .header("content-type", "application/json")
    .body(Body::from(body))
    .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  serde_json::from_slice(&body_bytes).expect("body should be valid json")
}

// ============================================================================
// Normal cases
// ============================================================================

#[tokio::test]
async fn health_check_returns_ok() {
  let app = test_app();

  let response = app
    .oneshot(Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  assert_eq!(body_bytes.as_ref(), b"OK");
}

#[tokio::test]
async fn post_silabas_success_returns_200() {
  let app = test_app();
  let payload = serde_json::json!({ "word": "casa" });

  let response = app.oneshot(post_json(payload.to_string())).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert!(json.get("syllables").is_some());
  assert!(json.get("word_class").is_some());
  assert!(json.get("elapsed_ms").is_some());
}

#[tokio::test]
async fn post_silabas_with_real_service() {
  let config = Config::with_bind_addr("127.0.0.1:0").unwrap();
  let app = app_with(Arc::new(SilabaApiServiceFull::new(&config).unwrap()));
  let payload = serde_json::json!({ "word": "  ADVOGADO " });

  let response = app.oneshot(post_json(payload.to_string())).await.expect("request should succeed");
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["normalized"], "advogado");
  assert_eq!(json["syllables"], serde_json::json!(["ad", "vo", "ga", "do"]));
  assert_eq!(json["syllable_count"], 4);
  assert_eq!(json["word_class"], "Polysyllable");
  assert_eq!(json["word_class_label"], "Polissílaba");
  assert_eq!(json["decisions"][0]["rule"], "R4");
  assert_eq!(json["decisions"][0]["action"], "close-2");
}

// ============================================================================
// Service errors
// ============================================================================

#[tokio::test]
async fn post_silabas_blank_word_returns_400() {
  let app = test_app();
  let payload = serde_json::json!({ "word": "   " });

  let response = app.oneshot(post_json(payload.to_string())).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let json = body_json(response).await;
  assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn post_silabas_too_long_returns_400() {
  let app = test_app();
  let payload = serde_json::json!({ "word": "a".repeat(MAX_WORD_LENGTH + 1) });

  let response = app.oneshot(post_json(payload.to_string())).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let json = body_json(response).await;
  assert_eq!(json["error"]["code"], "word_too_long");
}

// ============================================================================
// JSON errors (Axum side)
// ============================================================================

#[tokio::test]
async fn post_silabas_invalid_json_returns_client_error() {
  let app = test_app();

  let response =
    app.oneshot(post_json("{ invalid json".to_string())).await.expect("request should succeed");

  // Axum's Json extractor returns 400 or 422
  assert!(
    response.status().is_client_error(),
    "expected 4xx, got: {}",
    response.status()
  );
}

#[tokio::test]
async fn post_silabas_missing_word_field_returns_client_error() {
  let app = test_app();
  let payload = serde_json::json!({ "text": "casa" });

  let response = app.oneshot(post_json(payload.to_string())).await.expect("request should succeed");

  assert!(
    response.status().is_client_error(),
    "expected 4xx, got: {}",
    response.status()
  );
}
