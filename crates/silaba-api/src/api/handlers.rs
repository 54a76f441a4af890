//! HTTPハンドラー定義

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{SilabasRequest, SilabasResponse};

use super::state::AppState;

/// POST /silabas エンドポイント
///
/// ポルトガル語の単語を音節に分割する。
///
/// # Request Body
/// ```json
/// { "word": "pedra" }
/// ```
///
/// # Response
/// - 200 OK: 分割成功
/// - 400 Bad Request: 入力エラー（空の単語、単語長超過）
/// - 500 Internal Server Error: 内部エラー
pub async fn post_silabas(
  State(state): State<AppState>,
  Json(request): Json<SilabasRequest>,
) -> Result<Json<SilabasResponse>, ApiError> {
  debug!(word_len = request.word.len(), "音節分割リクエストを受信");

  // CPUバウンドな処理を spawn_blocking で実行
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.syllabify(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    word = %response.result.normalized,
    syllable_count = response.result.syllable_count,
    elapsed_ms = response.elapsed_ms,
    "音節分割完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
