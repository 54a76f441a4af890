//! リクエストモデル定義

use serde::Deserialize;

/// 音節分割リクエスト
#[derive(Debug, Deserialize)]
pub struct SilabasRequest {
  /// 分割対象の単語
  pub word: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"word": "água"}"#;
    let req: SilabasRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.word, "água");
  }

  #[test]
  fn deserialize_missing_word_fails() {
    let json = r#"{"text": "casa"}"#;
    assert!(serde_json::from_str::<SilabasRequest>(json).is_err());
  }
}
