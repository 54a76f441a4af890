//! Response Model Definition

use serde::Serialize;
use silaba::Syllabification;
use silaba::resolver::Decision;

/// Syllabification Response
#[derive(Debug, Serialize)]
pub struct SilabasResponse {
  /// Syllabification result
  #[serde(flatten)]
  pub result: Syllabification,
  /// Rule applied at each vowel
  pub decisions: Vec<DecisionDto>,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Rule decision (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct DecisionDto {
  /// Grapheme index of the vowel
  pub position: usize,
  /// Rule citation (e.g. "R6"), absent when no rule matched
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rule: Option<&'static str>,
  /// Consumption performed (e.g. "close-1")
  pub action: String,
}

impl From<&Decision> for DecisionDto {
  fn from(decision: &Decision) -> Self {
    Self {
      position: decision.position,
      rule: decision.rule.map(|r| r.citation()),
      action: decision.action.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use silaba::Word;

  #[test]
  fn decision_dto_from_decision() {
    let word = Word::parse("casa");
    let dtos: Vec<DecisionDto> = word.decisions().iter().map(DecisionDto::from).collect();

    assert_eq!(dtos.len(), 2);
    assert_eq!(dtos[0].position, 1);
    assert_eq!(dtos[0].rule, Some("R6"));
    assert_eq!(dtos[0].action, "close-1");
    assert_eq!(dtos[1].rule, None);
    assert_eq!(dtos[1].action, "consume-rest");
  }

  #[test]
  fn silabas_response_serialization() {
    let word = Word::parse("pedra");
    let response = SilabasResponse {
      result: Syllabification::from(&word),
      decisions: word.decisions().iter().map(DecisionDto::from).collect(),
      elapsed_ms: 0,
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"syllables\":[\"pe\",\"dra\"]"));
    assert!(json.contains("\"word_class\":\"Bisyllable\""));
    assert!(json.contains("\"rule\":\"R20\""));
    assert!(json.contains("\"elapsed_ms\":0"));
  }
}
