//! Documents submitted for comparison
//!
//! A document may reach the endpoint either as a JSON-encoded string (what the
//! upload client sends after pretty-printing a file) or as an already
//! structured JSON value. Both shapes are resolved once at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A source document or case report form as received over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum DocumentInput {
    /// JSON text that still has to be parsed
    RawText(String),
    /// Any non-string JSON value, used as is
    Structured(Value),
}

impl DocumentInput {
    /// Resolve the input into a structured JSON value
    pub fn into_value(self) -> Result<Value, serde_json::Error> {
        match self {
            DocumentInput::RawText(text) => serde_json::from_str(&text),
            DocumentInput::Structured(value) => Ok(value),
        }
    }
}

impl From<Value> for DocumentInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => DocumentInput::RawText(text),
            other => DocumentInput::Structured(other),
        }
    }
}

/// Request body of `POST /api/compare`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    /// The reference record (e.g. a clinical site record)
    pub source_doc: DocumentInput,
    /// The case report form being verified
    pub case_report: DocumentInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_field_is_raw_text() {
        let request: CompareRequest = serde_json::from_value(json!({
            "sourceDoc": "{\"date\": \"2024-01-01\"}",
            "caseReport": {"date": "2024-01-02"}
        }))
        .unwrap();

        assert_eq!(
            request.source_doc,
            DocumentInput::RawText("{\"date\": \"2024-01-01\"}".to_string())
        );
        assert_eq!(
            request.case_report,
            DocumentInput::Structured(json!({"date": "2024-01-02"}))
        );
    }

    #[test]
    fn test_raw_text_is_parsed() {
        let input = DocumentInput::RawText("{\n  \"visit\": 3\n}".to_string());
        assert_eq!(input.into_value().unwrap(), json!({"visit": 3}));
    }

    #[test]
    fn test_structured_passes_through() {
        let value = json!([1, {"a": null}, "x"]);
        let input = DocumentInput::Structured(value.clone());
        assert_eq!(input.into_value().unwrap(), value);
    }

    #[test]
    fn test_invalid_raw_text_fails() {
        let input = DocumentInput::RawText("Please upload a JSON file".to_string());
        assert!(input.into_value().is_err());
    }

    #[test]
    fn test_from_value_splits_strings() {
        assert!(matches!(
            DocumentInput::from(json!("{}")),
            DocumentInput::RawText(_)
        ));
        assert!(matches!(
            DocumentInput::from(json!(42)),
            DocumentInput::Structured(_)
        ));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = serde_json::from_value::<CompareRequest>(json!({"sourceDoc": {}}));
        assert!(result.is_err());
    }
}
