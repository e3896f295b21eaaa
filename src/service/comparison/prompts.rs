//! Prompts for source/case report comparison

use serde_json::Value;

/// System prompt priming the model as a verification assistant
pub const COMPARISON_SYSTEM_PROMPT: &str = "You are a medical document verification assistant. \
Your task is to identify discrepancies between source documents and case report forms. \
Only output valid JSON. Pay special attention to dates, medical values, and clinical information.";

/// Build the comparison prompt embedding both documents as indented JSON
pub fn build_comparison_prompt(source: &Value, case_report: &Value) -> String {
    format!(
        r#"Compare these two medical documents and identify any discrepancies. Focus on dates, values, and medical information.

Source Document:
{source}

Case Report Form:
{case_report}

List all discrepancies in this JSON format:
{{
  "discrepancies": [
    {{
      "field": "field name",
      "source": "value in source",
      "caseReport": "value in case report",
      "type": "mismatch"
    }}
  ]
}}

Important: Only output valid JSON format. No other text before or after the JSON."#,
        source = pretty(source),
        case_report = pretty(case_report),
    )
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_embeds_indented_documents() {
        let source = json!({"patient": {"dob": "1970-05-01"}});
        let case_report = json!({"patient": {"dob": "1970-01-05"}});

        let prompt = build_comparison_prompt(&source, &case_report);

        assert!(prompt.contains(
            "Source Document:\n{\n  \"patient\": {\n    \"dob\": \"1970-05-01\"\n  }\n}"
        ));
        assert!(prompt.contains(
            "Case Report Form:\n{\n  \"patient\": {\n    \"dob\": \"1970-01-05\"\n  }\n}"
        ));
    }

    #[test]
    fn test_prompt_requests_json_only_schema() {
        let prompt = build_comparison_prompt(&json!({}), &json!([]));

        assert!(prompt.contains("\"discrepancies\": ["));
        assert!(prompt.contains("\"caseReport\": \"value in case report\""));
        assert!(prompt.contains("\"type\": \"mismatch\""));
        assert!(prompt.ends_with("No other text before or after the JSON."));
    }

    #[test]
    fn test_prompt_keeps_document_key_order() {
        let source: Value = serde_json::from_str(r#"{"visit": 2, "date": "2024-03-01"}"#).unwrap();
        let prompt = build_comparison_prompt(&source, &json!({}));

        assert!(prompt.contains("{\n  \"visit\": 2,\n  \"date\": \"2024-03-01\"\n}"));
    }

    #[test]
    fn test_system_prompt() {
        assert!(COMPARISON_SYSTEM_PROMPT.starts_with("You are a medical document verification assistant."));
    }
}
