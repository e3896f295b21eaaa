use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyType {
    #[default]
    Mismatch,
    /// Any other label the model chose
    #[serde(other)]
    Other,
}

// A single field-level mismatch as reported by the model.
// Values are kept as display strings; the model sometimes answers with
// numbers or booleans, which are shown as their JSON text. Missing or
// unexpected entries still decode so one odd entry never drops the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Discrepancy {
    #[serde(default, deserialize_with = "display_string")]
    pub field: String,
    #[serde(default, deserialize_with = "display_string")]
    pub source: String,
    #[serde(default, deserialize_with = "display_string")]
    pub case_report: String,
    #[serde(rename = "type", default, deserialize_with = "discrepancy_type")]
    pub kind: DiscrepancyType,
}

/// Successful body of `POST /api/compare`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct ComparisonReport {
    #[serde(default)]
    pub discrepancies: Vec<Discrepancy>,
}

fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn discrepancy_type<'de, D>(deserializer: D) -> Result<DiscrepancyType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if s == "mismatch" => DiscrepancyType::Mismatch,
        Value::Null => DiscrepancyType::Mismatch,
        _ => DiscrepancyType::Other,
    })
}
