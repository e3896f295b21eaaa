use std::path::Path;

pub const NOT_JSON_MESSAGE: &str = "Please upload a JSON file";
pub const PARSE_ERROR_MESSAGE: &str = "Error parsing JSON file";
pub const READ_ERROR_MESSAGE: &str = "Error reading file";

const JSON_CONTENT_TYPE: &str = "application/json";

/// What a document slot displays after an upload attempt
///
/// Failures are shown in place of the document instead of being raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotContent {
    /// Pretty-printed JSON of the parsed document
    Document(String),
    /// A fixed message shown in place of the document
    Message(&'static str),
}

impl SlotContent {
    /// Text displayed in the slot, which is also what gets sent for comparison
    pub fn text(&self) -> &str {
        match self {
            SlotContent::Document(text) => text,
            SlotContent::Message(msg) => msg,
        }
    }
}

/// Sniff, parse and pretty-print an uploaded file
pub fn load_document(file_name: &str, content_type: Option<&str>, bytes: &[u8]) -> SlotContent {
    let is_json = content_type == Some(JSON_CONTENT_TYPE) || file_name.ends_with(".json");
    if !is_json {
        tracing::debug!(file_name, ?content_type, "Rejected non-JSON upload");
        return SlotContent::Message(NOT_JSON_MESSAGE);
    }

    let parsed = serde_json::from_slice::<serde_json::Value>(bytes)
        .and_then(|value| serde_json::to_string_pretty(&value));

    match parsed {
        Ok(pretty) => SlotContent::Document(pretty),
        Err(e) => {
            tracing::error!(file_name, error = %e, "Error parsing JSON");
            SlotContent::Message(PARSE_ERROR_MESSAGE)
        }
    }
}

/// Read a file from disk and load it into a slot
pub fn load_document_from_path(path: impl AsRef<Path>) -> SlotContent {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        .then_some(JSON_CONTENT_TYPE);

    match std::fs::read(path) {
        Ok(bytes) => load_document(&file_name, content_type, &bytes),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Error handling file");
            SlotContent::Message(READ_ERROR_MESSAGE)
        }
    }
}
