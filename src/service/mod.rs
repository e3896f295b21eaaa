pub mod comparison;
pub mod llm;

pub use comparison::ComparisonService;
pub use llm::{CompletionProvider, OpenAiClient};
