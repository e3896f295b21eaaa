pub mod config;
pub mod discrepancy;
pub mod document;

pub use config::{Config, ProviderConfig};
pub use discrepancy::{ComparisonReport, Discrepancy, DiscrepancyType};
pub use document::{CompareRequest, DocumentInput};
