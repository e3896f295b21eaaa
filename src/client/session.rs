use crate::client::transport::CompareTransport;
use crate::client::upload::SlotContent;
use crate::model::{CompareRequest, Discrepancy, DocumentInput};

/// Result of pressing "Resolve All"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveAllOutcome {
    /// Resolution has no defined behavior yet
    NotSupported,
}

/// Transient client state for one verification session
#[derive(Debug, Default)]
pub struct SdvSession {
    source: Option<SlotContent>,
    case_report: Option<SlotContent>,
    discrepancies: Vec<Discrepancy>,
}

impl SdvSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_source(&mut self, content: SlotContent) {
        self.source = Some(content);
    }

    pub fn set_case_report(&mut self, content: SlotContent) {
        self.case_report = Some(content);
    }

    pub fn source(&self) -> Option<&SlotContent> {
        self.source.as_ref()
    }

    pub fn case_report(&self) -> Option<&SlotContent> {
        self.case_report.as_ref()
    }

    pub fn discrepancies(&self) -> &[Discrepancy] {
        &self.discrepancies
    }

    /// Both slots hold something to display
    pub fn can_compare(&self) -> bool {
        self.source.is_some() && self.case_report.is_some()
    }

    pub fn resolve_all_enabled(&self) -> bool {
        !self.discrepancies.is_empty()
    }

    pub fn resolve_all(&self) -> ResolveAllOutcome {
        tracing::debug!(
            discrepancies = self.discrepancies.len(),
            "Resolve all requested, nothing to do"
        );
        ResolveAllOutcome::NotSupported
    }

    /// Request a comparison and replace the current discrepancies
    ///
    /// Slot texts are sent as displayed. On any failure the error is logged,
    /// the current list is kept and `false` is returned.
    pub async fn compare<T>(&mut self, transport: &T) -> bool
    where
        T: CompareTransport + ?Sized,
    {
        let (Some(source), Some(case_report)) = (&self.source, &self.case_report) else {
            tracing::warn!("Compare requested before both documents were loaded");
            return false;
        };

        let request = CompareRequest {
            source_doc: DocumentInput::RawText(source.text().to_string()),
            case_report: DocumentInput::RawText(case_report.text().to_string()),
        };

        match transport.compare(&request).await {
            Ok(report) => {
                tracing::info!(
                    discrepancies = report.discrepancies.len(),
                    "Comparison completed"
                );
                self.discrepancies = report.discrepancies;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error comparing documents");
                false
            }
        }
    }
}
