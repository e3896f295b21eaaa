//! Plain-text rendering of documents, findings and actions

use std::fmt::Write;

use crate::client::session::SdvSession;
use crate::client::upload::SlotContent;
use crate::model::Discrepancy;

/// Render a document slot under its heading
pub fn render_document_panel(title: &str, slot: Option<&SlotContent>) -> String {
    let body = match slot {
        Some(content) => content.text(),
        None => "(no document uploaded)",
    };
    format!("== {title} ==\n{body}\n")
}

/// Render one entry per discrepancy; nothing at all when there are none
pub fn render_discrepancies(discrepancies: &[Discrepancy]) -> String {
    if discrepancies.is_empty() {
        return String::new();
    }

    let mut out = String::from("== Discrepancies Found ==\n");
    for d in discrepancies {
        let _ = writeln!(
            out,
            "\n{}: Mismatch detected\n  Source: {}\n  Case Report: {}",
            d.field, d.source, d.case_report
        );
    }
    out
}

/// Render the action bar with each control's enabled state
pub fn render_actions(session: &SdvSession) -> String {
    format!(
        "[{}] Compare Documents   [{}] Resolve All\n",
        checkbox(session.can_compare()),
        checkbox(session.resolve_all_enabled())
    )
}

fn checkbox(enabled: bool) -> &'static str {
    if enabled { "x" } else { " " }
}
