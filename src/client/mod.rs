//! Upload & render client
//!
//! Loads the two documents, keeps the transient comparison state and renders
//! whatever the compare endpoint reports.

pub mod render;
pub mod session;
pub mod transport;
pub mod upload;

pub use render::{render_actions, render_discrepancies, render_document_panel};
pub use session::{ResolveAllOutcome, SdvSession};
pub use transport::{ClientError, CompareTransport, HttpCompareClient};
pub use upload::{SlotContent, load_document, load_document_from_path};
