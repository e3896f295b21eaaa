//! Source Data Verification helper
//!
//! A relay endpoint that asks a language model to list discrepancies between a
//! clinical source document and a case report form, plus the client used to
//! upload documents and render the model's findings.

pub mod api;
pub mod app;
pub mod client;
pub mod model;
pub mod service;
