pub mod compare;
pub mod error;
pub mod health;
pub mod openapi;

use actix_web::web;

pub use error::{ApiError, ErrorResponse};

/// Register every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(compare::configure)
        .configure(health::configure)
        .configure(openapi::configure);
}
