//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::error::ApiError;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::compare::compare_documents,
        crate::api::health::liveness,
    ),
    components(schemas(
        crate::model::CompareRequest,
        crate::model::DocumentInput,
        crate::model::ComparisonReport,
        crate::model::Discrepancy,
        crate::model::DiscrepancyType,
        crate::api::error::ErrorResponse,
        crate::api::health::HealthStatus,
    )),
    tags(
        (name = "compare", description = "Source data verification"),
        (name = "health", description = "Service health")
    ),
    info(
        title = "SDV Compare API",
        description = "Relays source document / case report comparisons to a language model"
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> Result<HttpResponse, ApiError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().content_type("text/yaml").body(yaml))
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
