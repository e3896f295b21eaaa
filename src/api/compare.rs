//! Document comparison endpoint

use actix_web::{HttpResponse, post, web};

use crate::api::error::{ApiError, ErrorResponse};
use crate::model::CompareRequest;
use crate::service::ComparisonService;

/// Compare a source document with a case report form
///
/// Each document may be sent as a JSON-encoded string or as a JSON value.
/// The body of a successful response is the model's JSON answer, passed
/// through without validation.
#[utoipa::path(
    post,
    path = "/api/compare",
    request_body = CompareRequest,
    responses(
        (status = 200, description = "Discrepancies reported by the model", body = crate::model::ComparisonReport),
        (status = 500, description = "Comparison failed or model output was not JSON", body = ErrorResponse)
    ),
    tag = "compare"
)]
#[post("/api/compare")]
pub async fn compare_documents(
    service: web::Data<ComparisonService>,
    body: web::Json<CompareRequest>,
) -> Result<HttpResponse, ApiError> {
    let report = service.compare(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// Body extraction failures are reported like any other comparison failure
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::MalformedBody(err.to_string()).into())
}

/// Configure comparison routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(compare_documents);
}
