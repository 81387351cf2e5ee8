use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;
use serde_json::json;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::{Rejection, Reply};
use crate::config::constants::{HEALTH_STATUS_RUNNING, NO_CODE_PROVIDED};
use crate::server::json_body::{BodyTooLarge, InvalidJsonBody};
use crate::services::report_service::ReportService;
use crate::structs::analysis_request::AnalysisRequest;

pub fn error_reply(status: StatusCode, message: &str) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status)
}

pub async fn analyze_handler(
    request: AnalysisRequest,
    service: Arc<ReportService>,
) -> Result<WithStatus<Json>, Infallible> {
    let request_id = Uuid::new_v4();

    if !request.has_code() {
        log::info!("🚫 [{}] Rejected analysis request without code", request_id);
        return Ok(error_reply(StatusCode::BAD_REQUEST, NO_CODE_PROVIDED));
    }

    log::info!("🔍 [{}] Analyzing {} bytes of code", request_id, request.code.len());
    let started = Instant::now();

    match service.analyze(&request.code).await {
        Ok(report) => {
            log::info!(
                "✅ [{}] Score {} ({} issues, {}) in {}ms",
                request_id,
                report.summary.quality_score,
                report.summary.total_issues,
                report.summary.verdict,
                started.elapsed().as_millis()
            );
            Ok(warp::reply::with_status(warp::reply::json(&report), StatusCode::OK))
        }
        Err(e) => {
            log::error!(
                "❌ [{}] Analysis failed [{}]: {}",
                request_id,
                e.severity().name(),
                e.technical_details()
            );
            Ok(error_reply(StatusCode::INTERNAL_SERVER_ERROR, &e.client_message()))
        }
    }
}

pub async fn health_handler() -> Result<impl Reply, Infallible> {
    Ok(warp::reply::json(&json!({ "status": HEALTH_STATUS_RUNNING })))
}

pub async fn handle_rejection(rejection: Rejection) -> Result<WithStatus<Json>, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found")
    } else if rejection.find::<BodyTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else if rejection.find::<InvalidJsonBody>().is_some() {
        (StatusCode::BAD_REQUEST, "Invalid JSON body")
    } else if rejection.find::<warp::filters::cors::CorsForbidden>().is_some() {
        (StatusCode::FORBIDDEN, "CORS request forbidden")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else {
        log::error!("Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    Ok(error_reply(status, message))
}
