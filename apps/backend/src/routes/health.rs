//! Liveness and error-contract probes.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

async fn health() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("ok"))
}

/// Always fails; integration tests use it to pin the problem+json contract.
async fn health_error() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(
        ErrorCode::ValidationError,
        "Example failure",
    ))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health))
        .route("/error", web::get().to(health_error));
}
