// src/api/handlers/system.rs
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use log::error;

use crate::api::types::{BenchmarkResponse, ErrorResponse, StatusResponse};
use crate::api::AppState;
use crate::utils::timestamp;

/// Get service status
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = StatusResponse)
    )
)]
pub async fn get_status(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        success: true,
        status: "ok".to_string(),
        message: "Password strength service is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: timestamp(Utc::now()),
        advisor: state.engine.advisor_name(),
    })
}

/// Benchmark common passwords
///
/// Scores a fixed list of widely used passwords for comparison.
#[utoipa::path(
    get,
    path = "/api/benchmark",
    tag = "System",
    responses(
        (status = 200, description = "Scores of common passwords", body = BenchmarkResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn benchmark(state: web::Data<AppState>) -> impl Responder {
    let worker = state.clone();
    match web::block(move || worker.engine.benchmark()).await {
        Ok(results) => HttpResponse::Ok().json(BenchmarkResponse {
            success: true,
            results,
        }),
        Err(e) => {
            error!("Benchmark worker failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                success: false,
                error: Some("Internal error while running benchmark".to_string()),
            })
        }
    }
}
