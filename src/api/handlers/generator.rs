// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use actix_web::http::StatusCode;
use log::{error, warn};

use crate::api::types::{GenerateRequest, GenerateResponse};
use crate::api::AppState;
use super::{error_status, resolve_options};

/// Most passwords a single request may ask for
pub const MAX_GENERATE_COUNT: usize = 20;

fn generate_failure(status: StatusCode, message: String) -> HttpResponse {
    HttpResponse::build(status).json(GenerateResponse {
        success: false,
        passwords: Vec::new(),
        error: Some(message),
    })
}

/// Generate policy-compliant passwords
///
/// Generates passwords for the requested security level and mode, each
/// returned with its strength score and policy compliance.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated passwords", body = GenerateResponse),
        (status = 400, description = "Invalid level, mode or count", body = GenerateResponse),
        (status = 503, description = "No compliant password within the retry bound", body = GenerateResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<GenerateRequest>,
) -> impl Responder {
    let request = generation_req.into_inner();
    let (mode, level) = match resolve_options(&state, request.mode.as_deref(), request.security_level) {
        Ok(options) => options,
        Err(e) => return generate_failure(error_status(&e), e.to_string()),
    };

    let count = request.count.unwrap_or(1);
    if count == 0 || count > MAX_GENERATE_COUNT {
        return generate_failure(
            StatusCode::BAD_REQUEST,
            format!("count must be between 1 and {}", MAX_GENERATE_COUNT),
        );
    }

    let worker = state.clone();
    let result = web::block(move || worker.engine.generate(level, mode, count)).await;

    match result {
        Ok(Ok(passwords)) => HttpResponse::Ok().json(GenerateResponse {
            success: true,
            passwords,
            error: None,
        }),
        Ok(Err(e)) => {
            warn!("Generation request failed: {}", e);
            generate_failure(error_status(&e), e.to_string())
        }
        Err(e) => {
            error!("Generation worker failed: {}", e);
            generate_failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error while generating passwords".to_string(),
            )
        }
    }
}
