// src/api/routes.rs
use actix_web::{error, web, HttpResponse};

use super::handlers;
use super::types::ErrorResponse;

/// Bodies larger than this are rejected before reaching a handler
pub const MAX_JSON_BODY: usize = 16 * 1024;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed JSON gets the same envelope as every other failure
    let json_config = web::JsonConfig::default()
        .limit(MAX_JSON_BODY)
        .error_handler(|err, _req| {
            let message = err.to_string();
            error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorResponse {
                    success: false,
                    error: Some(message),
                }),
            )
            .into()
        });

    cfg.service(
        web::scope("/api")
            .app_data(json_config)
            .route("/status", web::get().to(handlers::system::get_status))
            .route("/benchmark", web::get().to(handlers::system::benchmark))
            .route("/analyze", web::post().to(handlers::analysis::analyze_password))
            .route("/suggest", web::post().to(handlers::analysis::suggest_password))
            .route("/generate", web::post().to(handlers::generator::generate_password))
    );
}
