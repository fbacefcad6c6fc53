// src/api/handlers/analysis.rs
use actix_web::{web, HttpResponse, Responder};
use log::{error, warn};

use crate::api::types::{AnalyzeRequest, AnalyzeResponse, SuggestResponse};
use crate::api::AppState;
use crate::core::error::EngineError;
use super::{error_status, resolve_options};

fn analyze_failure(status: actix_web::http::StatusCode, message: String) -> HttpResponse {
    HttpResponse::build(status).json(AnalyzeResponse {
        success: false,
        analysis: None,
        suggestions: None,
        error: Some(message),
    })
}

fn suggest_failure(status: actix_web::http::StatusCode, message: String) -> HttpResponse {
    HttpResponse::build(status).json(SuggestResponse {
        success: false,
        suggestions: None,
        error: Some(message),
    })
}

/// Analyze password strength
///
/// Runs the full analysis (composition, patterns, entropy, score, crack
/// times and, in enhanced mode, the policy verdict) and attaches suggestions.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "Analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Password analysis result", body = AnalyzeResponse),
        (status = 400, description = "Invalid password, mode or level", body = AnalyzeResponse),
        (status = 503, description = "Alternatives could not be generated", body = AnalyzeResponse)
    )
)]
pub async fn analyze_password(
    state: web::Data<AppState>,
    analyze_req: web::Json<AnalyzeRequest>,
) -> impl Responder {
    let request = analyze_req.into_inner();
    let (mode, level) = match resolve_options(&state, request.mode.as_deref(), request.security_level) {
        Ok(options) => options,
        Err(e) => return analyze_failure(error_status(&e), e.to_string()),
    };

    let worker = state.clone();
    let result = web::block(move || {
        let report = worker.engine.analyze(&request.password, mode, level)?;
        let suggestions = worker.engine.suggest_for(&report, &mut rand::thread_rng())?;
        Ok::<_, EngineError>((report, suggestions))
    })
    .await;

    match result {
        Ok(Ok((report, suggestions))) => HttpResponse::Ok().json(AnalyzeResponse {
            success: true,
            analysis: Some(report),
            suggestions: Some(suggestions),
            error: None,
        }),
        Ok(Err(e)) => {
            warn!("Analysis request failed: {}", e);
            analyze_failure(error_status(&e), e.to_string())
        }
        Err(e) => {
            error!("Analysis worker failed: {}", e);
            analyze_failure(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error while analyzing password".to_string(),
            )
        }
    }
}

/// Suggest improvements
///
/// Returns weaknesses, paired improvements and generated alternatives.
#[utoipa::path(
    post,
    path = "/api/suggest",
    tag = "Analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Suggestions for the password", body = SuggestResponse),
        (status = 400, description = "Invalid password, mode or level", body = SuggestResponse),
        (status = 503, description = "Alternatives could not be generated", body = SuggestResponse)
    )
)]
pub async fn suggest_password(
    state: web::Data<AppState>,
    suggest_req: web::Json<AnalyzeRequest>,
) -> impl Responder {
    let request = suggest_req.into_inner();
    let (mode, level) = match resolve_options(&state, request.mode.as_deref(), request.security_level) {
        Ok(options) => options,
        Err(e) => return suggest_failure(error_status(&e), e.to_string()),
    };

    let worker = state.clone();
    let result = web::block(move || worker.engine.suggest(&request.password, mode, level)).await;

    match result {
        Ok(Ok(suggestions)) => HttpResponse::Ok().json(SuggestResponse {
            success: true,
            suggestions: Some(suggestions),
            error: None,
        }),
        Ok(Err(e)) => {
            warn!("Suggestion request failed: {}", e);
            suggest_failure(error_status(&e), e.to_string())
        }
        Err(e) => {
            error!("Suggestion worker failed: {}", e);
            suggest_failure(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error while building suggestions".to_string(),
            )
        }
    }
}
