// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;
use crate::core::engine::Engine;
use crate::models::{PolicyMode, SecurityLevel};

pub mod types;
pub mod routes;
pub mod handlers;

/// Shared state handed to every handler.
pub struct AppState {
    pub engine: Engine,
    pub default_mode: PolicyMode,
    pub default_level: SecurityLevel,
}

impl AppState {
    pub fn new(engine: Engine, config: &Config) -> Self {
        Self {
            engine,
            default_mode: config.default_mode,
            default_level: config.default_security_level,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Engine::default(), &Config::default())
    }
}

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::system::get_status,
        crate::api::handlers::system::benchmark,
        crate::api::handlers::analysis::analyze_password,
        crate::api::handlers::analysis::suggest_password,
        crate::api::handlers::generator::generate_password
    ),
    components(
        schemas(
            // Request/response schemas
            crate::api::types::StatusResponse,
            crate::api::types::ErrorResponse,
            crate::api::types::AnalyzeRequest,
            crate::api::types::AnalyzeResponse,
            crate::api::types::SuggestResponse,
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::BenchmarkResponse,

            // Analysis models
            crate::models::AnalysisReport,
            crate::models::CharClass,
            crate::models::CompositionReport,
            crate::models::ClassStats,
            crate::models::PatternFinding,
            crate::models::PatternKind,
            crate::models::PatternCategory,
            crate::models::Language,
            crate::models::EntropyReport,
            crate::models::StrengthResult,
            crate::models::StrengthCategory,
            crate::models::AttackReport,
            crate::models::AttackProfile,
            crate::models::CrackEstimate,
            crate::models::TimeBucket,
            crate::models::DictionaryEstimate,
            crate::models::ComplexityTier,
            crate::models::DictionarySize,
            crate::models::PolicyMode,
            crate::models::SecurityLevel,
            crate::models::Policy,
            crate::models::PolicyVerdict,
            crate::models::PolicyFailure,
            crate::models::PolicyCheck,
            crate::models::SuggestionReport,
            crate::models::GeneratedPassword,
            crate::models::BenchmarkEntry
        )
    ),
    tags(
        (name = "Analysis", description = "Password analysis and suggestion endpoints"),
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "Service status and benchmark")
    ),
    info(
        title = "PassGuard API",
        version = "0.1.0",
        description = "Password strength estimation, policy checks and generation",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(state: AppState, address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting PassGuard API server on {}:{}", address, port);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}
