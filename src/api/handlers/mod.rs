// src/api/handlers/mod.rs
pub mod analysis;
pub mod generator;
pub mod system;

use actix_web::http::StatusCode;

use crate::core::error::{EngineError, Result};
use crate::models::{PolicyMode, SecurityLevel};
use super::AppState;

/// Status code for an engine failure.
pub fn error_status(error: &EngineError) -> StatusCode {
    match error {
        EngineError::InvalidInput(_) | EngineError::ConfigurationError(_) => StatusCode::BAD_REQUEST,
        EngineError::GenerationExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Resolve the optional request mode and level against the server defaults.
pub fn resolve_options(
    state: &AppState,
    mode: Option<&str>,
    level: Option<u8>,
) -> Result<(PolicyMode, SecurityLevel)> {
    let mode = match mode {
        Some(mode) => mode.parse()?,
        None => state.default_mode,
    };
    let level = match level {
        Some(level) => SecurityLevel::new(level)?,
        None => state.default_level,
    };
    Ok((mode, level))
}
