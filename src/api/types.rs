// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::{AnalysisReport, BenchmarkEntry, GeneratedPassword, SuggestionReport};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Service status ("ok")
    pub status: String,
    pub message: String,
    /// Crate version
    pub version: String,
    /// RFC 3339 server time
    pub timestamp: String,
    /// Name of the suggestion advisor, when one is configured
    pub advisor: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message
    pub error: Option<String>,
}

// Analysis requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Password to analyze; never stored or logged
    pub password: String,
    /// "standard" (default) or "enhanced"
    pub mode: Option<String>,
    /// 1 to 5 (default: 3)
    pub security_level: Option<u8>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Whether the operation was successful
    pub success: bool,
    pub analysis: Option<AnalysisReport>,
    pub suggestions: Option<SuggestionReport>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuggestResponse {
    /// Whether the operation was successful
    pub success: bool,
    pub suggestions: Option<SuggestionReport>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

// Generator requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// 1 to 5 (default: 3)
    pub security_level: Option<u8>,
    /// "standard" (default) or "enhanced"
    pub mode: Option<String>,
    /// Number of passwords, 1 to 20 (default: 1)
    pub count: Option<usize>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Whether the operation was successful
    pub success: bool,
    pub passwords: Vec<GeneratedPassword>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BenchmarkResponse {
    /// Whether the operation was successful
    pub success: bool,
    pub results: Vec<BenchmarkEntry>,
}
