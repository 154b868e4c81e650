// LogTriage - api/handlers.rs
//
// HTTP handlers and the wire schema for the analyze endpoint.
// Boundary layer: validates input, calls the classifier core, maps the
// result onto the wire field names.

use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::error::{ApiError, ApiResult};
use crate::core::classifier;
use crate::core::model::{LogSource, Triage};
use crate::util::constants;

// =============================================================================
// Wire schema
// =============================================================================

/// Body of POST /analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw log text pasted by the user.
    pub log_text: String,

    /// Optional hint about the log source. Absent or null means unknown.
    #[serde(default)]
    pub source: Option<LogSource>,
}

/// Response of POST /analyze.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub error_type: LogSource,
    pub root_cause_summary: &'static str,
    pub most_likely_cause: &'static str,
    pub suggested_fixes: &'static [&'static str],
    pub confidence: f64,
    pub extracted_error_lines: Vec<String>,
}

impl From<Triage> for AnalyzeResponse {
    fn from(triage: Triage) -> Self {
        Self {
            error_type: triage.source,
            root_cause_summary: triage.summary,
            most_likely_cause: triage.likely_cause,
            suggested_fixes: triage.suggested_fixes,
            confidence: triage.confidence,
            extracted_error_lines: triage.error_lines,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Service index: names the service and its endpoints.
pub async fn index_handler() -> impl IntoResponse {
    Json(json!({
        "name": constants::APP_NAME,
        "version": constants::APP_VERSION,
        "health": "/health",
        "analyze": "/analyze",
    }))
}

/// Liveness check. No dependencies to probe; answering is the signal.
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": constants::APP_VERSION,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Classify a submitted log and return triage advice.
///
/// Validation lives here, not in the core: the classifier is total over
/// any text, but an empty submission is a caller mistake worth a 422.
pub async fn analyze_handler(Json(req): Json<AnalyzeRequest>) -> ApiResult<Json<AnalyzeResponse>> {
    if req.log_text.is_empty() {
        return Err(ApiError::validation("log_text must not be empty"));
    }

    let hint = req.source.unwrap_or_default();
    let triage = classifier::analyze(&req.log_text, hint);

    tracing::info!(
        source = %triage.source,
        hint = %hint,
        bytes = req.log_text.len(),
        error_lines = triage.error_lines.len(),
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse::from(triage)))
}
