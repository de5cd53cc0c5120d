//! Axum route handlers for reference parsing, the verse tool, and the explanation workflow.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::reference::parser::ParseError;
use crate::state::AppState;
use crate::verses::explanation::{render_explanation, summary_message};
use crate::verses::models::{VerseRange, VerseRecord};
use crate::verses::service::ResolveError;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `reference` is kept untyped so that a missing, null, or non-string value
/// surfaces as `InvalidInput` rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct ReferenceRequest {
    #[serde(default)]
    pub reference: Option<Value>,
}

impl ReferenceRequest {
    fn reference(&self) -> Result<&str, ResolveError> {
        self.reference
            .as_ref()
            .and_then(Value::as_str)
            .ok_or(ResolveError::Parse(ParseError::InvalidInput))
    }
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    #[serde(flatten)]
    pub range: VerseRange,
    pub span: u32,
}

/// Output of the verse tool. Failures are reported in-band.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verses: Option<Vec<VerseRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_verses: Option<usize>,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResponse {
    pub verses: Vec<VerseRecord>,
    pub total_verses: usize,
    pub explanation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/references/parse
///
/// Resolves a reference to its verse range without fetching anything.
pub async fn handle_parse_reference(
    State(state): State<AppState>,
    Json(request): Json<ReferenceRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    let (range, span) = state.verses.resolve(request.reference()?)?;
    Ok(Json(ParseResponse { range, span }))
}

/// POST /api/v1/tools/explain-quran-verses
///
/// Fetches verses with Arabic text, translation, and chapter metadata.
/// Always 200; `success` tells the caller whether verses came back.
pub async fn handle_verse_tool(
    State(state): State<AppState>,
    Json(request): Json<ReferenceRequest>,
) -> Json<ToolOutput> {
    let result = match request.reference() {
        Ok(reference) => {
            info!("Starting verse lookup for: {reference}");
            state.verses.resolve_and_assemble(reference).await
        }
        Err(e) => Err(e),
    };

    let output = match result {
        Ok(verses) => ToolOutput {
            success: true,
            message: summary_message(&verses),
            total_verses: Some(verses.len()),
            verses: Some(verses),
        },
        Err(e) => {
            warn!("Verse tool failed: {e:?}");
            ToolOutput {
                success: false,
                verses: None,
                total_verses: None,
                message: format!("Failed to fetch verses: {e}"),
            }
        }
    };

    Json(output)
}

/// POST /api/v1/workflows/qverse
///
/// Fetch step followed by the explanation step; returns the rendered Markdown.
pub async fn handle_explain_workflow(
    State(state): State<AppState>,
    Json(request): Json<ReferenceRequest>,
) -> Result<Json<WorkflowResponse>, AppError> {
    let reference = request.reference()?;
    info!("Running explanation workflow for: {reference}");

    let verses = state.verses.resolve_and_assemble(reference).await?;
    let explanation = render_explanation(&verses);

    Ok(Json(WorkflowResponse {
        total_verses: verses.len(),
        verses,
        explanation,
    }))
}
