//! Axum route handlers for the Suggestions API.

use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppJson};
use crate::models::resume::Document;
use crate::models::suggestion::{group_by_priority, PriorityGroup, Suggestion};
use crate::resume::handlers::{load_resume, mutate_resume};
use crate::state::AppState;
use crate::suggestions::analyzer::analyze;
use crate::suggestions::apply::apply_pending;
use crate::suggestions::improve::improve_section_content;
use crate::suggestions::industry::{enhance_with_industry_keywords, optimize_for_ats};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Suggestions in engine order, plus the same list bucketed by priority.
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
    pub groups: Vec<PriorityGroup>,
}

impl From<Vec<Suggestion>> for SuggestionsResponse {
    fn from(suggestions: Vec<Suggestion>) -> Self {
        let groups = group_by_priority(&suggestions);
        Self {
            suggestions,
            groups,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IndustryRequest {
    pub industry: String,
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub pending: Vec<Suggestion>,
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub resume: Document,
    pub pending: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub content: String,
    pub section: String,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub improved: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/:id/suggestions
///
/// Runs the content rules against the saved resume. A second request for the
/// same resume while one is running gets `409 ANALYSIS_IN_PROGRESS`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let document = load_resume(&state, id).await?;
    let lease = state
        .analysis_guard
        .try_acquire(id)
        .await?
        .ok_or(AppError::AnalysisInProgress(id))?;

    // Detached so the guard is released even if the client goes away.
    let task_state = state.clone();
    let suggestions = tokio::spawn(async move {
        let suggestions = run_analysis(&task_state, &document).await;
        task_state.analysis_guard.release(id, lease).await;
        suggestions
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?;

    info!("Analyzed resume {id}: {} suggestions", suggestions.len());
    Ok(Json(suggestions.into()))
}

async fn run_analysis(state: &AppState, document: &Document) -> Vec<Suggestion> {
    let latency = state.config.suggestion_latency_ms;
    if latency > 0 {
        tokio::time::sleep(Duration::from_millis(latency)).await;
    }
    let mut choice = state.choice_source();
    analyze(document, choice.as_mut())
}

/// POST /api/v1/resumes/:id/suggestions/ats
pub async fn handle_ats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    load_resume(&state, id).await?;
    Ok(Json(optimize_for_ats().into()))
}

/// POST /api/v1/resumes/:id/suggestions/industry
///
/// Unknown or empty industries get the technology keywords.
pub async fn handle_industry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<IndustryRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    load_resume(&state, id).await?;
    Ok(Json(enhance_with_industry_keywords(&req.industry).into()))
}

/// POST /api/v1/resumes/:id/suggestions/apply
///
/// Applies `pending[index]` and returns the saved resume together with the
/// pending list minus that suggestion.
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<ApplyRequest>,
) -> Result<Json<ApplyResponse>, AppError> {
    let mut pending = Vec::new();
    let resume = mutate_resume(&state, id, |doc| {
        let (applied, remaining) = apply_pending(doc.clone(), req.pending, req.index);
        pending = remaining;
        let changed = applied != *doc;
        *doc = applied;
        changed
    })
    .await?;
    Ok(Json(ApplyResponse { resume, pending }))
}

/// POST /api/v1/resumes/improve
pub async fn handle_improve(
    AppJson(req): AppJson<ImproveRequest>,
) -> Json<ImproveResponse> {
    Json(ImproveResponse {
        improved: improve_section_content(&req.content, &req.section),
    })
}
