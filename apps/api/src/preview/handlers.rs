use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::preview::html::render_html;
use crate::preview::projector::{project, RenderDescription};
use crate::resume::handlers::load_resume;
use crate::state::AppState;

/// GET /api/v1/resumes/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RenderDescription>, AppError> {
    let document = load_resume(&state, id).await?;
    Ok(Json(project(&document)))
}

/// GET /api/v1/resumes/:id/preview.html
pub async fn handle_preview_html(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let document = load_resume(&state, id).await?;
    Ok(Html(render_html(&project(&document))))
}
