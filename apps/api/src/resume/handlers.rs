//! Axum route handlers for the Resume API.
//!
//! Writes go through `mutate_resume`, which holds the library write lock for
//! the whole mutate-then-save step. Writes addressed to an unknown entry id
//! return the document unchanged and skip the save.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppJson};
use crate::models::resume::{Document, TemplateId};
use crate::resume::document::{
    EducationPatch, ExperiencePatch, NewEducation, NewExperience, NewSkill, PersonalInfoPatch,
    SkillPatch,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub template: TemplateId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCreatedResponse {
    pub entry_id: Uuid,
    pub resume: Document,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

/// Snapshot of a saved resume, or `404 NOT_FOUND`.
pub(crate) async fn load_resume(state: &AppState, id: Uuid) -> Result<Document, AppError> {
    state
        .library
        .read()
        .await
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::resume_not_found(id))
}

/// Applies `change` to a copy of the resume and saves it when `change`
/// reports a modification. Returns the resulting document either way.
pub(crate) async fn mutate_resume<F>(
    state: &AppState,
    id: Uuid,
    change: F,
) -> Result<Document, AppError>
where
    F: FnOnce(&mut Document) -> bool,
{
    let mut library = state.library.write().await;
    let mut document = library
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::resume_not_found(id))?;
    if !change(&mut document) {
        return Ok(document);
    }
    library.save(state.store.as_ref(), document, Utc::now()).await
}

async fn add_entry<F>(
    state: &AppState,
    id: Uuid,
    add: F,
) -> Result<(StatusCode, Json<EntryCreatedResponse>), AppError>
where
    F: FnOnce(&mut Document) -> Uuid,
{
    let mut entry_id = Uuid::nil();
    let resume = mutate_resume(state, id, |doc| {
        entry_id = add(doc);
        true
    })
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(EntryCreatedResponse { entry_id, resume }),
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Documents
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resumes
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<Vec<Document>> {
    Json(state.library.read().await.list().to_vec())
}

/// POST /api/v1/resumes
///
/// Creates and saves an empty resume with the default template.
pub async fn handle_create_resume(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Document>), AppError> {
    let now = Utc::now();
    let document = state
        .library
        .write()
        .await
        .save(state.store.as_ref(), Document::new(now), now)
        .await?;
    info!("Created resume {}", document.id);
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, AppError> {
    load_resume(&state, id).await.map(Json)
}

/// PATCH /api/v1/resumes/:id/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(patch): AppJson<PersonalInfoPatch>,
) -> Result<Json<Document>, AppError> {
    mutate_resume(&state, id, |doc| {
        doc.update_personal_info(patch);
        true
    })
    .await
    .map(Json)
}

/// PUT /api/v1/resumes/:id/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<TemplateRequest>,
) -> Result<Json<Document>, AppError> {
    mutate_resume(&state, id, |doc| {
        doc.set_template(req.template);
        true
    })
    .await
    .map(Json)
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/:id/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(new): AppJson<NewExperience>,
) -> Result<(StatusCode, Json<EntryCreatedResponse>), AppError> {
    add_entry(&state, id, |doc| doc.add_experience(new)).await
}

/// PUT /api/v1/resumes/:id/experience
pub async fn handle_replace_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(entries): AppJson<Vec<NewExperience>>,
) -> Result<Json<Document>, AppError> {
    mutate_resume(&state, id, |doc| {
        doc.replace_experience(entries);
        true
    })
    .await
    .map(Json)
}

/// PATCH /api/v1/resumes/:id/experience/:entry_id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    AppJson(patch): AppJson<ExperiencePatch>,
) -> Result<Json<Document>, AppError> {
    mutate_resume(&state, id, |doc| doc.update_experience(entry_id, patch))
        .await
        .map(Json)
}

/// DELETE /api/v1/resumes/:id/experience/:entry_id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Document>, AppError> {
    mutate_resume(&state, id, |doc| doc.remove_experience(entry_id))
        .await
        .map(Json)
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/:id/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(new): AppJson<NewEducation>,
) -> Result<(StatusCode, Json<EntryCreatedResponse>), AppError> {
    add_entry(&state, id, |doc| doc.add_education(new)).await
}

/// PUT /api/v1/resumes/:id/education
pub async fn handle_replace_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(entries): AppJson<Vec<NewEducation>>,
) -> Result<Json<Document>, AppError> {
    mutate_resume(&state, id, |doc| {
        doc.replace_education(entries);
        true
    })
    .await
    .map(Json)
}

/// PATCH /api/v1/resumes/:id/education/:entry_id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    AppJson(patch): AppJson<EducationPatch>,
) -> Result<Json<Document>, AppError> {
    mutate_resume(&state, id, |doc| doc.update_education(entry_id, patch))
        .await
        .map(Json)
}

/// DELETE /api/v1/resumes/:id/education/:entry_id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Document>, AppError> {
    mutate_resume(&state, id, |doc| doc.remove_education(entry_id))
        .await
        .map(Json)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/:id/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(new): AppJson<NewSkill>,
) -> Result<(StatusCode, Json<EntryCreatedResponse>), AppError> {
    add_entry(&state, id, |doc| doc.add_skill(new)).await
}

/// PUT /api/v1/resumes/:id/skills
pub async fn handle_replace_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(entries): AppJson<Vec<NewSkill>>,
) -> Result<Json<Document>, AppError> {
    mutate_resume(&state, id, |doc| {
        doc.replace_skills(entries);
        true
    })
    .await
    .map(Json)
}

/// PATCH /api/v1/resumes/:id/skills/:entry_id
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    AppJson(patch): AppJson<SkillPatch>,
) -> Result<Json<Document>, AppError> {
    mutate_resume(&state, id, |doc| doc.update_skill(entry_id, patch))
        .await
        .map(Json)
}

/// DELETE /api/v1/resumes/:id/skills/:entry_id
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Document>, AppError> {
    mutate_resume(&state, id, |doc| doc.remove_skill(entry_id))
        .await
        .map(Json)
}
