use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::photo::to_data_uri;
use crate::export::{export_document, ExportReceipt};
use crate::models::resume::Document;
use crate::resume::document::PersonalInfoPatch;
use crate::resume::handlers::{load_resume, mutate_resume};
use crate::state::AppState;

const PHOTO_FIELD: &str = "photo";

/// POST /api/v1/resumes/:id/export
///
/// Renders the print document and stores it through the configured target.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExportReceipt>, AppError> {
    let document = load_resume(&state, id).await?;
    let receipt = export_document(state.exporter.as_ref(), &document).await?;
    Ok(Json(receipt))
}

/// POST /api/v1/resumes/:id/photo
///
/// Multipart upload with a single `photo` image field.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Document>, AppError> {
    load_resume(&state, id).await?;

    let mut data_uri = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read photo: {e}")))?;
        data_uri = Some(to_data_uri(&content_type, &bytes)?);
        break;
    }
    let photo = data_uri
        .ok_or_else(|| AppError::Validation(format!("Missing '{PHOTO_FIELD}' field")))?;

    let document = mutate_resume(&state, id, |doc| {
        doc.update_personal_info(PersonalInfoPatch {
            photo: Some(photo),
            ..Default::default()
        });
        true
    })
    .await?;
    Ok(Json(document))
}
