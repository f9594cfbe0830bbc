//! Resume export: render the print document and hand it to an `ExportTarget`.

pub mod handlers;
pub mod local;
pub mod photo;
pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::models::resume::Document;
use crate::preview::html::render_html;
use crate::preview::projector::project;

const FALLBACK_STEM: &str = "resume";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Upload failed: {0}")]
    Upload(String),
}

/// One artifact to store.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Relative, slash-separated key. Built by `storage_key`, never from raw input.
    pub key: String,
    pub content_type: &'static str,
    pub body: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReceipt {
    pub backend: &'static str,
    pub location: String,
    /// Suggested download name, as the editor offered it.
    pub filename: String,
    pub content_type: &'static str,
    pub size_bytes: usize,
}

/// Where exported documents end up. Returns the stored artifact's location.
#[async_trait]
pub trait ExportTarget: Send + Sync {
    async fn export(&self, request: ExportRequest) -> Result<String, ExportError>;

    fn backend(&self) -> &'static str;
}

/// `"{full name}_resume.pdf"`, or `"resume_resume.pdf"` without a name.
pub fn export_filename(document: &Document) -> String {
    let name = document.personal_info.full_name.trim();
    let stem = if name.is_empty() { FALLBACK_STEM } else { name };
    format!("{stem}_resume.pdf")
}

fn sanitize_stem(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `exports/{id}/{stem}.html`, where the stem only holds `[A-Za-z0-9_-]`.
fn storage_key(document: &Document) -> String {
    let filename = export_filename(document);
    let stem = filename.strip_suffix(".pdf").unwrap_or(&filename);
    format!("exports/{}/{}.html", document.id, sanitize_stem(stem))
}

/// Renders `document` and stores it through `target`. The document itself is
/// never modified.
pub async fn export_document(
    target: &dyn ExportTarget,
    document: &Document,
) -> Result<ExportReceipt, ExportError> {
    let html = render_html(&project(document));
    let request = ExportRequest {
        key: storage_key(document),
        content_type: "text/html; charset=utf-8",
        body: Bytes::from(html),
    };
    let size_bytes = request.body.len();
    let content_type = request.content_type;

    let location = target.export(request).await?;
    info!(
        "Exported resume {} to {} ({} bytes)",
        document.id,
        location,
        size_bytes
    );

    Ok(ExportReceipt {
        backend: target.backend(),
        location,
        filename: export_filename(document),
        content_type,
        size_bytes,
    })
}
