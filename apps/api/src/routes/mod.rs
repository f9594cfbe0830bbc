pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::export::handlers as export;
use crate::export::photo::MAX_PHOTO_BYTES;
use crate::preview::handlers as preview;
use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;

/// Room for multipart framing around a maximum-size photo.
const PHOTO_BODY_LIMIT: usize = MAX_PHOTO_BYTES + 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Documents
        .route(
            "/api/v1/resumes",
            get(resume::handle_list_resumes).post(resume::handle_create_resume),
        )
        .route("/api/v1/resumes/improve", post(suggestions::handle_improve))
        .route("/api/v1/resumes/:id", get(resume::handle_get_resume))
        .route(
            "/api/v1/resumes/:id/personal-info",
            patch(resume::handle_update_personal_info),
        )
        .route("/api/v1/resumes/:id/template", put(resume::handle_set_template))
        // Entry lists
        .route(
            "/api/v1/resumes/:id/experience",
            post(resume::handle_add_experience).put(resume::handle_replace_experience),
        )
        .route(
            "/api/v1/resumes/:id/experience/:entry_id",
            patch(resume::handle_update_experience).delete(resume::handle_remove_experience),
        )
        .route(
            "/api/v1/resumes/:id/education",
            post(resume::handle_add_education).put(resume::handle_replace_education),
        )
        .route(
            "/api/v1/resumes/:id/education/:entry_id",
            patch(resume::handle_update_education).delete(resume::handle_remove_education),
        )
        .route(
            "/api/v1/resumes/:id/skills",
            post(resume::handle_add_skill).put(resume::handle_replace_skills),
        )
        .route(
            "/api/v1/resumes/:id/skills/:entry_id",
            patch(resume::handle_update_skill).delete(resume::handle_remove_skill),
        )
        // Preview
        .route("/api/v1/resumes/:id/preview", get(preview::handle_preview))
        .route(
            "/api/v1/resumes/:id/preview.html",
            get(preview::handle_preview_html),
        )
        // Suggestions
        .route(
            "/api/v1/resumes/:id/suggestions",
            post(suggestions::handle_analyze),
        )
        .route(
            "/api/v1/resumes/:id/suggestions/ats",
            post(suggestions::handle_ats),
        )
        .route(
            "/api/v1/resumes/:id/suggestions/industry",
            post(suggestions::handle_industry),
        )
        .route(
            "/api/v1/resumes/:id/suggestions/apply",
            post(suggestions::handle_apply),
        )
        // Export
        .route("/api/v1/resumes/:id/export", post(export::handle_export))
        .route(
            "/api/v1/resumes/:id/photo",
            post(export::handle_upload_photo).layer(DefaultBodyLimit::max(PHOTO_BODY_LIMIT)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Document;
    use crate::state::testing::test_state;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;
    use uuid::Uuid;

    struct TestApp {
        router: Router,
        state: AppState,
        _exports: TempDir,
    }

    impl TestApp {
        async fn new() -> Self {
            let exports = tempfile::tempdir().unwrap();
            let state = test_state(exports.path()).await;
            Self {
                router: build_router(state.clone()),
                state,
                _exports: exports,
            }
        }

        async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let builder = Request::builder().method(method).uri(uri);
            let request = match body {
                Some(json) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };
            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, value)
        }

        async fn create_resume(&self) -> Uuid {
            let (status, body) = self.send(Method::POST, "/api/v1/resumes", None).await;
            assert_eq!(status, StatusCode::CREATED);
            body["id"].as_str().unwrap().parse().unwrap()
        }
    }

    #[tokio::test]
    async fn test_health() {
        let app = TestApp::new().await;
        let (status, body) = app.send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "studio-api");
    }

    #[tokio::test]
    async fn test_create_then_list_and_get() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;

        let (status, list) = app.send(Method::GET, "/api/v1/resumes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (status, doc) = app.send(Method::GET, &format!("/api/v1/resumes/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["template"], "modern");
        assert_eq!(doc["personalInfo"]["fullName"], "");
    }

    #[tokio::test]
    async fn test_unknown_resume_is_not_found_envelope() {
        let app = TestApp::new().await;
        let (status, body) = app
            .send(Method::GET, &format!("/api/v1/resumes/{}", Uuid::new_v4()), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_personal_info_patch_merges_fields() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;
        let uri = format!("/api/v1/resumes/{id}/personal-info");

        app.send(Method::PATCH, &uri, Some(json!({ "fullName": "Ada", "email": "a@x.io" })))
            .await;
        let (status, doc) = app.send(Method::PATCH, &uri, Some(json!({ "phone": "555" }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["personalInfo"]["fullName"], "Ada");
        assert_eq!(doc["personalInfo"]["email"], "a@x.io");
        assert_eq!(doc["personalInfo"]["phone"], "555");
    }

    #[tokio::test]
    async fn test_malformed_body_is_validation_error() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;
        let (status, body) = app
            .send(
                Method::PUT,
                &format!("/api/v1/resumes/{id}/template"),
                Some(json!({ "template": 42 })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_template_label_becomes_modern() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;
        let uri = format!("/api/v1/resumes/{id}/template");

        let (_, doc) = app.send(Method::PUT, &uri, Some(json!({ "template": "creative" }))).await;
        assert_eq!(doc["template"], "creative");
        let (_, doc) = app.send(Method::PUT, &uri, Some(json!({ "template": "vaporwave" }))).await;
        assert_eq!(doc["template"], "modern");
    }

    #[tokio::test]
    async fn test_experience_add_update_remove() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;

        let (status, created) = app
            .send(
                Method::POST,
                &format!("/api/v1/resumes/{id}/experience"),
                Some(json!({ "company": "Acme", "position": "Engineer", "endDate": "2022-01" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let entry_id = created["entryId"].as_str().unwrap().to_string();
        assert_eq!(created["resume"]["experience"][0]["id"], entry_id.as_str());

        let entry_uri = format!("/api/v1/resumes/{id}/experience/{entry_id}");
        let (_, doc) = app.send(Method::PATCH, &entry_uri, Some(json!({ "current": true }))).await;
        assert_eq!(doc["experience"][0]["current"], true);
        assert_eq!(doc["experience"][0]["endDate"], "");

        let (status, doc) = app.send(Method::DELETE, &entry_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["experience"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_entry_id_is_a_noop() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;
        let before: Document = app.state.library.read().await.get(id).cloned().unwrap();

        let (status, doc) = app
            .send(
                Method::PATCH,
                &format!("/api/v1/resumes/{id}/skills/{}", Uuid::new_v4()),
                Some(json!({ "name": "Ghost" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["skills"].as_array().unwrap().is_empty());

        let after = app.state.library.read().await.get(id).cloned().unwrap();
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[tokio::test]
    async fn test_replace_skills_assigns_fresh_ids() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;
        let reused = Uuid::new_v4();

        let (status, doc) = app
            .send(
                Method::PUT,
                &format!("/api/v1/resumes/{id}/skills"),
                Some(json!([
                    { "id": reused, "name": "Rust", "level": "Expert", "category": "Languages" },
                    { "name": "SQL", "category": "Languages" }
                ])),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let skills = doc["skills"].as_array().unwrap();
        assert_eq!(skills.len(), 2);
        assert_ne!(skills[0]["id"], reused.to_string().as_str());
        assert_eq!(skills[1]["level"], "Intermediate");
    }

    #[tokio::test]
    async fn test_preview_projects_sections() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;
        app.send(
            Method::PATCH,
            &format!("/api/v1/resumes/{id}/personal-info"),
            Some(json!({ "summary": "Systems engineer." })),
        )
        .await;

        let (status, render) = app
            .send(Method::GET, &format!("/api/v1/resumes/{id}/preview"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(render["header"]["name"], "Your Name");
        assert_eq!(render["sections"][0]["kind"], "summary");
        assert_eq!(render["sections"][0]["title"], "Professional Summary");
        assert_eq!(render["sections"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_preview_html_is_served() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;
        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/resumes/{id}/preview.html"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("Your Name"));
    }

    #[tokio::test]
    async fn test_analyze_returns_suggestions_and_groups() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;

        let (status, body) = app
            .send(Method::POST, &format!("/api/v1/resumes/{id}/suggestions"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let suggestions = body["suggestions"].as_array().unwrap();
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0]["section"], "Personal Summary");
        assert_eq!(body["groups"][0]["priority"], "high");
    }

    #[tokio::test]
    async fn test_duplicate_analysis_is_conflict() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;
        let lease = app.state.analysis_guard.try_acquire(id).await.unwrap().unwrap();

        let (status, body) = app
            .send(Method::POST, &format!("/api/v1/resumes/{id}/suggestions"), None)
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "ANALYSIS_IN_PROGRESS");

        app.state.analysis_guard.release(id, lease).await;
        let (status, _) = app
            .send(Method::POST, &format!("/api/v1/resumes/{id}/suggestions"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ats_and_industry_suggestions() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;

        let (_, ats) = app
            .send(Method::POST, &format!("/api/v1/resumes/{id}/suggestions/ats"), None)
            .await;
        assert_eq!(ats["suggestions"].as_array().unwrap().len(), 1);
        assert_eq!(ats["suggestions"][0]["section"], "ATS Optimization");

        let uri = format!("/api/v1/resumes/{id}/suggestions/industry");
        let (status, industry) = app
            .send(Method::POST, &uri, Some(json!({ "industry": "Healthcare" })))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(industry["suggestions"][0]["improved"]
            .as_str()
            .unwrap()
            .contains("patient care"));

        let (status, blank) = app.send(Method::POST, &uri, Some(json!({ "industry": " " }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(blank["suggestions"].as_array().unwrap().len(), 1);
        assert!(blank["suggestions"][0]["improved"]
            .as_str()
            .unwrap()
            .contains("microservices"));
    }

    #[tokio::test]
    async fn test_apply_summary_suggestion_updates_resume_and_pending() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;

        let (_, analysis) = app
            .send(Method::POST, &format!("/api/v1/resumes/{id}/suggestions"), None)
            .await;
        let pending = analysis["suggestions"].clone();
        let count = pending.as_array().unwrap().len();
        let improved = pending[0]["improved"].as_str().unwrap().to_string();

        let (status, body) = app
            .send(
                Method::POST,
                &format!("/api/v1/resumes/{id}/suggestions/apply"),
                Some(json!({ "pending": pending, "index": 0 })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resume"]["personalInfo"]["summary"], improved.as_str());
        assert_eq!(body["pending"].as_array().unwrap().len(), count - 1);

        let saved = app.state.library.read().await.get(id).cloned().unwrap();
        assert_eq!(saved.personal_info.summary, improved);
    }

    #[tokio::test]
    async fn test_improve_rewrites_summary() {
        let app = TestApp::new().await;
        let (status, body) = app
            .send(
                Method::POST,
                "/api/v1/resumes/improve",
                Some(json!({ "content": "meh", "section": "summary" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["improved"].as_str().unwrap().starts_with("Results-driven"));
    }

    #[tokio::test]
    async fn test_export_writes_local_artifact() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;

        let (status, receipt) = app
            .send(Method::POST, &format!("/api/v1/resumes/{id}/export"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(receipt["backend"], "local");
        assert_eq!(receipt["filename"], "resume_resume.pdf");
        let location = receipt["location"].as_str().unwrap();
        assert!(std::path::Path::new(location).exists());
    }

    #[tokio::test]
    async fn test_photo_upload_stores_data_uri() {
        let app = TestApp::new().await;
        let id = app.create_resume().await;

        let boundary = "studio-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"me.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(&[0x89, b'P', b'N', b'G']);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(format!("/api/v1/resumes/{id}/photo"))
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let saved = app.state.library.read().await.get(id).cloned().unwrap();
        assert_eq!(
            saved.personal_info.photo.as_deref(),
            Some("data:image/png;base64,iVBORw==")
        );
    }
}
