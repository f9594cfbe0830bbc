use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::export::ExportTarget;
use crate::resume::library::ResumeLibrary;
use crate::resume::store::ResumeStore;
use crate::suggestions::choice::{ChoiceSource, SeededChoice, ThreadRngChoice};
use crate::suggestions::in_flight::AnalysisGuard;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Saved resumes. Writers hold the lock across mutate + save.
    pub library: Arc<RwLock<ResumeLibrary>>,
    pub store: Arc<dyn ResumeStore>,
    /// S3 when configured, local directory otherwise.
    pub exporter: Arc<dyn ExportTarget>,
    /// In-memory by default; Redis when `REDIS_URL` is set.
    pub analysis_guard: Arc<dyn AnalysisGuard>,
    pub config: Config,
}

impl AppState {
    /// Fresh choice source per analysis. With `SUGGESTION_SEED` set, the same
    /// document always gets the same wording.
    pub fn choice_source(&self) -> Box<dyn ChoiceSource> {
        match self.config.suggestion_seed {
            Some(seed) => Box::new(SeededChoice::new(seed)),
            None => Box::new(ThreadRngChoice),
        }
    }
}
