mod config;
mod db;
mod errors;
mod export;
mod models;
mod preview;
mod resume;
mod routes;
mod state;
mod suggestions;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, S3Settings};
use crate::db::create_pool;
use crate::export::local::LocalExportTarget;
use crate::export::s3::S3ExportTarget;
use crate::export::ExportTarget;
use crate::resume::library::ResumeLibrary;
use crate::resume::store::SqliteResumeStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggestions::in_flight::{AnalysisGuard, InMemoryAnalysisGuard, RedisAnalysisGuard};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Studio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite and load saved resumes
    let pool = create_pool(&config.database_url).await?;
    let store = Arc::new(SqliteResumeStore::new(pool));
    let library = ResumeLibrary::load(store.as_ref()).await?;

    // Export target: S3 / MinIO when configured, local directory otherwise
    let exporter: Arc<dyn ExportTarget> = match &config.s3 {
        Some(s3) => {
            let client = build_s3_client(s3).await;
            info!("Exporting to s3://{}", s3.bucket);
            Arc::new(S3ExportTarget::new(client, s3.bucket.clone()))
        }
        None => {
            info!("Exporting to {}", config.export_dir.display());
            Arc::new(LocalExportTarget::new(config.export_dir.clone()))
        }
    };

    // Analysis guard: Redis when shared across instances, in-process otherwise
    let analysis_guard: Arc<dyn AnalysisGuard> = match &config.redis_url {
        Some(url) => Arc::new(RedisAnalysisGuard::connect(url).await?),
        None => Arc::new(InMemoryAnalysisGuard::default()),
    };

    if let Some(seed) = config.suggestion_seed {
        info!("Suggestion wording seeded with {seed}");
    }

    // Build app state
    let state = AppState {
        library: Arc::new(RwLock::new(library)),
        store,
        exporter,
        analysis_guard,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(settings: &S3Settings) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &settings.access_key_id,
        &settings.secret_access_key,
        None,
        None,
        "studio-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&settings.endpoint)
        .load()
        .await;

    let client_config = aws_sdk_s3::config::Builder::from(&s3_config)
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(client_config)
}
