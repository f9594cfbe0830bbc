//! Analysis in-flight guard: at most one outstanding analysis per resume.
//!
//! `AppState` holds an `Arc<dyn AnalysisGuard>`: in-memory for a single
//! instance, Redis when several instances share the same resumes.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use redis::aio::MultiplexedConnection;
use redis::Script;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;

/// Redis locks expire after this long even if `release` never runs.
const REDIS_LOCK_TTL_MS: u64 = 30_000;

/// Deletes the lock only while it still holds the caller's lease.
static RELEASE_SCRIPT: Lazy<Script> = Lazy::new(|| {
    Script::new(
        r#"if redis.call("GET", KEYS[1]) == ARGV[1] then
    return redis.call("DEL", KEYS[1])
end
return 0"#,
    )
});

#[async_trait]
pub trait AnalysisGuard: Send + Sync {
    /// Returns a lease for `resume_id`, or `None` when an analysis for it is
    /// already running.
    async fn try_acquire(&self, resume_id: Uuid) -> Result<Option<Uuid>, AppError>;

    /// Frees the lock if `lease` still owns it. A stale lease is a no-op.
    async fn release(&self, resume_id: Uuid, lease: Uuid);
}

#[derive(Debug, Default)]
pub struct InMemoryAnalysisGuard {
    running: Mutex<HashMap<Uuid, Uuid>>,
}

#[async_trait]
impl AnalysisGuard for InMemoryAnalysisGuard {
    async fn try_acquire(&self, resume_id: Uuid) -> Result<Option<Uuid>, AppError> {
        let mut running = self
            .running
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("analysis guard poisoned")))?;
        if running.contains_key(&resume_id) {
            return Ok(None);
        }
        let lease = Uuid::new_v4();
        running.insert(resume_id, lease);
        Ok(Some(lease))
    }

    async fn release(&self, resume_id: Uuid, lease: Uuid) {
        if let Ok(mut running) = self.running.lock() {
            if running.get(&resume_id) == Some(&lease) {
                running.remove(&resume_id);
            }
        }
    }
}

/// `SET NX PX` lock per resume, holding the lease as its value.
#[derive(Clone)]
pub struct RedisAnalysisGuard {
    conn: MultiplexedConnection,
}

impl RedisAnalysisGuard {
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Redis analysis guard connected");
        Ok(Self { conn })
    }

    fn key(resume_id: Uuid) -> String {
        format!("studio:analysis:{resume_id}")
    }
}

#[async_trait]
impl AnalysisGuard for RedisAnalysisGuard {
    async fn try_acquire(&self, resume_id: Uuid) -> Result<Option<Uuid>, AppError> {
        let mut conn = self.conn.clone();
        let lease = Uuid::new_v4();
        let reply: Option<String> = redis::cmd("SET")
            .arg(Self::key(resume_id))
            .arg(lease.to_string())
            .arg("NX")
            .arg("PX")
            .arg(REDIS_LOCK_TTL_MS)
            .query_async(&mut conn)
            .await?;
        Ok(reply.map(|_| lease))
    }

    async fn release(&self, resume_id: Uuid, lease: Uuid) {
        let mut conn = self.conn.clone();
        let result: redis::RedisResult<i64> = RELEASE_SCRIPT
            .key(Self::key(resume_id))
            .arg(lease.to_string())
            .invoke_async(&mut conn)
            .await;
        match result {
            Ok(0) => warn!("Analysis lock for {resume_id} expired before release"),
            Ok(_) => {}
            Err(e) => warn!("Failed to release analysis lock for {resume_id}: {e}"),
        }
    }
}
