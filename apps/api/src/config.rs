use std::path::PathBuf;

use anyhow::{Context, Result};

/// S3 / MinIO export destination. Present only when `S3_BUCKET` is set.
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Application configuration loaded from environment variables.
/// Startup fails if `DATABASE_URL` is missing or a value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// When `None`, exports are written under `export_dir` instead.
    pub s3: Option<S3Settings>,
    pub export_dir: PathBuf,
    /// When `None`, the analysis guard is in-process only.
    pub redis_url: Option<String>,
    /// Fixed seed for the suggestion engine's replacement wording.
    pub suggestion_seed: Option<u64>,
    pub suggestion_latency_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let s3 = match get("S3_BUCKET") {
            Some(bucket) => Some(S3Settings {
                bucket,
                endpoint: require("S3_ENDPOINT")?,
                access_key_id: require("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require("AWS_SECRET_ACCESS_KEY")?,
            }),
            None => None,
        };

        Ok(Config {
            database_url: require("DATABASE_URL")?,
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            s3,
            export_dir: get("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./exports")),
            redis_url: get("REDIS_URL"),
            suggestion_seed: get("SUGGESTION_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("SUGGESTION_SEED must be an unsigned integer")?,
            suggestion_latency_ms: get("SUGGESTION_LATENCY_MS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("SUGGESTION_LATENCY_MS must be a number of milliseconds")?
                .unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_only_database_url() {
        let config = config_from(&[("DATABASE_URL", "sqlite://studio.db")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.s3.is_none());
        assert_eq!(config.export_dir, PathBuf::from("./exports"));
        assert!(config.redis_url.is_none());
        assert!(config.suggestion_seed.is_none());
        assert_eq!(config.suggestion_latency_ms, 0);
    }

    #[test]
    fn test_missing_database_url_is_an_error() {
        let err = config_from(&[("PORT", "9000")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_s3_bucket_requires_credentials() {
        let err = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("S3_BUCKET", "exports")])
            .unwrap_err();
        assert!(err.to_string().contains("S3_ENDPOINT"));

        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("S3_BUCKET", "exports"),
            ("S3_ENDPOINT", "http://localhost:9000"),
            ("AWS_ACCESS_KEY_ID", "minio"),
            ("AWS_SECRET_ACCESS_KEY", "minio123"),
        ])
        .unwrap();
        assert_eq!(config.s3.unwrap().bucket, "exports");
    }

    #[test]
    fn test_numeric_settings_are_parsed() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SUGGESTION_SEED", "42"),
            ("SUGGESTION_LATENCY_MS", "1500"),
            ("REDIS_URL", "redis://localhost:6379"),
        ])
        .unwrap();
        assert_eq!(config.suggestion_seed, Some(42));
        assert_eq!(config.suggestion_latency_ms, 1500);
        assert_eq!(config.redis_url.as_deref(), Some("redis://localhost:6379"));

        assert!(config_from(&[("DATABASE_URL", "x"), ("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("DATABASE_URL", "x"), ("SUGGESTION_SEED", "-1")]).is_err());
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = config_from(&[("DATABASE_URL", "x"), ("REDIS_URL", "  ")]).unwrap();
        assert!(config.redis_url.is_none());
    }
}
