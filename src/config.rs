use anyhow::{Context, Result};
use moka::future::Cache;
use sea_orm::Database;
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::{AppState, CachedData};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://carbonpace.db";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
/// Tokyo
pub const DEFAULT_FEATURED_PREFECTURE: &str = "13";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

const CACHE_CAPACITY: u64 = 1000;

/// Server settings, filled from CLI arguments and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    pub featured_prefecture: String,
    pub cache_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            featured_prefecture: DEFAULT_FEATURED_PREFECTURE.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

/// Cache for assembled page payloads.
pub fn build_cache(ttl: Duration) -> Cache<String, CachedData> {
    Cache::builder()
        .max_capacity(CACHE_CAPACITY)
        .time_to_live(ttl)
        .build()
}

/// Initialize application configuration and state
pub async fn initialize_app_state(config: &AppConfig) -> Result<AppState> {
    info!("Connecting to database: {}", config.database_url);
    let db = Database::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", config.database_url))?;

    debug!(
        "Cache TTL {}s, featured prefecture {}",
        config.cache_ttl.as_secs(),
        config.featured_prefecture
    );

    Ok(AppState {
        db,
        cache: build_cache(config.cache_ttl),
        featured_prefecture: config.featured_prefecture.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.database_url, "sqlite://carbonpace.db");
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.featured_prefecture, "13");
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
    }

    #[tokio::test]
    async fn test_initialize_app_state_in_memory() {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            featured_prefecture: "27".to_string(),
            ..AppConfig::default()
        };
        let state = initialize_app_state(&config).await.unwrap();
        assert_eq!(state.featured_prefecture, "27");
        assert!(state.db.ping().await.is_ok());
    }
}
