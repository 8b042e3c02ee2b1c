//! Dropdown cache: key-value store for reference lists with per-entry TTL.
//!
//! Expiry is checked at read time against `expires_at`; nothing sweeps in the
//! background. Implementations are injected through `AppState` as
//! `Arc<dyn DropdownCache>`.

pub mod memory;
pub mod redis_store;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use self::memory::MemoryCache;
pub use self::redis_store::RedisCache;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Corrupt cache entry: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Stored value plus its absolute expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: Value,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// A TTL too large to represent saturates to the latest timestamp.
    pub fn new(value: Value, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            value,
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[async_trait]
pub trait DropdownCache: Send + Sync {
    /// Returns `None` for missing or expired keys.
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError>;

    async fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), CacheError>;

    async fn invalidate(&self, key: &str) -> Result<(), CacheError>;

    /// Short label for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;
}
