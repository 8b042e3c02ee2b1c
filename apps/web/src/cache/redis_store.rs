use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use serde_json::Value;
use tracing::debug;

use super::{CacheEntry, CacheError, DropdownCache};

const KEY_PREFIX: &str = "referral-web:dropdown:";

/// Redis-backed cache shared by every web replica. Values are stored as a
/// JSON `CacheEntry` envelope so expiry follows the same read-time rule as
/// [`super::MemoryCache`]. Redis also gets the TTL via `EX`, so stale keys
/// are reclaimed server-side and reads never delete.
#[derive(Clone)]
pub struct RedisCache {
    conn: MultiplexedConnection,
}

impl RedisCache {
    /// Opens one multiplexed connection at startup; every request shares it.
    pub async fn connect(client: &redis::Client) -> Result<Self, CacheError> {
        let conn = client.get_multiplexed_async_connection().await?;
        Ok(Self { conn })
    }
}

fn namespaced(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

fn decode_entry(raw: &str, now: DateTime<Utc>) -> Result<Option<Value>, CacheError> {
    let entry: CacheEntry = serde_json::from_str(raw)?;
    if entry.is_expired(now) {
        return Ok(None);
    }
    Ok(Some(entry.value))
}

/// `EX` needs at least one second; sub-second TTLs are still caught by the
/// envelope check.
fn expiry_secs(ttl: Duration) -> u64 {
    ttl.num_seconds().max(1) as u64
}

#[async_trait]
impl DropdownCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(namespaced(key)).await?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let value = decode_entry(&raw, Utc::now())?;
        if value.is_none() {
            debug!("Redis cache entry '{key}' is past its expiry");
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), CacheError> {
        let entry = CacheEntry::new(value, ttl, Utc::now());
        let raw = serde_json::to_string(&entry)?;
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(namespaced(key), raw, expiry_secs(ttl))
            .await?;
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(namespaced(key)).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
