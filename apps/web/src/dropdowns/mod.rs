//! Reference lists for select inputs (companies, designations, locations,
//! industries), served through the dropdown cache.

pub mod handlers;

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::backend_client::BackendClient;
use crate::cache::DropdownCache;
use crate::errors::AppError;
use crate::seo::locations::LocationOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownKind {
    Companies,
    Designations,
    Locations,
    Industries,
}

impl DropdownKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropdownKind::Companies => "companies",
            DropdownKind::Designations => "designations",
            DropdownKind::Locations => "locations",
            DropdownKind::Industries => "industries",
        }
    }

    /// Cache key for this list.
    pub fn cache_key(&self) -> String {
        format!("dropdown:{}", self.as_str())
    }
}

impl fmt::Display for DropdownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropdownKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "companies" => Ok(DropdownKind::Companies),
            "designations" => Ok(DropdownKind::Designations),
            "locations" => Ok(DropdownKind::Locations),
            "industries" => Ok(DropdownKind::Industries),
            other => Err(AppError::Validation(format!(
                "Unknown dropdown kind '{other}'"
            ))),
        }
    }
}

/// Cache-first load of one reference list.
///
/// Cache failures never fail the request: a read error counts as a miss and
/// a write error is only logged.
pub async fn load_dropdown<T>(
    cache: &dyn DropdownCache,
    backend: &BackendClient,
    kind: DropdownKind,
    ttl: Duration,
) -> Result<Vec<T>, AppError>
where
    T: Serialize + DeserializeOwned,
{
    let key = kind.cache_key();

    match cache.get(&key).await {
        Ok(Some(value)) => match serde_json::from_value::<Vec<T>>(value) {
            Ok(rows) => {
                debug!("Dropdown cache hit for '{kind}' ({} rows)", rows.len());
                return Ok(rows);
            }
            Err(e) => warn!("Discarding unreadable cached '{kind}' list: {e}"),
        },
        Ok(None) => debug!("Dropdown cache miss for '{kind}'"),
        Err(e) => warn!("Dropdown cache read failed for '{kind}': {e}"),
    }

    let rows: Vec<T> = backend.fetch_dropdown(kind.as_str()).await?;

    match serde_json::to_value(&rows) {
        Ok(value) => {
            if let Err(e) = cache.set(&key, value, ttl).await {
                warn!("Dropdown cache write failed for '{kind}': {e}");
            }
        }
        Err(e) => warn!("Could not serialize '{kind}' list for caching: {e}"),
    }

    Ok(rows)
}

pub async fn load_locations(
    cache: &dyn DropdownCache,
    backend: &BackendClient,
    ttl: Duration,
) -> Result<Vec<LocationOption>, AppError> {
    load_dropdown(cache, backend, DropdownKind::Locations, ttl).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::models::dropdown::DropdownOption;
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_backend(server: &MockServer) -> BackendClient {
        BackendClient::new(&server.base_url(), std::time::Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Companies".parse::<DropdownKind>().unwrap(), DropdownKind::Companies);
        assert_eq!(" locations ".parse::<DropdownKind>().unwrap(), DropdownKind::Locations);
        assert!(matches!(
            "salaries".parse::<DropdownKind>(),
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_second_load_is_served_from_cache() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/dropdowns/companies");
                then.status(200)
                    .json_body(json!([{"id": "77", "label": "Acme"}]));
            })
            .await;

        let backend = test_backend(&server);
        let cache = MemoryCache::new();

        for _ in 0..2 {
            let rows: Vec<DropdownOption> =
                load_dropdown(&cache, &backend, DropdownKind::Companies, Duration::hours(24))
                    .await
                    .unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].label, "Acme");
        }

        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_expired_entry_refetches() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/dropdowns/locations");
                then.status(200)
                    .json_body(json!([{"city": "Dubai", "country": "UAE"}]));
            })
            .await;

        let backend = test_backend(&server);
        let cache = MemoryCache::new();

        load_locations(&cache, &backend, Duration::zero()).await.unwrap();
        let rows = load_locations(&cache, &backend, Duration::zero()).await.unwrap();

        assert_eq!(rows[0].city, "Dubai");
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_falls_back_to_backend() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/dropdowns/industries");
                then.status(200).json_body(json!([{"id": "fin", "label": "Finance"}]));
            })
            .await;

        let backend = test_backend(&server);
        let cache = MemoryCache::new();
        cache
            .set(&DropdownKind::Industries.cache_key(), json!("not a list"), Duration::hours(1))
            .await
            .unwrap();

        let rows: Vec<DropdownOption> =
            load_dropdown(&cache, &backend, DropdownKind::Industries, Duration::hours(1))
                .await
                .unwrap();
        assert_eq!(rows[0].id, "fin");
    }
}
