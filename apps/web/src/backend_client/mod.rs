//! Backend client: the single point of entry for calls to the marketplace REST API.
//!
//! Search, job and company lookups and dropdown reference lists all go
//! through here. No other module builds backend URLs.
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::company::CompanyDetail;
use crate::models::job::{JobDetail, JobPage};
use crate::seo::SearchFilters;

const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 200;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Backend unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

/// Search request forwarded to `GET /jobs/search`.
#[derive(Debug, Clone, Default)]
pub struct JobSearchQuery {
    pub filters: SearchFilters,
    pub page: u32,
}

impl JobSearchQuery {
    /// Non-empty params only; the backend treats a present-but-empty param as a filter.
    fn params(&self) -> Vec<(&'static str, String)> {
        let f = &self.filters;
        let mut params: Vec<(&'static str, String)> = [
            ("keyword", f.keyword.trim()),
            ("city", f.city.trim()),
            ("country", f.country.trim()),
            ("experience", f.experience.as_deref().unwrap_or("").trim()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k, v.to_string()))
        .collect();
        params.push(("page", self.page.max(1).to_string()));
        params
    }
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn search_jobs(&self, query: &JobSearchQuery) -> Result<JobPage, BackendError> {
        let params = query.params();
        let response = self
            .send(|| self.client.get(self.url("/jobs/search")).query(&params))
            .await?;
        Ok(response.json().await?)
    }

    /// `None` when the backend reports the job as missing.
    pub async fn get_job(&self, id: &str) -> Result<Option<JobDetail>, BackendError> {
        self.get_optional(&format!("/jobs/{}", urlencoding::encode(id)))
            .await
    }

    pub async fn get_company(&self, id: &str) -> Result<Option<CompanyDetail>, BackendError> {
        self.get_optional(&format!("/companies/{}", urlencoding::encode(id)))
            .await
    }

    /// Raw dropdown list for `kind`; callers pick the row type.
    pub async fn fetch_dropdown<T: DeserializeOwned>(
        &self,
        kind: &str,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .send(|| self.client.get(self.url(&format!("/dropdowns/{kind}"))))
            .await?;
        Ok(response.json().await?)
    }

    async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, BackendError> {
        match self.send(|| self.client.get(self.url(path))).await {
            Ok(response) => Ok(Some(response.json().await?)),
            Err(BackendError::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Sends a request, retrying on 429, 5xx and transport errors with
    /// exponential backoff. Other non-success statuses fail immediately.
    async fn send<F>(&self, build: F) -> Result<Response, BackendError>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut last_error: Option<BackendError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = Duration::from_millis(BASE_BACKOFF_MS * (1 << (attempt - 1)));
                warn!(
                    "Backend call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match build().send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(BackendError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Backend returned {}: {}", status, body);
                last_error = Some(BackendError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(BackendError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            debug!("Backend call succeeded: {}", response.url().path());
            return Ok(response);
        }

        Err(last_error.unwrap_or(BackendError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }
}
