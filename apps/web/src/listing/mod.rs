//! Listing and detail page models built from routed slugs.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::backend_client::{BackendClient, JobSearchQuery};
use crate::errors::AppError;
use crate::models::company::CompanyDetail;
use crate::models::job::{JobCard, JobDetail};
use crate::seo::{build_seo_path, SearchFilters};

/// Query string accepted by `/referrals` and SEO listing pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub experience: Option<String>,
    pub page: Option<u32>,
}

impl ListingQuery {
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            keyword: self.keyword.trim().to_string(),
            country: self.country.trim().to_string(),
            city: self.city.trim().to_string(),
            experience: self
                .experience
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
        }
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub filters: SearchFilters,
    pub canonical_path: String,
    pub page: u32,
    pub total: u64,
    pub jobs: Vec<JobCard>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailPage {
    Job {
        canonical_path: String,
        job: JobDetail,
    },
    Company {
        canonical_path: String,
        company: CompanyDetail,
    },
}

pub async fn build_listing(
    backend: &BackendClient,
    filters: SearchFilters,
    page: u32,
) -> Result<ListingPage, AppError> {
    let query = JobSearchQuery {
        filters: filters.clone(),
        page,
    };
    let result = backend.search_jobs(&query).await?;

    Ok(ListingPage {
        canonical_path: build_seo_path(&filters),
        filters,
        page: result.page,
        total: result.total,
        jobs: result.jobs.into_iter().map(JobCard::from).collect(),
    })
}

pub async fn build_job_page(backend: &BackendClient, id: &str) -> Result<DetailPage, AppError> {
    let job = backend
        .get_job(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    Ok(DetailPage::Job {
        canonical_path: format!("/{}", job.summary.slug()),
        job,
    })
}

pub async fn build_company_page(
    backend: &BackendClient,
    id: &str,
) -> Result<DetailPage, AppError> {
    let company = backend
        .get_company(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))?;

    Ok(DetailPage::Company {
        canonical_path: format!("/{}", company.slug()),
        company,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_filters_trim_and_drop_blank_experience() {
        let q = ListingQuery {
            keyword: " rust ".to_string(),
            city: "Pune ".to_string(),
            experience: Some("  ".to_string()),
            page: Some(0),
            ..Default::default()
        };
        let f = q.filters();
        assert_eq!(f.keyword, "rust");
        assert_eq!(f.city, "Pune");
        assert_eq!(f.experience, None);
        assert_eq!(q.page(), 1);
    }
}
