use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::seo::ids::{company_slug, job_slug};

/// Job row as returned by the backend search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub company_id: String,
    pub company_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub referrers_available: u32,
    pub posted_at: Option<DateTime<Utc>>,
}

impl JobSummary {
    pub fn slug(&self) -> String {
        job_slug(&self.title, &self.id)
    }

    pub fn company_slug(&self) -> String {
        company_slug(&self.company_name, &self.company_id)
    }
}

/// A page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPage {
    pub jobs: Vec<JobSummary>,
    pub total: u64,
    pub page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub summary: JobSummary,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Job row decorated with the links the listing page renders.
#[derive(Debug, Clone, Serialize)]
pub struct JobCard {
    #[serde(flatten)]
    pub job: JobSummary,
    pub slug: String,
    pub company_slug: String,
}

impl From<JobSummary> for JobCard {
    fn from(job: JobSummary) -> Self {
        let slug = job.slug();
        let company_slug = job.company_slug();
        Self {
            job,
            slug,
            company_slug,
        }
    }
}
