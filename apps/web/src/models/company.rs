use serde::{Deserialize, Serialize};

use crate::seo::ids::company_slug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub headquarters: Option<String>,
    #[serde(default)]
    pub open_jobs: u32,
    #[serde(default)]
    pub referrers: u32,
}

impl CompanyDetail {
    pub fn slug(&self) -> String {
        company_slug(&self.name, &self.id)
    }
}
