use serde::{Deserialize, Serialize};

use crate::data_models::{JobPosting, SearchRecord};

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub query: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_days_filter")]
    pub days_filter: u32,
}

fn default_location() -> String {
    "Bangalore India OR remote".to_string()
}

fn default_days_filter() -> u32 {
    7
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobPostingView>,
    pub total_count: usize,
    pub search_query: String,
    pub search_date: String,
}

#[derive(Debug, Serialize)]
pub struct JobPostingView {
    pub id: String,
    pub job_title: String,
    pub company_name: String,
    pub job_link: String,
    pub location: String,
    pub keywords: Vec<String>,
    pub technical_skills: Vec<String>,
    pub posted_date: Option<String>,
    pub source: String,
    pub scraped_at: String,
}

impl From<&JobPosting> for JobPostingView {
    fn from(job: &JobPosting) -> JobPostingView {
        JobPostingView {
            id: job.id.clone(),
            job_title: job.job_title.clone(),
            company_name: job.company_name.clone(),
            job_link: job.job_link.clone(),
            location: job.location.clone(),
            keywords: job.keywords.clone(),
            technical_skills: job.technical_skills.clone(),
            posted_date: job.posted_date.clone(),
            source: job.source.clone(),
            scraped_at: job
                .scraped_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchRecordView {
    pub id: String,
    pub jobs: Vec<JobPostingView>,
    pub total_count: u32,
    pub search_query: String,
    pub search_date: String,
}

impl From<&SearchRecord> for SearchRecordView {
    fn from(record: &SearchRecord) -> SearchRecordView {
        SearchRecordView {
            id: record.id.to_hex(),
            jobs: record.jobs.iter().map(JobPostingView::from).collect(),
            total_count: record.total_count,
            search_query: record.search_query.clone(),
            search_date: record
                .search_date
                .try_to_rfc3339_string()
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
