use mongodb::bson::{DateTime, oid::ObjectId};
use nanoid::nanoid;
use serde::{Deserialize, Serialize};

/// Placeholder used when no company name can be extracted from a result snippet.
pub const COMPANY_NOT_FOUND: &str = "Company Name Not Found";

/// One scraped job listing. Immutable after creation; embedded inside a
/// `SearchRecord`, never stored on its own.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JobPosting {
    pub id: String,
    pub job_title: String,
    pub company_name: String,
    pub job_link: String,
    pub location: String,
    pub keywords: Vec<String>,
    pub technical_skills: Vec<String>,
    pub posted_date: Option<String>,
    pub source: String,
    pub scraped_at: DateTime,
}

impl JobPosting {
    pub fn new(
        job_title: String,
        company_name: String,
        job_link: String,
        location: String,
        keywords: Vec<String>,
        technical_skills: Vec<String>,
        posted_date: Option<String>,
    ) -> JobPosting {
        JobPosting {
            id: nanoid!(),
            job_title,
            company_name,
            job_link,
            location,
            keywords,
            technical_skills,
            posted_date,
            source: "google_search".to_string(),
            scraped_at: DateTime::now(),
        }
    }
}

/// One completed pipeline run: the filtered postings plus run metadata.
/// Persisted append-only, never updated or deleted.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub jobs: Vec<JobPosting>,
    pub total_count: u32,
    pub search_query: String,
    pub search_date: DateTime,
}

impl SearchRecord {
    /// `total_count` is derived from the posting list so the two can never
    /// disagree.
    pub fn new(jobs: Vec<JobPosting>, search_query: String) -> SearchRecord {
        SearchRecord {
            id: ObjectId::new(),
            total_count: jobs.len() as u32,
            jobs,
            search_query,
            search_date: DateTime::now(),
        }
    }
}
