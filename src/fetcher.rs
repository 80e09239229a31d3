use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header;
use scraper::{Html, Selector};
use std::time::Duration;

use crate::data_models::{COMPANY_NOT_FOUND, JobPosting};
use crate::keywords::{generate_keywords, generate_technical_skills};

/// Pretend to be a browser, the search endpoint rejects obvious bots.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const RESULTS_PER_TEMPLATE: usize = 10;
const TEMPLATE_PAUSE: Duration = Duration::from_secs(1);

static COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"at\s+([A-Za-z\s&.]+)").expect("company pattern is valid")
});

/// Fetches templated search-result pages and turns them into postings.
///
/// The base URL is injectable so tests can stand up a local listener in
/// place of the real search engine.
pub struct JobFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl JobFetcher {
    pub fn new(base_url: String) -> JobFetcher {
        JobFetcher {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Query variations mixing the caller's query with fixed TPRM phrases.
    fn build_search_queries(query: &str) -> Vec<String> {
        vec![
            format!(
                "\"{query}\" jobs in Bangalore India OR remote site:linkedin.com OR site:naukri.com OR site:indeed.com"
            ),
            "\"Third Party Risk\" OR \"Vendor Risk\" OR \"Supplier Risk\" jobs Bangalore India OR remote".to_string(),
            "\"TPRM\" OR \"Third Party Risk Management\" jobs Bangalore OR remote product company".to_string(),
            "\"Risk Assessment\" analyst jobs Bangalore India OR remote 6 years experience".to_string(),
            "\"Third Party Risk\" remote jobs India product company".to_string(),
            "\"Vendor Risk Management\" remote OR Bangalore India jobs".to_string(),
        ]
    }

    /// Run every query template and concatenate whatever postings came back.
    /// Failed templates are logged and skipped; duplicates across templates
    /// are kept. `days_filter` is accepted for API compatibility but recency
    /// is not enforced anywhere downstream.
    pub async fn search(&self, query: &str, _location: &str, _days_filter: u32) -> Vec<JobPosting> {
        let mut jobs = Vec::new();

        for search_query in Self::build_search_queries(query) {
            let response = self
                .client
                .get(format!("{}/search", self.base_url))
                .query(&[("q", search_query.as_str()), ("tbm", "nws")])
                .header(header::USER_AGENT, USER_AGENT)
                .send()
                .await;

            match response {
                Ok(response) if response.status().is_success() => match response.text().await {
                    Ok(html) => jobs.extend(parse_results(&html, query)),
                    Err(e) => {
                        tracing::error!("error reading search response body: {:#}", e);
                    }
                },
                // Non-success status: skip this template.
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("error searching jobs: {:#}", e);
                }
            }

            tokio::time::sleep(TEMPLATE_PAUSE).await;
        }

        jobs
    }
}

/// Scan the result markup for posting blocks. A block without both a title
/// and a link is skipped; everything else is best effort.
fn parse_results(html: &str, query: &str) -> Vec<JobPosting> {
    let document = Html::parse_document(html);

    let block_selector = Selector::parse("div.g").unwrap();
    let title_selector = Selector::parse("h3").unwrap();
    let link_selector = Selector::parse("a").unwrap();
    let snippet_selector = Selector::parse("span.st").unwrap();

    let mut jobs = Vec::new();
    for block in document.select(&block_selector).take(RESULTS_PER_TEMPLATE) {
        let title = block
            .select(&title_selector)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string());
        let link = block
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string);

        let (Some(job_title), Some(job_link)) = (title, link) else {
            continue;
        };

        let company_name = block
            .select(&snippet_selector)
            .next()
            .map(|s| s.text().collect::<String>())
            .and_then(|snippet| extract_company(&snippet))
            .unwrap_or_else(|| COMPANY_NOT_FOUND.to_string());

        let keywords = generate_keywords(&job_title, query);
        let technical_skills = generate_technical_skills(&job_title, query);

        jobs.push(JobPosting::new(
            job_title,
            company_name,
            job_link,
            "Bangalore, India / Remote".to_string(),
            keywords,
            technical_skills,
            Some("Recent (24 hours)".to_string()),
        ));
    }

    jobs
}

/// Best-effort company extraction from a description snippet.
fn extract_company(snippet: &str) -> Option<String> {
    COMPANY_RE
        .captures(snippet)
        .map(|captures| captures[1].trim().to_string())
}
