use crate::data_models::JobPosting;

/// Fixed substring set deciding which scraped postings are kept.
pub const RELEVANCE_KEYWORDS: [&str; 6] = [
    "risk",
    "compliance",
    "vendor",
    "supplier",
    "third party",
    "tprm",
];

/// Keep only postings whose title mentions one of the relevance keywords.
/// Idempotent, filtering an already-filtered list is a no-op.
pub fn filter_relevant(jobs: Vec<JobPosting>) -> Vec<JobPosting> {
    jobs.into_iter()
        .filter(|job| {
            let title = job.job_title.to_lowercase();
            RELEVANCE_KEYWORDS.iter().any(|k| title.contains(k))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_models::COMPANY_NOT_FOUND;

    fn posting(title: &str) -> JobPosting {
        JobPosting::new(
            title.to_string(),
            COMPANY_NOT_FOUND.to_string(),
            "https://example.com/job".to_string(),
            "Remote".to_string(),
            vec![],
            vec![],
            None,
        )
    }

    #[test]
    fn keeps_relevant_drops_unrelated() {
        let jobs = vec![
            posting("Senior Risk Analyst"),
            posting("Graphic Designer"),
            posting("TPRM Lead"),
            posting("Supplier Quality Engineer"),
        ];
        let filtered = filter_relevant(jobs);
        let titles: Vec<&str> = filtered.iter().map(|j| j.job_title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Senior Risk Analyst", "TPRM Lead", "Supplier Quality Engineer"]
        );
    }

    #[test]
    fn matching_is_case_folded() {
        let filtered = filter_relevant(vec![posting("COMPLIANCE Officer")]);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn filter_is_idempotent() {
        let jobs = vec![
            posting("Vendor Risk Manager"),
            posting("Backend Engineer"),
            posting("Third Party Risk Specialist"),
        ];
        let once = filter_relevant(jobs);
        let titles_once: Vec<String> = once.iter().map(|j| j.job_title.clone()).collect();
        let twice = filter_relevant(once);
        let titles_twice: Vec<String> = twice.iter().map(|j| j.job_title.clone()).collect();
        assert_eq!(titles_once, titles_twice);
    }

    #[test]
    fn empty_list_passes_through() {
        assert!(filter_relevant(vec![]).is_empty());
    }
}
