use anyhow::Result;
use mongodb::bson::DateTime;

use jobscout::data_models::{COMPANY_NOT_FOUND, JobPosting, SearchRecord};
use jobscout::db::{Database, RECENT_RESULTS_LIMIT, SearchRecordRepo};

mod test_helpers {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static TEST_DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

    pub fn unique_test_db_name() -> String {
        let count = TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_millis();
        format!("jobscout_store_test_{}_{}", timestamp, count)
    }

    pub async fn create_test_db() -> Result<(Database, String)> {
        dotenvy::dotenv().ok();
        let uri =
            std::env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db_name = unique_test_db_name();
        let db = Database::new(&uri, &db_name).await?;
        Ok((db, db_name))
    }

    pub async fn cleanup_test_db(db: &Database, db_name: &str) -> Result<()> {
        db.client()
            .database(db_name)
            .drop()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to drop test database: {}", e))?;
        Ok(())
    }

    pub fn posting(title: &str) -> JobPosting {
        JobPosting::new(
            title.to_string(),
            COMPANY_NOT_FOUND.to_string(),
            "https://example.com/job".to_string(),
            "Bangalore, India / Remote".to_string(),
            vec!["Third Party Risk Management".to_string()],
            vec!["GRC Tools".to_string()],
            Some("Recent (24 hours)".to_string()),
        )
    }
}

use test_helpers::*;

#[tokio::test]
async fn insert_and_read_back_preserves_record() -> Result<()> {
    let (db, db_name) = create_test_db().await?;
    let repo = SearchRecordRepo::new(&db);

    let record = SearchRecord::new(
        vec![posting("Senior Risk Analyst"), posting("Vendor Risk Manager")],
        "Third Party Risk Assessment".to_string(),
    );
    repo.insert(&record).await?;

    let recent = repo.recent().await?;
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].search_query, "Third Party Risk Assessment");
    assert_eq!(recent[0].total_count, 2);
    assert_eq!(recent[0].total_count as usize, recent[0].jobs.len());
    assert_eq!(recent[0].jobs[0].job_title, "Senior Risk Analyst");

    cleanup_test_db(&db, &db_name).await?;
    Ok(())
}

#[tokio::test]
async fn empty_store_returns_empty_list() -> Result<()> {
    let (db, db_name) = create_test_db().await?;
    let repo = SearchRecordRepo::new(&db);

    let recent = repo.recent().await?;
    assert!(recent.is_empty());

    cleanup_test_db(&db, &db_name).await?;
    Ok(())
}

#[tokio::test]
async fn recent_orders_newest_first_and_caps_at_limit() -> Result<()> {
    let (db, db_name) = create_test_db().await?;
    let repo = SearchRecordRepo::new(&db);

    let base = DateTime::now().timestamp_millis();
    for i in 0..12 {
        let mut record = SearchRecord::new(vec![posting("Risk Analyst")], format!("query {i}"));
        record.search_date = DateTime::from_millis(base + i * 1_000);
        repo.insert(&record).await?;
    }

    let recent = repo.recent().await?;
    assert_eq!(recent.len() as i64, RECENT_RESULTS_LIMIT);
    assert_eq!(recent[0].search_query, "query 11");
    assert_eq!(recent[9].search_query, "query 2");
    for pair in recent.windows(2) {
        assert!(pair[0].search_date >= pair[1].search_date);
    }

    cleanup_test_db(&db, &db_name).await?;
    Ok(())
}
