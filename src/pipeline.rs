use anyhow::{Context, Result};

use crate::data_models::SearchRecord;
use crate::db::SearchRecordRepo;
use crate::fetcher::JobFetcher;
use crate::mailer::Mailer;
use crate::relevance::filter_relevant;

/// The query every scheduled run searches for.
pub const DAILY_QUERY: &str = "Third Party Risk Assessment";
pub const DAILY_LOCATION: &str = "Bangalore India OR remote";
pub const DAILY_DAYS_FILTER: u32 = 7;

/// Everything a pipeline run needs, built once at startup and shared by the
/// API handlers and the scheduler.
pub struct AppContext {
    pub records: SearchRecordRepo,
    pub fetcher: JobFetcher,
    pub mailer: Mailer,
    pub recipient: String,
}

/// One full run: fetch, filter, store, mail. Fetch errors were already
/// absorbed per template inside the fetcher; a store failure is the only
/// hard error surfaced to the caller. A failed email is logged and the run
/// still counts as completed.
pub async fn run_daily_search(ctx: &AppContext) -> Result<SearchRecord> {
    tracing::info!("starting daily job search");

    let jobs = ctx
        .fetcher
        .search(DAILY_QUERY, DAILY_LOCATION, DAILY_DAYS_FILTER)
        .await;
    let relevant = filter_relevant(jobs);

    let record = SearchRecord::new(relevant, DAILY_QUERY.to_string());
    ctx.records
        .insert(&record)
        .await
        .context("Failed to store search record")?;

    if !ctx.mailer.send_report(&record.jobs, &ctx.recipient).await {
        tracing::warn!("report email delivery failed, run is stored regardless");
    }

    tracing::info!(
        "daily job search completed, found {} relevant jobs",
        record.total_count
    );
    Ok(record)
}
