use std::sync::Arc;

use jobscout::api;
use jobscout::config::CONFIG;
use jobscout::db::{Database, SearchRecordRepo};
use jobscout::fetcher::JobFetcher;
use jobscout::mailer::Mailer;
use jobscout::pipeline::AppContext;
use jobscout::scheduler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let db = Database::from_config().await?;
    let ctx = Arc::new(AppContext {
        records: SearchRecordRepo::new(&db),
        fetcher: JobFetcher::new(CONFIG.search_base_url.clone()),
        mailer: Mailer::from_config()?,
        recipient: CONFIG.report_recipient.clone(),
    });

    scheduler::spawn(ctx.clone());

    let app = api::create_router(ctx);
    let listener = tokio::net::TcpListener::bind(&CONFIG.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
