use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::pipeline::AppContext;

pub mod handlers;
pub mod models;

pub fn create_router(ctx: Arc<AppContext>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/", get(handlers::root))
        .route("/api/search-jobs", post(handlers::search_jobs))
        .route("/api/send-test-email", post(handlers::send_test_email))
        .route("/api/job-results", get(handlers::job_results))
        .route("/api/trigger-manual-search", post(handlers::trigger_manual_search))
        .with_state(ctx)
        .layer(cors)
}
