use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use std::sync::Arc;

use crate::data_models::JobPosting;
use crate::pipeline::{self, AppContext};
use crate::relevance::filter_relevant;

use super::models::{
    JobPostingView, JobSearchRequest, JobSearchResponse, MessageResponse, SearchRecordView,
    StatusResponse,
};

pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "TPRM Job Search Automation System".to_string(),
        status: "running".to_string(),
    })
}

pub async fn search_jobs(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<JobSearchResponse>, (StatusCode, String)> {
    if request.query.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Query cannot be empty".to_string()));
    }

    let jobs = ctx
        .fetcher
        .search(&request.query, &request.location, request.days_filter)
        .await;
    let relevant = filter_relevant(jobs);

    Ok(Json(JobSearchResponse {
        total_count: relevant.len(),
        jobs: relevant.iter().map(JobPostingView::from).collect(),
        search_query: request.query,
        search_date: Utc::now().to_rfc3339(),
    }))
}

pub async fn send_test_email(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let sample_jobs = vec![
        JobPosting::new(
            "Senior Third Party Risk Analyst".to_string(),
            "Tech Corp India".to_string(),
            "https://example.com/job1".to_string(),
            "Bangalore, India / Remote".to_string(),
            vec![
                "Third Party Risk Management".to_string(),
                "Vendor Risk Assessment".to_string(),
                "Compliance".to_string(),
                "Risk Mitigation".to_string(),
                "GRC".to_string(),
            ],
            vec![
                "GRC Tools".to_string(),
                "SQL".to_string(),
                "Risk Frameworks".to_string(),
                "Excel".to_string(),
                "Regulatory Compliance".to_string(),
            ],
            None,
        ),
        JobPosting::new(
            "Vendor Risk Manager - Remote".to_string(),
            "Product Company Ltd".to_string(),
            "https://example.com/job2".to_string(),
            "Remote / Bangalore, India".to_string(),
            vec![
                "Vendor Risk".to_string(),
                "Supplier Management".to_string(),
                "Risk Assessment".to_string(),
                "Compliance".to_string(),
                "Due Diligence".to_string(),
            ],
            vec![
                "ServiceNow".to_string(),
                "Risk Modeling".to_string(),
                "Python".to_string(),
                "Business Intelligence".to_string(),
                "SOX Compliance".to_string(),
            ],
            None,
        ),
    ];

    if ctx.mailer.send_report(&sample_jobs, &ctx.recipient).await {
        Ok(Json(MessageResponse {
            message: "Test email sent successfully".to_string(),
        }))
    } else {
        Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send test email".to_string(),
        ))
    }
}

pub async fn job_results(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<SearchRecordView>>, (StatusCode, String)> {
    let records = ctx.records.recent().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to get job results: {e:#}"),
        )
    })?;

    Ok(Json(records.iter().map(SearchRecordView::from).collect()))
}

pub async fn trigger_manual_search(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    pipeline::run_daily_search(&ctx)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("{e:#}")))?;

    Ok(Json(MessageResponse {
        message: "Manual job search completed successfully".to_string(),
    }))
}
