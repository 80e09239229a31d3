pub mod api;
pub mod config;
pub mod data_models;
pub mod db;
pub mod fetcher;
pub mod keywords;
pub mod mailer;
pub mod pipeline;
pub mod relevance;
pub mod report;
pub mod scheduler;
