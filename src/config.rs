use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    let smtp_sender = get_env("SMTP_SENDER");
    Config {
        mongo_uri: get_env("MONGO_URI"),
        mongo_db_name: get_env_or_default("MONGO_DB_NAME", "jobscout"),
        smtp_relay: get_env_or_default("SMTP_RELAY", "smtp.gmail.com"),
        // The app password must come from the environment, there is no fallback.
        smtp_password: get_env("SMTP_APP_PASSWORD"),
        report_recipient: env::var("REPORT_RECIPIENT").unwrap_or_else(|_| smtp_sender.clone()),
        smtp_sender,
        listen_addr: get_env_or_default("LISTEN_ADDR", "0.0.0.0:8000"),
        search_base_url: get_env_or_default("SEARCH_BASE_URL", "https://www.google.com"),
    }
});

pub struct Config {
    pub mongo_uri: String,
    pub mongo_db_name: String,
    pub smtp_relay: String,
    pub smtp_sender: String,
    pub smtp_password: String,
    pub report_recipient: String,
    pub listen_addr: String,
    pub search_base_url: String,
}

fn get_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("Missing required environment variable: {key}"))
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
