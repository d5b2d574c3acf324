use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::ats::DEFAULT_PROXY_BASE_URL;

/// Application configuration loaded from environment variables.
/// Every variable is optional; a malformed `PORT` fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub proxy_base_url: String,
    /// JSON file overriding the compiled-in targets and scoring tables.
    pub profile_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            proxy_base_url: std::env::var("JOB_PROXY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PROXY_BASE_URL.to_string()),
            profile_path: std::env::var_os("MATCHER_PROFILE").map(PathBuf::from),
        })
    }
}
