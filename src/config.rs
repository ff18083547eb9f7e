use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub external_service_url: String,
    pub api_key: String,
    pub port: u16,
    pub default_page_size: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            external_service_url: env::var("EXTERNAL_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8001".to_string()),
            api_key: env::var("API_KEY").unwrap_or_else(|_| "default_key".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DEFAULT_PAGE_SIZE must be a valid number")?,
        })
    }
}
