use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = normalize_database_url(env::var("DATABASE_URL").ok());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            port,
            database_url,
            host,
        })
    }
}

/// Falls back to a local SQLite file when no URL is configured.
pub fn normalize_database_url(raw: Option<String>) -> String {
    match raw.filter(|url| !url.trim().is_empty()) {
        Some(url) => match url.strip_prefix("postgres://") {
            Some(rest) => format!("postgresql://{rest}"),
            None => url,
        },
        None => DEFAULT_DATABASE_URL.to_string(),
    }
}
