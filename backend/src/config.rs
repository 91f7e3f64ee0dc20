use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub cors_origins: Vec<String>,
    pub storage_api_base: String,
    pub storage_bucket: String,
    pub storage_token: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            storage_api_base: std::env::var("STORAGE_API_BASE")
                .unwrap_or_else(|_| "https://firebasestorage.googleapis.com".into()),
            storage_bucket: std::env::var("STORAGE_BUCKET")
                .context("STORAGE_BUCKET must be set")?,
            storage_token: std::env::var("STORAGE_TOKEN").ok(),
        })
    }
}
