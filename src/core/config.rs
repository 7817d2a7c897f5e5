use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

pub const DEFAULT_SUMMARIZER_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_name: String,
    pub debug: bool,
    pub port: u16,
    pub database_name: String,
    pub database_uri: PathBuf,
    pub base_url: Url,
    pub cors_allowed_origins: Vec<String>,
    pub summarizer_url: Url,
    pub summarizer_api_token: Option<String>,
    pub summarizer_timeout: Duration,
    pub tokenizer_path: Option<PathBuf>,
    pub rate_limit_per_minute: u32,
    pub persist_failures: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `FLASK_PORT`, `MONGO_DBNAME` and `MONGO_DBURI` are read when `PORT`,
    /// `DATABASE_NAME` and `DATABASE_URI` are unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let var_or = |key: &str, legacy: &str| var(key).or_else(|| var(legacy));

        Ok(Self {
            project_name: var("PROJECT_NAME").unwrap_or_else(|| "AI Summarizer".to_string()),
            debug: var("DEBUG").is_some_and(|v| v.trim().eq_ignore_ascii_case("true")),
            port: var_or("PORT", "FLASK_PORT")
                .map(|v| v.trim().parse::<u16>())
                .transpose()
                .map_err(|e| format!("PORT: {}", e))?
                .unwrap_or(5000),
            database_name: var_or("DATABASE_NAME", "MONGO_DBNAME")
                .unwrap_or_else(|| "summarizer_db".to_string()),
            database_uri: var_or("DATABASE_URI", "MONGO_DBURI")
                .map_or_else(|| PathBuf::from("./data/summarizer"), PathBuf::from),
            base_url: parse_url(
                "BASE_URL",
                &var("BASE_URL").unwrap_or_else(|| "http://localhost:9000".to_string()),
            )?,
            cors_allowed_origins: parse_origins(var("CORS_ALLOWED_ORIGINS").as_deref()),
            summarizer_url: parse_url(
                "SUMMARIZER_URL",
                &var("SUMMARIZER_URL").unwrap_or_else(|| DEFAULT_SUMMARIZER_URL.to_string()),
            )?,
            summarizer_api_token: var("SUMMARIZER_API_TOKEN"),
            summarizer_timeout: var("SUMMARIZER_TIMEOUT_SECS")
                .map(|v| v.trim().parse::<u64>())
                .transpose()
                .map_err(|e| format!("SUMMARIZER_TIMEOUT_SECS: {}", e))?
                .map_or(Duration::from_secs(300), Duration::from_secs),
            tokenizer_path: var("TOKENIZER_PATH").map(PathBuf::from),
            rate_limit_per_minute: var("RATE_LIMIT_PER_MINUTE")
                .map(|v| v.trim().parse::<u32>())
                .transpose()
                .map_err(|e| format!("RATE_LIMIT_PER_MINUTE: {}", e))?
                .unwrap_or(10),
            persist_failures: parse_bool("PERSIST_FAILURES", var("PERSIST_FAILURES"))?,
        })
    }
}

fn parse_bool(key: &str, value: Option<String>) -> Result<bool, String> {
    match value.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) if v == "true" || v == "1" => Ok(true),
        Some(v) if v == "false" || v == "0" => Ok(false),
        Some(v) => Err(format!("{}: expected true or false, got {:?}", key, v)),
    }
}

fn parse_url(key: &str, value: &str) -> Result<Url, String> {
    Url::parse(value.trim()).map_err(|e| format!("{}: {}", key, e))
}

fn parse_origins(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}
