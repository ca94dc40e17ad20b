use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};

const DATA_DIR: &str = "matchday";
const DB_FILE: &str = "favorites.sqlite";
pub const DEFAULT_API_URL: &str = "https://v3.football.api-sports.io";

#[derive(Debug, Clone)]
pub struct Config {
    pub use_real_api: bool,
    pub api_key: Option<String>,
    pub api_url: String,
    pub favorites_db: Option<PathBuf>,
    pub user_id: Option<String>,
    pub mock_seed: u64,
    pub http_timeout_secs: u64,
}

impl Config {
    /// Reads `.env.local` and `.env` (if present), then the process environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");

        let use_real_api = env::var("MATCHDAY_USE_REAL_API")
            .map(|val| val.trim() == "true")
            .unwrap_or(false);
        let api_key = non_empty_var("API_FOOTBALL_KEY");
        if use_real_api && api_key.is_none() {
            bail!("MATCHDAY_USE_REAL_API=true requires API_FOOTBALL_KEY");
        }

        Ok(Self {
            use_real_api,
            api_key,
            api_url: non_empty_var("API_FOOTBALL_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            favorites_db: non_empty_var("MATCHDAY_DB")
                .map(PathBuf::from)
                .or_else(default_db_path),
            user_id: non_empty_var("MATCHDAY_USER"),
            mock_seed: env::var("MATCHDAY_MOCK_SEED")
                .ok()
                .and_then(|val| val.parse::<u64>().ok())
                .unwrap_or(2000),
            http_timeout_secs: env::var("MATCHDAY_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|val| val.parse::<u64>().ok())
                .unwrap_or(10)
                .max(1),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

pub fn default_db_path() -> Option<PathBuf> {
    if let Ok(base) = env::var("XDG_DATA_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(DATA_DIR).join(DB_FILE));
        }
    }
    let home = env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(DATA_DIR)
            .join(DB_FILE),
    )
}
