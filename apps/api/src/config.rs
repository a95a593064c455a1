use anyhow::{bail, Context, Result};

use crate::extraction::ProfileName;

/// Application configuration loaded from environment variables.
/// Every variable has a usable default; the API key alone decides whether the
/// remote evaluator runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent or empty means the heuristic evaluator is used.
    pub openrouter_api_key: Option<String>,
    pub scoring_profile: ProfileName,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let openrouter_api_key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let scoring_profile = match std::env::var("SCORING_PROFILE")
            .unwrap_or_else(|_| "lenient".to_string())
            .to_lowercase()
            .as_str()
        {
            "lenient" => ProfileName::Lenient,
            "strict" => ProfileName::Strict,
            other => bail!("SCORING_PROFILE must be 'lenient' or 'strict', got '{other}'"),
        };

        Ok(Config {
            openrouter_api_key,
            scoring_profile,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
