use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

/// Environment-driven configuration. Word generation is optional: without
/// an endpoint and key the game runs entirely off the built-in word list.
#[derive(Debug, Clone)]
pub struct Config {
    pub words_api_url: Option<String>,
    pub words_api_key: Option<String>,
    pub words_api_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            words_api_url: env::var("WORDS_API_URL").ok(),
            words_api_key: env::var("WORDS_API_KEY").ok(),
            words_api_timeout_secs: env::var("WORDS_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
