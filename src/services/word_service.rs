//! Word pair supply: a remote generation endpoint when one is configured,
//! the built-in list otherwise. Generation failures never surface to the
//! game; the fallback list always answers.

use std::time::Duration;

use log::{debug, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::fallback_words;
use crate::models::word::{Difficulty, WordPair};
use crate::utils::config::Config;

#[derive(Error, Debug)]
pub enum WordApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("no generation endpoint or API key configured")]
    NotConfigured,
    #[error("generation endpoint answered {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    difficulty: Difficulty,
    api_key: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    word_pair: WordPair,
    #[serde(default)]
    source: Option<String>,
}

pub struct WordGenerator {
    client: Client,
    base_url: Option<String>,
    api_key: Option<String>,
}

impl WordGenerator {
    pub fn new(base_url: Option<String>, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.words_api_url.clone(),
            config.words_api_key.clone(),
            Duration::from_secs(config.words_api_timeout_secs),
        )
    }

    /// Always resolves to a pair: the remote endpoint when configured and
    /// healthy, the built-in list on any failure.
    pub async fn generate(&self, difficulty: Difficulty) -> WordPair {
        match self.request_remote(difficulty).await {
            Ok(word_pair) => {
                info!(
                    "generated word pair remotely: {} / {}",
                    word_pair.civilian_word, word_pair.undercover_word
                );
                word_pair
            }
            Err(err) => {
                warn!("word generation unavailable ({err}), using the built-in list");
                fallback_words::random_pair(Some(difficulty), &mut rand::thread_rng())
            }
        }
    }

    async fn request_remote(&self, difficulty: Difficulty) -> Result<WordPair, WordApiError> {
        let (base_url, api_key) = match (&self.base_url, &self.api_key) {
            (Some(base_url), Some(api_key)) => (base_url, api_key),
            _ => return Err(WordApiError::NotConfigured),
        };

        let response = self
            .client
            .post(format!("{base_url}/api/generate-words"))
            .json(&GenerateRequest {
                difficulty,
                api_key: api_key.as_str(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WordApiError::Status(response.status()));
        }

        let body = response.json::<GenerateResponse>().await?;
        if let Some(source) = &body.source {
            debug!("word pair source: {source}");
        }
        Ok(body.word_pair)
    }
}
