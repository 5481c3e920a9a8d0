//! Explanation-generation service client
//!
//! After each battle round the app asks an external text-generation
//! service why the winning food is the healthier choice. The call is
//! strictly best-effort: scoring is already finalized when the fetch is
//! issued, and any failure degrades to "no explanation" without retry.

use async_trait::async_trait;
use nutrikit_core::catalog::{FoodPair, Side};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::ExplainConfig;

/// Explanation fetch failure. Callers treat every variant the same way:
/// log it and leave the explanation panel empty.
#[derive(Error, Debug)]
pub enum ExplainError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service returned status {0}")]
    Status(u16),
}

/// One round's worth of context for the prompt
#[derive(Debug, Clone)]
pub struct ExplanationRequest {
    pub picked_name: String,
    pub winner_name: String,
    pub correct: bool,
}

impl ExplanationRequest {
    /// Build the request from a pair and the player's pick
    pub fn from_round(pair: &FoodPair, picked: Side, winner: Side) -> Self {
        Self {
            picked_name: pair.item(picked).name.clone(),
            winner_name: pair.item(winner).name.clone(),
            correct: picked == winner,
        }
    }

    /// The natural-language prompt sent to the service
    pub fn prompt(&self) -> String {
        format!(
            "The user {} chose \"{}\" over \"{}\" in a food health battle. \
             In exactly 2 short sentences, explain why \"{}\" is the healthier choice. \
             Be specific and mention one key nutritional fact. No emojis.",
            if self.correct { "correctly" } else { "incorrectly" },
            self.picked_name,
            self.winner_name,
            self.winner_name,
        )
    }
}

/// Seam for the external text-generation collaborator
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    async fn explain(&self, request: &ExplanationRequest) -> Result<String, ExplainError>;
}

// ============================================================================
// HTTP client
// ============================================================================

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Explanation client over the messages HTTP API
pub struct HttpExplanationClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: SecretString,
    max_tokens: u32,
}

impl HttpExplanationClient {
    pub fn new(config: &ExplainConfig) -> Result<Self, ExplainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: SecretString::new(config.api_key.clone()),
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl ExplanationProvider for HttpExplanationClient {
    async fn explain(&self, request: &ExplanationRequest) -> Result<String, ExplainError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: request.prompt(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplainError::Status(status.as_u16()));
        }

        let parsed: MessagesResponse = response.json().await?;
        let text: String = parsed
            .content
            .iter()
            .filter_map(|block| block.text.as_deref())
            .collect::<Vec<_>>()
            .join("");

        debug!(chars = text.len(), "explanation received");
        Ok(text)
    }
}
