// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat-completion client for roast generation via OpenAI-compatible API
//!
//! Credentials are rotated: each configured key is tried in order until one
//! attempt returns a valid roast.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::config::RoastConfig;
use super::provider::RoastProvider;
use super::types::{AiError, RoastResult};

/// Longest slice of an error body kept in [`AiError::ApiError`]
const MAX_ERROR_BODY_CHARS: usize = 200;

// --- OpenAI-compatible serde structs ---

#[derive(serde::Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    timeout: u64,
}

#[derive(serde::Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Client for the hosted chat-completion endpoint
pub struct AiClient {
    client: Client,
    config: RoastConfig,
}

impl AiClient {
    /// Create a new AI client
    pub fn new(config: RoastConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            "AI client configured: endpoint={}, model={}, credentials={}",
            config.api_url,
            config.model,
            config.api_keys.len()
        );

        Ok(Self { client, config })
    }

    /// Get the model name
    pub fn model_name(&self) -> &str {
        &self.config.model
    }

    fn chat_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            max_tokens: self.config.max_tokens,
            timeout: self.config.timeout_secs,
        }
    }

    /// One call with one credential
    async fn attempt(&self, api_key: &str, prompt: &str) -> Result<RoastResult, AiError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&self.chat_request(prompt))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(AiError::EmptyReply)?;

        parse_roast_reply(&text)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> AiError {
        if e.is_timeout() {
            AiError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            AiError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl RoastProvider for AiClient {
    async fn roast(&self, prompt: &str) -> Result<RoastResult, AiError> {
        let keys = &self.config.api_keys;
        if keys.is_empty() {
            return Err(AiError::NoCredentials);
        }

        let mut last_error = None;
        for (index, api_key) in keys.iter().enumerate() {
            debug!("Trying AI credential {}/{}", index + 1, keys.len());

            match self.attempt(api_key, prompt).await {
                Ok(roast) => {
                    info!(
                        "AI roast complete with credential {}/{} (score {})",
                        index + 1,
                        keys.len(),
                        roast.overall_score
                    );
                    return Ok(roast);
                }
                Err(e) => {
                    warn!(
                        "AI credential {}/{} failed: {}, trying next",
                        index + 1,
                        keys.len(),
                        e
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(AiError::CredentialsExhausted {
            attempts: keys.len(),
            last: Box::new(last_error.unwrap_or(AiError::NoCredentials)),
        })
    }

    fn name(&self) -> &'static str {
        "chat-completion"
    }

    fn is_available(&self) -> bool {
        self.config.has_credentials()
    }
}

/// Remove markdown code-fence markers the model wraps JSON in
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a model reply into a validated roast
///
/// Failures keep the cleaned reply text so it can be logged or inspected.
pub fn parse_roast_reply(text: &str) -> Result<RoastResult, AiError> {
    let clean = strip_code_fences(text);

    let roast: RoastResult =
        serde_json::from_str(&clean).map_err(|e| AiError::MalformedReply {
            reason: e.to_string(),
            raw: clean.clone(),
        })?;

    roast
        .validate()
        .map_err(|reason| AiError::MalformedReply { reason, raw: clean })?;

    Ok(roast)
}
