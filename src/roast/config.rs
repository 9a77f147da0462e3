// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the chat-completion call

use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "https://api.aimlapi.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemma-2b-it";

/// What the orchestrator does when the AI call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiFailurePolicy {
    /// Serve the static fallback roast
    #[default]
    Fallback,
    /// Surface the failure to the user
    Error,
}

impl FromStr for AiFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unknown AI failure policy '{}'; expected 'fallback' or 'error'",
                other
            )),
        }
    }
}

/// Configuration for the roast model call
#[derive(Clone)]
pub struct RoastConfig {
    /// Chat-completion endpoint
    pub api_url: String,
    /// Model name sent in the request
    pub model: String,
    /// Credentials tried in order until one succeeds
    pub api_keys: Vec<String>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    /// Per-attempt timeout in seconds (default: 8)
    pub timeout_secs: u64,
    pub failure_policy: AiFailurePolicy,
}

impl RoastConfig {
    /// Load configuration from environment variables
    ///
    /// `AIML_API_KEY` is tried first, then each entry of the
    /// comma-separated `AIML_API_KEYS`. An unrecognised `AI_FAILURE_POLICY`
    /// is an error rather than a silent default.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();
        let failure_policy = parse_failure_policy(env::var("AI_FAILURE_POLICY").ok().as_deref())?;
        Ok(Self {
            api_url: env::var("AI_API_URL").unwrap_or(defaults.api_url),
            model: env::var("AI_MODEL").unwrap_or(defaults.model),
            api_keys: parse_api_keys(
                env::var("AIML_API_KEY").ok().as_deref(),
                env::var("AIML_API_KEYS").ok().as_deref(),
            ),
            temperature: env::var("AI_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.temperature),
            top_p: env::var("AI_TOP_P")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.top_p),
            max_tokens: env::var("AI_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_tokens),
            timeout_secs: env::var("AI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            failure_policy,
        })
    }

    /// Validate configuration values
    ///
    /// Missing credentials are not an error: the fallback policy still
    /// produces a roast without them.
    pub fn validate(&self) -> Result<(), String> {
        if url::Url::parse(&self.api_url).is_err() {
            return Err(format!("api_url is not a valid URL: {}", self.api_url));
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0 and 2".to_string());
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err("top_p must be between 0 and 1".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be at least 1".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    /// Check if any credential is configured
    pub fn has_credentials(&self) -> bool {
        !self.api_keys.is_empty()
    }
}

impl Default for RoastConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_keys: Vec::new(),
            temperature: 0.6,
            top_p: 0.9,
            max_tokens: 300,
            timeout_secs: 8,
            failure_policy: AiFailurePolicy::Fallback,
        }
    }
}

// Keys stay out of logs and panic messages.
impl fmt::Debug for RoastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoastConfig")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_keys", &format_args!("[{} redacted]", self.api_keys.len()))
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("failure_policy", &self.failure_policy)
            .finish()
    }
}

/// Policy from its variable value; unset or blank means the default
pub fn parse_failure_policy(raw: Option<&str>) -> Result<AiFailurePolicy, String> {
    match raw {
        Some(value) if !value.trim().is_empty() => value.parse(),
        _ => Ok(AiFailurePolicy::default()),
    }
}

/// Merge the single-key and key-list variables, dropping blanks and duplicates
pub fn parse_api_keys(single: Option<&str>, list: Option<&str>) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    let candidates = single
        .into_iter()
        .chain(list.into_iter().flat_map(|l| l.split(',')));

    for candidate in candidates {
        let key = candidate.trim();
        if !key.is_empty() && !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}
