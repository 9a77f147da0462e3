// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP page fetching with a fixed user agent and timeout
//!
//! Fetches the raw markup of the page being roasted. One GET, no retry.

use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::config::ContentFetchConfig;

/// Page fetch error types
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request timed out
    #[error("Timeout after {timeout_secs}s fetching: {url}")]
    Timeout { url: String, timeout_secs: u64 },

    /// Connection, DNS, TLS or body read failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success status code
    #[error("HTTP {status} {reason} for: {url}")]
    HttpStatus {
        status: u16,
        reason: String,
        url: String,
    },
}

impl FetchError {
    /// Status code of the target page, when the failure came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Fetches page markup for extraction
pub struct ContentFetcher {
    client: Client,
    config: ContentFetchConfig,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(config: ContentFetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch the raw HTML of a page
    ///
    /// Non-2xx responses are errors; the body of an error page is never
    /// handed to the extractor.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching page: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: url.to_string(),
            });
        }

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        info!("Fetched {} bytes from: {}", html.len(), url);
        Ok(html)
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentFetchConfig {
        &self.config
    }
}
