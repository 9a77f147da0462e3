// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Roast orchestration
//!
//! Runs one submitted URL through validation, fetching, extraction and the
//! AI call, in that order.

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::client::AiClient;
use super::config::{AiFailurePolicy, RoastConfig};
use super::fallback::fallback_roast;
use super::prompt::build_prompt;
use super::provider::RoastProvider;
use super::types::{RoastError, RoastReport, RoastSource};
use crate::content::{extract_page_content, is_valid_url, ContentFetchConfig, ContentFetcher};

/// Main roast service that sequences the fetch, extraction and AI call
pub struct RoastService {
    fetcher: ContentFetcher,
    provider: Box<dyn RoastProvider>,
    content_config: ContentFetchConfig,
    failure_policy: AiFailurePolicy,
}

impl RoastService {
    /// Create a new roast service backed by the chat-completion client
    pub fn new(content_config: ContentFetchConfig, roast_config: RoastConfig) -> Result<Self> {
        let failure_policy = roast_config.failure_policy;
        let provider = AiClient::new(roast_config)?;
        Self::with_provider(content_config, Box::new(provider), failure_policy)
    }

    /// Create a roast service with a custom provider
    pub fn with_provider(
        content_config: ContentFetchConfig,
        provider: Box<dyn RoastProvider>,
        failure_policy: AiFailurePolicy,
    ) -> Result<Self> {
        let fetcher = ContentFetcher::new(content_config.clone())?;
        Ok(Self {
            fetcher,
            provider,
            content_config,
            failure_policy,
        })
    }

    /// Roast the page at `url`
    ///
    /// # Returns
    /// A report with the roast and where it came from, or the error to show
    /// the user
    pub async fn roast_url(&self, url: &str) -> Result<RoastReport, RoastError> {
        let url = url.trim();
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!("roast", request_id = %request_id, url = %url);

        let result = self.run(url, &request_id).instrument(span.clone()).await;
        if let Err(ref e) = result {
            span.in_scope(|| warn!("Roast failed: {}", e));
        }
        result
    }

    async fn run(&self, url: &str, request_id: &str) -> Result<RoastReport, RoastError> {
        if url.is_empty() {
            return Err(RoastError::EmptyUrl);
        }
        if !is_valid_url(url) {
            return Err(RoastError::InvalidUrl);
        }

        let html = self.fetcher.fetch_html(url).await?;
        let content = extract_page_content(&html, self.content_config.max_chars);

        let chars = content.chars().count();
        debug!("Extracted {} chars of content", chars);
        if chars < self.content_config.min_chars {
            return Err(RoastError::NotEnoughContent {
                chars,
                min_chars: self.content_config.min_chars,
            });
        }

        let prompt = build_prompt(&content);

        let (roast, source) = match self.provider.roast(&prompt).await {
            Ok(roast) => (roast, RoastSource::Ai),
            Err(e) => match self.failure_policy {
                AiFailurePolicy::Fallback => {
                    warn!(
                        "Provider {} failed: {}, serving fallback roast",
                        self.provider.name(),
                        e
                    );
                    (fallback_roast(), RoastSource::Fallback)
                }
                AiFailurePolicy::Error => return Err(e.into()),
            },
        };

        info!("Roast ready (source: {:?}, score: {})", source, roast.overall_score);

        Ok(RoastReport {
            request_id: request_id.to_string(),
            url: url.to_string(),
            roast,
            source,
            generated_at: Utc::now(),
        })
    }

    /// Check if the AI provider has credentials
    pub fn ai_available(&self) -> bool {
        self.provider.is_available()
    }

    /// Get the AI failure policy
    pub fn failure_policy(&self) -> AiFailurePolicy {
        self.failure_policy
    }
}
