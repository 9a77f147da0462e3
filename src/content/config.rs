// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for page fetching and content extraction
//!
//! Defines settings for the HTTP fetch and the extraction character limits.

use std::env;

/// Default user agent sent with every page fetch
pub const DEFAULT_USER_AGENT: &str = "WebsiteRoasterBot/1.0";

/// Configuration for content fetching and extraction
#[derive(Debug, Clone)]
pub struct ContentFetchConfig {
    /// Timeout for the page fetch in seconds (default: 5)
    pub timeout_secs: u64,
    /// User agent sent with the fetch (default: WebsiteRoasterBot/1.0)
    pub user_agent: String,
    /// Maximum characters in the extracted block (default: 3000)
    pub max_chars: usize,
    /// Minimum characters for a page to count as readable (default: 200)
    pub min_chars: usize,
    /// Maximum redirects followed (default: 5)
    pub max_redirects: usize,
}

impl ContentFetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            user_agent: env::var("FETCH_USER_AGENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            max_chars: env::var("CONTENT_MAX_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_chars),
            min_chars: env::var("CONTENT_MIN_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_chars),
            max_redirects: defaults.max_redirects,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        if self.max_chars < 100 {
            return Err("max_chars must be at least 100".to_string());
        }
        if self.min_chars > self.max_chars {
            return Err(format!(
                "min_chars ({}) cannot exceed max_chars ({})",
                self.min_chars, self.max_chars
            ));
        }
        Ok(())
    }
}

impl Default for ContentFetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_chars: 3000,
            min_chars: 200,
            max_redirects: 5,
        }
    }
}
