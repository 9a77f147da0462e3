// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for roasting a web page

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::FetchError;

/// Number of headline rewrites a roast must carry
pub const HEADLINE_FIX_COUNT: usize = 3;
/// Number of quick wins a roast must carry
pub const QUICK_WIN_COUNT: usize = 3;

/// Structured critique of a page's copy
///
/// Field names match the JSON schema the model is asked to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoastResult {
    /// Score from 0 to 10
    pub overall_score: f64,
    /// Short, blunt problems with the copy
    pub main_problems: Vec<String>,
    /// Reasons visitors leave without converting
    pub why_people_wont_convert: Vec<String>,
    /// Exactly three improved headline options
    pub headline_fixes: Vec<String>,
    /// One improved call to action
    pub cta_fix: String,
    /// Exactly three fast improvements
    pub quick_wins: Vec<String>,
}

impl RoastResult {
    /// Check the shape constraints serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        if !self.overall_score.is_finite() || !(0.0..=10.0).contains(&self.overall_score) {
            return Err(format!(
                "overall_score must be between 0 and 10, got {}",
                self.overall_score
            ));
        }
        if self.headline_fixes.len() != HEADLINE_FIX_COUNT {
            return Err(format!(
                "headline_fixes must have {} entries, got {}",
                HEADLINE_FIX_COUNT,
                self.headline_fixes.len()
            ));
        }
        if self.quick_wins.len() != QUICK_WIN_COUNT {
            return Err(format!(
                "quick_wins must have {} entries, got {}",
                QUICK_WIN_COUNT,
                self.quick_wins.len()
            ));
        }
        Ok(())
    }
}

/// Where a roast came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastSource {
    /// Live reply from the chat-completion API
    Ai,
    /// Static substitute used when the AI call failed
    Fallback,
}

/// Successful outcome of roasting one URL
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoastReport {
    /// Per-request id, also attached to log lines
    pub request_id: String,
    /// The URL as submitted (trimmed)
    pub url: String,
    pub roast: RoastResult,
    pub source: RoastSource,
    pub generated_at: DateTime<Utc>,
}

/// User-facing failure, mutually exclusive with a roast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

/// Errors from the chat-completion call
#[derive(Debug, Error)]
pub enum AiError {
    /// No credential configured
    #[error("No AI API key configured")]
    NoCredentials,

    /// Connection or body read failure
    #[error("AI request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("AI request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Non-success status from the API
    #[error("AI API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Reply envelope had no usable message
    #[error("AI reply had no choices")]
    EmptyReply,

    /// Reply text was not a valid roast
    #[error("AI reply is not valid roast JSON: {reason}")]
    MalformedReply {
        /// What was wrong with it
        reason: String,
        /// Reply text after fence stripping
        raw: String,
    },

    /// Every configured credential was tried and failed
    #[error("All {attempts} AI credentials failed, last error: {last}")]
    CredentialsExhausted {
        attempts: usize,
        last: Box<AiError>,
    },
}

/// Errors from the roast flow, each rendered as an [`ErrorResult`]
#[derive(Debug, Error)]
pub enum RoastError {
    /// Nothing submitted
    #[error("Please enter a URL")]
    EmptyUrl,

    /// Not an absolute http(s) URL
    #[error("Invalid URL")]
    InvalidUrl,

    /// Page could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Extracted copy is below the readability threshold
    #[error("Not enough readable content")]
    NotEnoughContent { chars: usize, min_chars: usize },

    /// AI call failed and the policy surfaces it
    #[error(transparent)]
    Ai(#[from] AiError),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RoastError {
    pub fn to_error_result(&self) -> ErrorResult {
        ErrorResult {
            error: self.to_string(),
        }
    }
}
