// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Roast provider trait definition

use async_trait::async_trait;

use super::types::{AiError, RoastResult};

/// Anything that can turn a roast prompt into a [`RoastResult`]
///
/// The chat-completion client is the production implementation; tests
/// substitute doubles.
#[async_trait]
pub trait RoastProvider: Send + Sync {
    /// Run the prompt and parse the reply
    async fn roast(&self, prompt: &str) -> Result<RoastResult, AiError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Check if the provider can be called at all (has credentials, etc.)
    fn is_available(&self) -> bool;
}
