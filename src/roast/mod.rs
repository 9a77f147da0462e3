// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Website copy roasting
//!
//! Key features:
//! - Fixed prompt asking for a six-field JSON critique
//! - Credential rotation across configured API keys
//! - Static fallback roast when the model is unavailable
//! - Stateless, one request at a time per page submission

pub mod client;
pub mod config;
pub mod fallback;
pub mod prompt;
pub mod provider;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use client::{parse_roast_reply, strip_code_fences, AiClient};
pub use config::{AiFailurePolicy, RoastConfig};
pub use fallback::fallback_roast;
pub use prompt::build_prompt;
pub use provider::RoastProvider;
pub use service::RoastService;
pub use types::{AiError, ErrorResult, RoastError, RoastReport, RoastResult, RoastSource};
