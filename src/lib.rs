// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod content;
pub mod roast;
pub mod version;

// Re-export main types
pub use api::{create_app, AppState};
pub use content::{ContentFetchConfig, ContentFetcher, FetchError};
pub use roast::{
    AiError, AiFailurePolicy, ErrorResult, RoastConfig, RoastError, RoastProvider, RoastReport,
    RoastResult, RoastService, RoastSource,
};
