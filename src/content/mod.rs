// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page content pipeline
//!
//! Validates the submitted URL, fetches the page and extracts the copy that
//! gets roasted.
//!
//! ## Architecture
//!
//! ```text
//! URL → is_valid_url → ContentFetcher → HTML → extract_page_content → Labeled block
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod validator;

pub use config::ContentFetchConfig;
pub use extractor::{extract_page_content, ExtractedContent};
pub use fetcher::{ContentFetcher, FetchError};
pub use validator::is_valid_url;
