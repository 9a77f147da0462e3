// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Submitted URL validation

use url::Url;

/// Check that `input` is an absolute http(s) URL with a non-empty host.
///
/// Anything that fails to parse is simply invalid.
pub fn is_valid_url(input: &str) -> bool {
    let parsed = match Url::parse(input) {
        Ok(u) => u,
        Err(_) => return false,
    };

    if !["http", "https"].contains(&parsed.scheme()) {
        return false;
    }

    parsed.host_str().map_or(false, |host| !host.is_empty())
}
