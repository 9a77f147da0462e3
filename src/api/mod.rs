// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod pages;

pub use errors::ApiError;
pub use handlers::{HealthResponse, RoastApiRequest, RoastForm};
pub use http_server::{create_app, start_server, AppState};
