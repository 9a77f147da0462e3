// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Form, JSON API and health handlers

use axum::{
    extract::{rejection::JsonRejection, Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::ApiError;
use super::http_server::AppState;
use super::pages;
use crate::roast::RoastReport;

/// Body of the form submit (`application/x-www-form-urlencoded`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoastForm {
    #[serde(default)]
    pub url: String,
}

/// Request body for POST /v1/roast
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoastApiRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: serde_json::Value,
    pub ai_configured: bool,
}

/// GET / - Render the empty form
pub async fn index_handler() -> Html<String> {
    Html(pages::index_page(None, "").into_string())
}

/// POST / - Roast the submitted URL and render the result or the error
pub async fn submit_handler(State(state): State<AppState>, Form(form): Form<RoastForm>) -> Response {
    let url = form.url.trim().to_string();
    debug!("Form submission for: {:?}", url);

    match state.roast_service.roast_url(&url).await {
        Ok(report) => Html(pages::result_page(&report).into_string()).into_response(),
        Err(e) => form_error_response(&ApiError::from(&e), &url),
    }
}

/// The form page with an error banner, sent with the error's status
pub fn form_error_response(error: &ApiError, url: &str) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let page = pages::index_page(Some(error.message()), url);
    (status, Html(page.into_string())).into_response()
}

/// POST /v1/roast - Roast a URL and return the report as JSON
///
/// # Errors
/// - 400 Bad Request: body is not a JSON object, or the URL is empty or invalid
/// - 422 Unprocessable Entity: not enough readable content
/// - 502 Bad Gateway: page fetch failed, or the AI call failed under the
///   `error` policy
/// - 504 Gateway Timeout: page fetch timed out
pub async fn roast_api_handler(
    State(state): State<AppState>,
    payload: Result<Json<RoastApiRequest>, JsonRejection>,
) -> Result<Json<RoastReport>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected roast request body: {}", rejection.body_text());
        ApiError::InvalidRequest(rejection.body_text())
    })?;
    let report = state.roast_service.roast_url(&request.url).await?;
    Ok(Json(report))
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::version::get_version_info(),
        ai_configured: state.roast_service.ai_available(),
    })
}
