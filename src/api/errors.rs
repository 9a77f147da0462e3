// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::fmt;

use crate::content::FetchError;
use crate::roast::{ErrorResult, RoastError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InvalidRequest(String),
    UnprocessableContent(String),
    UpstreamFailure(String),
    UpstreamTimeout(String),
    InternalError(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::InvalidRequest(msg)
            | ApiError::UnprocessableContent(msg)
            | ApiError::UpstreamFailure(msg)
            | ApiError::UpstreamTimeout(msg)
            | ApiError::InternalError(msg) => msg,
        }
    }

    pub fn to_response(&self) -> ErrorResult {
        ErrorResult {
            error: self.message().to_string(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) => 400,
            ApiError::UnprocessableContent(_) => 422,
            ApiError::UpstreamFailure(_) => 502,
            ApiError::UpstreamTimeout(_) => 504,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl From<&RoastError> for ApiError {
    fn from(error: &RoastError) -> Self {
        let message = error.to_string();
        match error {
            RoastError::EmptyUrl | RoastError::InvalidUrl => ApiError::InvalidRequest(message),
            RoastError::NotEnoughContent { .. } => ApiError::UnprocessableContent(message),
            RoastError::Fetch(FetchError::Timeout { .. }) => ApiError::UpstreamTimeout(message),
            RoastError::Fetch(_) | RoastError::Ai(_) => ApiError::UpstreamFailure(message),
            RoastError::Internal(_) => ApiError::InternalError(message),
        }
    }
}

impl From<RoastError> for ApiError {
    fn from(error: RoastError) -> Self {
        ApiError::from(&error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::UnprocessableContent(msg) => write!(f, "Unprocessable content: {}", msg),
            ApiError::UpstreamFailure(msg) => write!(f, "Upstream failure: {}", msg),
            ApiError::UpstreamTimeout(msg) => write!(f, "Upstream timeout: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_response())).into_response()
    }
}
