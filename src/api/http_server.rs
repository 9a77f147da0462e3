// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::{any::Any, net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{error, info};

use super::errors::ApiError;
use super::handlers::{
    form_error_response, health_handler, index_handler, roast_api_handler, submit_handler,
};
use crate::roast::{RoastError, RoastService};

#[derive(Clone)]
pub struct AppState {
    pub roast_service: Arc<RoastService>,
}

impl AppState {
    pub fn new(roast_service: RoastService) -> Self {
        Self {
            roast_service: Arc::new(roast_service),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    // Form page; a panic here still renders the form
    let form_routes = Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .layer(CatchPanicLayer::custom(handle_form_panic));

    let api_routes = Router::new()
        // JSON API
        .route("/v1/roast", post(roast_api_handler))
        // Health check
        .route("/health", get(health_handler))
        .layer(CatchPanicLayer::custom(handle_panic));

    Router::new()
        .merge(form_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Website roaster listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn panic_error(payload: Box<dyn Any + Send + 'static>) -> ApiError {
    let details = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!("Request handler panicked: {}", details);
    ApiError::from(RoastError::Internal(details))
}

// A panicking handler still answers with an error result.
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    panic_error(payload).into_response()
}

fn handle_form_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    form_error_response(&panic_error(payload), "")
}
