use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::error::ItineraryError;
use crate::itinerary::{ItineraryGenerator, ItineraryResult};
use crate::trip::TripRequestPayload;

pub const HEALTH_PATH: &str = "/health";
pub const ITINERARY_PATH: &str = "/api/itinerary";

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ItineraryGenerator>,
}

#[derive(Debug)]
pub enum ApiError {
    /// Body that could not be read as a trip request at all.
    MalformedBody(String),
    Itinerary(ItineraryError),
}

impl From<ItineraryError> for ApiError {
    fn from(e: ItineraryError) -> Self {
        Self::Itinerary(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, msg) = match self {
            ApiError::MalformedBody(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Itinerary(e @ ItineraryError::InvalidRequest { .. }) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Itinerary(e @ ItineraryError::Upstream(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        let body = Json(serde_json::json!({ "error": msg }));
        (code, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(ITINERARY_PATH, post(create_itinerary))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn create_itinerary(
    State(st): State<AppState>,
    payload: Result<Json<TripRequestPayload>, JsonRejection>,
) -> Result<Json<ItineraryResult>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::info!(error = %rejection.body_text(), "unreadable itinerary request");
        rejection
    })?;
    let request = payload.validate().map_err(|e| {
        tracing::info!(error = %e, "rejected itinerary request");
        e
    })?;
    let result = st.generator.generate(&request).await?;
    Ok(Json(result))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// Serves the inbound contract until Ctrl-C.
pub async fn serve(addr: SocketAddr, generator: ItineraryGenerator) -> Result<()> {
    let state = AppState {
        generator: Arc::new(generator),
    };
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    Ok(())
}
