//! HTTP handlers for Roman numeral conversion.
//!
//! `GET /romannumeral` accepts either `?query=<n>` for a single value or
//! `?min=<a>&max=<b>` for an inclusive range. `query` wins when both forms are
//! present. Parameter presence is checked here; numeric validation is left to
//! [`RomanConverter`].

use crate::server::{config::ServerConfig, service::error::ApiError};
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core::time::Duration;
use numerus::RomanConverter;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

/// Query parameters accepted by the conversion endpoint.
#[derive(Deserialize, Debug, Default, Clone, Copy)]
pub struct ConversionParams {
    pub query: Option<i32>,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

/// Shared handler state. Cheap to clone; nothing in it is mutable.
#[derive(Clone, Debug)]
pub struct AppState {
    converter: RomanConverter,
    request_timeout: Option<Duration>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            converter: RomanConverter::new(config.batch_size),
            request_timeout: config.request_timeout,
        }
    }
}

/// Builds the application router with a permissive CORS layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/romannumeral", get(handle_conversion))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handle_conversion(
    State(state): State<AppState>,
    params: Result<Query<ConversionParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::warn!("Rejected conversion parameters: {rejection}");
        ApiError::invalid_parameters(rejection.body_text())
    })?;

    tracing::info!("Received conversion request with parameters: {params:?}");

    let outcome = match params {
        ConversionParams {
            query: Some(query), ..
        } => handle_single_conversion(&state, query),
        ConversionParams {
            min: Some(min),
            max: Some(max),
            ..
        } => handle_range_conversion(&state, min, max).await,
        _ => {
            tracing::warn!("Invalid parameter combination: {params:?}");
            return Err(ApiError::invalid_parameters(
                "Either 'query' or both 'min' and 'max' must be provided",
            ));
        }
    };

    outcome.inspect_err(|err| {
        if err.status().is_client_error() {
            tracing::warn!("Conversion error for parameters {params:?}: {err:?}");
        }
    })
}

fn handle_single_conversion(state: &AppState, query: i32) -> Result<Response, ApiError> {
    tracing::info!("Converting single number: {query}");
    let conversion = state.converter.convert_one(query)?;
    Ok(Json(conversion).into_response())
}

async fn handle_range_conversion(
    state: &AppState,
    min: i32,
    max: i32,
) -> Result<Response, ApiError> {
    tracing::info!("Converting range from {min} to {max}");
    let conversion = state.converter.convert_range(min, max);

    let conversions = match state.request_timeout {
        // Dropping the conversion on timeout aborts its outstanding chunks.
        Some(limit) => tokio::time::timeout(limit, conversion).await.map_err(|_| {
            tracing::warn!("Range {min}..={max} timed out after {limit:?}");
            ApiError::timeout()
        })??,
        None => conversion.await?,
    };

    Ok(Json(conversions).into_response())
}
