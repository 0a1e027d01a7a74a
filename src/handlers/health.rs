//! Liveness check backed by a store round trip.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::AppError, state::AppState};

/// Body of a successful `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Always `"connected"`; an unreachable store never produces this body.
    pub database: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Ping the transaction store.
///
/// A failed ping goes through [`AppError::Store`], so the caller sees the
/// generic 500 and the cause is only logged.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    state.store.ping().await?;

    Ok(Json(HealthResponse {
        status: "healthy",
        database: "connected",
        timestamp: Utc::now(),
    }))
}
