// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the tracker REST API.
//!
//! Handles POST /api/channel, GET /api/channels, GET /api/daily-summary,
//! PATCH /api/channel/{id}/note, DELETE /api/channel/{id}, GET /api/health.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;

use tubetrack_core::types::MetadataPatch;
use tubetrack_core::TubetrackError;

use crate::server::GatewayState;

/// Request body for POST /api/channel.
#[derive(Debug, Deserialize)]
pub struct AddChannelRequest {
    /// Channel URL in any recognized shape (@handle, /channel/, /c/, /user/).
    pub url: String,
}

/// Query parameters for GET /api/channels.
#[derive(Debug, Default, Deserialize)]
pub struct ListChannelsQuery {
    /// Bypass the daily cache and refetch from the provider.
    #[serde(default)]
    pub refresh: bool,
}

/// Query parameters for GET /api/daily-summary.
#[derive(Debug, Default, Deserialize)]
pub struct DailySummaryQuery {
    /// Day to summarize (YYYY-MM-DD); defaults to the tracker's current day.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Response body for DELETE /api/channel/{id}.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Response body for GET /api/health.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub api_key_configured: bool,
    pub uptime_secs: u64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request error adapted to an HTTP response.
///
/// Upstream and storage failures are logged with their cause but reported
/// with a generic message; internals (connection strings, SQL) must not leak
/// to API clients.
pub enum ApiError {
    /// A domain error from the registry or summary engine.
    Domain(TubetrackError),
    /// A malformed request body (missing field, invalid JSON).
    BadRequest(String),
}

impl From<TubetrackError> for ApiError {
    fn from(e: TubetrackError) -> Self {
        Self::Domain(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Domain(e) => match e {
                TubetrackError::InvalidUrl(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                TubetrackError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
                TubetrackError::DuplicateChannel(_) => (StatusCode::CONFLICT, e.to_string()),
                TubetrackError::Provider { .. } => {
                    error!(error = %e, "provider failure");
                    (
                        StatusCode::BAD_GATEWAY,
                        "upstream stats provider unavailable".to_string(),
                    )
                }
                TubetrackError::Storage { .. } => {
                    error!(error = %e, "storage failure");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "storage unavailable".to_string(),
                    )
                }
                TubetrackError::Config(_) | TubetrackError::Internal(_) => {
                    error!(error = %e, "internal failure");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal error".to_string(),
                    )
                }
            },
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// POST /api/channel
///
/// Start tracking the channel behind the submitted URL.
pub async fn post_channel(
    State(state): State<GatewayState>,
    body: Result<Json<AddChannelRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let composed = state.registry.add_channel(&body.url).await?;
    Ok((StatusCode::CREATED, Json(composed)).into_response())
}

/// GET /api/channels
///
/// All tracked channels with current stats and metadata.
pub async fn get_channels(
    State(state): State<GatewayState>,
    Query(query): Query<ListChannelsQuery>,
) -> Result<Response, ApiError> {
    let channels = state.registry.list_channels(query.refresh).await?;
    Ok(Json(channels).into_response())
}

/// GET /api/daily-summary
///
/// Aggregate growth for the requested day (default: today).
pub async fn get_daily_summary(
    State(state): State<GatewayState>,
    Query(query): Query<DailySummaryQuery>,
) -> Result<Response, ApiError> {
    let day = query.date.unwrap_or_else(|| state.clock.today());
    let summary = state.summary.daily_summary(day).await?;
    Ok(Json(summary).into_response())
}

/// PATCH /api/channel/{id}/note
///
/// Partial metadata update; creates the record when the id is unknown.
pub async fn patch_channel_note(
    State(state): State<GatewayState>,
    Path(channel_id): Path<String>,
    patch: Result<Json<MetadataPatch>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(patch) = patch?;
    let record = state.registry.update_metadata(&channel_id, &patch).await?;
    Ok(Json(record).into_response())
}

/// DELETE /api/channel/{id}
///
/// Stop tracking a channel. Succeeds even when the id was never tracked.
pub async fn delete_channel(
    State(state): State<GatewayState>,
    Path(channel_id): Path<String>,
) -> Result<Response, ApiError> {
    state.registry.remove_channel(&channel_id).await?;
    Ok(Json(DeleteResponse { success: true }).into_response())
}

/// GET /api/health
pub async fn get_health(State(state): State<GatewayState>) -> Response {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        api_key_configured: state.api_key_configured,
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_channel_request_deserializes() {
        let req: AddChannelRequest =
            serde_json::from_str(r#"{"url": "https://youtube.com/@some"}"#).unwrap();
        assert_eq!(req.url, "https://youtube.com/@some");
    }

    #[test]
    fn list_query_defaults_refresh_to_false() {
        let query: ListChannelsQuery = serde_json::from_str("{}").unwrap();
        assert!(!query.refresh);
    }

    #[test]
    fn summary_query_parses_iso_date() {
        let query: DailySummaryQuery =
            serde_json::from_str(r#"{"date": "2026-08-30"}"#).unwrap();
        assert_eq!(
            query.date,
            NaiveDate::from_ymd_opt(2026, 8, 30)
        );
    }

    #[test]
    fn health_response_serializes_camel_case() {
        let json = serde_json::to_string(&HealthResponse {
            status: "ok".into(),
            version: "0.1.0".into(),
            api_key_configured: true,
            uptime_secs: 12,
        })
        .unwrap();
        assert!(json.contains("\"apiKeyConfigured\":true"));
        assert!(json.contains("\"uptimeSecs\":12"));
    }
}
