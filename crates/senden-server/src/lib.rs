//! The waitlist endpoint: one stateless route that validates a submission
//! and appends it to the configured spreadsheet.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;

use senden_api::{ServiceAccountConfig, SheetsClient, SheetsError};
use senden_core::signup::{self, ErrorResponse, SignupRecord, WaitlistResponse};

/// Opaque message for any upstream failure. Config and API details stay in
/// the server log.
const UPSTREAM_ERROR: &str = "Failed to join waitlist. Please try again.";

/// Build the application router.
pub fn router() -> Router {
    Router::new().route(
        "/api/waitlist",
        post(join_waitlist).fallback(method_not_allowed),
    )
}

/// Incoming body, before validation. Fields are optional so that a missing
/// field reports "required" rather than a deserializer rejection.
#[derive(Debug, Deserialize)]
struct RawSubmission {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

async fn join_waitlist(Json(body): Json<RawSubmission>) -> Response {
    let record = match signup::validate(
        body.name.as_deref().unwrap_or(""),
        body.email.as_deref().unwrap_or(""),
    ) {
        Ok(record) => record,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    match append_signup(&record).await {
        Ok(()) => {
            tracing::info!(email = %record.email, "Waitlist signup accepted");
            (StatusCode::OK, Json(WaitlistResponse { success: true })).into_response()
        }
        Err(e) => {
            tracing::error!("Waitlist signup failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: UPSTREAM_ERROR.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Load credentials and perform the append. Each request stands alone: its
/// own config read, its own token exchange, no retry.
async fn append_signup(record: &SignupRecord) -> Result<(), SheetsError> {
    let config = ServiceAccountConfig::from_env()?;
    SheetsClient::new(config)
        .append_row(record, Utc::now())
        .await
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
        .into_response()
}
