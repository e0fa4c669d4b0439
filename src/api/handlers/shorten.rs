//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a target URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "url": "https://static.example/xY9pQ1" }
/// ```
///
/// # Errors
///
/// Every malformed-input shape (non-JSON body, missing `url` field, invalid
/// URL) maps to the same validation error. Store failures during allocation
/// surface as a generic internal error.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "request body rejected");
        AppError::invalid_input()
    })?;
    request.validate().map_err(|_| AppError::invalid_input())?;

    let mapping = state.shorten_service.shorten(request.url).await?;
    let short_url = state.shorten_service.short_url(&mapping.code);

    Ok(Json(ShortenResponse { url: short_url }))
}
