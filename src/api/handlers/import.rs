//! Handler for the bulk link import endpoint.

use axum::{Extension, Json, extract::State};

use crate::api::dto::import::{ImportRequest, ImportResponse};
use crate::domain::entities::Caller;
use crate::error::AppError;
use crate::state::AppState;

/// Imports links from raw CSV-like text.
///
/// # Endpoint
///
/// `POST /api/import`
///
/// # Request Body
///
/// ```json
/// { "links": "https://a.com,Site A,News\nhttps://b.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "imported": ["https://a.com", "https://b.com"],
///   "failed": [],
///   "new_categories": ["News", "Uncategorized"],
///   "total_processed": 2
/// }
/// ```
///
/// Per-line problems are reported in `failed` and never fail the request.
///
/// # Errors
///
/// - 403 if the caller's token cannot manage links
/// - 400 if the input is empty or has no non-blank lines
/// - 500 on storage failures outside the per-line cases
pub async fn import_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Json(payload): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, AppError> {
    let raw = payload.links.unwrap_or_default();

    let report = state.import_service.import_links(&caller, &raw).await?;

    Ok(Json(report.into()))
}
