use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, ORIGIN},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    error::AppError,
    faculty::{FacultyRecord, search},
    state,
};

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOCX_DISPOSITION: &str = "attachment; filename=\"submission.docx\"";

#[derive(Deserialize)]
pub struct FacultyQuery {
    #[serde(default)]
    q: String,
}

/// Autocomplete endpoint: up to ten faculty records whose name contains the
/// query, in dataset order. Blank queries yield an empty list.
pub async fn faculty_handler(
    State(state): State<Arc<state::State>>,
    Query(query): Query<FacultyQuery>,
) -> Json<Vec<FacultyRecord>> {
    let records = state.faculty().await;

    Json(search(&query.q, records).into_iter().cloned().collect())
}

/// Submission proxy: forwards the JSON body untouched to the configured
/// document-generation service and relays the generated document back as a
/// `.docx` attachment. One outbound call per request, no retries.
pub async fn generate_handler(
    State(state): State<Arc<state::State>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let (api_url, api_key) = state.config.upstream()?;

    let mut request = state
        .http
        .post(api_url)
        .header(CONTENT_TYPE, "application/json")
        .header("x-api-key", api_key)
        .body(body);

    if let Some(origin) = &state.config.origin {
        request = request.header(ORIGIN, origin);
    }

    let response = request.send().await.map_err(|e| {
        warn!("Upstream call failed: {e}");
        AppError::Upstream(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        let details = response.text().await.unwrap_or_default();
        warn!("Upstream returned {status}: {details}");

        return Err(AppError::Upstream(if details.trim().is_empty() {
            status.to_string()
        } else {
            details
        }));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Internal(Box::new(e)))?;

    info!("Relaying generated document ({} bytes)", bytes.len());

    Ok((
        [
            (CONTENT_TYPE, DOCX_CONTENT_TYPE),
            (CONTENT_DISPOSITION, DOCX_DISPOSITION),
        ],
        bytes,
    )
        .into_response())
}
