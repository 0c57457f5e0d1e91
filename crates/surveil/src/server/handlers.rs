use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;
use surveil_core::resolve::ImportResult;

use super::AppState;
use crate::error::Error;
use crate::pipeline::run_import;

/// `POST /api/moxfield-import` with `{ "decklist": "<text>" }`
///
/// The body is read as raw bytes so a missing body, malformed JSON and a
/// missing or non-string `decklist` all map to 400 with a plain-text reason.
pub async fn import_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ImportResult>, Error> {
    let request: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| Error::BadRequest(format!("Request body must be JSON: {e}")))?;

    let decklist = request
        .get("decklist")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| {
            Error::BadRequest("Field 'decklist' is missing or not a string".to_string())
        })?;

    let items = run_import(&state.client, decklist).await?;

    Ok(Json(items))
}

pub async fn health_handler() -> &'static str {
    "ok"
}
