//! Defines the endpoint for the aggregate spending summary.

use axum::{Json, extract::State};

use crate::{AppState, Error, expense::Summary};

/// A route handler for the spending summary: the rounded total, the record
/// count, and per-category sums.
///
/// The summary is recomputed from the store on every request.
pub async fn get_summary_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Summary>, Error> {
    let store = state.lock_store()?;

    Ok(Json(store.summarize()))
}
