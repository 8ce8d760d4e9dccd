//! Defines the endpoint for getting a single expense by its ID.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    expense::{Expense, parse_expense_id},
};

/// A route handler for getting an expense by its ID.
///
/// Responds with 404 if no expense has the ID, or if the ID path segment
/// is not numeric.
pub async fn get_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
) -> Result<Json<Expense>, Error> {
    let id = parse_expense_id(&expense_id)?;
    let store = state.lock_store()?;

    store.get(id).map(Json)
}
