//! Defines the endpoint for updating an existing expense in place.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseUpdate, parse_expense_id},
};

/// A route handler for updating an expense, responds with the updated
/// record.
///
/// Only the fields present in the body are applied; the ID is immutable.
/// Responds with 404 if no expense has the ID.
pub async fn update_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
    Json(update): Json<ExpenseUpdate>,
) -> Result<Json<Expense>, Error> {
    let id = parse_expense_id(&expense_id)?;
    let mut store = state.lock_store()?;

    store.update(id, update).map(Json)
}
