//! Defines the endpoint for deleting an expense.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    expense::{Expense, parse_expense_id},
};

/// A route handler for deleting an expense, responds with the deleted
/// record.
///
/// The deleted expense's ID is never reused. Responds with 404 if no
/// expense has the ID.
pub async fn delete_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
) -> Result<Json<Expense>, Error> {
    let id = parse_expense_id(&expense_id)?;
    let mut store = state.lock_store()?;

    store.delete(id).map(Json)
}
