//! Defines the endpoint for creating a new expense.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    expense::{Expense, NewExpense},
};

/// A route handler for creating a new expense, responds with the created
/// record and the status code 201.
///
/// Responds with 400 if the description or category is missing or empty,
/// or the amount or date is missing. Negative amounts are accepted.
pub async fn create_expense_endpoint(
    State(state): State<AppState>,
    Json(new_expense): Json<NewExpense>,
) -> Result<(StatusCode, Json<Expense>), Error> {
    let mut store = state.lock_store()?;

    store
        .create(new_expense)
        .map(|expense| (StatusCode::CREATED, Json(expense)))
}
