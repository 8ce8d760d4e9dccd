//! Defines the endpoint for listing expenses, optionally filtered by
//! category.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{AppState, Error, expense::Expense};

/// The query parameters for listing expenses.
#[derive(Debug, Default, Deserialize)]
pub struct ListExpensesQuery {
    /// When present and non-empty, only expenses whose category exactly
    /// equals this value are returned.
    pub category: Option<String>,
}

/// A route handler for listing all expenses, or only those matching the
/// `category` query parameter.
///
/// Records are returned in insertion order; the client sorts for display.
pub async fn list_expenses_endpoint(
    State(state): State<AppState>,
    Query(query): Query<ListExpensesQuery>,
) -> Result<Json<Vec<Expense>>, Error> {
    let store = state.lock_store()?;

    let category_filter = query
        .category
        .as_deref()
        .filter(|category| !category.is_empty());

    Ok(Json(store.list(category_filter)))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        AppState, build_router,
        endpoints,
        expense::{Expense, ExpenseStore, core::test_support::new_expense},
    };

    fn get_test_server() -> TestServer {
        let mut store = ExpenseStore::new();
        store
            .create(new_expense("Coffee", 4.5, "Food", date!(2025 - 01 - 01)))
            .unwrap();
        store
            .create(new_expense("Bus fare", 2.75, "Transport", date!(2025 - 01 - 02)))
            .unwrap();
        store
            .create(new_expense("Lunch", 12.0, "Food", date!(2025 - 01 - 03)))
            .unwrap();

        let router = build_router(AppState::new(store), "public".into());

        TestServer::new(router).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn returns_all_expenses_without_filter() {
        let server = get_test_server();

        let response = server.get(endpoints::EXPENSES).await;

        response.assert_status_ok();
        let got = response.json::<Vec<Expense>>();
        assert_eq!(got.len(), 3);
    }

    #[tokio::test]
    async fn filters_by_exact_category() {
        let server = get_test_server();

        let response = server
            .get(endpoints::EXPENSES)
            .add_query_param("category", "Food")
            .await;

        response.assert_status_ok();
        let got = response.json::<Vec<Expense>>();
        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|expense| expense.category == "Food"));
    }

    #[tokio::test]
    async fn empty_category_filter_returns_everything() {
        let server = get_test_server();

        let response = server
            .get(endpoints::EXPENSES)
            .add_query_param("category", "")
            .await;

        response.assert_status_ok();
        let got = response.json::<Vec<Expense>>();
        assert_eq!(got.len(), 3);
    }

    #[tokio::test]
    async fn unknown_category_returns_empty_array() {
        let server = get_test_server();

        let response = server
            .get(endpoints::EXPENSES)
            .add_query_param("category", "Utilities")
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>(), json!([]));
    }
}
