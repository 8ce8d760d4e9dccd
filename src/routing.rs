//! Application router configuration.

use std::path::PathBuf;

use axum::{
    Router,
    routing::get,
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_expense_endpoint,
        get_summary_endpoint, list_expenses_endpoint, update_expense_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// The JSON API lives under `/api`; everything else falls back to the
/// static client assets in `assets_dir`, so `GET /` serves the client's
/// index page.
pub fn build_router(state: AppState, assets_dir: PathBuf) -> Router {
    Router::new()
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint)
                .put(update_expense_endpoint)
                .delete(delete_expense_endpoint),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .fallback_service(ServeDir::new(assets_dir))
        .with_state(state)
}

#[cfg(test)]
mod api_scenario_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        AppState, SeedStrategy, build_router,
        endpoints::{self, format_endpoint},
        expense::{Expense, ExpenseStore, Summary},
        seed_expenses,
    };

    fn get_seeded_server() -> TestServer {
        let mut store = ExpenseStore::new();
        for new_expense in seed_expenses(SeedStrategy::Fixture) {
            store.create(new_expense).unwrap();
        }

        TestServer::new(build_router(AppState::new(store), "public".into()))
            .expect("Could not create test server.")
    }

    #[tokio::test]
    async fn create_list_summarize_delete_round_trip() {
        let server = get_seeded_server();

        let seeded = server
            .get(endpoints::EXPENSES)
            .await
            .json::<Vec<Expense>>();
        let summary_before = server.get(endpoints::SUMMARY).await.json::<Summary>();
        assert_eq!(summary_before.count, seeded.len());

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "description": "Coffee",
                "amount": 4.5,
                "category": "Food",
                "date": "2025-01-01"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created = response.json::<Expense>();
        assert!(
            seeded.iter().all(|expense| expense.id < created.id),
            "new ID {} should be greater than every seeded ID",
            created.id
        );
        assert_eq!(created.date, date!(2025 - 01 - 01));

        let summary_after = server.get(endpoints::SUMMARY).await.json::<Summary>();
        assert_eq!(summary_after.total, summary_before.total + 4.5);

        let response = server
            .delete(&format_endpoint(endpoints::EXPENSE, created.id))
            .await;
        response.assert_status_ok();

        let summary_final = server.get(endpoints::SUMMARY).await.json::<Summary>();
        assert_eq!(summary_final.count, summary_before.count);
    }

    #[tokio::test]
    async fn filtered_list_is_the_exact_category_subset() {
        let server = get_seeded_server();

        let all = server
            .get(endpoints::EXPENSES)
            .await
            .json::<Vec<Expense>>();
        let food = server
            .get(endpoints::EXPENSES)
            .add_query_param("category", "Food")
            .await
            .json::<Vec<Expense>>();

        let want: Vec<&Expense> = all
            .iter()
            .filter(|expense| expense.category == "Food")
            .collect();
        assert!(!food.is_empty());
        assert_eq!(food.iter().collect::<Vec<_>>(), want);
    }

    #[tokio::test]
    async fn summary_by_category_sums_to_the_total() {
        let server = get_seeded_server();

        let got = server.get(endpoints::SUMMARY).await.json::<Summary>();

        let category_sum: f64 = got.by_category.values().sum();
        assert!(
            (category_sum - got.total).abs() < 0.01,
            "per-category sums {category_sum} should add up to the total {}",
            got.total
        );
    }
}
