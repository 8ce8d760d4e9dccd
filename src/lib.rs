//! Outlay is a small web app for tracking day-to-day spending.
//!
//! This library provides a JSON REST API over an in-memory expense store and
//! serves the static browser client that renders it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod endpoints;
mod expense;
mod routing;
mod seed;

pub use app_state::AppState;
pub use expense::{Expense, ExpenseStore, ExpenseUpdate, NewExpense, Summary};
pub use routing::build_router;
pub use seed::{SeedStrategy, seed_expenses};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested expense was not found.
    ///
    /// Clients should check that the ID is correct and that the expense has
    /// not already been deleted. A non-numeric ID path segment is also
    /// reported as this error rather than as a parse failure.
    #[error("the requested expense could not be found")]
    NotFound,

    /// A required field was missing or empty when creating an expense.
    ///
    /// Creation requires a non-empty description and category, an amount,
    /// and a date.
    #[error("a required expense field is missing or empty")]
    MissingFields,

    /// Could not acquire the expense store lock.
    ///
    /// The underlying error should only be logged on the server; clients
    /// receive a generic internal server error.
    #[error("could not acquire the expense store lock")]
    StoreLock,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::NotFound => (StatusCode::NOT_FOUND, "Expense not found"),
            Error::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            Error::StoreLock => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
