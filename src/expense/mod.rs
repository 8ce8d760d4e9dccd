//! The expense feature: the record type, the in-memory store, and the REST
//! endpoints that expose the store's operations.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod get_endpoint;
mod list_endpoint;
mod summary_endpoint;
mod update_endpoint;

pub use self::core::{
    Expense, ExpenseId, ExpenseStore, ExpenseUpdate, NewExpense, Summary, parse_expense_id,
};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use get_endpoint::get_expense_endpoint;
pub use list_endpoint::list_expenses_endpoint;
pub use summary_endpoint::get_summary_endpoint;
pub use update_endpoint::update_expense_endpoint;
