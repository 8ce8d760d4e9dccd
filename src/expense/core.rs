//! Defines the expense record type and the in-memory store that owns all
//! expense mutation and aggregation logic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// The ID type for an expense record.
pub type ExpenseId = i64;

/// Parse an expense ID from a URL path segment.
///
/// A segment that does not parse as an integer cannot refer to any stored
/// expense, so it is reported as [Error::NotFound] rather than as a bad
/// request.
pub fn parse_expense_id(segment: &str) -> Result<ExpenseId, Error> {
    segment.parse().map_err(|_| Error::NotFound)
}

/// Serializes and deserializes a [Date] as an ISO 8601 calendar date,
/// e.g. "2025-01-31".
pub(crate) mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

    pub(crate) const DATE_FORMAT: &[BorrowedFormatItem] =
        format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

    pub(crate) fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let date_string = date.format(&DATE_FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&date_string)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date_string = String::deserialize(deserializer)?;
        Date::parse(&date_string, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// As [iso_date], but for optional dates in request bodies.
pub(crate) mod iso_date_option {
    use serde::{Deserialize, Deserializer};
    use time::Date;

    use super::iso_date::DATE_FORMAT;

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(date_string) => Date::parse(&date_string, DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// A single tracked spending entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID assigned by the store. Unique and immutable after creation.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub description: String,
    /// The amount spent in dollars. Negative amounts are accepted.
    pub amount: f64,
    /// The free-form label used for grouping and filtering.
    pub category: String,
    /// The calendar date of the expense.
    #[serde(with = "iso_date")]
    pub date: Date,
}

/// The fields for creating an expense.
///
/// All fields are optional at the wire level so that the store can report a
/// missing field as [Error::MissingFields] rather than the request failing
/// at deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct NewExpense {
    /// What the money was spent on.
    pub description: Option<String>,
    /// The amount spent in dollars.
    pub amount: Option<f64>,
    /// The free-form label used for grouping and filtering.
    pub category: Option<String>,
    /// The calendar date of the expense.
    #[serde(default, with = "iso_date_option")]
    pub date: Option<Date>,
}

/// A partial update to an expense.
///
/// Only the fields that are present are applied. Text fields are also
/// ignored when empty, so a blank form input never clears a stored value.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseUpdate {
    /// The new description, if any.
    pub description: Option<String>,
    /// The new amount, if any. An amount of zero is still applied.
    pub amount: Option<f64>,
    /// The new category, if any.
    pub category: Option<String>,
    /// The new date, if any.
    #[serde(default, with = "iso_date_option")]
    pub date: Option<Date>,
}

/// The aggregate view of all current expenses.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of all expense amounts, rounded to two decimal places.
    pub total: f64,
    /// The number of expenses in the store.
    pub count: usize,
    /// The sum of amounts per category. Categories with no current
    /// expenses are absent from the map rather than zero-valued.
    #[serde(rename = "byCategory")]
    pub by_category: HashMap<String, f64>,
}

/// Round `amount` to the nearest cent.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// The authoritative, process-lifetime collection of expense records.
///
/// The store is not thread-safe. [crate::AppState] wraps it in a mutex so
/// that concurrent request handlers cannot interleave the read-then-write
/// sequences in [ExpenseStore::create], [ExpenseStore::update], and
/// [ExpenseStore::delete].
#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl ExpenseStore {
    /// Create an empty store. The first expense will get the ID 1.
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// Get all expenses, or only those whose category exactly equals
    /// `category_filter`.
    ///
    /// The match is case-sensitive with no partial matching. Records are
    /// returned in insertion order; display ordering is up to the client.
    pub fn list(&self, category_filter: Option<&str>) -> Vec<Expense> {
        match category_filter {
            Some(category) => self
                .expenses
                .iter()
                .filter(|expense| expense.category == category)
                .cloned()
                .collect(),
            None => self.expenses.clone(),
        }
    }

    /// Get the expense with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no expense has `id`.
    pub fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        self.expenses
            .iter()
            .find(|expense| expense.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    /// Create an expense from `new_expense`, assigning it the next ID.
    ///
    /// IDs are assigned from a monotonically increasing counter and are
    /// never reused, even after deletion.
    ///
    /// # Errors
    /// Returns [Error::MissingFields] if the description or category is
    /// missing or empty, or the amount or date is missing. Negative and
    /// zero amounts are accepted.
    pub fn create(&mut self, new_expense: NewExpense) -> Result<Expense, Error> {
        let description = new_expense
            .description
            .filter(|description| !description.is_empty())
            .ok_or(Error::MissingFields)?;
        let category = new_expense
            .category
            .filter(|category| !category.is_empty())
            .ok_or(Error::MissingFields)?;
        let amount = new_expense.amount.ok_or(Error::MissingFields)?;
        let date = new_expense.date.ok_or(Error::MissingFields)?;

        let expense = Expense {
            id: self.next_id,
            description,
            amount,
            category,
            date,
        };
        self.next_id += 1;
        self.expenses.push(expense.clone());

        Ok(expense)
    }

    /// Apply `update` to the expense with `id` and return the result.
    ///
    /// Absent fields are left untouched, as are empty text fields. An
    /// update with no fields leaves the expense unchanged.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no expense has `id`.
    pub fn update(&mut self, id: ExpenseId, update: ExpenseUpdate) -> Result<Expense, Error> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or(Error::NotFound)?;

        if let Some(description) = update.description.filter(|text| !text.is_empty()) {
            expense.description = description;
        }
        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(category) = update.category.filter(|text| !text.is_empty()) {
            expense.category = category;
        }
        if let Some(date) = update.date {
            expense.date = date;
        }

        Ok(expense.clone())
    }

    /// Remove the expense with `id` and return it.
    ///
    /// The ID is not made available for reuse.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no expense has `id`.
    pub fn delete(&mut self, id: ExpenseId) -> Result<Expense, Error> {
        let index = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(Error::NotFound)?;

        Ok(self.expenses.remove(index))
    }

    /// Compute the aggregate spending summary over all current expenses.
    ///
    /// The summary is recomputed on every call; nothing is cached between
    /// requests.
    pub fn summarize(&self) -> Summary {
        let mut by_category = HashMap::new();

        for expense in &self.expenses {
            *by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }

        let total: f64 = self.expenses.iter().map(|expense| expense.amount).sum();

        Summary {
            total: round_to_cents(total),
            count: self.expenses.len(),
            by_category,
        }
    }

    /// The number of expenses currently in the store.
    pub fn count(&self) -> usize {
        self.expenses.len()
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod create_tests {
    use time::macros::date;

    use crate::Error;

    use super::{ExpenseStore, NewExpense, test_support::new_expense};

    #[test]
    fn assigns_sequential_ids_and_grows_count() {
        let mut store = ExpenseStore::new();

        let mut previous_id = 0;
        for i in 1..=5 {
            let expense = store
                .create(new_expense("Coffee", 4.5, "Food", date!(2025 - 01 - 01)))
                .unwrap();

            assert!(expense.id > previous_id);
            assert_eq!(store.count(), i);
            previous_id = expense.id;
        }
    }

    #[test]
    fn stores_all_fields() {
        let mut store = ExpenseStore::new();

        let got = store
            .create(new_expense("Coffee", 4.5, "Food", date!(2025 - 01 - 01)))
            .unwrap();

        assert_eq!(got.id, 1);
        assert_eq!(got.description, "Coffee");
        assert_eq!(got.amount, 4.5);
        assert_eq!(got.category, "Food");
        assert_eq!(got.date, date!(2025 - 01 - 01));
        assert_eq!(store.get(got.id), Ok(got));
    }

    #[test]
    fn rejects_missing_fields() {
        let mut store = ExpenseStore::new();

        let missing_each_field = [
            NewExpense {
                description: None,
                ..new_expense("Coffee", 4.5, "Food", date!(2025 - 01 - 01))
            },
            NewExpense {
                amount: None,
                ..new_expense("Coffee", 4.5, "Food", date!(2025 - 01 - 01))
            },
            NewExpense {
                category: None,
                ..new_expense("Coffee", 4.5, "Food", date!(2025 - 01 - 01))
            },
            NewExpense {
                date: None,
                ..new_expense("Coffee", 4.5, "Food", date!(2025 - 01 - 01))
            },
        ];

        for partial_expense in missing_each_field {
            let got = store.create(partial_expense);

            assert_eq!(got, Err(Error::MissingFields));
        }

        assert_eq!(store.count(), 0);
    }

    #[test]
    fn rejects_empty_description_and_category() {
        let mut store = ExpenseStore::new();

        let result = store.create(new_expense("", 4.5, "Food", date!(2025 - 01 - 01)));
        assert_eq!(result, Err(Error::MissingFields));

        let result = store.create(new_expense("Coffee", 4.5, "", date!(2025 - 01 - 01)));
        assert_eq!(result, Err(Error::MissingFields));
    }

    #[test]
    fn accepts_negative_and_zero_amounts() {
        let mut store = ExpenseStore::new();

        let refund = store
            .create(new_expense("Refund", -12.0, "Shopping", date!(2025 - 01 - 01)))
            .unwrap();
        let freebie = store
            .create(new_expense("Free sample", 0.0, "Food", date!(2025 - 01 - 02)))
            .unwrap();

        assert_eq!(refund.amount, -12.0);
        assert_eq!(freebie.amount, 0.0);
    }

    #[test]
    fn does_not_reuse_ids_after_delete() {
        let mut store = ExpenseStore::new();

        let first = store
            .create(new_expense("Coffee", 4.5, "Food", date!(2025 - 01 - 01)))
            .unwrap();
        store.delete(first.id).unwrap();

        let second = store
            .create(new_expense("Lunch", 12.0, "Food", date!(2025 - 01 - 02)))
            .unwrap();

        assert!(second.id > first.id);
    }
}
