//! Startup seeding for the expense store.
//!
//! Seeding is a pluggable initialization strategy, not part of the store's
//! core logic: both strategies produce plain [NewExpense] values that the
//! server feeds through [crate::ExpenseStore::create] at startup, so ID
//! assignment follows the normal path.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use time::{Date, Duration, OffsetDateTime};

use crate::expense::NewExpense;

/// How to seed the expense store at startup.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum SeedStrategy {
    /// A procedurally generated set of 30 expenses spanning the last 60
    /// days.
    Random,
    /// A fixed list of ten illustrative expenses with stable dates.
    Fixture,
}

/// The conventional expense categories used by the seeders and the client's
/// filter buttons. The store itself does not restrict categories to this
/// set.
const CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Entertainment",
    "Health",
    "Education",
    "Utilities",
    "Shopping",
];

/// Per-category description phrases for the procedural seeder, indexed in
/// step with [CATEGORIES].
const DESCRIPTIONS: [&[&str]; 7] = [
    &[
        "Coffee",
        "Lunch",
        "Dinner",
        "Breakfast",
        "Snacks",
        "Grocery shopping",
        "Restaurant",
        "Pizza",
        "Burger",
        "Sushi",
    ],
    &[
        "Gas",
        "Uber ride",
        "Taxi",
        "Bus fare",
        "Parking",
        "Car maintenance",
        "Train ticket",
        "Flight",
        "Bike repair",
    ],
    &[
        "Movie ticket",
        "Concert",
        "Gaming",
        "Netflix subscription",
        "Spotify subscription",
        "Book",
        "Video game",
        "Theme park",
    ],
    &[
        "Gym membership",
        "Doctor visit",
        "Dentist",
        "Pharmacy",
        "Yoga class",
        "Vitamins",
        "Haircut",
    ],
    &[
        "Course",
        "Textbook",
        "Online class",
        "Workshop",
        "Tuition",
        "Training",
    ],
    &[
        "Phone bill",
        "Internet",
        "Electric",
        "Water bill",
        "Gas bill",
        "Wifi",
    ],
    &[
        "Clothes",
        "Shoes",
        "Electronics",
        "Furniture",
        "Home decor",
        "Jewelry",
    ],
];

const RANDOM_SEED_COUNT: usize = 30;
const SEED_DATE_WINDOW_DAYS: u64 = 60;

/// Produce the startup expenses for `strategy`.
pub fn seed_expenses(strategy: SeedStrategy) -> Vec<NewExpense> {
    match strategy {
        SeedStrategy::Random => random_expenses(clock_seed()),
        SeedStrategy::Fixture => fixture_expenses(),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0x5EED)
}

/// A simple LCG PRNG. Seed quality does not matter for illustrative data,
/// and it keeps the seeder free of an external randomness dependency.
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_below(&mut self, bound: u64) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) % bound
    }
}

/// Generate [RANDOM_SEED_COUNT] expenses with amounts in [5.00, 105.00)
/// and dates within the last [SEED_DATE_WINDOW_DAYS] days.
fn random_expenses(seed: u64) -> Vec<NewExpense> {
    let mut rng = Lcg::new(seed);
    let today = OffsetDateTime::now_utc().date();

    (0..RANDOM_SEED_COUNT)
        .map(|_| {
            let category_index = rng.next_below(CATEGORIES.len() as u64) as usize;
            let phrases = DESCRIPTIONS[category_index];
            let description = phrases[rng.next_below(phrases.len() as u64) as usize];
            let amount = 5.0 + rng.next_below(10_000) as f64 / 100.0;
            let days_ago = rng.next_below(SEED_DATE_WINDOW_DAYS) as i64;

            new_expense(
                description,
                amount,
                CATEGORIES[category_index],
                today - Duration::days(days_ago),
            )
        })
        .collect()
}

/// A fixed list of illustrative expenses covering every conventional
/// category.
fn fixture_expenses() -> Vec<NewExpense> {
    use time::macros::date;

    vec![
        new_expense("Grocery shopping", 54.20, "Food", date!(2025 - 06 - 02)),
        new_expense("Monthly bus pass", 65.00, "Transport", date!(2025 - 06 - 04)),
        new_expense("Movie ticket", 15.50, "Entertainment", date!(2025 - 06 - 07)),
        new_expense("Gym membership", 29.99, "Health", date!(2025 - 06 - 10)),
        new_expense("Textbook", 89.95, "Education", date!(2025 - 06 - 12)),
        new_expense("Internet bill", 49.99, "Utilities", date!(2025 - 06 - 15)),
        new_expense("Running shoes", 74.99, "Shopping", date!(2025 - 06 - 18)),
        new_expense("Dinner out", 32.80, "Food", date!(2025 - 06 - 21)),
        new_expense("Taxi", 18.60, "Transport", date!(2025 - 06 - 24)),
        new_expense("Concert", 120.00, "Entertainment", date!(2025 - 06 - 27)),
    ]
}

fn new_expense(description: &str, amount: f64, category: &str, date: Date) -> NewExpense {
    NewExpense {
        description: Some(description.to_owned()),
        amount: Some(amount),
        category: Some(category.to_owned()),
        date: Some(date),
    }
}
