//! Category management: the labeled buckets that transactions reference.
//!
//! Categories are seeded with a fixed default set at database initialization
//! and are not deleted through normal application flow. Lookups by ID report
//! "not found" instead of failing the whole request so that transactions
//! referencing a missing category degrade gracefully.

use std::str::FromStr;

use axum::{Json, extract::State, response::IntoResponse};
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, app_state::CategoryState, transaction_type::TransactionType};

// ============================================================================
// MODELS
// ============================================================================

/// A labeled bucket for transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// A stable, human-chosen ID such as `expense-food`, used as a foreign
    /// key by transactions.
    pub id: String,
    /// The display label.
    pub name: String,
    /// The transaction type this category belongs to. Fixes which
    /// transactions may reference the category.
    #[serde(rename = "type")]
    pub category_type: TransactionType,
    /// A presentation hint, not behaviorally significant.
    pub color: String,
    /// An optional presentation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the category table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                type TEXT NOT NULL,
                color TEXT NOT NULL,
                icon TEXT
                )",
        (),
    )?;

    Ok(())
}

/// Create or replace a category by its ID.
///
/// Used for seeding the default category set; replacing keeps the seed
/// idempotent across restarts.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn upsert_category(category: &Category, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO category (id, name, type, color, icon)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            type = excluded.type,
            color = excluded.color,
            icon = excluded.icon",
        (
            &category.id,
            &category.name,
            category.category_type.as_str(),
            &category.color,
            &category.icon,
        ),
    )?;

    Ok(())
}

/// Retrieve all categories ordered by type then name, both ascending.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn list_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    let categories = connection
        .prepare("SELECT id, name, type, color, icon FROM category ORDER BY type ASC, name ASC")?
        .query_map([], map_category_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(categories)
}

/// Retrieve a category by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid category,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_category(id: &str, connection: &Connection) -> Result<Category, Error> {
    let category = connection
        .prepare("SELECT id, name, type, color, icon FROM category WHERE id = :id")?
        .query_one(&[(":id", &id)], map_category_row)?;

    Ok(category)
}

/// Map a database row to a [Category].
pub fn map_category_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;

    let raw_type: String = row.get(2)?;
    let category_type = TransactionType::from_str(&raw_type).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(error),
        )
    })?;

    let color = row.get(3)?;
    let icon = row.get(4)?;

    Ok(Category {
        id,
        name,
        category_type,
        color,
        icon,
    })
}

/// The fixed default category set: 5 income, 9 expense, 6 asset and
/// 6 liability categories.
pub fn default_categories() -> Vec<Category> {
    let category = |id: &str, name: &str, category_type, color: &str| Category {
        id: id.to_owned(),
        name: name.to_owned(),
        category_type,
        color: color.to_owned(),
        icon: None,
    };

    let income = "from-emerald-500 to-green-600";
    let expense = "from-red-500 to-rose-600";
    let asset = "from-blue-500 to-indigo-600";
    let liability = "from-amber-500 to-orange-600";

    use TransactionType::{Asset, Expense, Income, Liability};

    vec![
        category("income-salary", "Salary", Income, income),
        category("income-freelance", "Freelance", Income, income),
        category("income-investments", "Investments", Income, income),
        category("income-gifts", "Gifts", Income, income),
        category("income-other", "Other Income", Income, income),
        category("expense-housing", "Housing", Expense, expense),
        category("expense-food", "Food & Dining", Expense, expense),
        category("expense-transport", "Transportation", Expense, expense),
        category("expense-utilities", "Utilities", Expense, expense),
        category("expense-entertainment", "Entertainment", Expense, expense),
        category("expense-healthcare", "Healthcare", Expense, expense),
        category("expense-shopping", "Shopping", Expense, expense),
        category("expense-education", "Education", Expense, expense),
        category("expense-other", "Other Expenses", Expense, expense),
        category("asset-cash", "Cash", Asset, asset),
        category("asset-savings", "Savings", Asset, asset),
        category("asset-investments", "Investments", Asset, asset),
        category("asset-property", "Property", Asset, asset),
        category("asset-vehicles", "Vehicles", Asset, asset),
        category("asset-other", "Other Assets", Asset, asset),
        category("liability-credit-card", "Credit Card", Liability, liability),
        category("liability-personal-loan", "Personal Loan", Liability, liability),
        category("liability-mortgage", "Mortgage", Liability, liability),
        category("liability-car-loan", "Car Loan", Liability, liability),
        category("liability-student-loan", "Student Loan", Liability, liability),
        category("liability-other", "Other Liabilities", Liability, liability),
    ]
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// A route handler for listing all categories ordered by type then name.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_categories_endpoint(State(state): State<CategoryState>) -> impl IntoResponse {
    let connection = state.db_connection.lock().unwrap();

    match list_categories(&connection) {
        Ok(categories) => Json(categories).into_response(),
        Err(error) => error.into_response(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod category_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        category::{Category, default_categories, get_category, list_categories, upsert_category},
        db::initialize,
        transaction_type::TransactionType,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn default_set_has_expected_split() {
        let categories = default_categories();

        let count_of = |category_type| {
            categories
                .iter()
                .filter(|category| category.category_type == category_type)
                .count()
        };

        assert_eq!(count_of(TransactionType::Income), 5);
        assert_eq!(count_of(TransactionType::Expense), 9);
        assert_eq!(count_of(TransactionType::Asset), 6);
        assert_eq!(count_of(TransactionType::Liability), 6);
    }

    #[test]
    fn list_orders_by_type_then_name() {
        let conn = get_test_connection();

        let categories = list_categories(&conn).unwrap();

        let keys: Vec<_> = categories
            .iter()
            .map(|category| (category.category_type.as_str(), category.name.as_str()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn get_returns_seeded_category() {
        let conn = get_test_connection();

        let category = get_category("expense-food", &conn).unwrap();

        assert_eq!(category.name, "Food & Dining");
        assert_eq!(category.category_type, TransactionType::Expense);
    }

    #[test]
    fn get_missing_category_returns_not_found() {
        let conn = get_test_connection();

        let result = get_category("expense-doesnotexist", &conn);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn upsert_replaces_existing_category() {
        let conn = get_test_connection();
        let replacement = Category {
            id: "expense-food".to_owned(),
            name: "Groceries".to_owned(),
            category_type: TransactionType::Expense,
            color: "from-red-500 to-rose-600".to_owned(),
            icon: Some("cart".to_owned()),
        };

        upsert_category(&replacement, &conn).unwrap();

        let category = get_category("expense-food", &conn).unwrap();
        assert_eq!(category, replacement);
        assert_eq!(list_categories(&conn).unwrap().len(), 26);
    }
}
