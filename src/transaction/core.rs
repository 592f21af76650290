//! Defines the core data models and database queries for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::{Connection, Row};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description};
use uuid::Uuid;

use crate::{Error, category::get_category, transaction_type::TransactionType};

// ============================================================================
// MODELS
// ============================================================================

/// The cadence of a recurring transaction.
///
/// Only meaningful while the transaction's `recurring` flag is set; the
/// gateway forces the frequency to `None` whenever `recurring` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    /// Repeats every day.
    Daily,
    /// Repeats every week.
    Weekly,
    /// Repeats every month.
    Monthly,
    /// Repeats every year.
    Yearly,
}

impl RecurringFrequency {
    /// The lowercase name used on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringFrequency::Daily => "daily",
            RecurringFrequency::Weekly => "weekly",
            RecurringFrequency::Monthly => "monthly",
            RecurringFrequency::Yearly => "yearly",
        }
    }
}

impl Display for RecurringFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecurringFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(RecurringFrequency::Daily),
            "weekly" => Ok(RecurringFrequency::Weekly),
            "monthly" => Ok(RecurringFrequency::Monthly),
            "yearly" => Ok(RecurringFrequency::Yearly),
            other => Err(Error::InvalidFrequency(other.to_owned())),
        }
    }
}

/// A single financial event.
///
/// To create a new `Transaction`, use [NewTransaction] with
/// [create_transaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store and immutable once
    /// created.
    pub id: String,
    /// The classification that determines which summary bucket the amount
    /// contributes to.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The ID of the category the transaction belongs to.
    pub category: String,
    /// The non-negative monetary value of the transaction.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened (distinct from when it was recorded).
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Whether the transaction repeats on a schedule.
    pub recurring: bool,
    /// The cadence of a recurring transaction, absent when `recurring` is
    /// false.
    pub frequency: Option<RecurringFrequency>,
    /// Free-text labels attached to the transaction.
    pub tags: Vec<String>,
    /// When the transaction was inserted, assigned by the store.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the transaction was last mutated, assigned by the store.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The validated input for creating a [Transaction].
///
/// The ID and timestamps are assigned by [create_transaction].
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The classification of the transaction.
    pub transaction_type: TransactionType,
    /// The ID of the category the transaction belongs to.
    pub category: String,
    /// The non-negative monetary value of the transaction.
    pub amount: Decimal,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: OffsetDateTime,
    /// Whether the transaction repeats on a schedule.
    pub recurring: bool,
    /// The cadence of a recurring transaction.
    pub frequency: Option<RecurringFrequency>,
    /// Free-text labels attached to the transaction.
    pub tags: Vec<String>,
}

impl NewTransaction {
    /// Create the input for a transaction with the required fields, leaving
    /// the defaults `recurring = false`, `frequency = None` and `tags = []`.
    pub fn new(
        transaction_type: TransactionType,
        category: &str,
        amount: Decimal,
        description: &str,
        date: OffsetDateTime,
    ) -> Self {
        Self {
            transaction_type,
            category: category.to_owned(),
            amount,
            description: description.to_owned(),
            date,
            recurring: false,
            frequency: None,
            tags: Vec::new(),
        }
    }

    /// Mark the transaction as recurring with the given cadence.
    pub fn recurring(mut self, recurring: bool, frequency: Option<RecurringFrequency>) -> Self {
        self.recurring = recurring;
        self.frequency = frequency;
        self
    }

    /// Attach free-text labels to the transaction.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// The partial update for a [Transaction].
///
/// Only fields that are present and non-null in the request are applied;
/// everything else retains its prior value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTransaction {
    /// Replace the transaction's type.
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// Replace the transaction's category.
    pub category: Option<String>,
    /// Replace the transaction's amount.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    /// Replace the transaction's description.
    pub description: Option<String>,
    /// Replace the transaction's date. Accepts an RFC 3339 timestamp or a
    /// `YYYY-MM-DD` date.
    pub date: Option<String>,
    /// Replace the transaction's recurring flag.
    pub recurring: Option<bool>,
    /// Replace the transaction's recurring cadence.
    pub frequency: Option<RecurringFrequency>,
    /// Replace the transaction's tags.
    pub tags: Option<Vec<String>>,
}

/// Parse a timestamp from either a full RFC 3339 string or a plain
/// `YYYY-MM-DD` calendar date, interpreted as midnight UTC.
///
/// # Errors
/// Returns an [Error::InvalidDate] if `value` matches neither form.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, Error> {
    if let Ok(timestamp) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(timestamp);
    }

    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|_| Error::InvalidDate(value.to_owned()))
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// The ID and the `created_at`/`updated_at` timestamps are assigned here.
/// The frequency is forced to `None` whenever `recurring` is false, even if
/// one was supplied.
///
/// # Errors
/// This function will return a:
/// - [Error::NegativeAmount] if the amount is negative,
/// - [Error::EmptyDescription] if the description is empty,
/// - [Error::UnknownCategory] if the category ID does not refer to a real category,
/// - [Error::CategoryTypeMismatch] if the category belongs to a different type,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    validate_amount(new_transaction.amount)?;
    validate_description(&new_transaction.description)?;
    validate_category(
        &new_transaction.category,
        new_transaction.transaction_type,
        connection,
    )?;

    let frequency = if new_transaction.recurring {
        new_transaction.frequency
    } else {
        None
    };

    let now = OffsetDateTime::now_utc();
    let transaction = Transaction {
        id: Uuid::new_v4().to_string(),
        transaction_type: new_transaction.transaction_type,
        category: new_transaction.category,
        amount: new_transaction.amount,
        description: new_transaction.description,
        date: new_transaction.date,
        recurring: new_transaction.recurring,
        frequency,
        tags: new_transaction.tags,
        created_at: now,
        updated_at: now,
    };

    connection.execute(
        "INSERT INTO \"transaction\"
         (id, type, category_id, amount, description, date, recurring, frequency, tags, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        (
            &transaction.id,
            transaction.transaction_type.as_str(),
            &transaction.category,
            transaction.amount.to_string(),
            &transaction.description,
            transaction.date,
            transaction.recurring,
            transaction.frequency.map(|frequency| frequency.as_str()),
            encode_tags(&transaction.tags),
            transaction.created_at,
            transaction.updated_at,
        ),
    )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_transaction(id: &str, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(&format!("SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" WHERE id = :id"))?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve all transactions ordered by date, most recent first.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is some SQL error.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    let transactions = connection
        .prepare(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" ORDER BY date DESC"
        ))?
        .query_map([], map_transaction_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(transactions)
}

/// Apply a partial update to the transaction with the given `id`.
///
/// Only fields present in `update` change; omitted fields retain their prior
/// value. After merging, the frequency is forced to `None` if the resulting
/// transaction is not recurring, and `updated_at` is set to the current time.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingTransaction] if `id` does not refer to a valid transaction,
/// - [Error::InvalidDate] if the supplied date cannot be parsed,
/// - any validation error from the same checks as [create_transaction],
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    id: &str,
    update: UpdateTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let mut transaction = match get_transaction(id, connection) {
        Ok(transaction) => transaction,
        Err(Error::NotFound) => return Err(Error::UpdateMissingTransaction),
        Err(error) => return Err(error),
    };

    if let Some(transaction_type) = update.transaction_type {
        transaction.transaction_type = transaction_type;
    }
    if let Some(category) = update.category {
        transaction.category = category;
    }
    if let Some(amount) = update.amount {
        transaction.amount = amount;
    }
    if let Some(description) = update.description {
        transaction.description = description;
    }
    if let Some(date) = update.date {
        transaction.date = parse_timestamp(&date)?;
    }
    if let Some(recurring) = update.recurring {
        transaction.recurring = recurring;
    }
    if let Some(frequency) = update.frequency {
        transaction.frequency = Some(frequency);
    }
    if let Some(tags) = update.tags {
        transaction.tags = tags;
    }

    if !transaction.recurring {
        transaction.frequency = None;
    }

    validate_amount(transaction.amount)?;
    validate_description(&transaction.description)?;
    validate_category(&transaction.category, transaction.transaction_type, connection)?;

    transaction.updated_at = OffsetDateTime::now_utc();

    connection.execute(
        "UPDATE \"transaction\" SET
            type = ?1, category_id = ?2, amount = ?3, description = ?4, date = ?5,
            recurring = ?6, frequency = ?7, tags = ?8, updated_at = ?9
         WHERE id = ?10",
        (
            transaction.transaction_type.as_str(),
            &transaction.category,
            transaction.amount.to_string(),
            &transaction.description,
            transaction.date,
            transaction.recurring,
            transaction.frequency.map(|frequency| frequency.as_str()),
            encode_tags(&transaction.tags),
            transaction.updated_at,
            &transaction.id,
        ),
    )?;

    Ok(transaction)
}

/// The number of rows removed by a delete.
pub type RowsAffected = usize;

/// Remove the transaction with the given `id` if it exists.
///
/// Returns the number of rows removed; callers that need a not-found error
/// should check for zero.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is some SQL error.
pub fn delete_transaction(id: &str, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM \"transaction\" WHERE id = :id", &[(":id", &id)])
        .map_err(|error| error.into())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id TEXT PRIMARY KEY,
                type TEXT NOT NULL,
                category_id TEXT NOT NULL,
                amount TEXT NOT NULL,
                description TEXT NOT NULL,
                date TEXT NOT NULL,
                recurring INTEGER NOT NULL DEFAULT 0,
                frequency TEXT,
                tags TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY(category_id) REFERENCES category(id) ON UPDATE CASCADE
                )",
        (),
    )?;

    // Index used by the date-ordered list and the summary's date-range scans.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    Ok(())
}

const TRANSACTION_COLUMNS: &str =
    "id, type, category_id, amount, description, date, recurring, frequency, tags, created_at, updated_at";

/// Map a database row to a [Transaction].
///
/// Expects the columns in the order of [TRANSACTION_COLUMNS].
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;

    let raw_type: String = row.get(1)?;
    let transaction_type = TransactionType::from_str(&raw_type)
        .map_err(|error| conversion_error(1, error))?;

    let category = row.get(2)?;

    let raw_amount: String = row.get(3)?;
    let amount = Decimal::from_str(&raw_amount).map_err(|error| conversion_error(3, error))?;

    let description = row.get(4)?;
    let date = row.get(5)?;
    let recurring = row.get(6)?;

    let raw_frequency: Option<String> = row.get(7)?;
    let frequency = raw_frequency
        .map(|raw| RecurringFrequency::from_str(&raw).map_err(|error| conversion_error(7, error)))
        .transpose()?;

    let raw_tags: String = row.get(8)?;
    let tags = serde_json::from_str(&raw_tags).map_err(|error| conversion_error(8, error))?;

    let created_at = row.get(9)?;
    let updated_at = row.get(10)?;

    Ok(Transaction {
        id,
        transaction_type,
        category,
        amount,
        description,
        date,
        recurring,
        frequency,
        tags,
        created_at,
        updated_at,
    })
}

fn conversion_error<E>(column: usize, error: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(error))
}

// Serializing a list of strings cannot fail, so the fallback is unreachable.
fn encode_tags(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_owned())
}

fn validate_amount(amount: Decimal) -> Result<(), Error> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(Error::NegativeAmount);
    }

    Ok(())
}

fn validate_description(description: &str) -> Result<(), Error> {
    if description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }

    Ok(())
}

fn validate_category(
    category_id: &str,
    transaction_type: TransactionType,
    connection: &Connection,
) -> Result<(), Error> {
    let category = match get_category(category_id, connection) {
        Ok(category) => category,
        Err(Error::NotFound) => return Err(Error::UnknownCategory(category_id.to_owned())),
        Err(error) => return Err(error),
    };

    if category.category_type != transaction_type {
        return Err(Error::CategoryTypeMismatch {
            category: category.id,
            category_type: category.category_type,
            transaction_type,
        });
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use rust_decimal::Decimal;
    use time::macros::datetime;

    use crate::{
        Error,
        db::initialize,
        transaction::{
            NewTransaction, RecurringFrequency, UpdateTransaction, count_transactions,
            create_transaction, delete_transaction, get_transaction, list_transactions,
            parse_timestamp, update_transaction,
        },
        transaction_type::TransactionType,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn lunch(amount: &str) -> NewTransaction {
        NewTransaction::new(
            TransactionType::Expense,
            "expense-food",
            amount.parse().unwrap(),
            "Lunch",
            datetime!(2024-01-15 12:00 UTC),
        )
    }

    #[test]
    fn create_assigns_id_and_defaults() {
        let conn = get_test_connection();

        let transaction = create_transaction(lunch("12.30"), &conn).unwrap();

        assert!(!transaction.id.is_empty());
        assert_eq!(transaction.amount, "12.30".parse::<Decimal>().unwrap());
        assert!(!transaction.recurring);
        assert_eq!(transaction.frequency, None);
        assert!(transaction.tags.is_empty());
        assert_eq!(transaction.created_at, transaction.updated_at);
    }

    #[test]
    fn create_persists_round_trippable_record() {
        let conn = get_test_connection();
        let created = create_transaction(
            lunch("12.30").tags(vec!["work".to_owned(), "food".to_owned()]),
            &conn,
        )
        .unwrap();

        let fetched = get_transaction(&created.id, &conn).unwrap();

        assert_eq!(fetched, created);
    }

    #[test]
    fn create_forces_frequency_to_none_when_not_recurring() {
        let conn = get_test_connection();

        let transaction = create_transaction(
            lunch("20.00").recurring(false, Some(RecurringFrequency::Monthly)),
            &conn,
        )
        .unwrap();

        assert_eq!(transaction.frequency, None);
        let fetched = get_transaction(&transaction.id, &conn).unwrap();
        assert_eq!(fetched.frequency, None);
    }

    #[test]
    fn create_keeps_frequency_when_recurring() {
        let conn = get_test_connection();

        let transaction = create_transaction(
            lunch("20.00").recurring(true, Some(RecurringFrequency::Weekly)),
            &conn,
        )
        .unwrap();

        assert_eq!(transaction.frequency, Some(RecurringFrequency::Weekly));
    }

    #[test]
    fn create_rejects_negative_amount() {
        let conn = get_test_connection();

        let result = create_transaction(lunch("-1.00"), &conn);

        assert_eq!(result, Err(Error::NegativeAmount));
    }

    #[test]
    fn create_rejects_unknown_category() {
        let conn = get_test_connection();
        let new_transaction = NewTransaction::new(
            TransactionType::Expense,
            "expense-doesnotexist",
            Decimal::TEN,
            "Mystery",
            datetime!(2024-01-15 12:00 UTC),
        );

        let result = create_transaction(new_transaction, &conn);

        assert_eq!(
            result,
            Err(Error::UnknownCategory("expense-doesnotexist".to_owned()))
        );
    }

    #[test]
    fn create_rejects_category_type_mismatch() {
        let conn = get_test_connection();
        let new_transaction = NewTransaction::new(
            TransactionType::Income,
            "expense-food",
            Decimal::TEN,
            "Refund?",
            datetime!(2024-01-15 12:00 UTC),
        );

        let result = create_transaction(new_transaction, &conn);

        assert_eq!(
            result,
            Err(Error::CategoryTypeMismatch {
                category: "expense-food".to_owned(),
                category_type: TransactionType::Expense,
                transaction_type: TransactionType::Income,
            })
        );
    }

    #[test]
    fn get_missing_transaction_returns_not_found() {
        let conn = get_test_connection();

        let result = get_transaction("no-such-id", &conn);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn list_orders_by_date_descending() {
        let conn = get_test_connection();
        for day in [3, 1, 2] {
            let mut new_transaction = lunch("5.00");
            new_transaction.date = datetime!(2024-02-01 00:00 UTC).replace_day(day).unwrap();
            create_transaction(new_transaction, &conn).unwrap();
        }

        let transactions = list_transactions(&conn).unwrap();

        let days: Vec<_> = transactions
            .iter()
            .map(|transaction| transaction.date.day())
            .collect();
        assert_eq!(days, vec![3, 2, 1]);
    }

    #[test]
    fn update_applies_only_supplied_fields() {
        let conn = get_test_connection();
        let created = create_transaction(lunch("12.30"), &conn).unwrap();

        let updated = update_transaction(
            &created.id,
            UpdateTransaction {
                amount: Some("45.00".parse().unwrap()),
                ..Default::default()
            },
            &conn,
        )
        .unwrap();

        assert_eq!(updated.amount, "45.00".parse::<Decimal>().unwrap());
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.category, created.category);
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_clears_frequency_when_recurring_turned_off() {
        let conn = get_test_connection();
        let created = create_transaction(
            lunch("20.00").recurring(true, Some(RecurringFrequency::Monthly)),
            &conn,
        )
        .unwrap();

        let updated = update_transaction(
            &created.id,
            UpdateTransaction {
                recurring: Some(false),
                ..Default::default()
            },
            &conn,
        )
        .unwrap();

        assert!(!updated.recurring);
        assert_eq!(updated.frequency, None);
    }

    #[test]
    fn update_missing_transaction_leaves_count_unchanged() {
        let conn = get_test_connection();
        create_transaction(lunch("12.30"), &conn).unwrap();
        let count_before = count_transactions(&conn).unwrap();

        let result = update_transaction(
            "no-such-id",
            UpdateTransaction {
                description: Some("Dinner".to_owned()),
                ..Default::default()
            },
            &conn,
        );

        assert_eq!(result, Err(Error::UpdateMissingTransaction));
        assert_eq!(count_transactions(&conn).unwrap(), count_before);
    }

    #[test]
    fn update_rejects_category_type_mismatch() {
        let conn = get_test_connection();
        let created = create_transaction(lunch("12.30"), &conn).unwrap();

        let result = update_transaction(
            &created.id,
            UpdateTransaction {
                category: Some("income-salary".to_owned()),
                ..Default::default()
            },
            &conn,
        );

        assert!(matches!(result, Err(Error::CategoryTypeMismatch { .. })));
    }

    #[test]
    fn delete_removes_transaction() {
        let conn = get_test_connection();
        let created = create_transaction(lunch("12.30"), &conn).unwrap();

        let rows_affected = delete_transaction(&created.id, &conn).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(get_transaction(&created.id, &conn), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_transaction_affects_no_rows() {
        let conn = get_test_connection();

        let rows_affected = delete_transaction("no-such-id", &conn).unwrap();

        assert_eq!(rows_affected, 0);
    }

    #[test]
    fn parse_timestamp_accepts_both_forms() {
        assert_eq!(
            parse_timestamp("2024-01-01").unwrap(),
            datetime!(2024-01-01 00:00 UTC)
        );
        assert_eq!(
            parse_timestamp("2024-01-01T13:45:00Z").unwrap(),
            datetime!(2024-01-01 13:45 UTC)
        );
        assert!(parse_timestamp("yesterday").is_err());
    }
}
