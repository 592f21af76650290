//! Best-effort bulk import of transactions.
//!
//! Each record in a batch is screened independently: structurally valid
//! records are created one at a time in input order, invalid records are
//! skipped with a recorded reason rather than failing the batch. The batch
//! is not atomic; records created before an unexpected database failure
//! remain in the store.

use std::{fmt::Display, str::FromStr};

use axum::{Json, extract::State, response::IntoResponse};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    Error,
    app_state::TransactionState,
    extract::JsonBody,
    transaction::{
        NewTransaction, RecurringFrequency, Transaction, core::create_transaction,
        parse_timestamp,
    },
    transaction_type::TransactionType,
};

/// A raw, unvalidated transaction-like record from an import file.
///
/// Every field is optional so that arbitrarily-shaped records deserialize;
/// screening decides per record whether enough of them are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportRecord {
    /// The claimed transaction type.
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// The claimed category ID.
    pub category: Option<String>,
    /// The claimed amount, as a JSON number or a numeric string.
    pub amount: Option<Value>,
    /// The claimed description.
    pub description: Option<String>,
    /// The claimed date.
    pub date: Option<String>,
    /// Whether the transaction repeats on a schedule.
    pub recurring: Option<bool>,
    /// The claimed recurring cadence.
    pub frequency: Option<String>,
    /// Free-text labels.
    pub tags: Option<Vec<String>>,
}

impl From<&Transaction> for ImportRecord {
    fn from(transaction: &Transaction) -> Self {
        Self {
            transaction_type: Some(transaction.transaction_type.as_str().to_owned()),
            category: Some(transaction.category.clone()),
            // A numeric string round-trips the decimal exactly.
            amount: Some(Value::String(transaction.amount.to_string())),
            description: Some(transaction.description.clone()),
            date: Some(
                transaction
                    .date
                    .format(&time::format_description::well_known::Rfc3339)
                    .unwrap_or_default(),
            ),
            recurring: Some(transaction.recurring),
            frequency: transaction
                .frequency
                .map(|frequency| frequency.as_str().to_owned()),
            tags: Some(transaction.tags.clone()),
        }
    }
}

/// Why an import record was skipped instead of created.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// A required field was absent or empty.
    MissingField(&'static str),
    /// The type field did not name one of the four transaction types.
    InvalidType(String),
    /// The amount was not a number or a numeric string.
    InvalidAmount(String),
    /// The date matched neither RFC 3339 nor `YYYY-MM-DD`.
    InvalidDate(String),
    /// The frequency field did not name a recurring cadence.
    InvalidFrequency(String),
    /// The category ID did not match any category in the database.
    UnknownCategory(String),
    /// The category belongs to a different transaction type.
    CategoryTypeMismatch(String),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingField(field) => write!(f, "missing required field \"{field}\""),
            SkipReason::InvalidType(value) => {
                write!(f, "\"{value}\" is not a valid transaction type")
            }
            SkipReason::InvalidAmount(value) => write!(f, "\"{value}\" is not a valid amount"),
            SkipReason::InvalidDate(value) => write!(f, "\"{value}\" is not a valid date"),
            SkipReason::InvalidFrequency(value) => {
                write!(f, "\"{value}\" is not a valid recurring frequency")
            }
            SkipReason::UnknownCategory(id) => write!(f, "the category \"{id}\" does not exist"),
            SkipReason::CategoryTypeMismatch(id) => write!(
                f,
                "the category \"{id}\" does not match the transaction type"
            ),
        }
    }
}

/// The per-record result of a bulk import.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    /// The record was valid and the transaction was created.
    Imported(Transaction),
    /// The record was skipped and nothing was created for it.
    Skipped(SkipReason),
}

/// Create a transaction for every structurally valid record in `records`.
///
/// Records are processed in input order, each independently; a skipped
/// record does not affect its neighbors and nothing is rolled back. No
/// deduplication is attempted against existing transactions.
///
/// # Errors
/// This function will return an [Error::SqlError] if the database itself
/// fails; validation problems never abort the batch.
pub fn import_transactions(
    records: &[ImportRecord],
    connection: &Connection,
) -> Result<Vec<ImportOutcome>, Error> {
    records
        .iter()
        .map(|record| import_record(record, connection))
        .collect()
}

fn import_record(
    record: &ImportRecord,
    connection: &Connection,
) -> Result<ImportOutcome, Error> {
    let new_transaction = match screen_record(record) {
        Ok(new_transaction) => new_transaction,
        Err(reason) => return Ok(ImportOutcome::Skipped(reason)),
    };
    let category = new_transaction.category.clone();

    match create_transaction(new_transaction, connection) {
        Ok(transaction) => Ok(ImportOutcome::Imported(transaction)),
        Err(Error::UnknownCategory(id)) => {
            Ok(ImportOutcome::Skipped(SkipReason::UnknownCategory(id)))
        }
        Err(Error::CategoryTypeMismatch { .. }) => Ok(ImportOutcome::Skipped(
            SkipReason::CategoryTypeMismatch(category),
        )),
        Err(Error::NegativeAmount) => Ok(ImportOutcome::Skipped(SkipReason::InvalidAmount(
            "negative".to_owned(),
        ))),
        Err(Error::EmptyDescription) => Ok(ImportOutcome::Skipped(SkipReason::MissingField(
            "description",
        ))),
        Err(error) => Err(error),
    }
}

/// Check field presence and parse the raw strings, without touching the
/// database.
fn screen_record(record: &ImportRecord) -> Result<NewTransaction, SkipReason> {
    let raw_type = record
        .transaction_type
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or(SkipReason::MissingField("type"))?;
    let transaction_type = TransactionType::from_str(raw_type)
        .map_err(|_| SkipReason::InvalidType(raw_type.to_owned()))?;

    let category = record
        .category
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or(SkipReason::MissingField("category"))?;

    let raw_amount = record
        .amount
        .as_ref()
        .filter(|value| !value.is_null())
        .ok_or(SkipReason::MissingField("amount"))?;
    let amount =
        parse_amount(raw_amount).ok_or_else(|| SkipReason::InvalidAmount(raw_amount.to_string()))?;

    let description = record
        .description
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or(SkipReason::MissingField("description"))?;

    let raw_date = record
        .date
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or(SkipReason::MissingField("date"))?;
    let date =
        parse_timestamp(raw_date).map_err(|_| SkipReason::InvalidDate(raw_date.to_owned()))?;

    let frequency = record
        .frequency
        .as_deref()
        .map(|raw| {
            RecurringFrequency::from_str(raw)
                .map_err(|_| SkipReason::InvalidFrequency(raw.to_owned()))
        })
        .transpose()?;

    Ok(
        NewTransaction::new(transaction_type, category, amount, description, date)
            .recurring(record.recurring.unwrap_or(false), frequency)
            .tags(record.tags.clone().unwrap_or_default()),
    )
}

// Numbers go through their decimal text form rather than `as_f64` so that
// values like 20.1 stay exact.
fn parse_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => Decimal::from_str(&number.to_string()).ok(),
        Value::String(raw) => Decimal::from_str(raw).ok(),
        _ => None,
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// The request body for a bulk import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// The raw records to import.
    pub transactions: Vec<ImportRecord>,
}

/// The response body of a bulk import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    /// How many records were actually created.
    pub imported: usize,
    /// The created transactions, in input order.
    pub transactions: Vec<Transaction>,
}

/// A route handler for the best-effort bulk import of transactions.
///
/// Invalid records are skipped (and logged) rather than failing the batch;
/// the response reports how many records were actually created.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn import_transactions_endpoint(
    State(state): State<TransactionState>,
    JsonBody(request): JsonBody<ImportRequest>,
) -> impl IntoResponse {
    let connection = state.db_connection.lock().unwrap();

    let outcomes = match import_transactions(&request.transactions, &connection) {
        Ok(outcomes) => outcomes,
        Err(error) => return error.into_response(),
    };

    let mut imported = Vec::new();
    for outcome in outcomes {
        match outcome {
            ImportOutcome::Imported(transaction) => imported.push(transaction),
            ImportOutcome::Skipped(reason) => {
                tracing::warn!("Skipping import record: {reason}");
            }
        }
    }

    Json(ImportResponse {
        imported: imported.len(),
        transactions: imported,
    })
    .into_response()
}

// ============================================================================
// TESTS
// ============================================================================
