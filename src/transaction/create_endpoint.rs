//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    app_state::TransactionState,
    extract::JsonBody,
    transaction::{NewTransaction, RecurringFrequency, core::create_transaction, parse_timestamp},
    transaction_type::TransactionType,
};

/// The request body for creating a transaction.
///
/// `type`, `category`, `amount`, `description` and `date` are required;
/// requests missing any of them are rejected with a validation error that
/// names the offending fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTransactionRequest {
    /// The classification of the transaction.
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// The ID of the category the transaction belongs to.
    pub category: Option<String>,
    /// The monetary value of the transaction.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    /// Text detailing the transaction.
    pub description: Option<String>,
    /// When the transaction happened, as an RFC 3339 timestamp or a
    /// `YYYY-MM-DD` date.
    pub date: Option<String>,
    /// Whether the transaction repeats on a schedule. Defaults to false.
    pub recurring: bool,
    /// The cadence of a recurring transaction. Ignored unless `recurring` is
    /// true.
    pub frequency: Option<RecurringFrequency>,
    /// Free-text labels. Defaults to none.
    pub tags: Vec<String>,
}

impl CreateTransactionRequest {
    /// Check the required fields and convert into the gateway's input shape.
    ///
    /// # Errors
    /// Returns an [Error::MissingRequiredFields] naming every absent or empty
    /// required field, or an [Error::InvalidDate] if the date cannot be
    /// parsed.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let mut missing = Vec::new();

        if self.transaction_type.is_none() {
            missing.push("type");
        }
        if self.category.as_deref().is_none_or(str::is_empty) {
            missing.push("category");
        }
        if self.amount.is_none() {
            missing.push("amount");
        }
        if self.description.as_deref().is_none_or(str::is_empty) {
            missing.push("description");
        }
        if self.date.as_deref().is_none_or(str::is_empty) {
            missing.push("date");
        }

        if !missing.is_empty() {
            return Err(Error::MissingRequiredFields(missing.join(", ")));
        }

        // The defaults cannot be reached: every field was checked above.
        let date = parse_timestamp(&self.date.unwrap_or_default())?;

        Ok(NewTransaction {
            transaction_type: self.transaction_type.unwrap_or(TransactionType::Expense),
            category: self.category.unwrap_or_default(),
            amount: self.amount.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            date,
            recurring: self.recurring,
            frequency: self.frequency,
            tags: self.tags,
        })
    }
}

/// A route handler for creating a new transaction, responds with the created
/// transaction on success.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    JsonBody(request): JsonBody<CreateTransactionRequest>,
) -> impl IntoResponse {
    let new_transaction = match request.validate() {
        Ok(new_transaction) => new_transaction,
        Err(error) => return error.into_response(),
    };

    let connection = state.db_connection.lock().unwrap();

    match create_transaction(new_transaction, &connection) {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use rusqlite::Connection;

    use crate::{
        Error,
        app_state::TransactionState,
        db::initialize,
        extract::JsonBody,
        transaction::{
            RecurringFrequency,
            create_endpoint::{CreateTransactionRequest, create_transaction_endpoint},
        },
        transaction_type::TransactionType,
    };

    fn get_test_state() -> TransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        TransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn valid_request() -> CreateTransactionRequest {
        CreateTransactionRequest {
            transaction_type: Some(TransactionType::Expense),
            category: Some("expense-food".to_owned()),
            amount: Some("20.00".parse().unwrap()),
            description: Some("Lunch".to_owned()),
            date: Some("2024-01-01".to_owned()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn responds_with_created_on_success() {
        let state = get_test_state();

        let response = create_transaction_endpoint(State(state), JsonBody(valid_request()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn responds_with_bad_request_when_fields_missing() {
        let state = get_test_state();
        let request = CreateTransactionRequest {
            description: Some("missing everything else".to_owned()),
            ..Default::default()
        };

        let response = create_transaction_endpoint(State(state), JsonBody(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validate_names_the_missing_fields() {
        let request = CreateTransactionRequest {
            description: Some("missing everything else".to_owned()),
            ..Default::default()
        };

        let result = request.validate();

        assert_eq!(
            result.map(|_| ()),
            Err(Error::MissingRequiredFields(
                "type, category, amount, date".to_owned()
            ))
        );
    }

    #[test]
    fn validate_treats_empty_strings_as_missing() {
        let mut request = valid_request();
        request.category = Some(String::new());

        let result = request.validate();

        assert_eq!(
            result.map(|_| ()),
            Err(Error::MissingRequiredFields("category".to_owned()))
        );
    }

    #[test]
    fn validate_keeps_recurring_fields() {
        let mut request = valid_request();
        request.recurring = true;
        request.frequency = Some(RecurringFrequency::Monthly);

        let new_transaction = request.validate().unwrap();

        assert!(new_transaction.recurring);
        assert_eq!(
            new_transaction.frequency,
            Some(RecurringFrequency::Monthly)
        );
    }
}
