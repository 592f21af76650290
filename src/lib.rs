//! Fintrack is a single-tenant personal finance tracker.
//!
//! This library provides a JSON REST API over a SQLite store for recording
//! transactions (income, expenses, assets, liabilities), listing the seeded
//! category set, and computing financial summaries, plus an in-memory client
//! session store that consumes that API and owns the JSON export/import
//! format.

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
pub mod category;
pub mod client;
mod db;
pub mod endpoints;
mod extract;
mod logging;
mod routing;
pub mod summary;
pub mod transaction;
mod transaction_type;

pub use app_state::{AppState, CategoryState, SummaryState, TransactionState};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction_type::TransactionType;

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
    /// One or more required fields were absent or empty in a create request.
    ///
    /// The error string lists the offending field names.
    #[error("missing required fields: {0}")]
    MissingRequiredFields(String),

    /// The request body could not be parsed as JSON of the expected shape.
    #[error("{0}")]
    InvalidJsonBody(String),

    /// A string could not be parsed as one of the four transaction types.
    #[error("\"{0}\" is not a valid transaction type")]
    InvalidTransactionType(String),

    /// A string could not be parsed as a recurring frequency.
    #[error("\"{0}\" is not a valid recurring frequency")]
    InvalidFrequency(String),

    /// A string could not be parsed as an RFC 3339 timestamp or a calendar
    /// date.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// A negative amount was used to create or update a transaction.
    ///
    /// Amounts record magnitudes; the transaction type determines which
    /// summary bucket the amount contributes to.
    #[error("the transaction amount cannot be negative")]
    NegativeAmount,

    /// An empty string was used as a transaction description.
    #[error("the transaction description cannot be empty")]
    EmptyDescription,

    /// The category ID used to create or update a transaction did not match
    /// any category in the database.
    #[error("the category \"{0}\" does not exist")]
    UnknownCategory(String),

    /// The referenced category exists but belongs to a different transaction
    /// type than the transaction it was assigned to.
    #[error(
        "the category \"{category}\" has type {category_type}, \
        which does not match the transaction type {transaction_type}"
    )]
    CategoryTypeMismatch {
        /// The ID of the referenced category.
        category: String,
        /// The type the referenced category belongs to.
        category_type: TransactionType,
        /// The type of the transaction being created or updated.
        transaction_type: TransactionType,
    },

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::NotFound
            | Error::UpdateMissingTransaction
            | Error::DeleteMissingTransaction => StatusCode::NOT_FOUND,
            Error::MissingRequiredFields(_)
            | Error::InvalidJsonBody(_)
            | Error::InvalidTransactionType(_)
            | Error::InvalidFrequency(_)
            | Error::InvalidDate(_)
            | Error::NegativeAmount
            | Error::EmptyDescription
            | Error::UnknownCategory(_)
            | Error::CategoryTypeMismatch { .. } => StatusCode::BAD_REQUEST,
            // Errors that are not handled above are not intended to be shown
            // to the client.
            Error::SqlError(_) => {
                tracing::error!("An unexpected error occurred: {}", self);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "an unexpected error occurred" })),
                )
                    .into_response();
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn not_found_maps_to_404() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_errors_map_to_400() {
        let response =
            Error::MissingRequiredFields("type, category".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn sql_errors_map_to_500() {
        let response = Error::SqlError(rusqlite::Error::InvalidQuery).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn query_returned_no_rows_becomes_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::NotFound);
    }
}
