//! Defines the endpoint for listing all transactions.

use axum::{Json, extract::State, response::IntoResponse};

use crate::{app_state::TransactionState, transaction::core::list_transactions};

/// A route handler for listing all transactions, ordered by date with the
/// most recent first.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> impl IntoResponse {
    let connection = state.db_connection.lock().unwrap();

    match list_transactions(&connection) {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_response(),
    }
}
