//! Defines the endpoint for getting a single transaction by its ID.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{app_state::TransactionState, transaction::core::get_transaction};

/// A route handler for getting a transaction by its ID.
///
/// This function will return the status code 404 if the requested resource
/// does not exist (e.g., not created yet).
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
) -> impl IntoResponse {
    let connection = state.db_connection.lock().unwrap();

    match get_transaction(&transaction_id, &connection) {
        Ok(transaction) => Json(transaction).into_response(),
        Err(error) => error.into_response(),
    }
}
