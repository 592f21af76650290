//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::{Error, app_state::TransactionState, transaction::core::delete_transaction};

/// The response body confirming a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always true; a failed delete responds with an error body instead.
    pub success: bool,
}

/// A route handler for deleting a transaction by its ID.
///
/// Responds with `{"success": true}` when the transaction was removed and
/// 404 when no transaction with the given ID exists.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
) -> impl IntoResponse {
    let connection = state.db_connection.lock().unwrap();

    match delete_transaction(&transaction_id, &connection) {
        Ok(0) => Error::DeleteMissingTransaction.into_response(),
        Ok(_) => Json(DeleteResponse { success: true }).into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_response()
        }
    }
}
