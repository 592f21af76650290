//! Defines the endpoint for partially updating a transaction.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    app_state::TransactionState,
    extract::JsonBody,
    transaction::{UpdateTransaction, core::update_transaction},
};

/// A route handler for applying a partial update to a transaction, responds
/// with the updated transaction on success.
///
/// Only fields present and non-null in the request body are applied; omitted
/// fields retain their prior value.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn update_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
    JsonBody(update): JsonBody<UpdateTransaction>,
) -> impl IntoResponse {
    let connection = state.db_connection.lock().unwrap();

    match update_transaction(&transaction_id, update, &connection) {
        Ok(transaction) => Json(transaction).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rusqlite::Connection;
    use time::macros::datetime;

    use crate::{
        app_state::TransactionState,
        db::initialize,
        extract::JsonBody,
        transaction::{
            NewTransaction, Transaction, UpdateTransaction, core::create_transaction,
            update_transaction_endpoint,
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

    #[tokio::test]
    async fn applies_partial_update() {
        let state = get_test_state();
        let created = {
            let connection = state.db_connection.lock().unwrap();
            create_transaction(
                NewTransaction::new(
                    TransactionType::Expense,
                    "expense-food",
                    "20.00".parse().unwrap(),
                    "Lunch",
                    datetime!(2024-01-15 12:00 UTC),
                ),
                &connection,
            )
            .unwrap()
        };
        let update = UpdateTransaction {
            description: Some("Team lunch".to_owned()),
            ..Default::default()
        };

        let response =
            update_transaction_endpoint(State(state), Path(created.id.clone()), JsonBody(update))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let updated: Transaction = serde_json::from_slice(&body).unwrap();
        assert_eq!(updated.description, "Team lunch");
        assert_eq!(updated.amount, created.amount);
        assert_eq!(updated.category, created.category);
    }

    #[tokio::test]
    async fn returns_not_found_for_missing_id() {
        let state = get_test_state();
        let update = UpdateTransaction {
            description: Some("Team lunch".to_owned()),
            ..Default::default()
        };

        let response = update_transaction_endpoint(
            State(state),
            Path("no-such-id".to_owned()),
            JsonBody(update),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
