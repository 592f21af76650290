//! Defines the endpoint for the financial summary.

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    app_state::SummaryState, summary::core::compute_summary, transaction::list_transactions,
};

/// A route handler for the headline totals across all transactions.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_summary_endpoint(State(state): State<SummaryState>) -> impl IntoResponse {
    let connection = state.db_connection.lock().unwrap();

    match list_transactions(&connection) {
        Ok(transactions) => Json(compute_summary(&transactions)).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use rusqlite::Connection;
    use time::macros::datetime;

    use crate::{
        app_state::SummaryState,
        db::initialize,
        summary::{FinancialSummary, get_summary_endpoint},
        transaction::{NewTransaction, create_transaction},
        transaction_type::TransactionType,
    };

    fn get_test_state() -> SummaryState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        SummaryState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn summarizes_stored_transactions() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            create_transaction(
                NewTransaction::new(
                    TransactionType::Income,
                    "income-salary",
                    "1000.00".parse().unwrap(),
                    "Salary",
                    datetime!(2024-01-25 09:00 UTC),
                ),
                &connection,
            )
            .unwrap();
            create_transaction(
                NewTransaction::new(
                    TransactionType::Expense,
                    "expense-food",
                    "300.00".parse().unwrap(),
                    "Groceries",
                    datetime!(2024-01-26 18:00 UTC),
                ),
                &connection,
            )
            .unwrap();
        }

        let response = get_summary_endpoint(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let summary: FinancialSummary = serde_json::from_slice(&body).unwrap();
        assert_eq!(summary.total_income, "1000".parse().unwrap());
        assert_eq!(summary.total_expenses, "300".parse().unwrap());
        assert_eq!(summary.current_balance, "700".parse().unwrap());
    }

    #[tokio::test]
    async fn empty_store_gives_zero_summary() {
        let state = get_test_state();

        let response = get_summary_endpoint(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let summary: FinancialSummary = serde_json::from_slice(&body).unwrap();
        assert_eq!(summary, FinancialSummary::default());
    }
}
