//! Application router configuration for the JSON API.

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{
    AppState, Error,
    category::get_categories_endpoint,
    endpoints,
    summary::get_summary_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
        import_transactions_endpoint, list_transactions_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::IMPORT_TRANSACTIONS,
            post(import_transactions_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(endpoints::CATEGORIES, get(get_categories_endpoint))
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .fallback(get_unknown_route)
        .with_state(state)
}

/// Unknown routes respond with a JSON error body rather than an empty 404.
async fn get_unknown_route() -> Response {
    Error::NotFound.into_response()
}
