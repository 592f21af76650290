//! Transactions are the core data of the application: every income, expense,
//! asset and liability entry is a transaction tied to a category.
//!
//! This module defines the transaction types, their database gateway, an
//! in-memory filter and sort engine, and the route handlers for the
//! transaction endpoints.

pub mod core;
mod create_endpoint;
mod delete_endpoint;
mod get_endpoint;
mod import;
mod list_endpoint;
pub mod query;
mod update_endpoint;

pub use core::{
    NewTransaction, RecurringFrequency, Transaction, UpdateTransaction, count_transactions,
    create_transaction, create_transaction_table, delete_transaction, get_transaction,
    list_transactions, map_transaction_row, parse_timestamp, update_transaction,
};
pub use create_endpoint::{CreateTransactionRequest, create_transaction_endpoint};
pub use delete_endpoint::{DeleteResponse, delete_transaction_endpoint};
pub use get_endpoint::get_transaction_endpoint;
pub use import::{
    ImportOutcome, ImportRecord, ImportRequest, ImportResponse, SkipReason, import_transactions,
    import_transactions_endpoint,
};
pub use list_endpoint::list_transactions_endpoint;
pub use query::{SortBy, SortOrder, TransactionFilter, filter_transactions, sort_transactions};
pub use update_endpoint::update_transaction_endpoint;
