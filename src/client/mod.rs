//! A client-side session over the JSON API.
//!
//! The server owns the data; this module owns one session's view of it: an
//! HTTP client, an in-memory store that caches and patches the fetched
//! state, and the JSON export file format.

mod api;
mod export;
mod store;

pub use api::{ClientError, FinanceApi, HttpApi};
pub use export::{ExportFile, parse_export};
pub use store::FinanceStore;
