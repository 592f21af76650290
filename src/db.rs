//! Database initialization for the application.

use rusqlite::Connection;

use crate::{
    Error,
    category::{create_category_table, default_categories, upsert_category},
    transaction::create_transaction_table,
};

/// Create the tables for the domain models and seed the default categories.
///
/// Safe to call on every startup: tables are created with `IF NOT EXISTS`
/// and the seed upserts by category ID, so existing data is left alone.
///
/// # Errors
/// Returns an error if a table cannot be created or the seed fails.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_category_table(connection)?;
    create_transaction_table(connection)?;

    for category in default_categories() {
        upsert_category(&category, connection)?;
    }

    Ok(())
}
