//! The JSON export file format.
//!
//! An export is a snapshot of the session's transactions and categories
//! wrapped with the time it was taken. The same format is accepted back on
//! import, but only the transactions are read; categories travel along for
//! reference and are ignored by the importer since the server owns the
//! category set.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{category::Category, client::ClientError, transaction::Transaction};

/// A snapshot of the session's data for download or transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    /// When the snapshot was taken.
    #[serde(with = "time::serde::rfc3339")]
    pub exported_at: OffsetDateTime,
    /// Every transaction in the session at export time.
    pub transactions: Vec<Transaction>,
    /// Every category in the session at export time.
    pub categories: Vec<Category>,
}

/// Parse the text of an export file.
///
/// # Errors
/// Returns a [ClientError::MalformedExport] if the text is not valid export
/// JSON, or a [ClientError::EmptyExport] if it parses but holds no
/// transactions. Both are detected before anything is sent to the server.
pub fn parse_export(text: &str) -> Result<ExportFile, ClientError> {
    let export: ExportFile =
        serde_json::from_str(text).map_err(|_| ClientError::MalformedExport)?;

    if export.transactions.is_empty() {
        return Err(ClientError::EmptyExport);
    }

    Ok(export)
}

#[cfg(test)]
mod export_tests {
    use time::macros::datetime;

    use crate::{
        client::{ClientError, export::parse_export},
        transaction::Transaction,
        transaction_type::TransactionType,
    };

    use super::ExportFile;

    fn sample_transaction() -> Transaction {
        let date = datetime!(2024-01-15 12:00 UTC);

        Transaction {
            id: "id-1".to_owned(),
            transaction_type: TransactionType::Expense,
            category: "expense-food".to_owned(),
            amount: "20.00".parse().unwrap(),
            description: "Lunch".to_owned(),
            date,
            recurring: false,
            frequency: None,
            tags: Vec::new(),
            created_at: date,
            updated_at: date,
        }
    }

    #[test]
    fn round_trips_through_json() {
        let export = ExportFile {
            exported_at: datetime!(2024-02-01 00:00 UTC),
            transactions: vec![sample_transaction()],
            categories: Vec::new(),
        };

        let text = serde_json::to_string(&export).unwrap();
        let parsed = parse_export(&text).unwrap();

        assert_eq!(parsed, export);
    }

    #[test]
    fn rejects_text_that_is_not_an_export() {
        let result = parse_export("{\"hello\": \"world\"}");

        assert!(matches!(result, Err(ClientError::MalformedExport)));
    }

    #[test]
    fn rejects_export_with_no_transactions() {
        let export = ExportFile {
            exported_at: datetime!(2024-02-01 00:00 UTC),
            transactions: Vec::new(),
            categories: Vec::new(),
        };
        let text = serde_json::to_string(&export).unwrap();

        let result = parse_export(&text);

        assert!(matches!(result, Err(ClientError::EmptyExport)));
    }
}
