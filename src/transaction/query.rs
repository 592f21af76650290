//! Pure filtering and sorting over in-memory transaction lists.
//!
//! Both operations copy their input: the provided collection is never
//! mutated. Filtering composes before sorting.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{transaction::Transaction, transaction_type::TransactionType};

/// The predicates used to narrow a transaction list.
///
/// Each filter is independent and optional; `None` is a no-op. The
/// conjunction of all supplied filters is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Keep only transactions of this type.
    pub transaction_type: Option<TransactionType>,
    /// Keep only transactions in this category.
    pub category: Option<String>,
    /// Keep only transactions dated at or after this instant.
    pub date_from: Option<OffsetDateTime>,
    /// Keep only transactions dated at or before this instant.
    pub date_to: Option<OffsetDateTime>,
    /// Keep only transactions whose description or tags contain this text,
    /// case-insensitively.
    pub search: Option<String>,
}

/// The field to sort a transaction list by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Sort by the transaction date.
    Date,
    /// Sort by the transaction amount.
    Amount,
}

/// The direction to sort a transaction list in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest or oldest first.
    Ascending,
    /// Largest or newest first.
    Descending,
}

/// Keep the transactions that match every supplied filter.
///
/// Date bounds are inclusive on both ends and compared as full timestamps.
/// The search text matches case-insensitively against the description or any
/// tag as a plain substring. Relative order is preserved.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| matches_filter(transaction, filter))
        .cloned()
        .collect()
}

/// Return a sorted copy of the transactions.
///
/// The sort is stable: transactions that compare equal on the sorted field
/// retain their relative input order.
pub fn sort_transactions(
    transactions: &[Transaction],
    sort_by: SortBy,
    order: SortOrder,
) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();

    sorted.sort_by(|a, b| {
        let comparison = match sort_by {
            SortBy::Date => a.date.cmp(&b.date),
            SortBy::Amount => a.amount.cmp(&b.amount),
        };

        match order {
            SortOrder::Ascending => comparison,
            SortOrder::Descending => comparison.reverse(),
        }
    });

    sorted
}

fn matches_filter(transaction: &Transaction, filter: &TransactionFilter) -> bool {
    if let Some(transaction_type) = filter.transaction_type
        && transaction.transaction_type != transaction_type
    {
        return false;
    }

    if let Some(category) = &filter.category
        && &transaction.category != category
    {
        return false;
    }

    if let Some(date_from) = filter.date_from
        && transaction.date < date_from
    {
        return false;
    }

    if let Some(date_to) = filter.date_to
        && transaction.date > date_to
    {
        return false;
    }

    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        let matches_description = transaction.description.to_lowercase().contains(&needle);
        let matches_tags = transaction
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle));

        if !matches_description && !matches_tags {
            return false;
        }
    }

    true
}

// ============================================================================
// TESTS
// ============================================================================
