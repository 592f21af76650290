//! The in-memory session store that consumes the JSON API.
//!
//! The store holds one session's view of the data: the transaction list,
//! the category set and a summary derived from them. Mutations go through
//! the server first and patch the local state only with what the server
//! returned, so the cache never drifts ahead of the store of record.

use std::collections::HashMap;

use time::OffsetDateTime;

use crate::{
    category::Category,
    client::{
        ClientError, FinanceApi,
        export::{ExportFile, parse_export},
    },
    summary::{
        CategoryExpense, FinancialSummary, MonthlyTrendPoint, compute_summary,
        expenses_by_category, monthly_trend,
    },
    transaction::{
        CreateTransactionRequest, ImportRecord, SortBy, SortOrder, Transaction, TransactionFilter,
        UpdateTransaction, filter_transactions, sort_transactions,
    },
};

/// One session's cached view of the data behind a [FinanceApi].
#[derive(Debug)]
pub struct FinanceStore<A> {
    api: A,
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    summary: FinancialSummary,
    error: Option<String>,
    loading: bool,
}

impl<A: FinanceApi> FinanceStore<A> {
    /// Create an empty store backed by `api`. Call [FinanceStore::load] to
    /// populate it.
    pub fn new(api: A) -> Self {
        Self {
            api,
            transactions: Vec::new(),
            categories: Vec::new(),
            summary: FinancialSummary::default(),
            error: None,
            loading: false,
        }
    }

    /// Fetch the transactions and categories concurrently and replace the
    /// cached state with the result.
    ///
    /// If either fetch fails, the whole cache is cleared and the error is
    /// recorded; a partially loaded session is never left behind.
    pub async fn load(&mut self) {
        self.loading = true;

        match tokio::try_join!(self.api.list_transactions(), self.api.list_categories()) {
            Ok((transactions, categories)) => {
                self.transactions = transactions;
                self.categories = categories;
                self.error = None;
            }
            Err(error) => {
                self.transactions = Vec::new();
                self.categories = Vec::new();
                self.error = Some(error.to_string());
            }
        }

        self.recompute_summary();
        self.loading = false;
    }

    /// Create a transaction on the server and prepend it to the cached list.
    ///
    /// # Errors
    /// Returns the error from the server; the cached state is untouched when
    /// that happens.
    pub async fn add_transaction(
        &mut self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ClientError> {
        let transaction = self.api.create_transaction(request).await?;

        self.transactions.insert(0, transaction.clone());
        self.recompute_summary();

        Ok(transaction)
    }

    /// Update a transaction on the server and replace the cached copy.
    ///
    /// # Errors
    /// Returns the error from the server; the cached state is untouched when
    /// that happens.
    pub async fn update_transaction(
        &mut self,
        transaction_id: &str,
        update: &UpdateTransaction,
    ) -> Result<Transaction, ClientError> {
        let updated = self.api.update_transaction(transaction_id, update).await?;

        if let Some(cached) = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == transaction_id)
        {
            *cached = updated.clone();
        }
        self.recompute_summary();

        Ok(updated)
    }

    /// Delete a transaction on the server and drop it from the cached list.
    ///
    /// # Errors
    /// Returns the error from the server; the cached state is untouched when
    /// that happens.
    pub async fn delete_transaction(&mut self, transaction_id: &str) -> Result<(), ClientError> {
        self.api.delete_transaction(transaction_id).await?;

        self.transactions
            .retain(|transaction| transaction.id != transaction_id);
        self.recompute_summary();

        Ok(())
    }

    /// Send the transactions of an export file to the server and prepend
    /// whatever it accepted.
    ///
    /// Returns how many records the server actually created.
    ///
    /// # Errors
    /// Returns a [ClientError::MalformedExport] or [ClientError::EmptyExport]
    /// without contacting the server when `text` is not a usable export, or
    /// the server's error if the upload fails.
    pub async fn import(&mut self, text: &str) -> Result<usize, ClientError> {
        let export = parse_export(text)?;
        let records: Vec<ImportRecord> =
            export.transactions.iter().map(ImportRecord::from).collect();

        let response = self.api.import_transactions(records).await?;

        for transaction in response.transactions.into_iter().rev() {
            self.transactions.insert(0, transaction);
        }
        self.recompute_summary();

        Ok(response.imported)
    }

    /// Snapshot the cached transactions and categories as an export file
    /// stamped with the current time.
    pub fn export(&self) -> ExportFile {
        ExportFile {
            exported_at: OffsetDateTime::now_utc(),
            transactions: self.transactions.clone(),
            categories: self.categories.clone(),
        }
    }

    /// The cached transactions, most recent first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The cached categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The summary over the cached transactions.
    pub fn summary(&self) -> &FinancialSummary {
        &self.summary
    }

    /// The error recorded by the last failed [FinanceStore::load], if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a [FinanceStore::load] is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The cached transactions narrowed by `filter` and ordered by the given
    /// sort key.
    pub fn filtered_transactions(
        &self,
        filter: &TransactionFilter,
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> Vec<Transaction> {
        let filtered = filter_transactions(&self.transactions, filter);

        sort_transactions(&filtered, sort_by, sort_order)
    }

    /// The cached expense transactions grouped and totalled per category.
    pub fn expenses_by_category(&self) -> Vec<CategoryExpense> {
        let category_names: HashMap<String, String> = self
            .categories
            .iter()
            .map(|category| (category.id.clone(), category.name.clone()))
            .collect();

        expenses_by_category(&self.transactions, &category_names)
    }

    /// Income and expense totals per month for the `months_count` months
    /// ending at `now`, oldest first.
    pub fn monthly_trend(&self, months_count: u32, now: OffsetDateTime) -> Vec<MonthlyTrendPoint> {
        monthly_trend(&self.transactions, months_count, now)
    }

    fn recompute_summary(&mut self) {
        self.summary = compute_summary(&self.transactions);
    }
}
