//! HTTP access to the JSON API.
//!
//! The [FinanceApi] trait is the seam between the session store and the
//! network: the store is generic over it, so tests can swap the real
//! [HttpApi] for a canned implementation.

use serde::Deserialize;

use crate::{
    category::Category,
    endpoints,
    transaction::{
        CreateTransactionRequest, DeleteResponse, ImportRecord, ImportRequest, ImportResponse,
        Transaction, UpdateTransaction,
    },
};

/// The errors that may occur while talking to the server.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response, e.g., the server is down.
    #[error("could not reach the server: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server responded with a non-success status.
    #[error("the server responded with status {status}: {message}")]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// The error message from the response body.
        message: String,
    },

    /// The provided text is not a valid export file.
    #[error("the file is not a valid export")]
    MalformedExport,

    /// The export file parsed but contains no transactions.
    #[error("the export file contains no transactions")]
    EmptyExport,
}

/// The server operations the session store depends on.
///
/// Only consumed in-crate, so the futures need no extra auto-trait bounds.
#[allow(async_fn_in_trait)]
pub trait FinanceApi {
    /// Fetch all transactions, most recent first.
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError>;

    /// Fetch all categories.
    async fn list_categories(&self) -> Result<Vec<Category>, ClientError>;

    /// Create a transaction and return the stored copy.
    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ClientError>;

    /// Apply a partial update and return the updated transaction.
    async fn update_transaction(
        &self,
        transaction_id: &str,
        update: &UpdateTransaction,
    ) -> Result<Transaction, ClientError>;

    /// Delete a transaction by its ID.
    async fn delete_transaction(&self, transaction_id: &str) -> Result<(), ClientError>;

    /// Bulk import raw records, returning the created transactions.
    async fn import_transactions(
        &self,
        records: Vec<ImportRecord>,
    ) -> Result<ImportResponse, ClientError>;
}

/// A [FinanceApi] that talks to a running server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApi {
    /// Create an API client for the server at `base_url`,
    /// e.g., `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, endpoint_path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint_path)
    }
}

/// Deserialize a success body, or turn an error response into [ClientError::Api].
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| "unknown error".to_owned());

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

impl FinanceApi for HttpApi {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        let response = self
            .http
            .get(self.url(endpoints::TRANSACTIONS))
            .send()
            .await?;

        read_json(response).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let response = self
            .http
            .get(self.url(endpoints::CATEGORIES))
            .send()
            .await?;

        read_json(response).await
    }

    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ClientError> {
        let response = self
            .http
            .post(self.url(endpoints::TRANSACTIONS))
            .json(request)
            .send()
            .await?;

        read_json(response).await
    }

    async fn update_transaction(
        &self,
        transaction_id: &str,
        update: &UpdateTransaction,
    ) -> Result<Transaction, ClientError> {
        let path = endpoints::format_endpoint(endpoints::TRANSACTION, transaction_id);
        let response = self.http.put(self.url(&path)).json(update).send().await?;

        read_json(response).await
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<(), ClientError> {
        let path = endpoints::format_endpoint(endpoints::TRANSACTION, transaction_id);
        let response = self.http.delete(self.url(&path)).send().await?;

        read_json::<DeleteResponse>(response).await.map(|_| ())
    }

    async fn import_transactions(
        &self,
        records: Vec<ImportRecord>,
    ) -> Result<ImportResponse, ClientError> {
        let response = self
            .http
            .post(self.url(endpoints::IMPORT_TRANSACTIONS))
            .json(&ImportRequest {
                transactions: records,
            })
            .send()
            .await?;

        read_json(response).await
    }
}
