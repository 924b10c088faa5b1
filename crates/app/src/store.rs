//! REST client for the managed data store.
//!
//! The store exposes one REST resource per table; rows are filtered with
//! `column=op.value` query parameters. This client only wraps transport and
//! response decoding; table semantics live in the domain repositories.

use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Configuration for connecting to the managed data store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store base address, e.g. `"https://project.example.co"`.
    pub base_url: String,

    /// Per-project API key sent with every request.
    pub api_key: String,
}

/// HTTP client for the store's table REST interface.
#[derive(Debug, Clone)]
pub struct StoreClient {
    config: StoreConfig,
    http: Client,
}

impl StoreClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Fetch rows from `table`, decoded as `T` (usually a `Vec`).
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<T, StoreError> {
        let response = self
            .http
            .get(self.table_url(table))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .query(query)
            .send()
            .await?;

        Self::decode(table, response).await
    }

    /// Insert rows into `table` and decode the returned representation.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub(crate) async fn insert<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        Self::decode(table, response).await
    }

    /// Update rows in `table` matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-success status.
    pub(crate) async fn update<B: Serialize + ?Sized>(
        &self,
        table: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<(), StoreError> {
        let response = self
            .http
            .patch(self.table_url(table))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .query(query)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::failure(table, response).await);
        }

        Ok(())
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.base_url)
    }

    async fn decode<T: DeserializeOwned>(
        table: &str,
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }

        if !response.status().is_success() {
            return Err(Self::failure(table, response).await);
        }

        Ok(response.json().await?)
    }

    async fn failure(table: &str, response: reqwest::Response) -> StoreError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        StoreError::UnexpectedResponse(format!(
            "request to {table} failed with status {status}: {text}"
        ))
    }
}

/// Errors that can occur when communicating with the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested row does not exist.
    #[error("record not found")]
    NotFound,

    /// The store returned a non-2xx response or unexpected body.
    #[error("unexpected response from store: {0}")]
    UnexpectedResponse(String),
}
