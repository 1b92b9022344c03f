//! Algorand Indexer API client.
//!
//! The optional secondary client: a reachability probe, application search
//! and transaction lookup.

use serde_json::Value;

use super::endpoint::request_base;
use super::http::{HttpClient, HttpConfig};
use crate::domain::{ApplicationSummary, ChainError, Endpoint};

/// Algorand Indexer client
#[derive(Debug, Clone)]
pub struct IndexerClient {
    http: HttpClient,
}

impl IndexerClient {
    /// Create a new indexer client for a normalized endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::ClientInit`] if the HTTP client cannot be built.
    pub fn new(endpoint: &str, token: &str, config: &HttpConfig) -> Result<Self, ChainError> {
        let http = HttpClient::new(Endpoint::Indexer, request_base(endpoint), token, config)?;
        Ok(Self { http })
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Lightweight reachability check: a one-row application search.
    ///
    /// # Errors
    ///
    /// Any transport, HTTP or parse failure.
    pub async fn probe(&self) -> Result<(), ChainError> {
        self.http
            .query_json("/v2/applications", &[("limit", "1")])
            .await
            .map(|_| ())
    }

    /// Searches applications, optionally filtered by creator.
    ///
    /// # Errors
    ///
    /// Any transport, HTTP or parse failure.
    pub async fn search_applications(
        &self,
        creator: Option<&str>,
        limit: usize,
    ) -> Result<Vec<ApplicationSummary>, ChainError> {
        let limit_param = limit.to_string();
        let mut query = vec![("limit", limit_param.as_str())];
        if let Some(creator) = creator.map(str::trim).filter(|c| !c.is_empty()) {
            query.push(("creator", creator));
        }

        let response = self.http.query_json("/v2/applications", &query).await?;
        response["applications"]
            .as_array()
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .take(limit)
            .map(ApplicationSummary::from_json)
            .collect()
    }

    /// Looks up a transaction by id.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotFound`] for an unknown id, or any request failure.
    pub async fn transaction(&self, txid: &str) -> Result<Value, ChainError> {
        self.http
            .lookup_json(&format!("/v2/transactions/{txid}"), "transaction", txid)
            .await
    }
}
