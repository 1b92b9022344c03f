//! Algorand Node (algod) API client.
//!
//! The primary client of a session: status and genesis queries plus account
//! and application lookups for the explore and applications screens.

use serde_json::Value;

use super::endpoint::request_base;
use super::http::{HttpClient, HttpConfig};
use crate::domain::{ApplicationDetails, ChainError, Endpoint};

/// Genesis identifiers of a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisInfo {
    /// Genesis ID, e.g. `testnet-v1.0`.
    pub id: String,
    /// Genesis hash, base64.
    pub hash: String,
}

/// Algorand Node (algod) client
#[derive(Debug, Clone)]
pub struct NodeClient {
    http: HttpClient,
}

impl NodeClient {
    /// Create a new node client for a normalized endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::ClientInit`] if the HTTP client cannot be built.
    pub fn new(endpoint: &str, token: &str, config: &HttpConfig) -> Result<Self, ChainError> {
        let http = HttpClient::new(Endpoint::Algod, request_base(endpoint), token, config)?;
        Ok(Self { http })
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Fetches `/v2/status` and returns the last round.
    ///
    /// # Errors
    ///
    /// Any transport, HTTP or parse failure.
    pub async fn status(&self) -> Result<u64, ChainError> {
        let status = self.http.get_json("/v2/status").await?;
        status["last-round"]
            .as_u64()
            .ok_or_else(|| ChainError::parse("status response without last-round"))
    }

    /// Fetches the genesis identifiers from `/v2/transactions/params`.
    ///
    /// # Errors
    ///
    /// Any transport, HTTP or parse failure.
    pub async fn genesis(&self) -> Result<GenesisInfo, ChainError> {
        let params = self.http.get_json("/v2/transactions/params").await?;
        let field = |key: &str| {
            params[key]
                .as_str()
                .map(String::from)
                .ok_or_else(|| ChainError::parse(format!("transaction params without {key}")))
        };
        Ok(GenesisInfo {
            id: field("genesis-id")?,
            hash: field("genesis-hash")?,
        })
    }

    /// Looks up an account by address.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotFound`] for an unknown address, or any request failure.
    pub async fn account(&self, address: &str) -> Result<Value, ChainError> {
        self.http
            .lookup_json(&format!("/v2/accounts/{address}"), "account", address)
            .await
    }

    /// Looks up an application by id, returning the raw response.
    ///
    /// # Errors
    ///
    /// [`ChainError::NotFound`] for an unknown id, or any request failure.
    pub async fn application(&self, app_id: u64) -> Result<Value, ChainError> {
        let id = app_id.to_string();
        self.http
            .lookup_json(&format!("/v2/applications/{id}"), "application", &id)
            .await
    }

    /// Looks up an application and summarizes it.
    ///
    /// # Errors
    ///
    /// See [`Self::application`].
    pub async fn application_details(&self, app_id: u64) -> Result<ApplicationDetails, ChainError> {
        let app = self.application(app_id).await?;
        ApplicationDetails::from_json(&app)
    }
}
