//! HTTP client abstraction for algod and indexer requests.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use crate::domain::{ChainError, Endpoint};

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Upper bound for a single request when the caller sets no deadline.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(crate::constants::CONNECT_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper shared by the node and indexer clients.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    endpoint: Endpoint,
    base_url: String,
    token: String,
}

impl HttpClient {
    /// Builds a client for one endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::ClientInit`] if the TLS backend or connection
    /// pool cannot be set up.
    pub fn new(
        endpoint: Endpoint,
        base_url: impl Into<String>,
        token: impl Into<String>,
        config: &HttpConfig,
    ) -> Result<Self, ChainError> {
        let inner = Client::builder()
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChainError::ClientInit {
                endpoint,
                message: e.to_string(),
            })?;

        Ok(Self {
            inner,
            endpoint,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request with standard headers and the API token.
    ///
    /// The token header is omitted when the token is empty.
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.inner.get(url).header("accept", "application/json");
        if !self.token.is_empty() {
            request = request.header(self.endpoint.token_header(), &self.token);
        }
        request
    }

    /// Sends a GET request and parses the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Request`] on transport failure,
    /// [`ChainError::Http`] on a non-success status and [`ChainError::Parse`]
    /// on a body that is not JSON.
    pub async fn get_json(&self, path: &str) -> Result<Value, ChainError> {
        self.query_json(path, &[]).await
    }

    /// Like [`Self::get_json`] with URL-encoded query parameters.
    ///
    /// # Errors
    ///
    /// See [`Self::get_json`].
    pub async fn query_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ChainError> {
        debug!(endpoint = %self.endpoint, path, ?query, "GET");

        let response = self
            .get(path)
            .query(query)
            .send()
            .await
            .map_err(|source| ChainError::Request {
                endpoint: self.endpoint,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChainError::Http {
                endpoint: self.endpoint,
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ChainError::parse(format!("{} response: {e}", self.endpoint)))
    }

    /// Like [`Self::get_json`] but turns a 404 into [`ChainError::NotFound`].
    ///
    /// # Errors
    ///
    /// See [`Self::get_json`].
    pub async fn lookup_json(
        &self,
        path: &str,
        entity: &'static str,
        id: &str,
    ) -> Result<Value, ChainError> {
        match self.get_json(path).await {
            Err(ChainError::Http { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(ChainError::not_found(entity, id))
            }
            other => other,
        }
    }
}

// ============================================================================
// Deadlines
// ============================================================================

/// Runs a request future against a shared deadline.
///
/// # Errors
///
/// Returns [`ChainError::Timeout`] when the deadline passes first, otherwise
/// whatever the future returns.
pub async fn within<T, F>(
    deadline: Instant,
    endpoint: Endpoint,
    budget: Duration,
    fut: F,
) -> Result<T, ChainError>
where
    F: Future<Output = Result<T, ChainError>>,
{
    tokio::time::timeout_at(deadline, fut)
        .await
        .map_err(|_| ChainError::Timeout {
            endpoint,
            secs: budget.as_secs(),
        })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, token: &str) -> HttpClient {
        HttpClient::new(Endpoint::Algod, server.uri(), token, &HttpConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_get_json_sends_token_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/status"))
            .and(header("X-Algo-API-Token", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"last-round": 7})))
            .mount(&server)
            .await;

        let value = client(&server, "secret").get_json("/v2/status").await.unwrap();
        assert_eq!(value["last-round"], 7);
    }

    #[tokio::test]
    async fn test_get_json_maps_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad token\n"))
            .mount(&server)
            .await;

        let err = client(&server, "").get_json("/v2/status").await.unwrap_err();
        match err {
            ChainError::Http {
                endpoint,
                status,
                body,
            } => {
                assert_eq!(endpoint, Endpoint::Algod);
                assert_eq!(status, 401);
                assert_eq!(body, "bad token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_query_json_encodes_values() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/applications"))
            .and(query_param("creator", "A&B=C"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let result = client(&server, "")
            .query_json("/v2/applications", &[("creator", "A&B=C")])
            .await;
        assert!(result.is_ok(), "{result:?}");
    }

    #[tokio::test]
    async fn test_lookup_json_maps_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server, "")
            .lookup_json("/v2/accounts/X", "account", "X")
            .await
            .unwrap_err();
        assert!(matches!(err, ChainError::NotFound { entity: "account", .. }));
    }

    #[tokio::test]
    async fn test_within_times_out() {
        let deadline = Instant::now() + Duration::from_millis(10);
        let result: Result<(), ChainError> = within(
            deadline,
            Endpoint::Indexer,
            Duration::from_secs(10),
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            },
        )
        .await;
        assert!(matches!(
            result,
            Err(ChainError::Timeout {
                endpoint: Endpoint::Indexer,
                secs: 10
            })
        ));
    }
}
