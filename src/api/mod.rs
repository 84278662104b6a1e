pub mod mock;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::debug;

/// Default bound on a single remote data request.
pub const API_TIMEOUT: Duration = Duration::from_secs(10);

/// The five live data feeds exposed by the project API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataCategory {
    NetworkStatus,
    Price,
    Staking,
    Validators,
    Governance,
}

impl DataCategory {
    pub const ALL: [DataCategory; 5] = [
        Self::NetworkStatus,
        Self::Price,
        Self::Staking,
        Self::Validators,
        Self::Governance,
    ];

    /// Sub-path under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::NetworkStatus => "status",
            Self::Price => "price",
            Self::Staking => "staking",
            Self::Validators => "validators",
            Self::Governance => "governance",
        }
    }

    /// Key used by the mock provider.
    pub fn key(self) -> &'static str {
        match self {
            Self::NetworkStatus => "network_status",
            Self::Price => "price_data",
            Self::Staking => "staking_info",
            Self::Validators => "validators",
            Self::Governance => "governance",
        }
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Decoded payload of a data request, or the reason it failed. Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum DataResult {
    Data(Map<String, Value>),
    Error(String),
}

impl DataResult {
    /// A body carrying its own `error` key is an error, whatever the status.
    pub fn from_body(body: Map<String, Value>) -> Self {
        match body.get("error") {
            Some(Value::String(reason)) => Self::Error(reason.clone()),
            Some(other) => Self::Error(other.to_string()),
            None => Self::Data(body),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Source of live project data.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, category: DataCategory) -> DataResult;
}

/// GETs `{base_url}/{path}` for each data category. One attempt, no caching.
pub struct RemoteDataClient {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl RemoteDataClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout: API_TIMEOUT,
        }
    }

    #[cfg(test)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn url(&self, category: DataCategory) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), category.path())
    }
}

#[async_trait]
impl DataSource for RemoteDataClient {
    async fn fetch(&self, category: DataCategory) -> DataResult {
        // The client (and its connection pool) lives only for this request.
        let client = match reqwest::Client::builder().timeout(self.timeout).build() {
            Ok(client) => client,
            Err(e) => return DataResult::Error(e.to_string()),
        };

        let mut req = client.get(self.url(category));
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let result = match req.send().await {
            Ok(resp) if resp.status() == StatusCode::OK => {
                match resp.json::<Map<String, Value>>().await {
                    Ok(body) => DataResult::from_body(body),
                    Err(e) => DataResult::Error(e.to_string()),
                }
            }
            Ok(resp) => DataResult::Error(format!("Status {}", resp.status().as_u16())),
            Err(e) => DataResult::Error(e.to_string()),
        };

        debug!(%category, error = result.is_error(), "remote data fetched");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = RemoteDataClient::new("https://api.example.com/", None);
        assert_eq!(client.url(DataCategory::Price), "https://api.example.com/price");
        assert_eq!(
            client.url(DataCategory::NetworkStatus),
            "https://api.example.com/status"
        );
    }

    #[test]
    fn test_body_with_error_key_is_error() {
        let body = serde_json::json!({"error": "maintenance"});
        let Value::Object(map) = body else { unreachable!() };
        assert_eq!(
            DataResult::from_body(map),
            DataResult::Error("maintenance".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = test_support::serve(200, r#"{"price_usd": 1.5, "change_24h": -3}"#).await;
        let client = RemoteDataClient::new(server.url.clone(), None);

        let DataResult::Data(map) = client.fetch(DataCategory::Price).await else {
            panic!("expected data");
        };
        assert_eq!(map["price_usd"], serde_json::json!(1.5));
        assert!(server.last_request().starts_with("GET /price "));
    }

    #[tokio::test]
    async fn test_fetch_non_200() {
        let server = test_support::serve(500, r#"{"detail": "boom"}"#).await;
        let client = RemoteDataClient::new(server.url.clone(), None);

        assert_eq!(
            client.fetch(DataCategory::Staking).await,
            DataResult::Error("Status 500".to_string())
        );
        assert_eq!(server.hits(), 1);
    }

    #[tokio::test]
    async fn test_fetch_unparseable_body() {
        let server = test_support::serve(200, "not json").await;
        let client = RemoteDataClient::new(server.url.clone(), None);
        assert!(client.fetch(DataCategory::Validators).await.is_error());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = RemoteDataClient::new(format!("http://{}", addr), None)
            .with_timeout(Duration::from_secs(2));
        assert!(client.fetch(DataCategory::Governance).await.is_error());
    }

    #[tokio::test]
    async fn test_api_key_sent_as_bearer() {
        let server = test_support::serve(200, r#"{"status": "online"}"#).await;
        let client = RemoteDataClient::new(server.url.clone(), Some("k-123".to_string()));
        client.fetch(DataCategory::NetworkStatus).await;
        assert!(server
            .last_request()
            .to_lowercase()
            .contains("authorization: bearer k-123"));
    }
}
