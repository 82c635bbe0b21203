//! CoinGecko REST API Client
//!
//! Fetches the top coins by market cap from the `/coins/markets` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::types::{Coin, API_KEY_HEADER, DEFAULT_BASE_URL};

/// Anything that can produce a fresh coin list
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Fetch the current coin list
    async fn fetch_coins(&self) -> Result<Vec<Coin>, MarketError>;
}

/// Configuration for the market-data client
#[derive(Debug, Clone)]
pub struct MarketClientConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Quote currency
    pub vs_currency: String,
    /// Number of coins per request
    pub per_page: u32,
    /// Optional demo API key
    pub api_key: Option<String>,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for MarketClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            vs_currency: "usd".to_string(),
            per_page: 10,
            api_key: None,
            request_timeout_ms: 10_000,
        }
    }
}

/// CoinGecko market-data client
pub struct CoinGeckoClient {
    client: Client,
    config: MarketClientConfig,
}

impl CoinGeckoClient {
    /// Create a new client with the given configuration
    pub fn new(config: MarketClientConfig) -> Result<Self, MarketError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &MarketClientConfig {
        &self.config
    }

    /// Full markets endpoint URL
    pub fn markets_url(&self) -> String {
        format!("{}/coins/markets", self.config.base_url.trim_end_matches('/'))
    }

    fn query_params(&self) -> [(&'static str, String); 5] {
        [
            ("vs_currency", self.config.vs_currency.clone()),
            ("order", "market_cap_desc".to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("page", "1".to_string()),
            ("sparkline", "false".to_string()),
        ]
    }

    /// Fetch the top coins by market cap
    pub async fn fetch_markets(&self) -> Result<Vec<Coin>, MarketError> {
        let mut request = self
            .client
            .get(self.markets_url())
            .query(&self.query_params())
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(MarketError::from_request)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Market data request rejected");
            return Err(MarketError::Status {
                status: status.as_u16(),
            });
        }

        let coins: Vec<Coin> = response
            .json()
            .await
            .map_err(|e| MarketError::Decode(e.to_string()))?;

        tracing::debug!(count = coins.len(), "Fetched market data");
        Ok(coins)
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    fn name(&self) -> &str {
        "coingecko"
    }

    async fn fetch_coins(&self) -> Result<Vec<Coin>, MarketError> {
        self.fetch_markets().await
    }
}

/// Errors from fetching market data
///
/// All variants mean the same thing to the user: the fetch failed and the
/// next scheduled poll will try again.
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Failed to fetch crypto data: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to fetch crypto data: request timed out")]
    Timeout,

    #[error("Failed to fetch crypto data: server returned {status}")]
    Status { status: u16 },

    #[error("Failed to fetch crypto data: {0}")]
    Decode(String),
}

impl MarketError {
    fn from_request(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            MarketError::Timeout
        } else {
            MarketError::Request(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::get, Json, Router};
    use std::collections::HashMap;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: String, api_key: Option<&str>) -> CoinGeckoClient {
        CoinGeckoClient::new(MarketClientConfig {
            base_url,
            api_key: api_key.map(str::to_string),
            ..Default::default()
        })
        .unwrap()
    }

    async fn markets(
        axum::extract::Query(params): axum::extract::Query<HashMap<String, String>>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, StatusCode> {
        if params.get("vs_currency").map(String::as_str) != Some("usd")
            || params.get("order").map(String::as_str) != Some("market_cap_desc")
            || params.get("per_page").map(String::as_str) != Some("10")
        {
            return Err(StatusCode::BAD_REQUEST);
        }

        let key = headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("none")
            .to_string();

        Ok(Json(serde_json::json!([
            {
                "id": "bitcoin",
                "symbol": "btc",
                "name": key,
                "image": "https://example.com/btc.png",
                "current_price": 67000.0,
                "market_cap_rank": 1,
                "price_change_percentage_24h": 1.2
            }
        ])))
    }

    #[test]
    fn test_default_config() {
        let config = MarketClientConfig::default();
        assert_eq!(config.base_url, "https://api.coingecko.com/api/v3");
        assert_eq!(config.vs_currency, "usd");
        assert_eq!(config.per_page, 10);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_markets_url_trims_slash() {
        let client = client_for("http://localhost:9000/api/v3/".to_string(), None);
        assert_eq!(client.markets_url(), "http://localhost:9000/api/v3/coins/markets");
    }

    #[tokio::test]
    async fn test_fetch_without_key() {
        let base = spawn_server(Router::new().route("/coins/markets", get(markets))).await;
        let coins = client_for(base, None).fetch_markets().await.unwrap();

        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].id, "bitcoin");
        // The fake server echoes the key header into the name
        assert_eq!(coins[0].name, "none");
    }

    #[tokio::test]
    async fn test_fetch_sends_api_key() {
        let base = spawn_server(Router::new().route("/coins/markets", get(markets))).await;
        let coins = client_for(base, Some("demo-key")).fetch_coins().await.unwrap();

        assert_eq!(coins[0].name, "demo-key");
    }

    #[tokio::test]
    async fn test_non_success_is_fetch_error() {
        let router = Router::new().route(
            "/coins/markets",
            get(|| async { StatusCode::TOO_MANY_REQUESTS }),
        );
        let base = spawn_server(router).await;

        let err = client_for(base, None).fetch_markets().await.unwrap_err();
        assert!(matches!(err, MarketError::Status { status: 429 }));
        assert!(err.to_string().starts_with("Failed to fetch crypto data"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_fetch_error() {
        let router = Router::new().route("/coins/markets", get(|| async { "not json" }));
        let base = spawn_server(router).await;

        let err = client_for(base, None).fetch_markets().await.unwrap_err();
        assert!(matches!(err, MarketError::Decode(_)));
    }
}
