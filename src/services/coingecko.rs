//! CoinGecko API Client
//!
//! This module provides a client for the CoinGecko public API
//! (https://api.coingecko.com/api/v3). Each method issues exactly one GET
//! request and classifies the outcome: transport failures, non-success
//! statuses and undecodable bodies each map to their own [`ApiError`]
//! variant, and a success returns the decoded JSON tree untouched.
//!
//! Endpoints covered:
//! - `/ping` - API availability check
//! - `/simple/price` - current USD price and market cap per coin id
//! - `/search/trending` - trending coins
//! - `/exchanges` - paginated exchange listing
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::services::{ClientConfig, CoinGeckoClient};
//!
//! let client = CoinGeckoClient::new(ClientConfig::default())?;
//! let prices = client.get_price(&["bitcoin".to_string()]).await?;
//! ```

use crate::constants::{COINGECKO_BASE, DEFAULT_TIMEOUT_SECS};
use crate::error::{ApiError, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Client configuration.
///
/// Defaults to the production CoinGecko base URL and a 5 second timeout.
/// The CLI never overrides `base_url`; tests point it at a local server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash
    pub base_url: String,
    /// Timeout for a single request, connect time included
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO_BASE.to_string(),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Client for the CoinGecko public API.
///
/// Stateless across calls; each method performs one GET and returns one
/// outcome. No retries, no caching.
pub struct CoinGeckoClient {
    base_url: String,
    client: reqwest::Client,
}

impl CoinGeckoClient {
    /// Create a new client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    /// Ping the `/ping` endpoint.
    pub async fn ping(&self) -> Result<Value> {
        self.request("ping", &[]).await
    }

    /// Fetch the current USD price and market cap for one or more coin ids.
    ///
    /// Fails with [`ApiError::Validation`] before any request is sent if
    /// `coin_ids` is empty.
    pub async fn get_price(&self, coin_ids: &[String]) -> Result<Value> {
        if coin_ids.is_empty() {
            return Err(ApiError::Validation(
                "at least one coin id is required".to_string(),
            ));
        }

        let ids = coin_ids.join(",");
        self.request(
            "simple/price",
            &[
                ("ids", ids),
                ("vs_currencies", "usd".to_string()),
                ("include_market_cap", "true".to_string()),
            ],
        )
        .await
    }

    /// Fetch the coins currently trending on CoinGecko.
    pub async fn get_trending_coins(&self) -> Result<Value> {
        self.request("search/trending", &[]).await
    }

    /// Fetch one page of the exchange listing.
    ///
    /// Both `per_page` and `page` are 1-indexed; a zero in either position
    /// fails with [`ApiError::Validation`] before any request is sent.
    pub async fn get_exchanges(&self, per_page: u32, page: u32) -> Result<Value> {
        if per_page < 1 || page < 1 {
            return Err(ApiError::Validation(format!(
                "per_page and page must be >= 1, got per_page={}, page={}",
                per_page, page
            )));
        }

        self.request(
            "exchanges",
            &[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    /// Issue one GET request and classify the outcome. Shared by all
    /// endpoints; `endpoint` is the path relative to the base URL.
    async fn request(&self, endpoint: &'static str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} query={:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("request to /{} failed: {}", endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            ApiError::Network(format!("failed to read /{} response body: {}", endpoint, e))
        })?;

        let value: Value = serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            endpoint,
            detail: e.to_string(),
        })?;

        debug!("GET /{} -> {}", endpoint, status);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn test_client(server: &mockito::ServerGuard) -> CoinGeckoClient {
        CoinGeckoClient::new(ClientConfig {
            base_url: server.url(),
            timeout: Duration::from_secs(5),
        })
        .expect("client should build")
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, COINGECKO_BASE);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_ping_returns_payload_unchanged() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"gecko_says":"(V3) To the Moon!"}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let data = client.ping().await.unwrap();

        assert_eq!(data, json!({"gecko_says": "(V3) To the Moon!"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ping_non_success_status_maps_to_http_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let client = test_client(&server);
        let err = client.ping().await.unwrap_err();

        match err {
            ApiError::HttpStatus { endpoint, status } => {
                assert_eq!(endpoint, "ping");
                assert_eq!(status, 503);
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
        // exactly one request, no retry on a failed status
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ping_invalid_json_maps_to_decode() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/ping")
            .with_status(200)
            .with_body("this is not json")
            .create_async()
            .await;

        let client = test_client(&server);
        let err = client.ping().await.unwrap_err();

        match err {
            ApiError::Decode { endpoint, .. } => assert_eq!(endpoint, "ping"),
            other => panic!("expected Decode, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_network() {
        // Nothing listens on the discard port.
        let client = CoinGeckoClient::new(ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();

        let err = client.ping().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_get_price_sends_expected_query() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "bitcoin": {"usd": 60000, "usd_market_cap": 1200000000u64},
            "ethereum": {"usd": 3000, "usd_market_cap": 350000000u64}
        });
        let mock = server
            .mock("GET", "/simple/price")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ids".into(), "bitcoin,ethereum".into()),
                Matcher::UrlEncoded("vs_currencies".into(), "usd".into()),
                Matcher::UrlEncoded("include_market_cap".into(), "true".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = test_client(&server);
        let coin_ids = vec!["bitcoin".to_string(), "ethereum".to_string()];
        let data = client.get_price(&coin_ids).await.unwrap();

        assert_eq!(data, body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_price_empty_ids_is_validation_without_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = test_client(&server);
        let err = client.get_price(&[]).await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)), "got {:?}", err);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_trending_coins_returns_payload_unchanged() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "coins": [
                {"item": {"name": "Bitcoin", "symbol": "btc"}},
                {"item": {"name": "Pepe", "symbol": "pepe"}}
            ]
        });
        let mock = server
            .mock("GET", "/search/trending")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = test_client(&server);
        let data = client.get_trending_coins().await.unwrap();

        assert_eq!(data, body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_exchanges_sends_expected_query() {
        let mut server = mockito::Server::new_async().await;
        let body = json!([
            {"name": "Binance", "trust_score_rank": 1},
            {"name": "Kraken", "trust_score_rank": 2}
        ]);
        let mock = server
            .mock("GET", "/exchanges")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("per_page".into(), "50".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = test_client(&server);
        let data = client.get_exchanges(50, 2).await.unwrap();

        assert_eq!(data, body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_exchanges_zero_pagination_is_validation_without_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = test_client(&server);

        let err = client.get_exchanges(0, 1).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)), "got {:?}", err);

        let err = client.get_exchanges(100, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)), "got {:?}", err);

        mock.assert_async().await;
    }
}
