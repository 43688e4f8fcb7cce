use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::currency::BASE_CURRENCY;
use crate::rate_provider::{RateProvider, RateQuote};

/// Client for exchangerate-api.com. The `latest` endpoint is free and
/// unauthenticated; a single GET returns every quote against the base.
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    async fn fetch_latest(&self) -> Result<RateQuote> {
        let endpoint = format!("/v4/latest/{BASE_CURRENCY}");
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent("cambio/1.0").build()?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} from rate service",
                response.status()
            ));
        }

        let text = response.text().await?;

        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response: {e}"))?;

        Ok(RateQuote { rates: data.rates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/latest/USD"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_rates_fetch() {
        let mock_response = r#"{
            "base": "USD",
            "date": "2024-01-15",
            "rates": {
                "USD": 1,
                "EUR": 0.95,
                "GBP": 0.79,
                "EGP": 48.6
            }
        }"#;

        let mock_server = create_mock_server(mock_response).await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        let quote = provider.fetch_latest().await.unwrap();
        assert_eq!(quote.rates.get("EUR"), Some(&0.95));
        assert_eq!(quote.rates.get("EGP"), Some(&48.6));
        assert_eq!(quote.rates.len(), 4);
    }

    #[tokio::test]
    async fn test_rate_service_error_response() {
        let mock_server = MockServer::start().await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v4/latest/USD"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = provider.fetch_latest().await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error from rate service"
        );
    }

    #[tokio::test]
    async fn test_rate_service_malformed_response() {
        let mock_server = create_mock_server("not json at all").await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        let result = provider.fetch_latest().await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse rates response")
        );
    }

    #[tokio::test]
    async fn test_rate_service_missing_rates_field() {
        // "result" instead of "rates"
        let mock_server = create_mock_server(r#"{"base": "USD", "result": {}}"#).await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        let result = provider.fetch_latest().await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse rates response")
        );
    }

    #[tokio::test]
    async fn test_network_error_is_reported() {
        // Nothing listens on this port.
        let provider = ExchangeRateApiProvider::new("http://127.0.0.1:1");

        let result = provider.fetch_latest().await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().starts_with("Request error:"));
    }
}
