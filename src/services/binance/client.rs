//! Binance REST client for public market data.

use std::time::Duration;

use tracing::{debug, instrument};

use super::messages::parse_klines;
use crate::error::FetchError;
use crate::models::candle::Candle;
use crate::services::market_data::MarketDataProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";
const KLINES_PATH: &str = "/api/v3/klines";

/// Upstream maximum for `limit` on the klines endpoint.
pub const MAX_KLINES_LIMIT: u32 = 1000;

/// Unsigned Binance REST client. Only public endpoints are used.
#[derive(Clone)]
pub struct BinanceRestClient {
    base_url: String,
    client: reqwest::Client,
}

impl BinanceRestClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// GET /api/v3/klines
    #[instrument(skip(self), name = "binance::get_klines")]
    pub async fn get_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>, FetchError> {
        let url = format!("{}{}", self.base_url, KLINES_PATH);
        let limit = limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let candles = parse_klines(&body)?;
        debug!(symbol, interval, count = candles.len(), "klines fetched");
        Ok(candles)
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for BinanceRestClient {
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>, FetchError> {
        self.get_klines(symbol, interval, limit).await
    }
}
