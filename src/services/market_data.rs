//! Market data provider interface.

use crate::error::FetchError;
use crate::models::candle::Candle;

#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Get the most recent `limit` candles for a symbol, oldest first
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>, FetchError>;
}
