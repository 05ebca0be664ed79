use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One aggregated trading interval as delivered by the market-data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open_time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: DateTime<Utc>,
    pub quote_volume: f64,
    pub trade_count: u64,
    pub taker_buy_base_volume: f64,
    pub taker_buy_quote_volume: f64,
}

impl Candle {
    /// Candle with prices and volume only; trade statistics start at zero
    /// and `close_time` equals `open_time`.
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        open_time: DateTime<Utc>,
    ) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
            close_time: open_time,
            quote_volume: 0.0,
            trade_count: 0,
            taker_buy_base_volume: 0.0,
            taker_buy_quote_volume: 0.0,
        }
    }

    pub fn with_close_time(mut self, close_time: DateTime<Utc>) -> Self {
        self.close_time = close_time;
        self
    }

    pub fn with_trade_stats(
        mut self,
        quote_volume: f64,
        trade_count: u64,
        taker_buy_base_volume: f64,
        taker_buy_quote_volume: f64,
    ) -> Self {
        self.quote_volume = quote_volume;
        self.trade_count = trade_count;
        self.taker_buy_base_volume = taker_buy_base_volume;
        self.taker_buy_quote_volume = taker_buy_quote_volume;
        self
    }
}
