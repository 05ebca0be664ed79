//! Wire format of `/api/v3/klines` rows.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::error::FetchError;
use crate::models::candle::Candle;

/// One kline as a fixed 12-element JSON array.
///
/// `[open_time, open, high, low, close, volume, close_time, quote_volume,
/// trade_count, taker_buy_base_volume, taker_buy_quote_volume, ignore]`.
/// Decimal fields arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct KlineRow(
    pub i64,
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
    pub i64,
    pub String,
    pub u64,
    pub String,
    pub String,
    pub IgnoredAny,
);

fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, FetchError> {
    raw.parse::<f64>()
        .map_err(|e| FetchError::Malformed(format!("invalid {}: {:?} ({})", field, raw, e)))
}

fn parse_millis(field: &'static str, millis: i64) -> Result<DateTime<Utc>, FetchError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| FetchError::Malformed(format!("{} out of range: {}", field, millis)))
}

impl TryFrom<KlineRow> for Candle {
    type Error = FetchError;

    fn try_from(row: KlineRow) -> Result<Self, Self::Error> {
        let KlineRow(
            open_time,
            open,
            high,
            low,
            close,
            volume,
            close_time,
            quote_volume,
            trade_count,
            taker_buy_base_volume,
            taker_buy_quote_volume,
            _,
        ) = row;

        Ok(Candle::new(
            parse_decimal("open", &open)?,
            parse_decimal("high", &high)?,
            parse_decimal("low", &low)?,
            parse_decimal("close", &close)?,
            parse_decimal("volume", &volume)?,
            parse_millis("open time", open_time)?,
        )
        .with_close_time(parse_millis("close time", close_time)?)
        .with_trade_stats(
            parse_decimal("quote volume", &quote_volume)?,
            trade_count,
            parse_decimal("taker buy base volume", &taker_buy_base_volume)?,
            parse_decimal("taker buy quote volume", &taker_buy_quote_volume)?,
        ))
    }
}

/// Parse a full klines response body into candles, preserving order.
pub fn parse_klines(body: &str) -> Result<Vec<Candle>, FetchError> {
    let rows: Vec<KlineRow> =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    rows.into_iter().map(Candle::try_from).collect()
}
