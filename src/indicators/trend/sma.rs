//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::SmaIndicator;

fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

/// Trailing SMA of closing prices, one entry per candle.
///
/// Entries before the first full window are `None`.
pub fn rolling_sma(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    math::rolling_mean(&closes(candles), period as usize)
}

/// SMA at the most recent candle
pub fn calculate_sma(candles: &[Candle], period: u32) -> Option<SmaIndicator> {
    let value = math::sma(&closes(candles), period as usize)?;

    Some(SmaIndicator { value, period })
}
