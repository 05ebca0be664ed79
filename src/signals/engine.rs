//! Signal evaluation: latest close against its trailing SMA.

use crate::error::SymbolError;
use crate::indicators::trend::calculate_sma;
use crate::models::candle::Candle;
use crate::models::suggestion::Suggestion;

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate a suggestion from a chronological candle series.
    ///
    /// Fails with `InsufficientData` when the SMA is undefined at the last
    /// candle, which includes an empty series.
    pub fn evaluate(
        symbol: &str,
        candles: &[Candle],
        period: u32,
    ) -> Result<Suggestion, SymbolError> {
        let insufficient = || SymbolError::InsufficientData {
            available: candles.len(),
            required: period as usize,
        };

        let latest = candles.last().ok_or_else(insufficient)?;
        let sma = calculate_sma(candles, period).ok_or_else(insufficient)?;

        Ok(Suggestion::new(symbol, latest.close, sma.value))
    }
}
