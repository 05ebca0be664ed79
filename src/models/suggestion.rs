//! Buy/Hold suggestion with derived price levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Multipliers applied to the latest close.
pub const BUY_RANGE_LOW: f64 = 0.98;
pub const BUY_RANGE_HIGH: f64 = 1.02;
pub const TARGETS: [f64; 3] = [1.05, 1.10, 1.15];
pub const STOP_LOSS: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionKind {
    Buy,
    Hold,
}

impl SuggestionKind {
    /// `Buy` only when price is strictly above the average. There is no
    /// sell side.
    pub fn decide(price: f64, sma: f64) -> Self {
        if price > sma {
            SuggestionKind::Buy
        } else {
            SuggestionKind::Hold
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Buy => "Buy",
            SuggestionKind::Hold => "Hold",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub symbol: String,
    pub kind: SuggestionKind,
    pub price: f64,
    pub sma: f64,
    pub buy_range: (f64, f64),
    pub targets: [f64; 3],
    pub stop_loss: f64,
}

impl Suggestion {
    pub fn new(symbol: impl Into<String>, price: f64, sma: f64) -> Self {
        Self {
            symbol: symbol.into(),
            kind: SuggestionKind::decide(price, sma),
            price,
            sma,
            buy_range: (price * BUY_RANGE_LOW, price * BUY_RANGE_HIGH),
            targets: TARGETS.map(|factor| price * factor),
            stop_loss: price * STOP_LOSS,
        }
    }

    /// Operator-facing message. Field order and labels are fixed.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Suggestion: {}", self.kind)?;
        writeln!(f, "Symbol: {}", self.symbol)?;
        writeln!(
            f,
            "Buying Range: {:.2} - {:.2}",
            self.buy_range.0, self.buy_range.1
        )?;
        for (i, target) in self.targets.iter().enumerate() {
            writeln!(f, "Target {}: {:.2}", i + 1, target)?;
        }
        write!(f, "Stop Loss: {:.2}", self.stop_loss)
    }
}
