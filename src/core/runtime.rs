//! One pass of the fetch, evaluate, notify pipeline over every symbol.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::error::SymbolError;
use crate::models::report::RunReport;
use crate::models::suggestion::Suggestion;
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::Notifier;
use crate::signals::engine::SignalEngine;

/// What a pass processes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub symbols: Vec<String>,
    pub interval: String,
    pub window_size: u32,
    pub sma_period: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            symbols: vec![
                "BTCUSDT".to_string(),
                "ETHUSDT".to_string(),
                "BNBUSDT".to_string(),
            ],
            interval: "1h".to_string(),
            window_size: 1000,
            sma_period: 20,
        }
    }
}

/// Sequential signal runtime. Symbols are independent of each other.
pub struct SignalRuntime {
    config: RuntimeConfig,
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
}

impl SignalRuntime {
    pub fn new(
        config: RuntimeConfig,
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        Self {
            config,
            provider,
            notifier,
        }
    }

    /// Process every configured symbol once, in order.
    ///
    /// Never fails as a whole: each symbol's error is logged and recorded
    /// in the report.
    pub async fn run_once(&self) -> RunReport {
        info!(
            symbols = ?self.config.symbols,
            interval = %self.config.interval,
            window_size = self.config.window_size,
            sma_period = self.config.sma_period,
            "SignalRuntime: starting pass over {} symbols",
            self.config.symbols.len()
        );

        let mut report = RunReport::default();
        for symbol in &self.config.symbols {
            let result = self.process_symbol(symbol).await;
            match &result {
                Ok(suggestion) => {
                    info!(
                        symbol = %symbol,
                        suggestion = %suggestion.kind,
                        price = suggestion.price,
                        sma = suggestion.sma,
                        "SignalRuntime: {} suggestion sent for {}",
                        suggestion.kind,
                        symbol
                    );
                }
                Err(e @ SymbolError::InsufficientData { .. }) => {
                    warn!(symbol = %symbol, error = %e, "SignalRuntime: skipping {}", symbol);
                }
                Err(e) => {
                    error!(symbol = %symbol, error = %e, "SignalRuntime: error processing {}", symbol);
                }
            }
            report.push(symbol.clone(), result);
        }

        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "SignalRuntime: pass complete"
        );
        report
    }

    /// Fetch, evaluate and notify for a single symbol.
    pub async fn process_symbol(&self, symbol: &str) -> Result<Suggestion, SymbolError> {
        let candles = self
            .provider
            .get_candles(symbol, &self.config.interval, self.config.window_size)
            .await?;

        debug!(
            symbol = %symbol,
            count = candles.len(),
            "SignalRuntime: fetched {} candles for {}",
            candles.len(),
            symbol
        );

        let suggestion = SignalEngine::evaluate(symbol, &candles, self.config.sma_period)?;

        self.notifier.send(&suggestion.render()).await?;

        Ok(suggestion)
    }
}
