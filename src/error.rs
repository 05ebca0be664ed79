//! Error types for fetching, notifying and per-symbol processing.

use thiserror::Error;

/// Failure to obtain a candle window from the market-data source.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("market data request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("market data source returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed market data response: {0}")]
    Malformed(String),
}

/// Failure to hand a message to the notification channel.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notification request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("notification endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Everything that can stop a single symbol from producing a suggestion.
#[derive(Error, Debug)]
pub enum SymbolError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("insufficient data: {available} candles available, {required} required")]
    InsufficientData { available: usize, required: usize },

    #[error("notification failed: {0}")]
    Notify(#[from] NotifyError),
}

/// Invalid process configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid(key: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
