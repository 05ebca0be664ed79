//! Environment-driven configuration.
//!
//! Every value has a default so an empty environment reproduces the
//! stock pass: BTCUSDT, ETHUSDT and BNBUSDT on 1h candles, a 1000 candle
//! window and a 20 period SMA, printed to stdout.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::core::runtime::RuntimeConfig;
use crate::error::ConfigError;
use crate::services::binance::client::{DEFAULT_BASE_URL, MAX_KLINES_LIMIT};
use crate::services::telegram::DEFAULT_API_URL;

/// Kline granularities accepted by the market-data source.
pub const SUPPORTED_INTERVALS: &[&str] = &[
    "1s", "1m", "3m", "5m", "15m", "30m", "1h", "2h", "4h", "6h", "8h", "12h", "1d", "3d", "1w",
    "1M",
];

const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierConfig {
    Console,
    Telegram {
        api_url: String,
        bot_token: String,
        chat_id: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub runtime: RuntimeConfig,
    pub binance_base_url: String,
    pub http_timeout: Duration,
    pub notifier: NotifierConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = RuntimeConfig::default();

        let symbols = match var("SYMBOLS") {
            Some(raw) => parse_symbols(&raw),
            None => defaults.symbols,
        };

        let runtime = RuntimeConfig {
            symbols,
            interval: var("KLINE_INTERVAL").unwrap_or(defaults.interval),
            window_size: parse_var("WINDOW_SIZE", var("WINDOW_SIZE"), defaults.window_size)?,
            sma_period: parse_var("SMA_PERIOD", var("SMA_PERIOD"), defaults.sma_period)?,
        };
        validate_runtime(&runtime)?;

        let timeout_secs = parse_var(
            "HTTP_TIMEOUT_SECONDS",
            var("HTTP_TIMEOUT_SECONDS"),
            DEFAULT_HTTP_TIMEOUT_SECONDS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "HTTP_TIMEOUT_SECONDS",
                "0",
                "must be greater than zero",
            ));
        }

        let notifier = notifier_config(
            var("TELEGRAM_BOT_TOKEN"),
            var("TELEGRAM_CHAT_ID"),
            var("TELEGRAM_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        )?;

        Ok(Self {
            runtime,
            binance_base_url: var("BINANCE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            http_timeout: Duration::from_secs(timeout_secs),
            notifier,
        })
    }
}

fn parse_var<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, raw.clone(), e.to_string())),
        None => Ok(default),
    }
}

/// Split a comma-separated symbol list, trimming and upper-casing entries.
pub fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn validate_runtime(config: &RuntimeConfig) -> Result<(), ConfigError> {
    if config.symbols.is_empty() {
        return Err(ConfigError::invalid("SYMBOLS", "", "at least one symbol is required"));
    }
    if !SUPPORTED_INTERVALS.contains(&config.interval.as_str()) {
        return Err(ConfigError::invalid(
            "KLINE_INTERVAL",
            config.interval.clone(),
            format!("expected one of {}", SUPPORTED_INTERVALS.join(", ")),
        ));
    }
    if config.window_size == 0 || config.window_size > MAX_KLINES_LIMIT {
        return Err(ConfigError::invalid(
            "WINDOW_SIZE",
            config.window_size.to_string(),
            format!("must be between 1 and {}", MAX_KLINES_LIMIT),
        ));
    }
    if config.sma_period == 0 {
        return Err(ConfigError::invalid("SMA_PERIOD", "0", "must be greater than zero"));
    }
    if config.sma_period > config.window_size {
        return Err(ConfigError::invalid(
            "SMA_PERIOD",
            config.sma_period.to_string(),
            format!("must not exceed WINDOW_SIZE ({})", config.window_size),
        ));
    }
    Ok(())
}

/// Telegram needs both the token and the chat; neither means stdout.
pub fn notifier_config(
    bot_token: Option<String>,
    chat_id: Option<String>,
    api_url: String,
) -> Result<NotifierConfig, ConfigError> {
    match (bot_token, chat_id) {
        (Some(bot_token), Some(chat_id)) => Ok(NotifierConfig::Telegram {
            api_url,
            bot_token,
            chat_id,
        }),
        (None, None) => Ok(NotifierConfig::Console),
        (Some(_), None) => Err(ConfigError::invalid(
            "TELEGRAM_CHAT_ID",
            "",
            "required when TELEGRAM_BOT_TOKEN is set",
        )),
        (None, Some(chat_id)) => Err(ConfigError::invalid(
            "TELEGRAM_BOT_TOKEN",
            "",
            format!("required when TELEGRAM_CHAT_ID ({}) is set", chat_id),
        )),
    }
}
