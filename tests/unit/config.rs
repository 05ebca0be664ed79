//! Unit tests for configuration parsing and validation

use std::collections::HashMap;
use std::time::Duration;

use trendwatch::config::{
    notifier_config, parse_symbols, validate_runtime, AppConfig, NotifierConfig,
};
use trendwatch::core::runtime::RuntimeConfig;
use trendwatch::error::ConfigError;

fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

fn rejected_key(result: Result<AppConfig, ConfigError>) -> &'static str {
    match result {
        Err(ConfigError::Invalid { key, .. }) => key,
        Ok(config) => panic!("expected configuration to be rejected: {:?}", config),
    }
}

#[test]
fn test_parse_symbols_trims_and_uppercases() {
    assert_eq!(
        parse_symbols(" btcusdt, ETHUSDT ,,bnbusdt "),
        vec!["BTCUSDT", "ETHUSDT", "BNBUSDT"]
    );
    assert!(parse_symbols(" , ").is_empty());
}

#[test]
fn test_default_runtime_config_is_valid() {
    assert!(validate_runtime(&RuntimeConfig::default()).is_ok());
}

#[test]
fn test_validate_rejects_bad_values() {
    let base = RuntimeConfig::default();

    let cases = [
        ("SYMBOLS", RuntimeConfig { symbols: vec![], ..base.clone() }),
        ("KLINE_INTERVAL", RuntimeConfig { interval: "7m".to_string(), ..base.clone() }),
        ("WINDOW_SIZE", RuntimeConfig { window_size: 0, ..base.clone() }),
        ("WINDOW_SIZE", RuntimeConfig { window_size: 1001, ..base.clone() }),
        ("SMA_PERIOD", RuntimeConfig { sma_period: 0, ..base.clone() }),
        ("SMA_PERIOD", RuntimeConfig { window_size: 10, sma_period: 20, ..base.clone() }),
    ];

    for (expected_key, config) in cases {
        match validate_runtime(&config) {
            Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, expected_key),
            Ok(()) => panic!("expected {} to be rejected: {:?}", expected_key, config),
        }
    }
}

#[test]
fn test_notifier_config_requires_both_telegram_values() {
    let api = "https://api.telegram.org".to_string();

    assert_eq!(
        notifier_config(None, None, api.clone()).unwrap(),
        NotifierConfig::Console
    );
    assert_eq!(
        notifier_config(Some("token".into()), Some("@channel".into()), api.clone()).unwrap(),
        NotifierConfig::Telegram {
            api_url: api.clone(),
            bot_token: "token".to_string(),
            chat_id: "@channel".to_string(),
        }
    );
    assert!(notifier_config(Some("token".into()), None, api.clone()).is_err());
    assert!(notifier_config(None, Some("@channel".into()), api).is_err());
}

#[test]
fn test_empty_environment_gives_stock_defaults() {
    let config = load(&[]).unwrap();

    assert_eq!(config.runtime, RuntimeConfig::default());
    assert_eq!(config.binance_base_url, "https://api.binance.com");
    assert_eq!(config.http_timeout, Duration::from_secs(10));
    assert_eq!(config.notifier, NotifierConfig::Console);
}

#[test]
fn test_blank_values_count_as_unset() {
    let config = load(&[
        ("SYMBOLS", "   "),
        ("WINDOW_SIZE", " "),
        ("SMA_PERIOD", "\t"),
        ("HTTP_TIMEOUT_SECONDS", ""),
        ("BINANCE_BASE_URL", "  "),
        ("TELEGRAM_BOT_TOKEN", " "),
        ("TELEGRAM_CHAT_ID", ""),
    ])
    .unwrap();

    assert_eq!(config.runtime, RuntimeConfig::default());
    assert_eq!(config.binance_base_url, "https://api.binance.com");
    assert_eq!(config.http_timeout, Duration::from_secs(10));
    assert_eq!(config.notifier, NotifierConfig::Console);
}

#[test]
fn test_values_override_defaults() {
    let config = load(&[
        ("SYMBOLS", "solusdt, xrpusdt"),
        ("KLINE_INTERVAL", "4h"),
        ("WINDOW_SIZE", " 500 "),
        ("SMA_PERIOD", "50"),
        ("HTTP_TIMEOUT_SECONDS", "3"),
        ("BINANCE_BASE_URL", "http://localhost:8080"),
        ("TELEGRAM_BOT_TOKEN", "42:token"),
        ("TELEGRAM_CHAT_ID", "@signals"),
    ])
    .unwrap();

    assert_eq!(
        config.runtime,
        RuntimeConfig {
            symbols: vec!["SOLUSDT".to_string(), "XRPUSDT".to_string()],
            interval: "4h".to_string(),
            window_size: 500,
            sma_period: 50,
        }
    );
    assert_eq!(config.binance_base_url, "http://localhost:8080");
    assert_eq!(config.http_timeout, Duration::from_secs(3));
    assert_eq!(
        config.notifier,
        NotifierConfig::Telegram {
            api_url: "https://api.telegram.org".to_string(),
            bot_token: "42:token".to_string(),
            chat_id: "@signals".to_string(),
        }
    );
}

#[test]
fn test_non_numeric_values_are_rejected() {
    assert_eq!(rejected_key(load(&[("WINDOW_SIZE", "abc")])), "WINDOW_SIZE");
    assert_eq!(rejected_key(load(&[("SMA_PERIOD", "-5")])), "SMA_PERIOD");
    assert_eq!(
        rejected_key(load(&[("HTTP_TIMEOUT_SECONDS", "ten")])),
        "HTTP_TIMEOUT_SECONDS"
    );
}

#[test]
fn test_zero_timeout_is_rejected() {
    assert_eq!(
        rejected_key(load(&[("HTTP_TIMEOUT_SECONDS", "0")])),
        "HTTP_TIMEOUT_SECONDS"
    );
}

#[test]
fn test_invalid_value_reports_raw_input() {
    match load(&[("WINDOW_SIZE", "abc")]) {
        Err(ConfigError::Invalid { value, .. }) => assert_eq!(value, "abc"),
        Ok(config) => panic!("expected rejection: {:?}", config),
    }
}

#[test]
fn test_half_configured_telegram_is_rejected() {
    assert_eq!(
        rejected_key(load(&[("TELEGRAM_BOT_TOKEN", "42:token")])),
        "TELEGRAM_CHAT_ID"
    );
}
