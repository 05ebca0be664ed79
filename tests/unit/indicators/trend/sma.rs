//! Unit tests for SMA indicator

use chrono::Utc;
use trendwatch::indicators::trend::{calculate_sma, rolling_sma};
use trendwatch::models::candle::Candle;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&price| Candle::new(price, price + 0.5, price - 0.5, price, 1000.0, Utc::now()))
        .collect()
}

fn wavy_closes(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + (i as f64 * 0.37).sin() * 12.5 + i as f64 * 0.01)
        .collect()
}

#[test]
fn test_sma_insufficient_data() {
    for period in 1..=25u32 {
        for len in 0..period as usize {
            let candles = candles_from_closes(&wavy_closes(len));
            let rolling = rolling_sma(&candles, period);
            assert_eq!(rolling.len(), len);
            assert!(rolling.iter().all(Option::is_none));
            assert!(calculate_sma(&candles, period).is_none());
        }
    }
}

#[test]
fn test_sma_final_value_is_mean_of_last_period() {
    let closes = wavy_closes(300);
    let candles = candles_from_closes(&closes);

    for period in [1u32, 2, 7, 20, 50, 299, 300] {
        let expected: f64 =
            closes[closes.len() - period as usize..].iter().sum::<f64>() / period as f64;

        let latest = calculate_sma(&candles, period).unwrap();
        assert_eq!(latest.period, period);
        assert!((latest.value - expected).abs() < 1e-9);

        let rolling = rolling_sma(&candles, period);
        let last = rolling.last().copied().flatten().unwrap();
        assert!((last - expected).abs() < 1e-9);
    }
}

#[test]
fn test_sma_length_equal_to_period() {
    let candles = candles_from_closes(&wavy_closes(20));
    let rolling = rolling_sma(&candles, 20);

    assert_eq!(rolling.iter().filter(|v| v.is_some()).count(), 1);
    assert!(rolling[..19].iter().all(Option::is_none));
    assert!(rolling[19].is_some());
}

#[test]
fn test_sma_reference_scenario() {
    let mut closes = vec![10.0; 19];
    closes.push(12.0);
    let candles = candles_from_closes(&closes);

    let sma = calculate_sma(&candles, 20).unwrap();
    assert!((sma.value - 10.1).abs() < 1e-9);
}

#[test]
fn test_rolling_sma_is_parallel_to_input() {
    let candles = candles_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let rolling = rolling_sma(&candles, 3);
    assert_eq!(rolling.len(), candles.len());
    assert_eq!(rolling[2], Some(2.0));
    assert_eq!(rolling[5], Some(5.0));
}

#[test]
fn test_sma_zero_period_is_undefined() {
    let candles = candles_from_closes(&wavy_closes(30));
    assert!(calculate_sma(&candles, 0).is_none());
    assert!(rolling_sma(&candles, 0).iter().all(Option::is_none));
}
