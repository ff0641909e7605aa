//! Unit tests for the checkpoint engulfing predicate

use chrono::NaiveTime;
use niftyscan::models::{Candle, CandleSeries};
use niftyscan::scanner::condition::passes;

fn minute(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn candle(h: u32, m: u32, high: f64, low: f64) -> Candle {
    Candle::new(minute(h, m), (high + low) / 2.0, high, low, (high + low) / 2.0, 1000.0)
}

fn series(candles: Vec<Candle>) -> CandleSeries {
    candles.into_iter().collect()
}

const CHECKPOINT: (u32, u32) = (9, 30);

fn checkpoint() -> NaiveTime {
    minute(CHECKPOINT.0, CHECKPOINT.1)
}

#[test]
fn test_strictly_engulfing_candle_passes() {
    let s = series(vec![
        candle(9, 28, 101.0, 99.5),
        candle(9, 29, 101.5, 99.0),
        candle(9, 30, 102.0, 98.0),
    ]);
    assert!(passes(&s, checkpoint()));
}

#[test]
fn test_exact_tie_passes() {
    // Non-strict comparison: equal highs and lows still count as engulfing.
    let s = series(vec![
        candle(9, 28, 102.0, 98.0),
        candle(9, 29, 102.0, 98.0),
        candle(9, 30, 102.0, 98.0),
    ]);
    assert!(passes(&s, checkpoint()));
}

#[test]
fn test_lower_high_than_either_prior_fails() {
    // High beaten by t-1
    let s = series(vec![
        candle(9, 28, 101.0, 99.0),
        candle(9, 29, 103.0, 99.0),
        candle(9, 30, 102.0, 98.0),
    ]);
    assert!(!passes(&s, checkpoint()));

    // High beaten by t-2
    let s = series(vec![
        candle(9, 28, 103.0, 99.0),
        candle(9, 29, 101.0, 99.0),
        candle(9, 30, 102.0, 98.0),
    ]);
    assert!(!passes(&s, checkpoint()));
}

#[test]
fn test_higher_low_than_either_prior_fails() {
    let s = series(vec![
        candle(9, 28, 101.0, 97.0),
        candle(9, 29, 101.0, 99.0),
        candle(9, 30, 102.0, 98.0),
    ]);
    assert!(!passes(&s, checkpoint()));
}

#[test]
fn test_one_sided_breakout_fails() {
    // High engulfs but low does not: both sides are required.
    let s = series(vec![
        candle(9, 28, 101.0, 98.0),
        candle(9, 29, 101.0, 98.0),
        candle(9, 30, 105.0, 99.0),
    ]);
    assert!(!passes(&s, checkpoint()));
}

#[test]
fn test_missing_checkpoint_minute_fails() {
    let s = series(vec![candle(9, 28, 101.0, 99.0), candle(9, 29, 101.0, 99.0)]);
    assert!(!passes(&s, checkpoint()));
}

#[test]
fn test_missing_prior_minute_fails_regardless_of_present_values() {
    // t and t-1 present and wildly engulfing, t-2 missing
    let s = series(vec![
        candle(9, 29, 101.0, 99.0),
        candle(9, 30, 200.0, 1.0),
    ]);
    assert!(!passes(&s, checkpoint()));

    // t and t-2 present, t-1 missing
    let s = series(vec![
        candle(9, 28, 101.0, 99.0),
        candle(9, 30, 200.0, 1.0),
    ]);
    assert!(!passes(&s, checkpoint()));
}

#[test]
fn test_empty_series_fails() {
    assert!(!passes(&CandleSeries::new(), checkpoint()));
}
