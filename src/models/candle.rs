//! Minute candle records and the per-symbol session series.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One minute's OHLCV summary for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub minute: NaiveTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(minute: NaiveTime, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            minute,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Minute-indexed candles for one symbol over one session window.
///
/// Minutes need not be contiguous: thin trading or upstream gaps leave holes,
/// and lookups are exact-minute only. A later candle for the same minute
/// replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct CandleSeries {
    by_minute: BTreeMap<NaiveTime, Candle>,
}

impl CandleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, candle: Candle) {
        self.by_minute.insert(candle.minute, candle);
    }

    /// Exact-minute lookup; a candle 30 seconds away is a miss.
    pub fn at(&self, minute: NaiveTime) -> Option<&Candle> {
        self.by_minute.get(&minute)
    }

    pub fn len(&self) -> usize {
        self.by_minute.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_minute.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candle> {
        self.by_minute.values()
    }
}

impl FromIterator<Candle> for CandleSeries {
    fn from_iter<I: IntoIterator<Item = Candle>>(iter: I) -> Self {
        let mut series = Self::new();
        for candle in iter {
            series.insert(candle);
        }
        series
    }
}
