//! Per-scan candle cache: one fetch per universe symbol, failures absorbed.

use crate::config::{Instrument, FETCH_CONCURRENCY};
use crate::models::{CandleSeries, ScanLog};
use crate::services::market_data::CandleSource;
use chrono::NaiveDate;
use futures_util::stream::{self, StreamExt};
use std::collections::HashMap;
use tracing::{info, warn};

/// Holds every universe symbol's candle series for one trading date.
///
/// Exactly one entry per symbol: either a populated (possibly incomplete)
/// series, or an explicit absent marker when the fetch failed or returned no
/// candles. A single symbol's failure never aborts the batch.
pub struct SessionCandleCache {
    entries: HashMap<&'static str, Option<CandleSeries>>,
    symbols_with_data: usize,
}

impl SessionCandleCache {
    /// Fetch all universe symbols for `date`.
    ///
    /// Fetches run with bounded parallelism but results are consumed in
    /// universe order, so the per-symbol log lines are deterministic.
    /// Checkpoint evaluation must not start until this returns.
    pub async fn load(
        source: &dyn CandleSource,
        universe: &'static [Instrument],
        date: NaiveDate,
        log: &mut ScanLog,
    ) -> Self {
        let results = stream::iter(universe.iter().copied())
            .map(|instrument| async move { (instrument, source.fetch(instrument.token, date).await) })
            .buffered(FETCH_CONCURRENCY)
            .collect::<Vec<_>>()
            .await;

        let mut entries = HashMap::with_capacity(universe.len());
        let mut symbols_with_data = 0;

        for (instrument, result) in results {
            let symbol = instrument.symbol;
            match result {
                Ok(series) if series.is_empty() => {
                    info!(symbol, "no candles returned for session window");
                    log.push(format!("{symbol}: no data fetched"));
                    entries.insert(symbol, None);
                }
                Ok(series) => {
                    info!(symbol, candles = series.len(), "candles fetched");
                    log.push(format!("{symbol}: {} candles fetched", series.len()));
                    symbols_with_data += 1;
                    entries.insert(symbol, Some(series));
                }
                Err(e) => {
                    warn!(symbol, error = %e, "fetch failed; symbol excluded from scan");
                    log.push(format!("{symbol}: fetch failed: {e}"));
                    entries.insert(symbol, None);
                }
            }
        }

        Self {
            entries,
            symbols_with_data,
        }
    }

    /// The symbol's series, or None when it was absent for this session.
    pub fn series(&self, symbol: &str) -> Option<&CandleSeries> {
        self.entries.get(symbol).and_then(|entry| entry.as_ref())
    }

    pub fn symbols_with_data(&self) -> usize {
        self.symbols_with_data
    }
}
