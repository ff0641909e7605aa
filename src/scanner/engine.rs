//! Three-checkpoint elimination funnel over the scan universe.

use crate::config::{self, Instrument};
use crate::models::{ScanLog, ScanOutcome};
use crate::scanner::condition;
use crate::scanner::session::SessionCandleCache;
use crate::services::market_data::CandleSource;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

/// Drives one scan: fetch the session's candles for every symbol, then narrow
/// the universe through the checkpoints in order.
///
/// Each checkpoint's survivor set is the input for the next, so survivor sets
/// only ever shrink. All per-symbol problems are absorbed as exclusions and
/// log lines; `run` itself cannot fail for a valid trading date.
pub struct ScanOrchestrator {
    source: Arc<dyn CandleSource>,
    universe: &'static [Instrument],
}

impl ScanOrchestrator {
    pub fn new(source: Arc<dyn CandleSource>) -> Self {
        Self::with_universe(source, config::nifty50())
    }

    pub fn with_universe(source: Arc<dyn CandleSource>, universe: &'static [Instrument]) -> Self {
        Self { source, universe }
    }

    pub async fn run(&self, date: NaiveDate) -> ScanOutcome {
        let mut log = ScanLog::new();
        info!(date = %date, symbols = self.universe.len(), "running scan");
        log.push(format!("Running scan for {date}"));
        log.push("Fetching data & sanity checking...");

        let cache =
            SessionCandleCache::load(self.source.as_ref(), self.universe, date, &mut log).await;

        let mut survivors: Vec<&'static str> =
            self.universe.iter().map(|i| i.symbol).collect();
        let mut stagewise = BTreeMap::new();

        for checkpoint in config::checkpoints() {
            let label = checkpoint.format("%H:%M").to_string();
            log.push(format!("Checking {label}"));

            survivors.retain(|symbol| {
                cache
                    .series(symbol)
                    .is_some_and(|series| condition::passes(series, checkpoint))
            });

            // The stage that empties the funnel is still recorded; later
            // checkpoints are never evaluated and get no entry at all.
            stagewise.insert(label.clone(), survivors.clone());

            if survivors.is_empty() {
                info!(checkpoint = %label, "no survivors; stopping funnel early");
                log.push("No stocks passed at this stage");
                break;
            }

            info!(checkpoint = %label, survivors = survivors.len(), "stage complete");
            log.push(format!("Forwarded after {label}: {survivors:?}"));
        }

        log.push("Final filtered stocks:");
        if survivors.is_empty() {
            log.push("None");
        } else {
            log.push(format!("{survivors:?}"));
        }

        ScanOutcome {
            final_symbols: survivors,
            stagewise,
            logs: log.into_lines(),
            symbols_with_data: cache.symbols_with_data(),
        }
    }
}
