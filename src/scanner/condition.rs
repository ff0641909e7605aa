//! Checkpoint predicate: engulfing range over the two preceding minutes.

use crate::models::CandleSeries;
use chrono::{Duration, NaiveTime};

/// True when the checkpoint-minute candle's range engulfs (or ties) the
/// ranges of the two preceding minutes on both sides:
/// high >= both prior highs and low <= both prior lows.
///
/// Comparisons are deliberately non-strict; an exact tie passes. If any of
/// the three minutes is missing from the series the symbol cannot be
/// evaluated and is excluded.
pub fn passes(series: &CandleSeries, checkpoint: NaiveTime) -> bool {
    let prev1 = checkpoint - Duration::minutes(1);
    let prev2 = checkpoint - Duration::minutes(2);

    let (Some(curr), Some(p1), Some(p2)) =
        (series.at(checkpoint), series.at(prev1), series.at(prev2))
    else {
        return false;
    };

    curr.high >= p1.high && curr.high >= p2.high && curr.low <= p1.low && curr.low <= p2.low
}
