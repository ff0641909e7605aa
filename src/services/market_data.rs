//! Candle source seam between the scan pipeline and vendor clients.

use crate::models::CandleSeries;
use chrono::NaiveDate;
use thiserror::Error;

/// Failure of a single symbol's upstream fetch.
///
/// Always recoverable at the session-cache boundary: the symbol is marked
/// absent and the batch continues.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to upstream failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("malformed candle payload: {0}")]
    Payload(String),
}

/// Fetches one symbol's minute candles for the session window of one date.
///
/// Implementations must not retry internally; retry policy belongs to the
/// caller. The returned series may be incomplete or empty.
#[async_trait::async_trait]
pub trait CandleSource: Send + Sync {
    async fn fetch(&self, token: u32, date: NaiveDate) -> Result<CandleSeries, FetchError>;
}
