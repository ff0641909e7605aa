//! Kite Connect market data provider implementation

use crate::config::{self, KiteCredentials};
use crate::models::{Candle, CandleSeries};
use crate::services::market_data::{CandleSource, FetchError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

const KITE_VERSION_HEADER: &str = "X-Kite-Version";
const KITE_VERSION: &str = "3";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wire envelope for `GET /instruments/historical/{token}/minute`.
#[derive(Debug, Deserialize)]
struct HistoricalResponse {
    data: CandlePayload,
}

#[derive(Debug, Deserialize)]
struct CandlePayload {
    candles: Vec<CandleRow>,
}

/// One candle row: `[timestamp, open, high, low, close, volume]`.
#[derive(Debug, Deserialize)]
struct CandleRow(String, f64, f64, f64, f64, f64);

impl CandleRow {
    fn into_candle(self) -> Result<Candle, FetchError> {
        let minute = parse_kite_timestamp(&self.0)?.time();
        Ok(Candle::new(minute, self.1, self.2, self.3, self.4, self.5))
    }
}

/// Kite reports exchange-local timestamps, usually with an explicit `+0530`
/// offset but occasionally without one.
fn parse_kite_timestamp(raw: &str) -> Result<NaiveDateTime, FetchError> {
    if let Ok(with_offset) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Ok(with_offset.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| FetchError::Payload(format!("unparseable candle timestamp {raw:?}")))
}

/// HTTP client for Kite's historical minute candles.
///
/// One GET per symbol per scan, bounded to the session window. No caching and
/// no retries at this layer.
pub struct KiteHistoricalClient {
    http: reqwest::Client,
    base_url: String,
    credentials: KiteCredentials,
}

impl KiteHistoricalClient {
    pub fn new(credentials: KiteCredentials) -> Self {
        Self::with_base_url(config::get_kite_base_url(), credentials)
    }

    /// Point the client at a non-default endpoint (tests use a mock server).
    pub fn with_base_url(base_url: impl Into<String>, credentials: KiteCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }
}

#[async_trait::async_trait]
impl CandleSource for KiteHistoricalClient {
    async fn fetch(&self, token: u32, date: NaiveDate) -> Result<CandleSeries, FetchError> {
        let from = NaiveDateTime::new(date, config::session_open());
        let to = NaiveDateTime::new(date, config::session_close());

        let url = format!("{}/{}/minute", self.base_url, token);
        let response = self
            .http
            .get(&url)
            .header(KITE_VERSION_HEADER, KITE_VERSION)
            .header(
                reqwest::header::AUTHORIZATION,
                self.credentials.authorization_header(),
            )
            .query(&[
                ("from", from.format(TIMESTAMP_FORMAT).to_string()),
                ("to", to.format(TIMESTAMP_FORMAT).to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: HistoricalResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Payload(e.to_string()))?;

        body.data
            .candles
            .into_iter()
            .map(CandleRow::into_candle)
            .collect()
    }
}
