//! Environment-based configuration and fixed scan parameters.

pub mod universe;

use chrono::{NaiveDate, NaiveTime};
use std::env;
use thiserror::Error;

pub use universe::{nifty50, Instrument};

/// Default Kite Connect historical-data endpoint.
pub const DEFAULT_KITE_BASE_URL: &str = "https://api.kite.trade/instruments/historical";

/// Number of upstream fetches allowed in flight at once.
pub const FETCH_CONCURRENCY: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Credentials for the Kite Connect API, sent on every historical-data request.
#[derive(Debug, Clone)]
pub struct KiteCredentials {
    pub api_key: String,
    pub access_token: String,
}

impl KiteCredentials {
    /// Load credentials from `KITE_API_KEY` / `KITE_ACCESS_TOKEN`.
    ///
    /// Fails fast at startup rather than at the first upstream call.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            env::var("KITE_API_KEY").map_err(|_| ConfigError::MissingVar("KITE_API_KEY"))?;
        let access_token = env::var("KITE_ACCESS_TOKEN")
            .map_err(|_| ConfigError::MissingVar("KITE_ACCESS_TOKEN"))?;
        Ok(Self {
            api_key,
            access_token,
        })
    }

    /// Value for the `Authorization` header, per Kite API v3.
    pub fn authorization_header(&self) -> String {
        format!("token {}:{}", self.api_key, self.access_token)
    }
}

pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn get_kite_base_url() -> String {
    env::var("KITE_BASE_URL").unwrap_or_else(|_| DEFAULT_KITE_BASE_URL.to_string())
}

pub fn get_holidays_path() -> String {
    env::var("NSE_HOLIDAYS_PATH").unwrap_or_else(|_| "holidays.json".to_string())
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}

/// Start of the candle window fetched for every symbol.
pub fn session_open() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 15, 0).unwrap()
}

/// End of the candle window; also the last checkpoint.
pub fn session_close() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 0, 0).unwrap()
}

/// The three checkpoint times, in evaluation order.
pub fn checkpoints() -> [NaiveTime; 3] {
    [
        NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        NaiveTime::from_hms_opt(9, 45, 0).unwrap(),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    ]
}

/// Earliest date for which Kite minute data is assumed available.
pub fn min_scan_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}
