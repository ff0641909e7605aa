//! NSE trading-day validation: date range, weekends, exchange holidays.
//!
//! The scan core assumes its input date is a trading day; this module is the
//! gate in front of it.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TradingDayError {
    #[error("date {0} is outside the supported range {1}..={2}")]
    OutOfRange(NaiveDate, NaiveDate, NaiveDate),
    #[error("{0} is a {1}; markets are closed")]
    Weekend(NaiveDate, Weekday),
    #[error("{0} is an NSE trading holiday")]
    Holiday(NaiveDate),
}

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("failed to read holiday file: {0}")]
    Io(#[from] std::io::Error),
    #[error("holiday file is not a JSON array of YYYY-MM-DD strings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("holiday file contains an unparseable date: {0}")]
    BadDate(String),
}

/// Immutable trading calendar, built once at startup.
#[derive(Debug, Clone)]
pub struct MarketCalendar {
    holidays: HashSet<NaiveDate>,
    min_date: NaiveDate,
}

impl MarketCalendar {
    pub fn new(holidays: HashSet<NaiveDate>, min_date: NaiveDate) -> Self {
        Self { holidays, min_date }
    }

    /// Load holidays from a JSON file containing an array of `YYYY-MM-DD`
    /// strings, the format the NSE holiday dump ships in.
    pub fn from_file(path: impl AsRef<Path>, min_date: NaiveDate) -> Result<Self, CalendarError> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<String> = serde_json::from_str(&raw)?;
        let holidays = entries
            .iter()
            .map(|s| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|_| CalendarError::BadDate(s.clone()))
            })
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self::new(holidays, min_date))
    }

    /// Validate against today's date (local clock).
    pub fn validate(&self, date: NaiveDate) -> Result<(), TradingDayError> {
        self.validate_at(date, Local::now().date_naive())
    }

    /// Range check, then weekend, then holiday; first failure wins.
    pub fn validate_at(&self, date: NaiveDate, today: NaiveDate) -> Result<(), TradingDayError> {
        if date < self.min_date || date > today {
            return Err(TradingDayError::OutOfRange(date, self.min_date, today));
        }
        let weekday = date.weekday();
        if matches!(weekday, Weekday::Sat | Weekday::Sun) {
            return Err(TradingDayError::Weekend(date, weekday));
        }
        if self.holidays.contains(&date) {
            return Err(TradingDayError::Holiday(date));
        }
        Ok(())
    }
}
