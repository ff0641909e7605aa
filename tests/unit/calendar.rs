//! Unit tests for trading-day validation

use chrono::{NaiveDate, Weekday};
use niftyscan::calendar::{MarketCalendar, TradingDayError};
use std::collections::HashSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn calendar() -> MarketCalendar {
    // Republic Day 2024 (a Friday)
    let holidays: HashSet<NaiveDate> = [date(2024, 1, 26)].into_iter().collect();
    MarketCalendar::new(holidays, date(2020, 1, 1))
}

const TODAY: (i32, u32, u32) = (2024, 6, 3);

fn today() -> NaiveDate {
    date(TODAY.0, TODAY.1, TODAY.2)
}

#[test]
fn test_ordinary_weekday_is_accepted() {
    assert_eq!(calendar().validate_at(date(2024, 1, 2), today()), Ok(()));
}

#[test]
fn test_date_before_min_is_rejected() {
    let result = calendar().validate_at(date(2019, 12, 31), today());
    assert!(matches!(result, Err(TradingDayError::OutOfRange(..))));
}

#[test]
fn test_future_date_is_rejected() {
    let result = calendar().validate_at(date(2024, 6, 4), today());
    assert!(matches!(result, Err(TradingDayError::OutOfRange(..))));
}

#[test]
fn test_today_itself_is_accepted() {
    // 2024-06-03 is a Monday
    assert_eq!(calendar().validate_at(today(), today()), Ok(()));
}

#[test]
fn test_weekend_is_rejected_with_day() {
    let saturday = calendar().validate_at(date(2024, 1, 6), today());
    assert!(matches!(
        saturday,
        Err(TradingDayError::Weekend(_, Weekday::Sat))
    ));

    let sunday = calendar().validate_at(date(2024, 1, 7), today());
    assert!(matches!(
        sunday,
        Err(TradingDayError::Weekend(_, Weekday::Sun))
    ));
}

#[test]
fn test_holiday_is_rejected() {
    let result = calendar().validate_at(date(2024, 1, 26), today());
    assert_eq!(result, Err(TradingDayError::Holiday(date(2024, 1, 26))));
}

#[test]
fn test_range_check_wins_over_weekend() {
    // A Saturday before MIN_DATE reports out-of-range, not weekend.
    let result = calendar().validate_at(date(2019, 12, 28), today());
    assert!(matches!(result, Err(TradingDayError::OutOfRange(..))));
}
