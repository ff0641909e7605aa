//! Unit tests for the fixed scan universe

use niftyscan::config::nifty50;
use std::collections::HashSet;

#[test]
fn test_table_carries_the_whole_index() {
    // The NIFTY50 index as tracked upstream resolves to 49 distinct tickers.
    assert_eq!(nifty50().len(), 49);
}

#[test]
fn test_symbols_and_tokens_are_unique() {
    let universe = nifty50();

    let symbols: HashSet<&str> = universe.iter().map(|i| i.symbol).collect();
    assert_eq!(symbols.len(), universe.len());

    let tokens: HashSet<u32> = universe.iter().map(|i| i.token).collect();
    assert_eq!(tokens.len(), universe.len());
}

#[test]
fn test_known_instrument_mapping() {
    let reliance = nifty50()
        .iter()
        .find(|i| i.symbol == "RELIANCE")
        .expect("RELIANCE in universe");
    assert_eq!(reliance.token, 738561);
}
