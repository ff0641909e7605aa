//! External market-data integrations.

pub mod kite;
pub mod market_data;

pub use market_data::{CandleSource, FetchError};
