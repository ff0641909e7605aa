//! Kite Connect historical-data client.

pub mod provider;

pub use provider::KiteHistoricalClient;
