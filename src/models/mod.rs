//! Shared data models spanning the scan pipeline.

pub mod candle;
pub mod outcome;

pub use candle::{Candle, CandleSeries};
pub use outcome::{ScanLog, ScanOutcome};
