//! The staged candle-filtering pipeline.

pub mod condition;
pub mod engine;
pub mod session;

pub use condition::passes;
pub use engine::ScanOrchestrator;
pub use session::SessionCandleCache;
