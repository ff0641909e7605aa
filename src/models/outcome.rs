//! Scan result shape returned to the service layer.

use serde::Serialize;
use std::collections::BTreeMap;

/// Ordered, append-only log trail for one scan.
///
/// The orchestrator records every human-readable line here and returns the
/// whole sequence as part of the outcome; terminal or frontend mirroring is
/// the caller's concern.
#[derive(Debug, Default)]
pub struct ScanLog {
    lines: Vec<String>,
}

impl ScanLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Result of one scan invocation, immutable once returned.
///
/// `stagewise` holds one entry per evaluated checkpoint, keyed `"HH:MM"`.
/// A checkpoint that was never reached (funnel emptied earlier) has no key;
/// the checkpoint that emptied the funnel keeps its key with an empty list.
#[derive(Debug, Serialize)]
pub struct ScanOutcome {
    #[serde(rename = "final")]
    pub final_symbols: Vec<&'static str>,
    pub stagewise: BTreeMap<String, Vec<&'static str>>,
    pub logs: Vec<String>,
    /// How many universe symbols yielded at least one candle. Not part of the
    /// response body; lets the service layer tell "nothing could be fetched"
    /// apart from "fetched but nothing survived".
    #[serde(skip)]
    pub symbols_with_data: usize,
}

impl ScanOutcome {
    pub fn fetched_any(&self) -> bool {
        self.symbols_with_data > 0
    }
}
