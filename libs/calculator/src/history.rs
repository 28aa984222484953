//! In-memory operation history
//!
//! Append-only ledger of successful operations. Entries are never edited or
//! removed one by one; the only way to shrink the ledger is a full clear.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::operation::Operation;

/// One successful operation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    operation: Operation,
    a: f64,
    b: f64,
    result: f64,
    timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(operation: Operation, a: f64, b: f64, result: f64) -> Self {
        Self::at(operation, a, b, result, Utc::now())
    }

    pub fn at(operation: Operation, a: f64, b: f64, result: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            operation,
            a,
            b,
            result,
            timestamp,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Human-readable trace line: `[time] a <symbol> b = result`
    pub fn describe(&self) -> String {
        format!(
            "[{}] {} {} {} = {}",
            self.timestamp.to_rfc3339(),
            self.a,
            self.operation.symbol(),
            self.b,
            self.result
        )
    }
}

/// Ordered history ledger
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Copy of all entries in insertion order
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.clone()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Serialize the ledger as a JSON array.
    ///
    /// JSON has no infinity, so sentinel results from a zero divisor come out
    /// as `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }
}
