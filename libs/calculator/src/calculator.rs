//! Calculator - validated arithmetic with history and optional logging
//!
//! Every call validates both operands (first, then second) before computing.
//! A call that fails validation leaves no trace: no history entry, no log line.

use serde_json::Value;
use tracing::{info, warn};

use crate::chain::Chain;
use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::history::{History, HistoryEntry};
use crate::operand::{validate, Operand};
use crate::operation::Operation;

/// Calculator instance
///
/// Owns its history and logging flag; independent instances share nothing.
///
/// # Example
/// ```
/// use calculator::{Calculator, CalculatorConfig};
///
/// let mut calc = Calculator::new(CalculatorConfig::with_logging(false));
/// assert_eq!(calc.add(3.0, 2.0).unwrap(), 5.0);
/// assert_eq!(calc.divide(9.0, 0.0).unwrap(), f64::INFINITY);
/// assert_eq!(calc.history().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    history: History,
    logging_enabled: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            history: History::new(),
            logging_enabled: config.enable_log,
        }
    }

    pub fn add(&mut self, a: f64, b: f64) -> Result<f64> {
        self.evaluate(Operation::Add, a, b)
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> Result<f64> {
        self.evaluate(Operation::Subtract, a, b)
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> Result<f64> {
        self.evaluate(Operation::Multiply, a, b)
    }

    /// Divide `a` by `b`; a zero divisor yields `f64::INFINITY`, not an error
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64> {
        self.evaluate(Operation::Divide, a, b)
    }

    /// Run `operation` on two operands
    pub fn evaluate(&mut self, operation: Operation, a: f64, b: f64) -> Result<f64> {
        let a = validate(a, operation.name())?;
        let b = validate(b, operation.name())?;

        if operation.is_degenerate(b) && self.logging_enabled {
            warn!(a, "divide by zero, returning infinity");
        }

        let result = operation.apply(a, b);
        self.record(HistoryEntry::new(operation, a, b, result));
        Ok(result)
    }

    /// Run `operation` on operands from untyped JSON input.
    ///
    /// Non-numbers are rejected the same way NaN is.
    pub fn evaluate_json(&mut self, operation: Operation, a: &Value, b: &Value) -> Result<f64> {
        let a = Operand::from_json(a, operation.name())?;
        let b = Operand::from_json(b, operation.name())?;
        self.evaluate(operation, a.get(), b.get())
    }

    fn record(&mut self, entry: HistoryEntry) {
        if self.logging_enabled {
            info!(
                operation = entry.operation().name(),
                a = entry.a(),
                b = entry.b(),
                result = entry.result(),
                "{}",
                entry.describe()
            );
        }
        self.history.record(entry);
    }

    /// Copy of the history in call order
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    /// Read-only view of the ledger
    pub fn ledger(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn enable_logging(&mut self) {
        self.logging_enabled = true;
    }

    pub fn disable_logging(&mut self) {
        self.logging_enabled = false;
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.logging_enabled
    }

    /// Start a chain seeded with `initial`
    pub fn chain(&mut self, initial: f64) -> Result<Chain<'_>> {
        Chain::new(self, initial)
    }

    /// Start a chain seeded with zero
    pub fn chain_from_zero(&mut self) -> Chain<'_> {
        Chain::from_zero(self)
    }
}
