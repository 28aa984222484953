//! The four arithmetic operations
//!
//! Each operation is a pure binary function of two operands. Division by zero
//! is not an error: it yields `f64::INFINITY` regardless of the dividend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Returned when a string names none of the four operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operation: {0}")]
pub struct ParseOperationError(pub String);

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Lowercase operation name (`add`, `subtract`, ...)
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Operator symbol used in log lines
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Compute `a <op> b` without validation or side effects.
    ///
    /// A zero divisor (either sign) yields positive infinity, also for `0 / 0`.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => {
                if b == 0.0 {
                    f64::INFINITY
                } else {
                    a / b
                }
            },
        }
    }

    /// Whether `apply(_, b)` falls back to the infinity sentinel
    pub fn is_degenerate(self, b: f64) -> bool {
        self == Operation::Divide && b == 0.0
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Accepts either the name (case-insensitive) or the symbol
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.symbol() == trimmed || op.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseOperationError(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operation::Add.apply(3.0, 2.0), 5.0);
        assert_eq!(Operation::Subtract.apply(10.0, 4.0), 6.0);
        assert_eq!(Operation::Multiply.apply(5.0, 3.0), 15.0);
        assert_eq!(Operation::Divide.apply(12.0, 3.0), 4.0);
    }

    #[test]
    fn test_divide_by_zero_is_positive_infinity() {
        assert_eq!(Operation::Divide.apply(9.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(-9.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(0.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(1.0, -0.0), f64::INFINITY);
    }

    #[test]
    fn test_is_degenerate_only_for_zero_divisor() {
        assert!(Operation::Divide.is_degenerate(0.0));
        assert!(!Operation::Divide.is_degenerate(2.0));
        assert!(!Operation::Multiply.is_degenerate(0.0));
    }

    #[test]
    fn test_parse_name_and_symbol() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!(" Divide ".parse::<Operation>().unwrap(), Operation::Divide);
        assert_eq!("*".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("-".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(ParseOperationError("modulo".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_lowercase_name() {
        let json = serde_json::to_string(&Operation::Subtract).unwrap();
        assert_eq!(json, "\"subtract\"");
        let op: Operation = serde_json::from_str("\"multiply\"").unwrap();
        assert_eq!(op, Operation::Multiply);
    }
}
