//! Operand validation
//!
//! `f64` parameters already rule out non-numeric input, but NaN still has to be
//! rejected at runtime. Values arriving through JSON are checked for being a
//! number first.

use serde_json::Value;

use crate::error::{CalcError, Result};

/// Return `value` unchanged unless it is NaN.
///
/// Infinities pass: a chain that divided by zero keeps working with `inf`.
/// `operation` is the name reported in the error.
pub fn validate(value: f64, operation: &'static str) -> Result<f64> {
    if value.is_nan() {
        return Err(CalcError::invalid_number(value, operation));
    }
    Ok(value)
}

/// A validated, non-NaN operand
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Operand(f64);

impl Operand {
    pub fn get(self) -> f64 {
        self.0
    }

    /// Validate an operand coming from untyped JSON input
    pub fn from_json(value: &Value, operation: &'static str) -> Result<Self> {
        match value.as_f64() {
            Some(n) => validate(n, operation).map(Operand),
            None => Err(CalcError::invalid_number(value, operation)),
        }
    }
}
