//! Error types for the calculator

use thiserror::Error;

/// Calculator errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Operand is NaN or not a number at all; `operation` names the call
    /// that ran the check
    #[error("Invalid number: {value} (in {operation})")]
    InvalidNumber {
        value: String,
        operation: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalcError {
    pub fn invalid_number(value: impl ToString, operation: &'static str) -> Self {
        Self::InvalidNumber {
            value: value.to_string(),
            operation,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_message_names_value_and_operation() {
        let err = CalcError::invalid_number(f64::NAN, "multiply");
        assert_eq!(err.to_string(), "Invalid number: NaN (in multiply)");
    }

    #[test]
    fn test_config_message() {
        let err = CalcError::config("bad extension");
        assert_eq!(err.to_string(), "Configuration error: bad extension");
    }
}
