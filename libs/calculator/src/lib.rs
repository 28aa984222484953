//! calculator - Validated four-operation arithmetic
//!
//! Provides add, subtract, multiply and divide over `f64` with operand
//! validation, an in-memory operation history, optional logging and a fluent
//! chaining API.
//!
//! # Features
//!
//! - **Validation**: NaN operands are rejected with [`CalcError::InvalidNumber`];
//!   nothing is recorded or logged for a rejected call
//! - **Divide by zero**: returns `f64::INFINITY` and, with logging on, a warning
//! - **History**: append-only ledger, read as a copy, cleared only as a whole
//! - **Chaining**: `calc.chain(2.0)?.add(3.0)?.value()`
//!
//! # Example
//!
//! ```rust
//! use calculator::{Calculator, CalculatorConfig};
//!
//! let mut calc = Calculator::new(CalculatorConfig { enable_log: true });
//!
//! calc.add(3.0, 2.0)?;
//! calc.subtract(10.0, 4.0)?;
//! calc.multiply(5.0, 3.0)?;
//! calc.divide(12.0, 3.0)?;
//! assert_eq!(calc.divide(9.0, 0.0)?, f64::INFINITY);
//!
//! let result = calc.chain(2.0)?.add(3.0)?.multiply(4.0)?.divide(2.0)?.value();
//! assert_eq!(result, 10.0);
//! assert_eq!(calc.history().len(), 8);
//!
//! calc.disable_logging();
//! calc.add(1.0, 1.0)?;
//! # Ok::<(), calculator::CalcError>(())
//! ```
//!
//! # Log output
//!
//! | Event | Level | Line |
//! |-------|-------|------|
//! | successful operation | `INFO` | `[<rfc3339 time>] 3 + 2 = 5` |
//! | divide by zero | `WARN` | `divide by zero, returning infinity` |
//!
//! Both are suppressed while logging is disabled. Install a subscriber with
//! [`logging::init`] to see them on stderr.

pub mod calculator;
pub mod chain;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod operand;
pub mod operation;

// Re-exports for convenience
pub use calculator::Calculator;
pub use chain::Chain;
pub use config::CalculatorConfig;
pub use error::{CalcError, Result};
pub use history::{History, HistoryEntry};
pub use operand::{validate, Operand};
pub use operation::{Operation, ParseOperationError};
