//! Fluent chaining over a running accumulator
//!
//! Each step goes through the owning calculator, so chained operations are
//! validated, recorded in history and logged exactly like direct calls.

use crate::calculator::Calculator;
use crate::error::Result;
use crate::operand::validate;
use crate::operation::Operation;

/// Chain handle borrowing a calculator
///
/// ```
/// use calculator::{Calculator, CalculatorConfig};
///
/// let mut calc = Calculator::new(CalculatorConfig::with_logging(false));
/// let value = calc.chain(2.0)?.add(3.0)?.multiply(4.0)?.divide(2.0)?.value();
/// assert_eq!(value, 10.0);
/// # Ok::<(), calculator::CalcError>(())
/// ```
#[derive(Debug)]
pub struct Chain<'a> {
    calculator: &'a mut Calculator,
    acc: f64,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(calculator: &'a mut Calculator, initial: f64) -> Result<Self> {
        let acc = validate(initial, "chain")?;
        Ok(Self { calculator, acc })
    }

    pub(crate) fn from_zero(calculator: &'a mut Calculator) -> Self {
        Self {
            calculator,
            acc: 0.0,
        }
    }

    pub fn add(&mut self, operand: f64) -> Result<&mut Self> {
        self.step(Operation::Add, operand)
    }

    pub fn subtract(&mut self, operand: f64) -> Result<&mut Self> {
        self.step(Operation::Subtract, operand)
    }

    pub fn multiply(&mut self, operand: f64) -> Result<&mut Self> {
        self.step(Operation::Multiply, operand)
    }

    pub fn divide(&mut self, operand: f64) -> Result<&mut Self> {
        self.step(Operation::Divide, operand)
    }

    /// Current accumulator; the chain stays usable afterwards
    pub fn value(&self) -> f64 {
        self.acc
    }

    // accumulator is untouched when the step fails
    fn step(&mut self, operation: Operation, operand: f64) -> Result<&mut Self> {
        self.acc = self.calculator.evaluate(operation, self.acc, operand)?;
        Ok(self)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use crate::config::CalculatorConfig;
    use crate::error::CalcError;
    use crate::operation::Operation;
    use crate::Calculator;

    fn quiet() -> Calculator {
        Calculator::new(CalculatorConfig::with_logging(false))
    }

    #[test]
    fn test_chain_scenario() {
        let mut calc = quiet();
        let value = calc
            .chain(2.0)
            .unwrap()
            .add(3.0)
            .unwrap()
            .multiply(4.0)
            .unwrap()
            .divide(2.0)
            .unwrap()
            .value();
        assert_eq!(value, 10.0);
    }

    #[test]
    fn test_chain_records_each_step() {
        let mut calc = quiet();
        {
            let mut chain = calc.chain(2.0).unwrap();
            chain.add(3.0).unwrap().multiply(4.0).unwrap();
        }

        let history = calc.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].operation(), Operation::Add);
        assert_eq!((history[0].a(), history[0].result()), (2.0, 5.0));
        assert_eq!(history[1].operation(), Operation::Multiply);
        assert_eq!((history[1].a(), history[1].result()), (5.0, 20.0));
    }

    #[test]
    fn test_value_is_not_terminal() {
        let mut calc = quiet();
        let mut chain = calc.chain(1.0).unwrap();
        chain.add(1.0).unwrap();
        assert_eq!(chain.value(), 2.0);
        assert_eq!(chain.value(), 2.0);
        chain.subtract(5.0).unwrap();
        assert_eq!(chain.value(), -3.0);
    }

    #[test]
    fn test_chain_from_zero() {
        let mut calc = quiet();
        let mut chain = calc.chain_from_zero();
        assert_eq!(chain.value(), 0.0);
        assert_eq!(chain.add(7.0).unwrap().value(), 7.0);
    }

    #[test]
    fn test_chain_rejects_nan_seed() {
        let mut calc = quiet();
        let err = calc.chain(f64::NAN).unwrap_err();
        assert_eq!(err, CalcError::invalid_number("NaN", "chain"));
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_failed_step_keeps_accumulator() {
        let mut calc = quiet();
        let mut chain = calc.chain(4.0).unwrap();
        let err = chain.multiply(f64::NAN).unwrap_err();
        assert_eq!(err, CalcError::invalid_number("NaN", "multiply"));
        assert_eq!(chain.value(), 4.0);
        assert_eq!(chain.add(1.0).unwrap().value(), 5.0);
        drop(chain);
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_chain_continues_past_divide_by_zero() {
        let mut calc = quiet();
        let mut chain = calc.chain(3.0).unwrap();
        chain.divide(0.0).unwrap().add(1.0).unwrap();
        assert_eq!(chain.value(), f64::INFINITY);
    }
}
