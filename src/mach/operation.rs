use super::Number;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Arithmetic and comparison on evaluated operands. Comparisons and logic
/// produce `1` or `0`; any nonzero value is true.
pub struct Operation {}

impl Operation {
    pub fn is_true(val: &Number) -> bool {
        !val.is_zero()
    }

    pub fn truth(b: bool) -> Number {
        Number::from(b)
    }

    pub fn not(val: &Number) -> Number {
        Operation::truth(val.is_zero())
    }

    pub fn sum(lhs: Number, rhs: Number) -> Result<Number> {
        Ok(lhs + rhs)
    }

    /// Saturates at zero.
    pub fn subtract(lhs: Number, rhs: Number) -> Result<Number> {
        Ok(lhs - rhs)
    }

    pub fn multiply(lhs: Number, rhs: Number) -> Result<Number> {
        Ok(lhs * rhs)
    }

    pub fn divide(lhs: Number, rhs: Number) -> Result<Number> {
        if rhs.is_zero() {
            return Err(error!(DivisionByZero));
        }
        Ok(lhs / rhs)
    }

    pub fn modulus(lhs: Number, rhs: Number) -> Result<Number> {
        if rhs.is_zero() {
            return Err(error!(DivisionByZero));
        }
        Ok(lhs % rhs)
    }

    pub fn less(lhs: Number, rhs: Number) -> Result<Number> {
        Ok(Operation::truth(lhs < rhs))
    }

    pub fn greater(lhs: Number, rhs: Number) -> Result<Number> {
        Ok(Operation::truth(lhs > rhs))
    }

    pub fn equal(lhs: Number, rhs: Number) -> Result<Number> {
        Ok(Operation::truth(lhs == rhs))
    }
}
