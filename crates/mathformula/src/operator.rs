//! Binary operator table
//!
//! Precedence ranks and arithmetic for the seven binary operators. The table
//! is plain `match` arms and never changes at runtime.

use crate::error::{FormulaError, FormulaResult};
use std::fmt;

/// Sentinel rank of `(` on the operator stack; below every operator.
pub const PAREN_PRECEDENCE: u8 = 1;

/// Rank of prefix negation; binds tighter than every binary operator.
pub const NEGATE_PRECEDENCE: u8 = 5;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `**`
    Power,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `//`
    FloorDivide,
    /// `%`
    Modulo,
    /// `+`
    Add,
    /// `-`
    Subtract,
}

impl Operator {
    /// Precedence rank. Higher binds tighter.
    ///
    /// All operators pop on `>=`, so `**` is left-associative like the rest:
    /// `2 ** 3 ** 2` is `(2 ** 3) ** 2`.
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Power => 4,
            Operator::Multiply | Operator::Divide | Operator::FloorDivide | Operator::Modulo => 3,
            Operator::Add | Operator::Subtract => 2,
        }
    }

    /// Source text of the operator
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Power => "**",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::FloorDivide => "//",
            Operator::Modulo => "%",
            Operator::Add => "+",
            Operator::Subtract => "-",
        }
    }

    /// Apply the operator to `a` (left) and `b` (right)
    pub fn apply(self, a: f64, b: f64) -> FormulaResult<f64> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Power => Ok(a.powf(b)),
            Operator::Divide | Operator::FloorDivide | Operator::Modulo if b == 0.0 => {
                Err(FormulaError::DivisionByZero(self))
            }
            Operator::Divide => Ok(a / b),
            Operator::FloorDivide => Ok(floor_div_mod(a, b).0),
            Operator::Modulo => Ok(floor_div_mod(a, b).1),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Floor division and its matching modulus, computed from `fmod`.
///
/// The modulus takes the divisor's sign.
fn floor_div_mod(a: f64, b: f64) -> (f64, f64) {
    let mut rem = a % b;
    let mut div = (a - rem) / b;

    if rem != 0.0 {
        if (b < 0.0) != (rem < 0.0) {
            rem += b;
            div -= 1.0;
        }
    } else {
        rem = 0.0_f64.copysign(b);
    }

    let quotient = if div != 0.0 {
        let floored = div.floor();
        if div - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    } else {
        0.0_f64.copysign(a / b)
    };

    (quotient, rem)
}
