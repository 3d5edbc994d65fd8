//! Function table
//!
//! The four unary functions a formula may call.

use std::fmt;

/// Supported functions, each taking exactly one argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Abs,
    Floor,
    Ceil,
    Round,
}

impl Function {
    /// Every supported function
    pub const ALL: [Function; 4] = [
        Function::Abs,
        Function::Floor,
        Function::Ceil,
        Function::Round,
    ];

    /// Look a function up by name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "abs" => Some(Function::Abs),
            "floor" => Some(Function::Floor),
            "ceil" => Some(Function::Ceil),
            "round" => Some(Function::Round),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Function::Abs => "abs",
            Function::Floor => "floor",
            Function::Ceil => "ceil",
            Function::Round => "round",
        }
    }

    /// Apply the function to its argument
    ///
    /// `round` rounds half to even: `round(2.5) == 2`, `round(3.5) == 4`.
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Function::Abs => arg.abs(),
            Function::Floor => arg.floor(),
            Function::Ceil => arg.ceil(),
            Function::Round => arg.round_ties_even(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        for function in Function::ALL {
            assert_eq!(Function::from_name(function.name()), Some(function));
        }
        assert_eq!(Function::from_name("sqrt"), None);
        assert_eq!(Function::from_name("ABS"), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Function::Abs.apply(-7.0), 7.0);
        assert_eq!(Function::Floor.apply(2.7), 2.0);
        assert_eq!(Function::Floor.apply(-2.1), -3.0);
        assert_eq!(Function::Ceil.apply(2.1), 3.0);
        assert_eq!(Function::Ceil.apply(-2.7), -2.0);
    }

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(Function::Round.apply(2.5), 2.0);
        assert_eq!(Function::Round.apply(3.5), 4.0);
        assert_eq!(Function::Round.apply(-0.5), -0.0);
        assert_eq!(Function::Round.apply(2.6), 3.0);
    }
}
