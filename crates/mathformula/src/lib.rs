//! # mathformula
//!
//! Arithmetic formula evaluator.
//!
//! A formula is evaluated in fixed stages, each a public function:
//! - tokenize (text → [`Token`]s)
//! - substitute (variables `a`..`d` → numbers)
//! - validate (stray characters, unsupported functions)
//! - convert to postfix (shunting-yard)
//! - evaluate the postfix sequence
//!
//! Supported: `+ - * / // % **`, parentheses, unary minus, decimal,
//! scientific and hex literals, and `abs`, `floor`, `ceil`, `round`.
//! `**` is left-associative like every other operator.
//!
//! ## Example
//!
//! ```rust
//! use mathformula::{evaluate, evaluate_with, Variables};
//!
//! assert_eq!(evaluate("(a + 3) * 4", &Variables::new(2.0)).unwrap(), 20.0);
//! assert_eq!(evaluate_with("a // b", 7.0, 2.0, 0.0, 0.0).unwrap(), 3.0);
//! ```

pub mod error;
pub mod evaluator;
pub mod functions;
pub mod operator;
pub mod postfix;
pub mod substitute;
pub mod token;
pub mod validate;

pub use error::{ErrorKind, FormulaError, FormulaResult};
pub use evaluator::{evaluate, evaluate_postfix, evaluate_with, render_postfix, trace, Trace};
pub use functions::Function;
pub use operator::Operator;
pub use postfix::{to_postfix, PostfixItem};
pub use substitute::{substitute, Variables};
pub use token::{parse_number, render, tokenize, Token};
pub use validate::validate;
