//! Formula evaluator
//!
//! Runs the whole pipeline: tokenize, substitute, validate, convert to
//! postfix, and evaluate the postfix sequence on an operand stack.

use crate::error::{FormulaError, FormulaResult};
use crate::postfix::{to_postfix, PostfixItem};
use crate::substitute::{substitute, Variables};
use crate::token::{render, tokenize, Token};
use crate::validate::validate;

/// Evaluate a formula with the given variable bindings
///
/// # Example
/// ```rust
/// use mathformula::{evaluate, Variables};
///
/// let vars = Variables::new(2.0).with_b(-3.0).with_c(5.0);
/// assert_eq!(evaluate("a + abs(b * 4 + c)", &vars).unwrap(), 9.0);
/// ```
pub fn evaluate(formula: &str, vars: &Variables) -> FormulaResult<f64> {
    trace(formula, vars).map(|trace| trace.result)
}

/// Evaluate a formula with positional values for `a`, `b`, `c` and `d`
pub fn evaluate_with(formula: &str, a: f64, b: f64, c: f64, d: f64) -> FormulaResult<f64> {
    evaluate(formula, &Variables::from([a, b, c, d]))
}

/// Every intermediate stage of one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Tokens of the source formula
    pub tokens: Vec<Token>,
    /// Tokens with bound variables replaced by their values
    pub substituted: Vec<Token>,
    /// The substituted tokens joined back into text
    pub rendered: String,
    pub postfix: Vec<PostfixItem>,
    pub result: f64,
}

/// Evaluate a formula, keeping every intermediate stage
pub fn trace(formula: &str, vars: &Variables) -> FormulaResult<Trace> {
    tracing::debug!(formula, "evaluating formula");

    let tokens = tokenize(formula);
    tracing::debug!(?tokens, "tokenized");

    let substituted = substitute(&tokens, vars);
    let rendered = render(&substituted);
    tracing::debug!(formula = %rendered, "substituted variables");

    validate(formula, &substituted)?;

    let postfix = to_postfix(&substituted)?;
    tracing::debug!(postfix = %render_postfix(&postfix), "converted to postfix");

    let result = evaluate_postfix(&postfix)?;
    tracing::debug!(result, "evaluated");

    Ok(Trace {
        tokens,
        substituted,
        rendered,
        postfix,
        result,
    })
}

/// Join postfix items into text, separated by single spaces
pub fn render_postfix(postfix: &[PostfixItem]) -> String {
    postfix
        .iter()
        .map(PostfixItem::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Evaluate a postfix sequence
///
/// Exactly one value must remain on the stack at the end.
pub fn evaluate_postfix(postfix: &[PostfixItem]) -> FormulaResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for item in postfix {
        let value = match *item {
            PostfixItem::Number(n) => n,
            PostfixItem::Function(function) => {
                let arg = pop_one(&mut stack, item)?;
                function.apply(arg)
            }
            PostfixItem::Negate => 0.0 - pop_one(&mut stack, item)?,
            PostfixItem::Operator(op) => {
                let available = stack.len();
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(FormulaError::InsufficientOperands {
                        token: op.to_string(),
                        needed: 2,
                        available,
                    });
                };
                op.apply(a, b)?
            }
        };
        tracing::trace!(%item, value, depth = stack.len() + 1, "push");
        stack.push(value);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(FormulaError::MalformedExpression {
            remaining: stack.len(),
        }),
    }
}

fn pop_one(stack: &mut Vec<f64>, item: &PostfixItem) -> FormulaResult<f64> {
    stack
        .pop()
        .ok_or_else(|| FormulaError::InsufficientOperands {
            token: item.to_string(),
            needed: 1,
            available: 0,
        })
}
