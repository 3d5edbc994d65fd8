//! Infix to postfix conversion
//!
//! A shunting-yard pass over the substituted token list. Functions are held
//! on the operator stack until the `)` closing their argument, so a function
//! always applies to its own parenthesised operand.
//!
//! A `-` is unary when it starts the formula or follows an operator or `(`.
//! Directly before a number the sign is folded into the literal; before
//! anything else a [`PostfixItem::Negate`] is emitted. A unary `+` is dropped.

use crate::error::{FormulaError, FormulaResult};
use crate::functions::Function;
use crate::operator::{Operator, NEGATE_PRECEDENCE, PAREN_PRECEDENCE};
use crate::token::Token;
use std::fmt;

/// One element of a postfix (RPN) sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixItem {
    Number(f64),
    Operator(Operator),
    /// Prefix negation; computes `0 - operand`
    Negate,
    Function(Function),
}

impl fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixItem::Number(n) => write!(f, "{n:?}"),
            PostfixItem::Operator(op) => write!(f, "{op}"),
            PostfixItem::Negate => f.write_str("neg"),
            PostfixItem::Function(func) => write!(f, "{func}"),
        }
    }
}

/// Entry on the operator stack
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Operator(Operator),
    Negate,
    Function(Function),
    LeftParen,
}

impl Pending {
    fn precedence(self) -> u8 {
        match self {
            Pending::Operator(op) => op.precedence(),
            Pending::Negate => NEGATE_PRECEDENCE,
            // Only ever directly below its `(`, so never popped by an operator
            Pending::Function(_) => 0,
            Pending::LeftParen => PAREN_PRECEDENCE,
        }
    }

    fn into_item(self) -> Option<PostfixItem> {
        match self {
            Pending::Operator(op) => Some(PostfixItem::Operator(op)),
            Pending::Negate => Some(PostfixItem::Negate),
            Pending::Function(func) => Some(PostfixItem::Function(func)),
            Pending::LeftParen => None,
        }
    }
}

/// Convert substituted infix tokens to postfix order
///
/// Fails with [`FormulaError::MismatchedParentheses`] on unbalanced
/// parentheses and [`FormulaError::UnexpectedToken`] on an unbound variable or
/// an identifier that is not a function call.
pub fn to_postfix(tokens: &[Token]) -> FormulaResult<Vec<PostfixItem>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();
    let mut previous: Option<&Token> = None;
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        match token {
            Token::Number(n) => output.push(PostfixItem::Number(*n)),

            Token::Variable(name) => {
                return Err(FormulaError::UnexpectedToken(name.to_string()));
            }

            Token::Function(name) => {
                let is_call = matches!(iter.peek(), Some(Token::LeftParen));
                let function = Function::from_name(name)
                    .filter(|_| is_call)
                    .ok_or_else(|| FormulaError::UnexpectedToken(name.clone()))?;
                stack.push(Pending::Function(function));
            }

            Token::LeftParen => stack.push(Pending::LeftParen),

            Token::RightParen => {
                loop {
                    match stack.pop() {
                        Some(Pending::LeftParen) => break,
                        Some(entry) => output.extend(entry.into_item()),
                        None => return Err(FormulaError::MismatchedParentheses),
                    }
                }
                if let Some(&Pending::Function(function)) = stack.last() {
                    stack.pop();
                    output.push(PostfixItem::Function(function));
                }
            }

            Token::Operator(op) if is_unary_position(previous) => match op {
                Operator::Subtract => {
                    let literal = match iter.peek() {
                        Some(Token::Number(n)) => Some(*n),
                        _ => None,
                    };
                    if let Some(n) = literal {
                        output.push(PostfixItem::Number(-n));
                        previous = iter.next();
                        continue;
                    }
                    // Prefix: pops nothing
                    stack.push(Pending::Negate);
                }
                Operator::Add => {}
                // No left operand; the evaluator reports the missing operand
                _ => push_binary(*op, &mut stack, &mut output),
            },

            Token::Operator(op) => push_binary(*op, &mut stack, &mut output),
        }

        previous = Some(token);
    }

    while let Some(entry) = stack.pop() {
        match entry.into_item() {
            Some(item) => output.push(item),
            None => return Err(FormulaError::MismatchedParentheses),
        }
    }

    tracing::trace!(len = output.len(), "postfix conversion complete");
    Ok(output)
}

/// Whether an operator at this position has no left operand
fn is_unary_position(previous: Option<&Token>) -> bool {
    matches!(
        previous,
        None | Some(Token::Operator(_)) | Some(Token::LeftParen)
    )
}

fn push_binary(op: Operator, stack: &mut Vec<Pending>, output: &mut Vec<PostfixItem>) {
    while let Some(&top) = stack.last() {
        if top == Pending::LeftParen || top.precedence() < op.precedence() {
            break;
        }
        stack.pop();
        output.extend(top.into_item());
    }
    stack.push(Pending::Operator(op));
}
