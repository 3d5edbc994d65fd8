//! Formula validation
//!
//! Runs before postfix conversion and rejects stray characters and calls to
//! functions outside the function table.

use crate::error::{FormulaError, FormulaResult};
use crate::functions::Function;
use crate::token::Token;

/// Non-alphanumeric characters a formula may contain
const VALID_SYMBOLS: &[char] = &['.', '+', '-', '*', '/', '%', '(', ')', ','];

/// Whether `c` may appear in a formula
///
/// Any letter passes; identifiers are checked against the tokens.
pub fn is_valid_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || c.is_alphabetic() || VALID_SYMBOLS.contains(&c)
}

/// Validate a formula
///
/// `formula` is the source text and `tokens` its substituted token list.
/// Variable letters in the text stand for numeric literals, and letters are
/// always allowed, so checking the source text is the same as checking the
/// substituted formula. Characters the tokenizer skipped are still seen.
pub fn validate(formula: &str, tokens: &[Token]) -> FormulaResult<()> {
    if let Some(c) = formula.chars().find(|&c| !is_valid_char(c)) {
        return Err(FormulaError::InvalidCharacter(c));
    }

    for pair in tokens.windows(2) {
        match pair {
            [Token::Function(name), Token::LeftParen] if Function::from_name(name).is_none() => {
                return Err(FormulaError::UnsupportedFunction(name.clone()));
            }
            // Bound variables are numbers by now; a letter left here is a call to `x(...)`
            [Token::Variable(name), Token::LeftParen] => {
                return Err(FormulaError::UnsupportedFunction(name.to_string()));
            }
            _ => {}
        }
    }

    Ok(())
}
