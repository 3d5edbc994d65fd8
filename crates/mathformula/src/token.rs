//! Formula tokenizer
//!
//! Splits formula text into [`Token`]s, trying each category in priority
//! order at every position:
//!
//! 1. numeric literal (`12`, `3.5`, `1e-3`, `0x1f`)
//! 2. function name (two or more letters)
//! 3. variable (exactly one letter)
//! 4. operator or parenthesis (`**`, `//`, `+ - * / % ( )`)
//!
//! Anything else is skipped. Rejecting stray characters is the validator's
//! job, not the tokenizer's.

use crate::operator::Operator;
use std::fmt;

/// A classified lexical unit of a formula
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal, or a substituted variable value
    Number(f64),
    /// Single-letter variable name
    Variable(char),
    /// Multi-letter identifier; not necessarily a supported function
    Function(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the fractional part, so 2.0 shows as "2.0"
            Token::Number(n) => write!(f, "{n:?}"),
            Token::Variable(name) => write!(f, "{name}"),
            Token::Function(name) => f.write_str(name),
            Token::Operator(op) => write!(f, "{op}"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// Tokenize formula text
///
/// Never fails: unrecognised characters are dropped. A `-` is always its own
/// operator token, even directly before a digit; the postfix converter
/// decides whether it is unary.
///
/// # Example
/// ```rust
/// use mathformula::{tokenize, Operator, Token};
///
/// let tokens = tokenize("a + abs(2)");
/// assert_eq!(tokens[0], Token::Variable('a'));
/// assert_eq!(tokens[1], Token::Operator(Operator::Add));
/// assert_eq!(tokens[2], Token::Function("abs".into()));
/// ```
pub fn tokenize(formula: &str) -> Vec<Token> {
    Tokenizer::new(formula).collect()
}

/// Join tokens back into formula text, separated by single spaces
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a stand-alone number: optional sign, then a decimal or `0x`/`0X` literal
///
/// ```rust
/// use mathformula::parse_number;
///
/// assert_eq!(parse_number("-0x10"), Some(-16.0));
/// assert_eq!(parse_number("2.5e1"), Some(25.0));
/// assert_eq!(parse_number("--1"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if unsigned.starts_with(['+', '-']) {
        return None;
    }

    let hex = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"));
    let magnitude = match hex {
        Some(digits) if !digits.is_empty() => parse_hex(digits)?,
        Some(_) => return None,
        None => unsigned.parse::<f64>().ok()?,
    };

    Some(if negative { -magnitude } else { magnitude })
}

fn parse_hex(digits: &str) -> Option<f64> {
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(16).map(|d| acc * 16.0 + f64::from(d))
    })
}

/// Iterator over the tokens of a formula
struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&pred) {
            self.advance();
        }
    }

    fn scan_token(&mut self) -> Option<Token> {
        loop {
            let c = self.peek_char()?;

            if c.is_ascii_digit() {
                return Some(self.scan_number());
            }

            if c.is_ascii_alphabetic() {
                return Some(self.scan_identifier());
            }

            if let Some(token) = self.scan_operator(c) {
                return Some(token);
            }

            // Whitespace and anything unrecognised
            self.advance();
        }
    }

    fn scan_number(&mut self) -> Token {
        if self.peek_char() == Some('0')
            && matches!(self.peek_char_at(1), Some('x' | 'X'))
            && self.peek_char_at(2).is_some_and(|c| c.is_ascii_hexdigit())
        {
            self.advance();
            self.advance();
            let start = self.pos;
            self.advance_while(|c| c.is_ascii_hexdigit());
            let value = parse_hex(&self.input[start..self.pos]).unwrap_or_default();
            return Token::Number(value);
        }

        let start = self.pos;
        self.advance_while(|c| c.is_ascii_digit());

        // Fraction only when a digit follows the point
        if self.peek_char() == Some('.') && self.peek_char_at(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
        }

        // Exponent only when digits follow, otherwise `e` starts an identifier
        if matches!(self.peek_char(), Some('e' | 'E')) {
            let digits_at = match self.peek_char_at(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self.peek_char_at(digits_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..digits_at {
                    self.advance();
                }
                self.advance_while(|c| c.is_ascii_digit());
            }
        }

        // The scanned text is always valid float syntax
        let value = self.input[start..self.pos].parse().unwrap_or_default();
        Token::Number(value)
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        self.advance_while(|c| c.is_ascii_alphabetic());
        let text = &self.input[start..self.pos];

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(name), None) => Token::Variable(name),
            _ => Token::Function(text.to_string()),
        }
    }

    fn scan_operator(&mut self, c: char) -> Option<Token> {
        let next = self.peek_char_at(1);
        let (token, width) = match (c, next) {
            ('*', Some('*')) => (Token::Operator(Operator::Power), 2),
            ('/', Some('/')) => (Token::Operator(Operator::FloorDivide), 2),
            ('*', _) => (Token::Operator(Operator::Multiply), 1),
            ('/', _) => (Token::Operator(Operator::Divide), 1),
            ('%', _) => (Token::Operator(Operator::Modulo), 1),
            ('+', _) => (Token::Operator(Operator::Add), 1),
            ('-', _) => (Token::Operator(Operator::Subtract), 1),
            ('(', _) => (Token::LeftParen, 1),
            (')', _) => (Token::RightParen, 1),
            _ => return None,
        };
        for _ in 0..width {
            self.advance();
        }
        Some(token)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.scan_token()
    }
}
