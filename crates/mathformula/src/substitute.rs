//! Variable bindings and substitution

use crate::token::Token;

/// Values bound to the variables `a`, `b`, `c` and `d` for one evaluation
///
/// `a` is always supplied; the others default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Variables {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Variables {
    /// Bind `a`, leaving `b`, `c` and `d` at zero
    pub fn new(a: f64) -> Self {
        Self {
            a,
            ..Self::default()
        }
    }

    pub fn with_b(mut self, b: f64) -> Self {
        self.b = b;
        self
    }

    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    pub fn with_d(mut self, d: f64) -> Self {
        self.d = d;
        self
    }

    /// Value bound to a variable name, if it is one of `a`..`d`
    pub fn get(&self, name: char) -> Option<f64> {
        match name {
            'a' => Some(self.a),
            'b' => Some(self.b),
            'c' => Some(self.c),
            'd' => Some(self.d),
            _ => None,
        }
    }
}

impl From<[f64; 4]> for Variables {
    fn from([a, b, c, d]: [f64; 4]) -> Self {
        Self { a, b, c, d }
    }
}

/// Replace bound variables with their values
///
/// Returns a new token list; unbound single letters pass through untouched
/// and are rejected later by the postfix converter.
pub fn substitute(tokens: &[Token], vars: &Variables) -> Vec<Token> {
    tokens
        .iter()
        .map(|token| match token {
            Token::Variable(name) => vars
                .get(*name)
                .map_or_else(|| token.clone(), Token::Number),
            other => other.clone(),
        })
        .collect()
}
