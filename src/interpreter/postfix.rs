use std::{fmt, str::FromStr};

use crate::{
    error::SyntaxError,
    interpreter::lexer::{Token, tokens},
};

/// An expression in postfix order.
///
/// Each token keeps the byte offset it had in the text it came from, so
/// errors raised while evaluating a converted expression point into the
/// infix source. Displaying the expression yields its postfix text.
///
/// # Example
/// ```
/// use rpncalc::interpreter::postfix::PostfixExpression;
///
/// let postfix: PostfixExpression = "23 +".parse().unwrap();
/// assert_eq!(postfix.tokens().len(), 4);
/// assert_eq!(postfix.to_string(), "23 +");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostfixExpression {
    tokens: Vec<(Token, usize)>,
    end:    usize,
}

impl PostfixExpression {
    /// Creates an empty expression for a source of `source_len` bytes.
    #[must_use]
    pub fn with_source_len(source_len: usize) -> Self {
        Self { tokens: Vec::with_capacity(source_len),
               end:    source_len, }
    }

    /// Appends a token found at `position` in the source.
    pub fn push(&mut self, token: Token, position: usize) {
        self.tokens.push((token, position));
    }

    /// The tokens in evaluation order, each with its source offset.
    #[must_use]
    pub fn tokens(&self) -> &[(Token, usize)] {
        &self.tokens
    }

    /// The offset just past the end of the source.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }
}

impl fmt::Display for PostfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens
            .iter()
            .try_for_each(|(token, _)| write!(f, "{}", token.symbol()))
    }
}

impl FromStr for PostfixExpression {
    type Err = SyntaxError;

    /// Reads postfix text. Positions refer to offsets within `source`.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut expression = Self::with_source_len(source.len());
        for token in tokens(source) {
            let (token, position) = token?;
            expression.push(token, position);
        }
        Ok(expression)
    }
}
