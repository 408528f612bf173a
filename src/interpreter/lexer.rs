use logos::Logos;

use crate::error::SyntaxError;

/// Result type used while reading expressions.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Represents a lexical token in an expression.
///
/// Every token covers exactly one character of the source. Multi-digit
/// literals are not recognized: `12` lexes as two consecutive operands.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Single digit operand, such as `7`.
    #[regex(r"[0-9]", parse_digit)]
    Operand(u8),
    /// One of the four binary operators.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    GroupOpen,
    /// `)`
    #[token(")")]
    GroupClose,
    /// A single space. Kept in postfix output, skipped by evaluation.
    #[token(" ")]
    Whitespace,
}

impl Token {
    /// Returns the category this token belongs to.
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Operand(_) => TokenKind::Operand,
            Self::Operator(_) => TokenKind::Operator,
            Self::GroupOpen => TokenKind::GroupOpen,
            Self::GroupClose => TokenKind::GroupClose,
            Self::Whitespace => TokenKind::Whitespace,
        }
    }

    /// Returns the source character of this token.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Operand(digit) => (b'0' + digit) as char,
            Self::Operator(op) => op.symbol(),
            Self::GroupOpen => '(',
            Self::GroupClose => ')',
            Self::Whitespace => ' ',
        }
    }
}

/// The category of a single input character.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// `0` through `9`.
    Operand,
    /// `+`, `-`, `*` or `/`.
    Operator,
    /// `(`
    GroupOpen,
    /// `)`
    GroupClose,
    /// `' '`
    Whitespace,
    /// Anything else.
    Invalid,
}

/// The binary arithmetic operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns the binding strength of the operator: `1` for `+` and `-`,
    /// `2` for `*` and `/`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returns `true` when `a` binds at least as tightly as `b`.
///
/// The converter pops a stacked operator `a` before pushing `b` whenever this
/// holds, which makes operators of equal precedence associate to the left.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::{Operator, higher_or_equal_precedence};
///
/// assert!(higher_or_equal_precedence(Operator::Mul, Operator::Add));
/// assert!(higher_or_equal_precedence(Operator::Sub, Operator::Add));
/// assert!(!higher_or_equal_precedence(Operator::Add, Operator::Div));
/// ```
#[must_use]
pub const fn higher_or_equal_precedence(a: Operator, b: Operator) -> bool {
    a.precedence() >= b.precedence()
}

/// Classifies a single character.
///
/// The classification is total: every character outside the supported
/// alphabet is reported as [`TokenKind::Invalid`].
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::{TokenKind, classify};
///
/// assert_eq!(classify('7'), TokenKind::Operand);
/// assert_eq!(classify('/'), TokenKind::Operator);
/// assert_eq!(classify(' '), TokenKind::Whitespace);
/// assert_eq!(classify('a'), TokenKind::Invalid);
/// ```
#[must_use]
pub fn classify(character: char) -> TokenKind {
    let mut buffer = [0; 4];
    let mut lexer = Token::lexer(character.encode_utf8(&mut buffer));

    match (lexer.next(), lexer.next()) {
        (Some(Ok(token)), None) => token.kind(),
        _ => TokenKind::Invalid,
    }
}

/// Tokenizes an expression.
///
/// Yields each token together with its byte offset in `source`. A character
/// outside the supported alphabet yields
/// [`SyntaxError::InvalidCharacter`].
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::{Operator, Token, tokens};
///
/// let tokens: Vec<_> = tokens("2+3").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Operand(2), 0),
///                 (Token::Operator(Operator::Add), 1),
///                 (Token::Operand(3), 2)]);
/// ```
pub fn tokens<'a>(source: &'a str) -> impl Iterator<Item = SyntaxResult<(Token, usize)>> + 'a {
    Token::lexer(source).spanned().map(move |(token, span)| match token {
                                      Ok(token) => Ok((token, span.start)),
                                      Err(()) => {
                                          let character =
                                              source.get(span.clone())
                                                    .and_then(|s| s.chars().next())
                                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                                          Err(SyntaxError::InvalidCharacter { character,
                                                                              position: span.start })
                                      },
                                  })
}

/// Parses a digit operand from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(u8)`: The digit value.
/// - `None`: If the slice is not a digit.
fn parse_digit(lex: &logos::Lexer<Token>) -> Option<u8> {
    lex.slice().parse().ok()
}
