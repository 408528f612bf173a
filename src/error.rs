/// Syntax errors.
///
/// Defines the errors raised while tokenizing and converting an infix
/// expression: characters outside the supported alphabet and parentheses
/// without a partner.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a postfix expression, such as
/// missing operands, division by zero and overflowing intermediate results.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure produced by [`crate::evaluate`].
pub enum Error {
    /// The expression could not be read.
    Syntax(SyntaxError),
    /// The expression was read but could not be computed.
    Runtime(RuntimeError),
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
