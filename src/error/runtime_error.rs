#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix expression.
pub enum RuntimeError {
    /// The postfix expression cannot be consumed into exactly one value.
    MalformedExpression {
        /// Details describing what went wrong.
        details:  String,
        /// The byte offset where the problem was detected.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset of the `/` operator.
        position: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The byte offset of the operator.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedExpression { details, position } => {
                write!(f, "Error at position {position}: Malformed expression: {details}.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
