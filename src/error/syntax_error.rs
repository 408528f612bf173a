#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading an expression.
pub enum SyntaxError {
    /// Found a character that is not a digit, operator, parenthesis or space.
    InvalidCharacter {
        /// The character encountered.
        character: char,
        /// The byte offset where the error occurred.
        position:  usize,
    },
    /// A parenthesis has no matching partner.
    UnbalancedParentheses {
        /// The byte offset of the unmatched parenthesis.
        position: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => write!(f,
                                                                     "Error at position {position}: Unsupported character '{}'.",
                                                                     character.escape_debug()),

            Self::UnbalancedParentheses { position } => {
                write!(f, "Error at position {position}: Unbalanced parentheses.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
