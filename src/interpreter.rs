/// The converter module rewrites infix expressions in postfix form.
///
/// Conversion is a single left-to-right pass driven by an operator stack:
/// operands flow straight to the output while operators wait until
/// precedence, a closing parenthesis or the end of input releases them.
///
/// # Responsibilities
/// - Orders operators by precedence and left associativity.
/// - Removes grouping parentheses, rejecting unbalanced ones.
/// - Preserves spaces so the postfix form mirrors the source layout.
pub mod converter;
/// The evaluator module computes the value of a postfix expression.
///
/// # Responsibilities
/// - Reduces postfix tokens with an operand stack.
/// - Reports missing operands, leftover values, division by zero and
///   overflow.
pub mod evaluator;
/// The lexer module classifies characters into tokens.
///
/// Every supported character is a token of its own: digits, the four
/// operators, parentheses and the space. Anything else is rejected with its
/// position.
pub mod lexer;
/// The postfix module defines the token sequence passed from the converter
/// to the evaluator.
pub mod postfix;
/// Last-in-first-out storage used by both stages, with explicit underflow.
pub mod stack;
