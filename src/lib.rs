//! # rpncalc
//!
//! rpncalc evaluates integer arithmetic written with single-digit operands,
//! the operators `+ - * /`, parentheses and spaces. An expression is first
//! converted to postfix (Reverse Polish) form with an operator stack, then
//! reduced to a single value with an operand stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for conversion and evaluation.
///
/// This module defines every failure an expression can produce. Each error
/// carries the byte offset in the input where the problem was detected, so
/// callers can point at the offending character.
///
/// # Responsibilities
/// - Separates syntax errors (unsupported characters, unbalanced
///   parentheses) from runtime errors (missing operands, division by zero,
///   overflow).
/// - Unifies both under [`Error`] for the public entry point.
pub mod error;
/// Implements the two evaluation stages.
///
/// This module holds the lexer that classifies characters, the stack both
/// stages work on, the infix to postfix converter and the postfix evaluator.
pub mod interpreter;

pub use error::Error;

use crate::interpreter::{converter::convert, evaluator};

/// Evaluates an infix expression.
///
/// The expression is converted to postfix form and the postfix form is then
/// evaluated. Errors from either stage are returned unchanged, with positions
/// pointing into `expression`. Each call allocates its own stacks, so
/// concurrent calls share no state.
///
/// # Errors
/// Returns an error if the expression contains an unsupported character, has
/// unbalanced parentheses, lacks an operand, divides by zero or overflows.
///
/// # Examples
/// ```
/// use rpncalc::{
///     Error,
///     error::{RuntimeError, SyntaxError},
///     evaluate,
/// };
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20));
///
/// assert_eq!(evaluate("5/0"),
///            Err(Error::Runtime(RuntimeError::DivisionByZero { position: 1 })));
/// assert_eq!(evaluate("2+a"),
///            Err(Error::Syntax(SyntaxError::InvalidCharacter { character: 'a',
///                                                              position:  2, })));
/// ```
pub fn evaluate(expression: &str) -> Result<i64, Error> {
    let postfix = convert(expression)?;
    Ok(evaluator::evaluate(&postfix)?)
}
