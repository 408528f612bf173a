use crate::{
    error::{Error, RuntimeError},
    interpreter::{
        lexer::{Operator, Token},
        postfix::PostfixExpression,
        stack::{OperandStack, StackUnderflow},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix expression.
///
/// Operands are pushed onto an operand stack; each operator pops its right
/// and then its left operand and pushes the result. Spaces are skipped. The
/// expression is valid only if exactly one value remains at the end.
///
/// # Parameters
/// - `expression`: The postfix expression, usually produced by
///   [`convert`](crate::interpreter::converter::convert).
///
/// # Returns
/// The single value the expression reduces to.
///
/// # Errors
/// - `MalformedExpression` if an operator lacks an operand, a parenthesis
///   appears, or the stack does not end with exactly one value.
/// - `DivisionByZero` if the divisor of `/` is zero.
/// - `Overflow` if an intermediate result does not fit in an `i64`.
pub fn evaluate(expression: &PostfixExpression) -> EvalResult<i64> {
    let mut stack = OperandStack::new();

    for &(token, position) in expression.tokens() {
        match token {
            Token::Operand(digit) => stack.push(i64::from(digit)),
            Token::Whitespace => {},
            Token::Operator(op) => {
                let missing_operand = |_: StackUnderflow| RuntimeError::MalformedExpression {
                    details: format!("operator '{op}' is missing an operand"),
                    position,
                };
                let rhs = stack.pop().map_err(&missing_operand)?;
                let lhs = stack.pop().map_err(&missing_operand)?;
                stack.push(apply(op, lhs, rhs, position)?);
            },
            Token::GroupOpen | Token::GroupClose => {
                return Err(RuntimeError::MalformedExpression {
                    details: "parentheses cannot appear in postfix form".to_string(),
                    position,
                });
            },
        }
    }

    let end = expression.end();
    let value = stack.pop().map_err(|StackUnderflow| RuntimeError::MalformedExpression {
                               details:  "expression is empty".to_string(),
                               position: end,
                           })?;

    if stack.is_empty() {
        Ok(value)
    } else {
        Err(RuntimeError::MalformedExpression { details:  format!("{} values remain without an operator to combine them",
                                                                  stack.len() + 1),
                                                position: end, })
    }
}

/// Evaluates postfix text.
///
/// Error positions refer to offsets within `postfix`.
///
/// # Errors
/// - `Syntax(InvalidCharacter)` for characters outside the supported
///   alphabet.
/// - `Runtime(_)` for every failure listed on [`evaluate`].
///
/// # Example
/// ```
/// use rpncalc::interpreter::evaluator::evaluate_postfix;
///
/// assert_eq!(evaluate_postfix("234*+").unwrap(), 14);
/// assert_eq!(evaluate_postfix("8 4 - 2 -").unwrap(), 2);
/// assert!(evaluate_postfix("2+").is_err());
/// ```
pub fn evaluate_postfix(postfix: &str) -> Result<i64, Error> {
    let expression: PostfixExpression = postfix.parse()?;
    Ok(evaluate(&expression)?)
}

/// Applies a binary operator to two operands.
///
/// Division truncates toward zero. All operations are checked, so a result
/// outside the `i64` range is reported instead of wrapping.
///
/// # Parameters
/// - `op`: The operator.
/// - `lhs`: Left operand.
/// - `rhs`: Right operand.
/// - `position`: Byte offset of the operator, for error reporting.
///
/// # Errors
/// - `DivisionByZero` if `op` is `/` and `rhs` is zero.
/// - `Overflow` if the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use rpncalc::{
///     error::RuntimeError,
///     interpreter::{evaluator::apply, lexer::Operator},
/// };
///
/// assert_eq!(apply(Operator::Div, 7, 2, 0), Ok(3));
/// assert_eq!(apply(Operator::Div, 7, 0, 4),
///            Err(RuntimeError::DivisionByZero { position: 4 }));
/// ```
pub fn apply(op: Operator, lhs: i64, rhs: i64, position: usize) -> EvalResult<i64> {
    let result = match op {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Sub => lhs.checked_sub(rhs),
        Operator::Mul => lhs.checked_mul(rhs),
        Operator::Div => {
            if rhs == 0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            lhs.checked_div(rhs)
        },
    };

    result.ok_or(RuntimeError::Overflow { position })
}
