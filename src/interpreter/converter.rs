use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{SyntaxResult, Token, higher_or_equal_precedence, tokens},
        postfix::PostfixExpression,
        stack::{OperatorStack, Pending, StackUnderflow},
    },
};

/// Converts an infix expression to postfix (Reverse Polish) form.
///
/// The input is read left to right in a single pass. Operands and spaces are
/// copied to the output as they appear; operators wait on an operator stack
/// until an operator of lower precedence, a closing parenthesis or the end of
/// the input releases them. Operators of equal precedence are released before
/// the new one is pushed, so they associate to the left.
///
/// Spaces are preserved verbatim, so the output keeps the spacing of the
/// source. Parentheses never appear in the output.
///
/// # Parameters
/// - `infix`: The expression to convert.
///
/// # Returns
/// The postfix expression, each token tagged with its offset in `infix`.
///
/// # Errors
/// - `InvalidCharacter` if `infix` contains a character other than a digit,
///   `+ - * /`, a parenthesis or a space.
/// - `UnbalancedParentheses` if a `)` has no open group to close, or a `(` is
///   still open at the end of the input.
pub fn convert(infix: &str) -> SyntaxResult<PostfixExpression> {
    let mut output = PostfixExpression::with_source_len(infix.len());
    let mut stack = OperatorStack::new();

    for token in tokens(infix) {
        let (token, position) = token?;

        match token {
            Token::Operand(_) | Token::Whitespace => output.push(token, position),
            Token::Operator(op) => {
                while let Some(Pending::Operator(top, at)) =
                    stack.pop_if(|pending| {
                             matches!(pending, Pending::Operator(top, _) if higher_or_equal_precedence(*top, op))
                         })
                {
                    output.push(Token::Operator(top), at);
                }
                stack.push(Pending::Operator(op, position));
            },
            Token::GroupOpen => stack.push(Pending::GroupOpen(position)),
            Token::GroupClose => close_group(&mut stack, &mut output, position)?,
        }
    }

    while let Ok(pending) = stack.pop() {
        match pending {
            Pending::Operator(op, at) => output.push(Token::Operator(op), at),
            Pending::GroupOpen(position) => {
                return Err(SyntaxError::UnbalancedParentheses { position });
            },
        }
    }

    Ok(output)
}

/// Converts an infix expression to postfix text.
///
/// Equivalent to rendering the result of [`convert`].
///
/// # Errors
/// Same as [`convert`].
///
/// # Example
/// ```
/// use rpncalc::interpreter::converter::to_postfix;
///
/// assert_eq!(to_postfix("2+3*4").unwrap(), "234*+");
/// assert_eq!(to_postfix("(2+3)*4").unwrap(), "23+4*");
/// assert_eq!(to_postfix("8 - 4").unwrap(), "8  4-");
/// ```
pub fn to_postfix(infix: &str) -> SyntaxResult<String> {
    convert(infix).map(|postfix| postfix.to_string())
}

/// Releases every operator pushed since the matching `(` and discards it.
///
/// # Errors
/// `UnbalancedParentheses` at `position` if the stack holds no open group.
fn close_group(stack: &mut OperatorStack,
               output: &mut PostfixExpression,
               position: usize)
               -> SyntaxResult<()> {
    loop {
        match stack.pop() {
            Ok(Pending::Operator(op, at)) => output.push(Token::Operator(op), at),
            Ok(Pending::GroupOpen(_)) => return Ok(()),
            Err(StackUnderflow) => return Err(SyntaxError::UnbalancedParentheses { position }),
        }
    }
}
