use rpncalc::{
    Error,
    error::{RuntimeError, SyntaxError},
    interpreter::{
        converter::{convert, to_postfix},
        evaluator::{evaluate, evaluate_postfix},
        lexer::{Operator, Token, TokenKind, classify, higher_or_equal_precedence},
        postfix::PostfixExpression,
        stack::{Stack, StackUnderflow},
    },
};

fn assert_postfix(infix: &str, expected: &str) {
    match to_postfix(infix) {
        Ok(postfix) => assert_eq!(postfix, expected, "wrong postfix for {infix:?}"),
        Err(e) => panic!("Conversion of {infix:?} failed: {e}"),
    }
}

#[test]
fn classification_covers_the_alphabet() {
    for digit in '0'..='9' {
        assert_eq!(classify(digit), TokenKind::Operand);
    }
    for op in ['+', '-', '*', '/'] {
        assert_eq!(classify(op), TokenKind::Operator);
    }
    assert_eq!(classify('('), TokenKind::GroupOpen);
    assert_eq!(classify(')'), TokenKind::GroupClose);
    assert_eq!(classify(' '), TokenKind::Whitespace);
}

#[test]
fn classification_rejects_everything_else() {
    for c in ['a', 'Z', '\t', '\n', '.', '%', '^', '=', 'é', '٣', '🦀'] {
        assert_eq!(classify(c), TokenKind::Invalid, "for {c:?}");
    }
}

#[test]
fn classification_is_stable() {
    for c in ['7', '*', '(', ' ', 'q'] {
        assert_eq!(classify(c), classify(c));
    }
}

#[test]
fn precedence_levels() {
    assert_eq!(Operator::Add.precedence(), 1);
    assert_eq!(Operator::Sub.precedence(), 1);
    assert_eq!(Operator::Mul.precedence(), 2);
    assert_eq!(Operator::Div.precedence(), 2);

    assert!(higher_or_equal_precedence(Operator::Add, Operator::Sub));
    assert!(higher_or_equal_precedence(Operator::Div, Operator::Mul));
    assert!(higher_or_equal_precedence(Operator::Mul, Operator::Sub));
    assert!(!higher_or_equal_precedence(Operator::Sub, Operator::Mul));
}

#[test]
fn stack_underflow_is_explicit() {
    let mut stack: Stack<i64> = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(StackUnderflow));

    stack.push(4);
    stack.push(2);
    assert_eq!(stack.peek(), Some(&2));
    assert_eq!(stack.pop_if(|top| *top > 5), None);
    assert_eq!(stack.pop_if(|top| *top == 2), Some(2));
    assert_eq!(stack.len(), 1);
}

#[test]
fn operators_follow_their_operands() {
    assert_postfix("2+3", "23+");
    assert_postfix("2+3*4", "234*+");
    assert_postfix("2*3+4", "23*4+");
    assert_postfix("8-4-2", "84-2-");
    assert_postfix("8/4/2", "84/2/");
    assert_postfix("1+2*3-4", "123*+4-");
}

#[test]
fn parentheses_are_removed() {
    assert_postfix("(2+3)*4", "23+4*");
    assert_postfix("2*(3+4)", "234+*");
    assert_postfix("((1))", "1");
    assert_postfix("(1+2)*(3-4)", "12+34-*");
}

#[test]
fn spaces_are_preserved_in_postfix() {
    assert_postfix("2 + 3", "2  3+");
    assert_postfix(" (2) ", " 2 ");
    assert_postfix("8 - 4 - 2", "8  4 - 2-");
}

#[test]
fn malformed_input_still_converts() {
    assert_postfix("", "");
    assert_postfix("+", "+");
    assert_postfix("23", "23");
}

#[test]
fn conversion_rejects_invalid_characters() {
    assert_eq!(to_postfix("1 + b"),
               Err(SyntaxError::InvalidCharacter { character: 'b',
                                                   position:  4, }));
}

#[test]
fn conversion_rejects_unbalanced_parentheses() {
    assert_eq!(to_postfix("(1+2"),
               Err(SyntaxError::UnbalancedParentheses { position: 0 }));
    assert_eq!(to_postfix("1+2)"),
               Err(SyntaxError::UnbalancedParentheses { position: 3 }));
}

#[test]
fn converted_tokens_keep_source_positions() {
    let postfix = convert("2 * 3").unwrap();
    assert_eq!(postfix.tokens(),
               [(Token::Operand(2), 0),
                (Token::Whitespace, 1),
                (Token::Whitespace, 3),
                (Token::Operand(3), 4),
                (Token::Operator(Operator::Mul), 2)]);
    assert_eq!(postfix.end(), 5);
}

#[test]
fn postfix_text_round_trips() {
    let postfix: PostfixExpression = "84-2- ".parse().unwrap();
    assert_eq!(postfix.to_string(), "84-2- ");
    assert_eq!(evaluate(&postfix), Ok(2));
}

#[test]
fn postfix_evaluation() {
    assert_eq!(evaluate_postfix("23+"), Ok(5));
    assert_eq!(evaluate_postfix("93/"), Ok(3));
    assert_eq!(evaluate_postfix("9 3 -"), Ok(6));
    assert_eq!(evaluate_postfix("5"), Ok(5));
}

#[test]
fn postfix_rejects_parentheses() {
    assert!(matches!(evaluate_postfix("(23+)"),
                     Err(Error::Runtime(RuntimeError::MalformedExpression { position: 0, .. }))));
}

#[test]
fn postfix_rejects_invalid_characters() {
    assert_eq!(evaluate_postfix("23x"),
               Err(Error::Syntax(SyntaxError::InvalidCharacter { character: 'x',
                                                                 position:  2, })));
}

#[test]
fn postfix_errors_point_into_postfix_text() {
    assert_eq!(evaluate_postfix("50/"),
               Err(Error::Runtime(RuntimeError::DivisionByZero { position: 2 })));
    assert!(matches!(evaluate_postfix("123+"),
                     Err(Error::Runtime(RuntimeError::MalformedExpression { position: 4, .. }))));
}
