use rpncalc::{Error, error::RuntimeError, evaluate};

/// A fully-parenthesized expression tree used as the reference evaluator.
#[derive(Clone)]
enum Tree {
    Digit(i64),
    Op(char, Box<Tree>, Box<Tree>),
}

impl Tree {
    fn render(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Op(op, lhs, rhs) => format!("({}{op}{})", lhs.render(), rhs.render()),
        }
    }

    /// `None` when the tree divides by zero.
    fn value(&self) -> Option<i64> {
        match self {
            Self::Digit(d) => Some(*d),
            Self::Op(op, lhs, rhs) => {
                let (lhs, rhs) = (lhs.value()?, rhs.value()?);
                match op {
                    '+' => Some(lhs + rhs),
                    '-' => Some(lhs - rhs),
                    '*' => Some(lhs * rhs),
                    '/' => lhs.checked_div(rhs),
                    _ => unreachable!(),
                }
            },
        }
    }
}

fn trees(depth: usize, digits: &[i64]) -> Vec<Tree> {
    let mut all: Vec<Tree> = digits.iter().map(|&d| Tree::Digit(d)).collect();
    if depth == 0 {
        return all;
    }

    let smaller = trees(depth - 1, digits);
    for lhs in &smaller {
        for rhs in &smaller {
            for op in ['+', '-', '*', '/'] {
                all.push(Tree::Op(op, Box::new(lhs.clone()), Box::new(rhs.clone())));
            }
        }
    }
    all
}

#[test]
fn fully_parenthesized_expressions_match_reference() {
    let mut checked = 0;

    for tree in trees(2, &[0, 3, 7]) {
        let src = tree.render();
        match tree.value() {
            Some(expected) => assert_eq!(evaluate(&src), Ok(expected), "for {src}"),
            None => assert!(matches!(evaluate(&src),
                                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))),
                            "expected division by zero for {src}"),
        }
        checked += 1;
    }

    assert!(checked > 1000, "only {checked} expressions generated");
}

#[test]
fn unparenthesized_chains_match_reference() {
    // With the parentheses stripped, precedence and left associativity decide
    // the grouping, which must agree with the explicitly grouped form.
    let cases = [("9-3-2", "((9-3)-2)"),
                 ("8/2/2", "((8/2)/2)"),
                 ("1+2*3", "(1+(2*3))"),
                 ("9-6/3*2", "(9-((6/3)*2))"),
                 ("4*5-6/2+1", "(((4*5)-(6/2))+1)")];

    for (flat, grouped) in cases {
        assert_eq!(evaluate(flat), evaluate(grouped), "{flat} vs {grouped}");
        assert!(evaluate(flat).is_ok());
    }
}
