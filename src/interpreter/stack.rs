use crate::interpreter::lexer::Operator;

/// Returned when popping an empty [`Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackUnderflow;

impl std::fmt::Display for StackUnderflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stack underflow.")
    }
}

impl std::error::Error for StackUnderflow {}

/// An entry waiting on the operator stack during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// An operator and its byte offset.
    Operator(Operator, usize),
    /// A `(` and its byte offset.
    GroupOpen(usize),
}

/// Operators and group openings pending during infix to postfix conversion.
pub type OperatorStack = Stack<Pending>;
/// Intermediate values during postfix evaluation.
pub type OperandStack = Stack<i64>;

/// A last-in-first-out stack whose `pop` reports underflow instead of
/// returning an `Option`.
///
/// # Example
/// ```
/// use rpncalc::interpreter::stack::{Stack, StackUnderflow};
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(StackUnderflow));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    /// Returns [`StackUnderflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, StackUnderflow> {
        self.items.pop().ok_or(StackUnderflow)
    }

    /// Removes and returns the top item only if `predicate` accepts it.
    pub fn pop_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        if self.items.last().is_some_and(predicate) {
            self.items.pop()
        } else {
            None
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
