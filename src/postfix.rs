//! Infix to postfix (reverse Polish) conversion on top of [`Stack`].
//!
//! Single-character operands (`A-Z`, `a-z`, `0-9`) go straight to the
//! output. Operators wait on the stack until an operator of lower precedence
//! arrives:
//!
//! ```text
//! ^       3  right-associative
//! * /     2
//! + -     1
//! other  -1
//! ```
//!
//! Pending operators and open brackets share one [`Stack::new`] of
//! [`DEFAULT_CAPACITY`] slots; nesting past that is reported as
//! [`PostfixError::Overflow`].
//!
//! ```
//! use bounded_seq::postfix::infix_to_postfix;
//!
//! assert_eq!(infix_to_postfix("a+b*(c^d-e)^(f+g*h)-i").unwrap(), "abcd^e-fgh*+^*+i-");
//! ```

use core::fmt;

use crate::constants::DEFAULT_CAPACITY;
use crate::stdx::{IllegalIndex, Stack};

/// Errors from converting a malformed infix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixError {
    /// A `)` had no matching `(`; the operator stack ran dry.
    UnbalancedClose(IllegalIndex),
    /// A `(` was never closed.
    UnclosedOpen,
    /// More operators or brackets were pending than the stack holds.
    Overflow { capacity: usize },
}

impl fmt::Display for PostfixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedClose(err) => write!(f, "unmatched ')': {err}"),
            Self::UnclosedOpen => write!(f, "unmatched '('"),
            Self::Overflow { capacity } => {
                write!(f, "operator stack overflow at capacity {capacity}")
            }
        }
    }
}

impl std::error::Error for PostfixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnbalancedClose(err) => Some(err),
            _ => None,
        }
    }
}

#[inline]
fn precedence(op: char) -> i8 {
    match op {
        '^' => 3,
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => -1,
    }
}

#[inline]
fn is_operand(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Converts an infix expression to postfix. Whitespace is ignored.
pub fn infix_to_postfix(expression: &str) -> Result<String, PostfixError> {
    let mut ops: Stack<char> = Stack::new();
    let mut output = String::with_capacity(expression.len());

    assert_eq!(ops.capacity(), DEFAULT_CAPACITY);

    let push = |ops: &mut Stack<char>, c: char| {
        ops.push(c).map_err(|_| PostfixError::Overflow {
            capacity: DEFAULT_CAPACITY,
        })
    };

    for c in expression.chars() {
        if c.is_whitespace() {
            continue;
        }

        if is_operand(c) {
            output.push(c);
        } else if c == '(' {
            push(&mut ops, c)?;
        } else if c == ')' {
            loop {
                let top = *ops.peek().map_err(PostfixError::UnbalancedClose)?;
                ops.pop();
                if top == '(' {
                    break;
                }
                output.push(top);
            }
        } else {
            while let Some(&top) = ops.last() {
                if precedence(c) > precedence(top) || (c == '^' && top == '^') {
                    break;
                }
                output.push(top);
                ops.pop();
            }
            push(&mut ops, c)?;
        }
    }

    while let Some(top) = ops.pop() {
        if top == '(' {
            return Err(PostfixError::UnclosedOpen);
        }
        output.push(top);
    }

    Ok(output)
}
