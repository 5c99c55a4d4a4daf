//! Shunting-yard translation of infix expressions to postfix.

use phf::{Map, phf_map};

/// Operator precedence; higher binds tighter. Anything absent is a literal.
static PRECEDENCE: Map<char, u8> = phf_map! {
    '*' => 10,
    '.' => 9,
    '|' => 8,
};

/// Returns the binding strength of `c`, or `None` when `c` is not an operator.
pub fn precedence(c: char) -> Option<u8> {
    PRECEDENCE.get(&c).copied()
}

/// Errors raised when parentheses in an infix expression do not balance.
///
/// Positions are character offsets into the infix string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostfixError {
    UnmatchedClose { pos: usize },
    UnmatchedOpen { pos: usize },
}

impl std::fmt::Display for PostfixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedClose { pos } => {
                write!(f, "Unbalanced parentheses: ')' at {pos} has no matching '('")
            }
            Self::UnmatchedOpen { pos } => {
                write!(f, "Unbalanced parentheses: '(' at {pos} is never closed")
            }
        }
    }
}

impl std::error::Error for PostfixError {}

/// Stack entries: an open paren remembers where it was for error reporting.
enum Pending {
    Open(usize),
    Op(char),
}

/// Convert an infix expression using explicit `.` concatenation to postfix.
///
/// Operators of equal precedence associate to the left, so `a.b.c`
/// becomes `ab.c.`.
pub fn to_postfix(infix: &str) -> Result<String, PostfixError> {
    let mut output = String::with_capacity(infix.len());
    let mut stack: Vec<Pending> = Vec::new();

    for (pos, c) in infix.chars().enumerate() {
        match c {
            '(' => stack.push(Pending::Open(pos)),
            ')' => loop {
                match stack.pop() {
                    Some(Pending::Op(op)) => output.push(op),
                    Some(Pending::Open(_)) => break,
                    None => return Err(PostfixError::UnmatchedClose { pos }),
                }
            },
            _ => match precedence(c) {
                Some(prec) => {
                    while let Some(&Pending::Op(top)) = stack.last()
                        && precedence(top).is_some_and(|p| p >= prec)
                    {
                        output.push(top);
                        stack.pop();
                    }
                    stack.push(Pending::Op(c));
                }
                None => output.push(c),
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op) => output.push(op),
            Pending::Open(pos) => return Err(PostfixError::UnmatchedOpen { pos }),
        }
    }
    Ok(output)
}
