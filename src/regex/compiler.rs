//! Thompson construction: postfix expression to [`Nfa`].

use log::debug;

use super::nfa::{Fragment, Nfa, NfaBuilder};

/// Errors raised for postfix expressions that do not reduce to exactly one
/// automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The expression contains no tokens.
    Empty,
    /// Operator `op` at character offset `pos` lacked operands.
    MissingOperand { op: char, pos: usize },
    /// Scanning finished with `count` unconnected fragments.
    DanglingOperands { count: usize },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Malformed expression: nothing to compile"),
            Self::MissingOperand { op, pos } => {
                write!(f, "Malformed expression: '{op}' at {pos} is missing an operand")
            }
            Self::DanglingOperands { count } => write!(
                f,
                "Malformed expression: {count} operands left without an operator"
            ),
        }
    }
}

impl std::error::Error for CompileError {}

/// Compile a postfix expression into an automaton.
///
/// `.`, `|` and `*` are operators; every other character is a literal.
pub fn compile(postfix: &str) -> Result<Nfa, CompileError> {
    let mut builder = NfaBuilder::new();
    let mut stack: Vec<Fragment> = Vec::new();

    for (pos, c) in postfix.chars().enumerate() {
        let missing = || CompileError::MissingOperand { op: c, pos };
        let frag = match c {
            '.' => {
                let second = stack.pop().ok_or_else(missing)?;
                let first = stack.pop().ok_or_else(missing)?;
                builder.concat(first, second)
            }
            '|' => {
                let right = stack.pop().ok_or_else(missing)?;
                let left = stack.pop().ok_or_else(missing)?;
                builder.alternate(left, right)
            }
            '*' => {
                let inner = stack.pop().ok_or_else(missing)?;
                builder.star(inner)
            }
            _ => builder.literal(c),
        };
        stack.push(frag);
    }

    let root = match stack.len() {
        0 => return Err(CompileError::Empty),
        1 => stack.pop().ok_or(CompileError::Empty)?,
        count => return Err(CompileError::DanglingOperands { count }),
    };
    let nfa = builder.finish(root);
    debug!("compiled {postfix:?} into {} states", nfa.len());
    Ok(nfa)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile_err(postfix: &str) -> CompileError {
        compile(postfix).unwrap_err()
    }

    #[test]
    fn test_literal_state_count() {
        assert_eq!(compile("a").unwrap().len(), 2);
    }

    #[test]
    fn test_concat_reuses_fragment_states() {
        // Concatenation allocates nothing new.
        assert_eq!(compile("ab.").unwrap().len(), 4);
    }

    #[test]
    fn test_alternation_and_star_add_two_states() {
        assert_eq!(compile("ab|").unwrap().len(), 6);
        assert_eq!(compile("a*").unwrap().len(), 4);
        assert_eq!(compile("ab.c*|").unwrap().len(), 10);
    }

    #[test]
    fn test_initial_of_concat_is_first_symbol() {
        let nfa = compile("xy.").unwrap();
        assert_eq!(nfa.state(nfa.initial()).symbol, Some('x'));
    }

    #[test]
    fn test_accept_has_no_edges() {
        for postfix in ["a", "ab.", "ab|", "a*", "ab.c*|", "abd|.*"] {
            let nfa = compile(postfix).unwrap();
            assert_eq!(nfa.state(nfa.accept()).edges().count(), 0, "{postfix}");
        }
    }

    #[test]
    fn test_parens_are_literals_in_postfix() {
        let nfa = compile("(").unwrap();
        assert_eq!(nfa.state(nfa.initial()).symbol, Some('('));
    }

    // --- Errors ---

    #[test]
    fn test_empty() {
        assert_eq!(compile_err(""), CompileError::Empty);
    }

    #[test]
    fn test_lone_operator() {
        assert_eq!(
            compile_err("*"),
            CompileError::MissingOperand { op: '*', pos: 0 }
        );
        assert_eq!(
            compile_err("|"),
            CompileError::MissingOperand { op: '|', pos: 0 }
        );
    }

    #[test]
    fn test_binary_operator_with_one_operand() {
        assert_eq!(
            compile_err("a."),
            CompileError::MissingOperand { op: '.', pos: 1 }
        );
    }

    #[test]
    fn test_dangling_operands() {
        assert_eq!(
            compile_err("abc|"),
            CompileError::DanglingOperands { count: 2 }
        );
        assert_eq!(
            compile_err("ab"),
            CompileError::DanglingOperands { count: 2 }
        );
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            compile_err("ab").to_string(),
            "Malformed expression: 2 operands left without an operator"
        );
    }
}
