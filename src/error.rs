use crate::regex::{CompileError, PostfixError};

/// Any failure while turning an expression into an automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The infix expression's parentheses do not balance.
    Postfix(PostfixError),
    /// The postfix expression does not reduce to a single automaton.
    Compile(CompileError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postfix(err) => write!(f, "{err}"),
            Self::Compile(err) => write!(f, "{err}"),
        }
    }
}

/// Transparent: the message and the source both come from the wrapped error.
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Postfix(err) => std::error::Error::source(err),
            Self::Compile(err) => std::error::Error::source(err),
        }
    }
}

impl From<PostfixError> for Error {
    fn from(err: PostfixError) -> Self {
        Error::Postfix(err)
    }
}

impl From<CompileError> for Error {
    fn from(err: CompileError) -> Self {
        Error::Compile(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_display_is_inner_message() {
        let err = Error::from(PostfixError::UnmatchedClose { pos: 1 });
        assert_eq!(
            err.to_string(),
            "Unbalanced parentheses: ')' at 1 has no matching '('"
        );
    }

    #[test]
    fn test_message_not_repeated_in_chain() {
        let err = Error::from(CompileError::Empty);
        assert!(err.source().is_none());
        let chained = format!("{:#}", anyhow::Error::new(err).context("Invalid pattern"));
        assert_eq!(
            chained,
            "Invalid pattern: Malformed expression: nothing to compile"
        );
    }
}
