//! A compiled expression together with the postfix text it came from.

use std::fmt;

use crate::error::Error;
use crate::regex::{CompileError, Nfa, compile, to_postfix};

/// An expression translated and compiled once, ready to test many inputs.
#[derive(Debug, Clone)]
pub struct Regex {
    postfix: String,
    nfa: Nfa,
}

impl Regex {
    /// Build from an infix expression such as `a.(b|c)*`.
    pub fn new(infix: &str) -> Result<Self, Error> {
        let postfix = to_postfix(infix)?;
        Ok(Self::from_postfix(&postfix)?)
    }

    /// Build from an expression that is already in postfix form.
    pub fn from_postfix(postfix: &str) -> Result<Self, CompileError> {
        let nfa = compile(postfix)?;
        Ok(Self {
            postfix: postfix.to_string(),
            nfa,
        })
    }

    /// True if the whole of `input` is in the expression's language.
    pub fn is_match(&self, input: &str) -> bool {
        self.nfa.is_match(input)
    }

    pub fn as_postfix(&self) -> &str {
        &self.postfix
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }
}

/// Shows the postfix form.
impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.postfix)
    }
}

impl std::str::FromStr for Regex {
    type Err = Error;

    fn from_str(infix: &str) -> Result<Self, Error> {
        Regex::new(infix)
    }
}
