//! A small regular expression engine built on Thompson's construction.
//!
//! # Example
//!
//! ```rust
//! use postmatch::{Regex, compile, matches, to_postfix};
//!
//! // Concatenation is spelled out with '.'
//! assert_eq!(to_postfix("a.(b|d).c*").unwrap(), "abd|.c*.");
//!
//! let nfa = compile("ab.c*|").unwrap();
//! assert!(matches(&nfa, "cccc"));
//! assert!(matches(&nfa, "ab"));
//! assert!(!matches(&nfa, "ac"));
//!
//! let re = Regex::new("(a.(b|d))*").unwrap();
//! assert!(re.is_match("abad"));
//! ```

mod error;
mod pattern;
pub mod regex;

pub use error::Error;
pub use pattern::Regex;
pub use regex::{
    CompileError, Nfa, PostfixError, State, StateId, compile, matches, post_match, to_postfix,
};
