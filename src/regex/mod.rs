//! Regular expression engine.
//!
//! Expressions pass through three stages:
//!
//! ```text
//! infix ──to_postfix──> postfix ──compile──> Nfa ──matches──> bool
//! ```
//!
//! # Syntax
//!
//! | Token   | Meaning                                  | Precedence |
//! |---------|------------------------------------------|------------|
//! | `X*`    | Zero or more `X`                         | 10         |
//! | `X.Y`   | `X` followed by `Y`                      | 9          |
//! | `X\|Y`  | `X` or `Y`                               | 8          |
//! | `(…)`   | Grouping                                 |            |
//! | other   | The character itself                     |            |
//!
//! Concatenation is always written explicitly; `ab` is two operands, not one.
//! A match must consume the whole input.

pub mod compiler;
pub mod nfa;
pub mod postfix;
pub mod simulator;


pub use compiler::{CompileError, compile};
pub use nfa::{Fragment, Nfa, NfaBuilder, State, StateId};
pub use postfix::{PostfixError, precedence, to_postfix};
pub use simulator::{StateSet, epsilon_closure, matches};

/// Compile `postfix` and run it against `input` in one step.
pub fn post_match(postfix: &str, input: &str) -> Result<bool, CompileError> {
    Ok(compile(postfix)?.is_match(input))
}
