//! Automaton storage: an append-only arena of states addressed by [`StateId`].
//!
//! States refer to each other by index, so the cycles introduced by `*` need
//! no shared ownership. Construction goes through [`NfaBuilder`], whose
//! combinators take [`Fragment`]s by value; once a fragment has been folded
//! into a larger one it cannot be named again.

use std::fmt;

use itertools::Itertools;

/// Index of a state in an [`Nfa`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node of the automaton graph.
///
/// A state with `symbol = Some(c)` consumes `c` and moves along `edge1`.
/// A state with `symbol = None` is an epsilon node; each present edge is
/// followed without consuming input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub symbol: Option<char>,
    pub edge1: Option<StateId>,
    pub edge2: Option<StateId>,
}

impl State {
    pub fn is_epsilon(&self) -> bool {
        self.symbol.is_none()
    }

    /// Outgoing edges in `edge1`, `edge2` order.
    pub fn edges(&self) -> impl Iterator<Item = StateId> + '_ {
        self.edge1.iter().chain(self.edge2.iter()).copied()
    }
}

/// A partially built automaton with one entry and one exit state.
///
/// Not `Clone`: each [`NfaBuilder`] combinator consumes its operands.
#[derive(Debug, PartialEq, Eq)]
pub struct Fragment {
    initial: StateId,
    accept: StateId,
}

impl Fragment {
    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }
}

/// Owns the state arena while fragments are being composed.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.0]
    }

    /// `c`: a symbol state leading to a fresh accept state.
    pub fn literal(&mut self, c: char) -> Fragment {
        let accept = self.add(State::default());
        let initial = self.add(State {
            symbol: Some(c),
            edge1: Some(accept),
            edge2: None,
        });
        Fragment { initial, accept }
    }

    /// `first` followed by `second`.
    pub fn concat(&mut self, first: Fragment, second: Fragment) -> Fragment {
        self.state_mut(first.accept).edge1 = Some(second.initial);
        Fragment {
            initial: first.initial,
            accept: second.accept,
        }
    }

    /// Either `left` or `right`.
    pub fn alternate(&mut self, left: Fragment, right: Fragment) -> Fragment {
        let accept = self.add(State::default());
        let initial = self.add(State {
            symbol: None,
            edge1: Some(left.initial),
            edge2: Some(right.initial),
        });
        self.state_mut(left.accept).edge1 = Some(accept);
        self.state_mut(right.accept).edge2 = Some(accept);
        Fragment { initial, accept }
    }

    /// Zero or more repetitions of `inner`.
    pub fn star(&mut self, inner: Fragment) -> Fragment {
        let accept = self.add(State::default());
        let initial = self.add(State {
            symbol: None,
            edge1: Some(inner.initial),
            edge2: Some(accept),
        });
        let loop_back = self.state_mut(inner.accept);
        loop_back.edge1 = Some(inner.initial);
        loop_back.edge2 = Some(accept);
        Fragment { initial, accept }
    }

    /// Seal the arena, making `root` the whole automaton.
    pub fn finish(self, root: Fragment) -> Nfa {
        Nfa {
            states: self.states,
            initial: root.initial,
            accept: root.accept,
        }
    }
}

/// A compiled automaton. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<State>,
    initial: StateId,
    accept: StateId,
}

impl Nfa {
    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states.iter().enumerate().map(|(i, s)| (StateId(i), s))
    }
}

/// One line per state, e.g. `3: 'a' -> 4`, `5: ε -> 1, 6`, `6: ε (accept)`.
impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "initial: {}", self.initial)?;
        for (id, state) in self.states() {
            write!(f, "{id}: ")?;
            match state.symbol {
                Some(c) => write!(f, "{c:?}")?,
                None => write!(f, "ε")?,
            }
            if state.edge1.is_some() || state.edge2.is_some() {
                write!(f, " -> {}", state.edges().join(", "))?;
            }
            if id == self.accept {
                write!(f, " (accept)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
