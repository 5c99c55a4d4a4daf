//! Breadth-first NFA simulation.
//!
//! Every input character advances the whole set of live states at once, so
//! matching is linear in the input length and never backtracks.

use log::trace;

use super::nfa::{Nfa, StateId};

/// A set of states that remembers insertion order.
///
/// Membership is a flag per arena slot; the dense list keeps iteration
/// proportional to the number of live states.
#[derive(Debug, Clone)]
pub struct StateSet {
    dense: Vec<StateId>,
    present: Vec<bool>,
}

impl StateSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            dense: Vec::with_capacity(capacity),
            present: vec![false; capacity],
        }
    }

    /// Returns `true` if `id` was not already present.
    pub fn insert(&mut self, id: StateId) -> bool {
        let seen = &mut self.present[id.index()];
        if *seen {
            return false;
        }
        *seen = true;
        self.dense.push(id);
        true
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.present[id.index()]
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    pub fn clear(&mut self) {
        for id in self.dense.drain(..) {
            self.present[id.index()] = false;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.dense.iter().copied()
    }
}

/// Add `start` and every state reachable from it along epsilon edges.
///
/// Expansion stops at symbol states and at the automaton's accept state.
/// States already in `set` are not revisited, which is what terminates
/// epsilon cycles such as the one `a**` builds.
pub fn epsilon_closure(nfa: &Nfa, start: StateId, set: &mut StateSet) {
    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        if !set.insert(id) {
            continue;
        }
        let state = nfa.state(id);
        if id == nfa.accept() || !state.is_epsilon() {
            continue;
        }
        // Reverse so edge1 is expanded before edge2.
        stack.extend(state.edge2);
        stack.extend(state.edge1);
    }
}

/// Decide whether `nfa` accepts the whole of `input`.
pub fn matches(nfa: &Nfa, input: &str) -> bool {
    let mut current = StateSet::new(nfa.len());
    let mut next = StateSet::new(nfa.len());
    epsilon_closure(nfa, nfa.initial(), &mut current);

    for (pos, r) in input.chars().enumerate() {
        for id in current.iter() {
            let state = nfa.state(id);
            if state.symbol == Some(r)
                && let Some(target) = state.edge1
            {
                epsilon_closure(nfa, target, &mut next);
            }
        }
        trace!("after {r:?} at {pos}: {} live states", next.len());
        std::mem::swap(&mut current, &mut next);
        next.clear();
        if current.is_empty() {
            return false;
        }
    }
    current.contains(nfa.accept())
}

impl Nfa {
    /// Shorthand for [`matches`].
    pub fn is_match(&self, input: &str) -> bool {
        matches(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::compiler::compile;

    fn closure_of(postfix: &str) -> (Nfa, StateSet) {
        let nfa = compile(postfix).unwrap();
        let mut set = StateSet::new(nfa.len());
        epsilon_closure(&nfa, nfa.initial(), &mut set);
        (nfa, set)
    }

    #[test]
    fn test_state_set_dedups() {
        let nfa = compile("a").unwrap();
        let mut set = StateSet::new(nfa.len());
        assert!(set.insert(nfa.initial()));
        assert!(!set.insert(nfa.initial()));
        assert_eq!(set.len(), 1);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(nfa.initial()));
    }

    #[test]
    fn test_closure_includes_start() {
        let (nfa, set) = closure_of("a");
        assert!(set.contains(nfa.initial()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_closure_of_star_reaches_accept() {
        let (nfa, set) = closure_of("a*");
        assert!(set.contains(nfa.accept()));
        // initial, the 'a' state, accept
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_closure_follows_edge1_first() {
        let (nfa, set) = closure_of("ab|");
        let symbols: Vec<_> = set.iter().filter_map(|id| nfa.state(id).symbol).collect();
        assert_eq!(symbols, vec!['a', 'b']);
    }

    #[test]
    fn test_closure_terminates_on_epsilon_cycle() {
        // The inner star's accept loops straight back to its epsilon initial.
        let (nfa, set) = closure_of("a**");
        assert!(set.contains(nfa.accept()));
        assert!(set.len() <= nfa.len());
    }

    #[test]
    fn test_empty_input_against_literal() {
        let nfa = compile("a").unwrap();
        assert!(!matches(&nfa, ""));
        assert!(matches(&nfa, "a"));
        assert!(!matches(&nfa, "aa"));
    }

    #[test]
    fn test_dead_set_stops_early() {
        let nfa = compile("ab.").unwrap();
        assert!(!nfa.is_match("xab"));
    }

    #[test]
    fn test_nul_is_an_ordinary_symbol() {
        let nfa = compile("\0").unwrap();
        assert!(nfa.is_match("\0"));
        assert!(!nfa.is_match(""));
    }
}
