//! Completion with a sink state.

use crate::automata::nfa::{Automaton, StateId, Transition};

impl Automaton {
    /// Give every state a transition on every alphabet symbol.
    ///
    /// Missing transitions lead to a fresh non-final sink state (see
    /// [`Automaton::fresh_state`]), which loops to itself on every symbol. If the
    /// automaton has no initial state, the sink becomes initial. A complete
    /// automaton is left untouched.
    pub fn complete(&mut self) -> &mut Self {
        if self.is_complete() {
            return self;
        }
        let sink: StateId = self.fresh_state();
        let mut missing = Vec::new();
        for &q in &self.states {
            for a in &self.alphabet {
                if self.step(q, a).next().is_none() {
                    missing.push(Transition::new(q, a.clone(), sink));
                }
            }
        }
        let added = missing.len();
        self.transitions.extend(missing);
        self.transitions
            .extend(self.alphabet.iter().map(|a| Transition::new(sink, a.clone(), sink)));
        self.states.insert(sink);
        if self.initial.is_empty() {
            self.initial.insert(sink);
        }
        tracing::debug!(sink, added, "completed with sink state");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automata::nfa::StateSet;

    #[test]
    fn test_missing_edges_go_to_sink() {
        let mut nfa = Automaton::new([0, 1], ["a", "b"], [0], [1], [(0, "a", 1)]).unwrap();
        nfa.complete();
        assert!(nfa.is_complete());
        assert_eq!(nfa.num_states(), 3);
        assert!(!nfa.final_states().contains(&2));
        for t in [(0, "b", 2), (1, "a", 2), (1, "b", 2), (2, "a", 2), (2, "b", 2)] {
            assert!(nfa.transitions().contains(&Transition::from(t)), "{:?}", t);
        }
        assert!(nfa.is_accepted("a"));
        assert!(!nfa.is_accepted("ab"));
    }

    #[test]
    fn test_complete_is_untouched() {
        let mut nfa = Automaton::new([0], ["a"], [0], [0], [(0, "a", 0)]).unwrap();
        let before = nfa.clone();
        nfa.complete();
        assert_eq!(nfa, before);
    }

    #[test]
    fn test_no_initial_state_uses_sink() {
        let mut nfa = Automaton::new([3], ["a"], [], [3], [(3, "a", 3)]).unwrap();
        nfa.complete();
        assert_eq!(nfa.initial_states(), &[4].into_iter().collect::<StateSet>());
        assert!(nfa.is_complete());
        assert!(!nfa.is_accepted(""));
    }

    #[test]
    fn test_sink_below_largest_identifier() {
        let max = StateId::MAX;
        let mut nfa = Automaton::new([0, max], ["a"], [0], [max], [(0, "a", max)]).unwrap();
        nfa.complete();
        assert_eq!(nfa.states(), &[0, 1, max].into_iter().collect::<StateSet>());
        assert!(!nfa.final_states().contains(&1));
        assert!(nfa.transitions().contains(&Transition::new(max, "a", 1)));
        assert!(nfa.is_complete());
        assert!(nfa.is_accepted("a"));
        assert!(!nfa.is_accepted("aa"));
    }

    #[test]
    fn test_empty_automaton() {
        let mut nfa = Automaton::default();
        nfa.complete();
        assert_eq!(nfa.states(), &[0].into_iter().collect::<StateSet>());
        assert!(nfa.is_complete());
    }
}
