//! Epsilon elimination.

use crate::automata::nfa::{Automaton, Direction, StateId, StateSet, Transition};
use crate::symbol::Symbol;

impl Automaton {
    /// Remove every epsilon transition, preserving the accepted language.
    ///
    /// A state that reaches a final state through epsilon edges alone becomes
    /// final. Then each state absorbs the outgoing edges of every state it
    /// reaches by an epsilon edge, repeating until it has none left; states
    /// already absorbed are skipped, so epsilon cycles terminate.
    pub fn remove_epsilon(&mut self) -> &mut Self {
        let eps_before = self.transitions.iter().filter(|t| t.is_epsilon()).count();

        self.transitions.retain(|t| !(t.is_epsilon() && t.from == t.to));
        self.finals = self.epsilon_closure_of(self.finals.iter().copied(), Direction::Backward);

        let states: Vec<StateId> = self.states.iter().copied().collect();
        for q in states {
            self.absorb_epsilon_edges(q);
        }

        self.transitions.retain(|t| !t.is_epsilon());
        self.alphabet.retain(|a| !a.is_epsilon());
        tracing::debug!(
            epsilon_edges = eps_before,
            transitions = self.transitions.len(),
            "removed epsilon transitions"
        );
        self
    }

    /// Bypass each epsilon edge leaving \p q:
    ///   q --ε--> p --x--> r   becomes   q --x--> r
    fn absorb_epsilon_edges(&mut self, q: StateId) {
        let eps = Symbol::epsilon();
        let mut absorbed = StateSet::new();
        absorbed.insert(q);
        loop {
            let pending: Vec<StateId> = self
                .step(q, &eps)
                .filter(|p| !absorbed.contains(p))
                .collect();
            if pending.is_empty() {
                break;
            }
            for p in pending {
                absorbed.insert(p);
                let bypass: Vec<Transition> = self
                    .transitions
                    .iter()
                    .filter(|t| t.from == p)
                    .map(|t| Transition::new(q, t.label.clone(), t.to))
                    .filter(|t| !(t.is_epsilon() && t.to == q))
                    .collect();
                self.transitions.extend(bypass);
            }
        }
    }
}
