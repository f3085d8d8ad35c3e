//! Automaton reduction.
//!
//! The default strategy determinizes the reverse automaton twice
//! (reverse, determinize, prune, reverse, determinize, prune). Determinizing
//! the reverse of an accessible deterministic automaton yields the minimal
//! deterministic automaton of the reversed language, so two rounds give the
//! minimal automaton of the original language. A final dead-state prune
//! drops the empty subset, leaving the trim minimal automaton.
//!
//! The alternative strategy refines the final/non-final partition of a
//! determinized, completed automaton until every block is stable, then
//! merges each block into one state.

use crate::api::Flags;
use crate::automata::nfa::{Automaton, StateId, StateSet, Transition};
use std::collections::{BTreeMap, BTreeSet};

impl Automaton {
    /// \return a trim, minimal deterministic automaton accepting the same
    /// language.
    pub fn minimize(&self, flags: Flags) -> Automaton {
        let mut result = if flags.partition_refinement {
            self.minimize_by_refinement()
        } else {
            self.minimize_by_reversal()
        };
        result.remove_dead();
        tracing::debug!(
            states_in = self.num_states(),
            states_out = result.num_states(),
            refinement = flags.partition_refinement,
            "minimized"
        );
        result
    }

    fn minimize_by_reversal(&self) -> Automaton {
        let mut rev = self.reverse().determinize();
        rev.remove_unreachable();
        let mut dfa = rev.reverse().determinize();
        dfa.remove_unreachable();
        dfa
    }

    fn minimize_by_refinement(&self) -> Automaton {
        let mut dfa = self.determinize();
        dfa.remove_unreachable();
        dfa.complete();
        dfa.merge_equivalent_states()
    }

    /// Merge indistinguishable states of a complete deterministic automaton.
    ///
    /// Blocks start as final versus non-final; a block splits whenever two of
    /// its states move into different blocks on some symbol. Each block is
    /// named after its smallest state.
    pub(crate) fn merge_equivalent_states(&self) -> Automaton {
        debug_assert!(self.is_deterministic() && self.is_complete());

        let mut block: BTreeMap<StateId, usize> = self
            .states
            .iter()
            .map(|q| (*q, usize::from(self.finals.contains(q))))
            .collect();
        let mut num_blocks = block.values().collect::<BTreeSet<_>>().len();

        loop {
            // A state's signature is its block plus the blocks it moves to.
            let mut signatures: BTreeMap<(usize, Vec<usize>), usize> = BTreeMap::new();
            let mut next_block: BTreeMap<StateId, usize> = BTreeMap::new();
            for &q in &self.states {
                let moves: Vec<usize> = self
                    .alphabet
                    .iter()
                    .map(|a| self.step(q, a).next().map_or(usize::MAX, |p| block[&p]))
                    .collect();
                let fresh = signatures.len();
                let id = *signatures.entry((block[&q], moves)).or_insert(fresh);
                next_block.insert(q, id);
            }
            let stable = signatures.len() == num_blocks;
            num_blocks = signatures.len();
            block = next_block;
            if stable {
                break;
            }
        }

        let mut representative: BTreeMap<usize, StateId> = BTreeMap::new();
        for (&q, &b) in &block {
            representative.entry(b).or_insert(q);
        }
        let rename = |q: &StateId| representative[&block[q]];

        Automaton::from_parts(
            self.states.iter().map(rename).collect::<StateSet>(),
            self.alphabet.clone(),
            self.initial.iter().map(rename).collect(),
            self.finals.iter().map(rename).collect(),
            self.transitions
                .iter()
                .map(|t| Transition {
                    from: rename(&t.from),
                    label: t.label.clone(),
                    to: rename(&t.to),
                })
                .collect(),
        )
    }
}
