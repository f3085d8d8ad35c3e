//! Construction of an automaton from a regex.
//!
//! Each node yields a fragment over states numbered densely from 0. Operators
//! renumber the right operand past the left one and glue the pieces with
//! epsilon edges. Alternation merges boundary states instead of allocating
//! fresh entry and exit states.

use crate::ast::Regex;
use crate::automata::nfa::{Automaton, StateId, StateSet, Transition};
use crate::symbol::Symbol;
use std::collections::BTreeSet;

/// \return an edge from each of \p from to each of \p to.
fn epsilon_edges<'a>(from: &'a StateSet, to: &'a StateSet) -> impl Iterator<Item = Transition> + 'a {
    from.iter()
        .flat_map(move |&p| to.iter().map(move |&q| Transition::new(p, Symbol::epsilon(), q)))
}

impl Automaton {
    /// Build an automaton accepting the language of \p re.
    pub fn from_regex(re: &Regex) -> Automaton {
        let nfa = Self::build_fragment(re);
        tracing::debug!(
            states = nfa.num_states(),
            transitions = nfa.transitions.len(),
            "built automaton from regex"
        );
        nfa
    }

    fn build_fragment(re: &Regex) -> Automaton {
        match re {
            Regex::Symbol(s) => Self::symbol_fragment(s),
            Regex::Concat(left, right) => {
                let left = Self::build_fragment(left);
                let right = Self::build_fragment(right);
                Self::concat_fragments(left, right)
            }
            Regex::Alt(left, right) => {
                let left = Self::build_fragment(left);
                let right = Self::build_fragment(right);
                Self::alt_fragments(left, right)
            }
            Regex::Star(inner) => Self::star_fragment(Self::build_fragment(inner)),
        }
    }

    /// 0 -s-> 1. The empty-word leaf yields an epsilon edge and no symbol.
    fn symbol_fragment(s: &Symbol) -> Automaton {
        let alphabet: BTreeSet<Symbol> = if s.is_epsilon() {
            BTreeSet::new()
        } else {
            [s.clone()].into_iter().collect()
        };
        Automaton::from_parts(
            [0, 1].into_iter().collect(),
            alphabet,
            [0].into_iter().collect(),
            [1].into_iter().collect(),
            [Transition::new(0, s.clone(), 1)].into_iter().collect(),
        )
    }

    /// Renumber \p right to follow \p left, then merge their states,
    /// alphabets and transitions. Initial and final sets are left to the
    /// caller.
    fn merge_fragments(left: &Automaton, right: &mut Automaton) -> Automaton {
        let next: StateId = left.max_state().map_or(0, |q| q + 1);
        right.normalize(next);
        Automaton {
            states: left.states.union(&right.states).copied().collect(),
            alphabet: left.alphabet.union(&right.alphabet).cloned().collect(),
            initial: StateSet::new(),
            finals: StateSet::new(),
            transitions: left.transitions.union(&right.transitions).cloned().collect(),
        }
    }

    fn concat_fragments(left: Automaton, mut right: Automaton) -> Automaton {
        let mut nfa = Self::merge_fragments(&left, &mut right);
        nfa.transitions
            .extend(epsilon_edges(&left.finals, &right.initial));
        nfa.initial = left.initial;
        nfa.finals = right.finals;
        nfa
    }

    fn alt_fragments(left: Automaton, mut right: Automaton) -> Automaton {
        let mut nfa = Self::merge_fragments(&left, &mut right);
        nfa.initial = left.initial.union(&right.initial).copied().collect();
        nfa.finals = left.finals.union(&right.finals).copied().collect();
        nfa
    }

    /// Shift \p inner to start at 1 and add state 0 as the sole initial
    /// state, itself final.
    fn star_fragment(mut inner: Automaton) -> Automaton {
        inner.normalize(1);
        let loop_back: Vec<Transition> = epsilon_edges(&inner.finals, &inner.initial).collect();
        let entry = [0].into_iter().collect::<StateSet>();
        let enter: Vec<Transition> = epsilon_edges(&entry, &inner.initial).collect();
        inner.transitions.extend(loop_back);
        inner.transitions.extend(enter);
        inner.states.insert(0);
        inner.finals.insert(0);
        inner.initial = entry;
        inner
    }
}
