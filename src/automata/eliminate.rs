//! Regex synthesis by state elimination.

use crate::api::{Error, Flags};
use crate::ast::Regex;
use crate::automata::nfa::{Automaton, StateId};
use crate::simplify::simplify;
use std::collections::BTreeMap;

/// Entry and exit markers added around the automaton.
const ENTRY: StateId = 0;
const EXIT: StateId = 1;

/// Regex-labeled edges, at most one per pair of states.
#[derive(Debug, Default)]
struct EdgeMap {
    edges: BTreeMap<(StateId, StateId), Regex>,
}

impl EdgeMap {
    /// Add an edge, alternating with any label already on \p key.
    fn add(&mut self, key: (StateId, StateId), label: Regex) {
        match self.edges.remove(&key) {
            None => {
                self.edges.insert(key, label);
            }
            Some(existing) if existing == label => {
                self.edges.insert(key, existing);
            }
            Some(existing) => {
                self.edges.insert(key, Regex::alt(existing, label));
            }
        }
    }

    /// Remove \p q, rerouting each path through it:
    ///   p -x-> q -y-> r   becomes   p -x z* y-> r
    /// where z labels the self-loop on q, if any.
    fn eliminate(&mut self, q: StateId) {
        let looping = self.edges.remove(&(q, q));
        let incoming: Vec<(StateId, Regex)> = self
            .edges
            .iter()
            .filter(|((_, to), _)| *to == q)
            .map(|(&(from, _), x)| (from, x.clone()))
            .collect();
        let outgoing: Vec<(StateId, Regex)> = self
            .edges
            .iter()
            .filter(|((from, _), _)| *from == q)
            .map(|(&(_, to), y)| (to, y.clone()))
            .collect();
        self.edges.retain(|&(from, to), _| from != q && to != q);

        for (p, x) in &incoming {
            for (r, y) in &outgoing {
                let through = match &looping {
                    Some(z) => Regex::concat(
                        Regex::concat(x.clone(), Regex::star(z.clone())),
                        y.clone(),
                    ),
                    None => Regex::concat(x.clone(), y.clone()),
                };
                self.add((*p, *r), through);
            }
        }
    }
}

impl Automaton {
    /// Synthesize a regex accepting the language of this automaton.
    ///
    /// The states are shifted to start at 2, a fresh entry state 0 leads to
    /// each initial state and each final state leads to a fresh exit state
    /// 1, all by epsilon edges. The original states are then eliminated in
    /// ascending order until a single edge from 0 to 1 remains; its label is
    /// the result, simplified unless \p flags disables it.
    ///
    /// Fails with a synthesis failure if no edge from 0 to 1 is left, which
    /// happens exactly when the automaton accepts no word.
    pub fn to_regex(&self, flags: Flags) -> Result<Regex, Error> {
        let mut nfa = self.clone();
        nfa.normalize(EXIT + 1);

        let mut edges = EdgeMap::default();
        for &q in &nfa.initial {
            edges.add((ENTRY, q), Regex::empty());
        }
        for &q in &nfa.finals {
            edges.add((q, EXIT), Regex::empty());
        }
        for t in &nfa.transitions {
            edges.add((t.from, t.to), Regex::Symbol(t.label.clone()));
        }

        for &q in &nfa.states {
            edges.eliminate(q);
        }

        let result = match edges.edges.remove(&(ENTRY, EXIT)) {
            Some(re) if edges.edges.is_empty() => re,
            Some(_) => {
                return Err(Error::SynthesisFailure(format!(
                    "{} edges remain after elimination",
                    edges.edges.len() + 1
                )))
            }
            None => {
                return Err(Error::SynthesisFailure(
                    "no path from an initial to a final state".to_string(),
                ))
            }
        };
        tracing::debug!(states = self.num_states(), raw = %result, "synthesized regex");
        if flags.no_simplify {
            Ok(result)
        } else {
            Ok(simplify(result))
        }
    }
}
