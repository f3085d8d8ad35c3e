//! Adapter between automata and the editor's labeled graphs.
//!
//! An editor edge carries one or more comma-separated labels, so `a,b`
//! stands for two parallel transitions. Node positions are the editor's
//! concern and are not represented here.

use crate::api::Error;
use crate::automata::nfa::{Automaton, StateId, Transition};
use crate::symbol::Symbol;
use std::collections::{BTreeMap, BTreeSet};

/// Separates parallel labels on an edge.
pub const LABEL_SEPARATOR: u8 = b',';

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphNode {
    pub id: StateId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accepting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphEdge {
    pub from: StateId,
    pub to: StateId,
    pub label: String,
}

/// A graph as drawn in the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Split an edge label at each separator, trimming surrounding whitespace and
/// dropping empty pieces.
pub fn split_label(label: &str) -> impl Iterator<Item = &str> {
    let bytes = label.as_bytes();
    let ends = memchr::memchr_iter(LABEL_SEPARATOR, bytes).chain(core::iter::once(bytes.len()));
    let mut start = 0;
    ends.map(move |end| {
        // The separator is ASCII, so both bounds are char boundaries.
        let piece = &label[start..end];
        start = end + 1;
        piece.trim()
    })
    .filter(|piece| !piece.is_empty())
}

impl LabeledGraph {
    /// Build the automaton this graph depicts.
    /// Fails if an edge has no label or touches a node that does not exist.
    pub fn to_automaton(&self) -> Result<Automaton, Error> {
        let mut alphabet: BTreeSet<Symbol> = BTreeSet::new();
        let mut transitions: BTreeSet<Transition> = BTreeSet::new();
        for edge in &self.edges {
            if split_label(&edge.label).next().is_none() {
                return Err(Error::InvariantViolation(format!(
                    "edge {} -> {} has no label",
                    edge.from, edge.to
                )));
            }
            for piece in split_label(&edge.label) {
                let symbol = Symbol::new(piece);
                if !symbol.is_epsilon() {
                    alphabet.insert(symbol.clone());
                }
                transitions.insert(Transition::new(edge.from, symbol, edge.to));
            }
        }
        let nodes = &self.nodes;
        Automaton::new(
            nodes.iter().map(|n| n.id),
            alphabet,
            nodes.iter().filter(|n| n.initial).map(|n| n.id),
            nodes.iter().filter(|n| n.accepting).map(|n| n.id),
            transitions,
        )
    }

    /// Render \p nfa as a graph, renumbering its states densely from 0 and
    /// merging parallel transitions into one comma-joined edge.
    pub fn from_automaton(nfa: &Automaton) -> LabeledGraph {
        let mut nfa = nfa.clone();
        nfa.normalize(0);

        let nodes = nfa
            .states()
            .iter()
            .map(|&id| GraphNode {
                id,
                initial: nfa.initial_states().contains(&id),
                accepting: nfa.final_states().contains(&id),
            })
            .collect();

        let mut labels: BTreeMap<(StateId, StateId), Vec<&str>> = BTreeMap::new();
        for t in nfa.transitions() {
            labels.entry((t.from, t.to)).or_default().push(t.label.as_str());
        }
        let separator = char::from(LABEL_SEPARATOR).to_string();
        let edges = labels
            .into_iter()
            .map(|((from, to), texts)| GraphEdge {
                from,
                to,
                label: texts.join(&separator),
            })
            .collect();

        LabeledGraph { nodes, edges }
    }
}
