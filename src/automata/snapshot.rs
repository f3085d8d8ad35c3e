//! Serializable snapshots of automata.

use crate::api::Error;
use crate::automata::nfa::{Automaton, StateId, Transition};
use crate::symbol::Symbol;
use core::convert::TryFrom;

/// The plain record an automaton is saved as. Loading it runs the same
/// validation as [`Automaton::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub states: Vec<StateId>,
    pub alphabet: Vec<String>,
    pub initial: Vec<StateId>,
    #[serde(rename = "final")]
    pub finals: Vec<StateId>,
    pub transitions: Vec<(StateId, String, StateId)>,
}

impl TryFrom<Snapshot> for Automaton {
    type Error = Error;

    fn try_from(snapshot: Snapshot) -> Result<Self, Error> {
        Automaton::new(
            snapshot.states,
            snapshot.alphabet.iter().map(|a| Symbol::from(a.as_str())),
            snapshot.initial,
            snapshot.finals,
            snapshot
                .transitions
                .iter()
                .map(|(from, label, to)| Transition::new(*from, label.as_str(), *to)),
        )
    }
}

impl From<Automaton> for Snapshot {
    fn from(nfa: Automaton) -> Self {
        Snapshot {
            states: nfa.states.into_iter().collect(),
            alphabet: nfa.alphabet.iter().map(|a| a.to_string()).collect(),
            initial: nfa.initial.into_iter().collect(),
            finals: nfa.finals.into_iter().collect(),
            transitions: nfa
                .transitions
                .into_iter()
                .map(|t| (t.from, t.label.to_string(), t.to))
                .collect(),
        }
    }
}
