//! Subset construction.

use crate::automata::nfa::{Automaton, Direction, StateId, StateSet, Transition};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

/// Subsets are identified by bitmask only while the automaton has at most
/// this many states; larger automata intern each subset instead.
pub const MAX_BITMASK_STATES: usize = 63;

/// Up to this many states, every subset of the state set is built, reachable
/// or not. Above it, only subsets reachable from the initial subset are.
pub const FULL_POWERSET_LIMIT: usize = 8;

/// Maps subsets of an automaton's states to state identifiers.
enum SubsetKeys {
    /// Bit i is set iff the state of rank i is in the subset.
    Bitmask(BTreeMap<StateId, u32>),

    /// Dense identifiers in order of first appearance.
    Interned(HashMap<Vec<StateId>, StateId>),
}

impl SubsetKeys {
    fn new(states: &StateSet) -> Self {
        if states.len() <= MAX_BITMASK_STATES {
            SubsetKeys::Bitmask(states.iter().copied().zip(0..).collect())
        } else {
            SubsetKeys::Interned(HashMap::new())
        }
    }

    fn encode(&mut self, subset: &StateSet) -> StateId {
        match self {
            SubsetKeys::Bitmask(ranks) => subset
                .iter()
                .fold(0, |acc, q| acc | (1u64 << ranks[q])),
            SubsetKeys::Interned(ids) => {
                let next = ids.len() as StateId;
                *ids.entry(subset.iter().copied().collect()).or_insert(next)
            }
        }
    }
}

struct SubsetBuilder<'a> {
    nfa: &'a Automaton,
    keys: SubsetKeys,
    states: StateSet,
    finals: StateSet,
    transitions: BTreeSet<Transition>,
}

impl<'a> SubsetBuilder<'a> {
    fn new(nfa: &'a Automaton) -> Self {
        SubsetBuilder {
            nfa,
            keys: SubsetKeys::new(nfa.states()),
            states: StateSet::new(),
            finals: StateSet::new(),
            transitions: BTreeSet::new(),
        }
    }

    /// Add \p subset as a state with one transition per alphabet symbol.
    /// \return the target subsets.
    fn expand(&mut self, subset: &StateSet) -> Vec<StateSet> {
        let nfa = self.nfa;
        let id = self.keys.encode(subset);
        self.states.insert(id);
        if !subset.is_disjoint(nfa.final_states()) {
            self.finals.insert(id);
        }
        let mut targets = Vec::with_capacity(nfa.alphabet().len());
        for a in nfa.alphabet() {
            let stepped: Vec<StateId> = subset.iter().flat_map(|&p| nfa.step(p, a)).collect();
            let target = nfa.epsilon_closure_of(stepped, Direction::Forward);
            let target_id = self.keys.encode(&target);
            self.states.insert(target_id);
            self.transitions.insert(Transition::new(id, a.clone(), target_id));
            targets.push(target);
        }
        targets
    }

    /// Expand every subset of the state set.
    fn expand_powerset(&mut self) {
        let ordered: Vec<StateId> = self.nfa.states().iter().copied().collect();
        debug_assert!(ordered.len() <= FULL_POWERSET_LIMIT);
        for mask in 0u64..(1u64 << ordered.len()) {
            let subset: StateSet = ordered
                .iter()
                .enumerate()
                .filter(|&(i, _)| (mask >> i) & 1 == 1)
                .map(|(_, &q)| q)
                .collect();
            self.expand(&subset);
        }
    }

    /// Expand the subsets reachable from \p start.
    fn expand_reachable(&mut self, start: StateSet) {
        let mut seen: BTreeSet<StateSet> = BTreeSet::new();
        let mut worklist = VecDeque::new();
        seen.insert(start.clone());
        worklist.push_back(start);
        while let Some(subset) = worklist.pop_front() {
            for target in self.expand(&subset) {
                if !seen.contains(&target) {
                    seen.insert(target.clone());
                    worklist.push_back(target);
                }
            }
        }
    }
}

impl Automaton {
    /// Build a deterministic automaton accepting the same language.
    ///
    /// Each subset of states becomes one state; the target of a subset on a
    /// symbol is the epsilon closure of all successors, and is recorded even
    /// when empty. Deterministic, epsilon-free input is returned unchanged.
    /// The result may contain unreachable subsets; follow with
    /// `remove_unreachable` to drop them.
    pub fn determinize(&self) -> Automaton {
        if self.is_deterministic() && !self.has_epsilon() {
            return self.clone();
        }

        let mut builder = SubsetBuilder::new(self);
        let start = self.epsilon_closure_of(self.initial.iter().copied(), Direction::Forward);
        if self.num_states() <= FULL_POWERSET_LIMIT {
            builder.expand_powerset();
        } else {
            builder.expand_reachable(start.clone());
        }
        let initial_id = builder.keys.encode(&start);
        builder.states.insert(initial_id);

        let dfa = Automaton::from_parts(
            builder.states,
            self.alphabet.clone(),
            [initial_id].into_iter().collect(),
            builder.finals,
            builder.transitions,
        );
        tracing::debug!(
            states_in = self.num_states(),
            states_out = dfa.num_states(),
            "determinized"
        );
        dfa
    }
}
