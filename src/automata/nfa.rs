//! The automaton model and its structural queries.

use crate::api::Error;
use crate::symbol::Symbol;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

// A handle to a state of an automaton.
// Identifiers carry no meaning beyond identity; transformations renumber freely.
pub type StateId = u64;

/// A set of states, iterated in ascending order.
pub type StateSet = BTreeSet<StateId>;

/// A labeled edge. Transitions order by source, then label, then target, so
/// all edges leaving a state on one symbol are contiguous.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub from: StateId,
    pub label: Symbol,
    pub to: StateId,
}

impl Transition {
    #[inline]
    pub fn new<S: Into<Symbol>>(from: StateId, label: S, to: StateId) -> Self {
        Transition {
            from,
            label: label.into(),
            to,
        }
    }

    /// \return whether this is an epsilon transition.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        self.label.is_epsilon()
    }

    /// \return the transition with its endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Transition {
            from: self.to,
            label: self.label.clone(),
            to: self.from,
        }
    }
}

impl<S: Into<Symbol>> From<(StateId, S, StateId)> for Transition {
    #[inline]
    fn from((from, label, to): (StateId, S, StateId)) -> Self {
        Transition::new(from, label, to)
    }
}

/// Which way edges are followed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A nondeterministic finite automaton, possibly with epsilon transitions.
/// Every collection has set semantics; construction deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::automata::snapshot::Snapshot",
        into = "crate::automata::snapshot::Snapshot"
    )
)]
pub struct Automaton {
    pub(crate) states: StateSet,
    pub(crate) alphabet: BTreeSet<Symbol>,
    pub(crate) initial: StateSet,
    pub(crate) finals: StateSet,
    pub(crate) transitions: BTreeSet<Transition>,
}

fn invariant<T, S: ToString>(text: S) -> Result<T, Error> {
    Err(Error::InvariantViolation(text.to_string()))
}

impl Automaton {
    /// Construct an automaton, deduplicating every collection.
    /// Fails if the alphabet contains the epsilon token, or if a state or
    /// symbol is referenced without being declared.
    pub fn new<S, A, I, F, T>(
        states: S,
        alphabet: A,
        initial: I,
        finals: F,
        transitions: T,
    ) -> Result<Self, Error>
    where
        S: IntoIterator<Item = StateId>,
        A: IntoIterator,
        A::Item: Into<Symbol>,
        I: IntoIterator<Item = StateId>,
        F: IntoIterator<Item = StateId>,
        T: IntoIterator,
        T::Item: Into<Transition>,
    {
        let nfa = Automaton {
            states: states.into_iter().collect(),
            alphabet: alphabet.into_iter().map(Into::into).collect(),
            initial: initial.into_iter().collect(),
            finals: finals.into_iter().collect(),
            transitions: transitions.into_iter().map(Into::into).collect(),
        };
        nfa.validate()?;
        Ok(nfa)
    }

    /// Assemble an automaton whose invariants the caller already upholds.
    pub(crate) fn from_parts(
        states: StateSet,
        alphabet: BTreeSet<Symbol>,
        initial: StateSet,
        finals: StateSet,
        transitions: BTreeSet<Transition>,
    ) -> Self {
        let nfa = Automaton {
            states,
            alphabet,
            initial,
            finals,
            transitions,
        };
        debug_assert!(nfa.validate().is_ok(), "{:?}", nfa.validate());
        nfa
    }

    /// Check the structural invariants.
    pub fn validate(&self) -> Result<(), Error> {
        if self.alphabet.iter().any(Symbol::is_epsilon) {
            return invariant("the epsilon token is not an alphabet symbol");
        }
        for (role, set) in [("initial", &self.initial), ("final", &self.finals)] {
            if let Some(q) = set.iter().find(|&&q| !self.states.contains(&q)) {
                return invariant(format!("{} state {} is not declared", role, q));
            }
        }
        for t in &self.transitions {
            if !self.states.contains(&t.from) || !self.states.contains(&t.to) {
                return invariant(format!(
                    "transition {} -{}-> {} has an undeclared endpoint",
                    t.from, t.label, t.to
                ));
            }
            if !t.is_epsilon() && !self.alphabet.contains(&t.label) {
                return invariant(format!("symbol {} is not in the alphabet", t.label));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    #[inline]
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    #[inline]
    pub fn initial_states(&self) -> &StateSet {
        &self.initial
    }

    #[inline]
    pub fn final_states(&self) -> &StateSet {
        &self.finals
    }

    #[inline]
    pub fn transitions(&self) -> &BTreeSet<Transition> {
        &self.transitions
    }

    #[inline]
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// \return the largest state identifier, if any.
    #[inline]
    pub fn max_state(&self) -> Option<StateId> {
        self.states.last().copied()
    }

    /// \return an identifier no state uses: one past the largest, or the
    /// smallest unused one if the largest is `StateId::MAX`.
    pub fn fresh_state(&self) -> StateId {
        match self.max_state() {
            None => 0,
            Some(max) => max.checked_add(1).unwrap_or_else(|| {
                // The set is finite, so a gap exists below the maximum.
                let mut expected: StateId = 0;
                for &q in &self.states {
                    if q != expected {
                        break;
                    }
                    expected += 1;
                }
                expected
            }),
        }
    }

    /// \return whether any transition is labeled epsilon.
    pub fn has_epsilon(&self) -> bool {
        self.transitions.iter().any(Transition::is_epsilon)
    }

    /// Renumber states densely, in ascending order, starting at \p start.
    pub fn normalize(&mut self, start: StateId) {
        let map: BTreeMap<StateId, StateId> = self
            .states
            .iter()
            .zip(start..)
            .map(|(&old, new)| (old, new))
            .collect();
        let get = |q: &StateId| map[q];
        self.states = self.states.iter().map(get).collect();
        self.initial = self.initial.iter().map(get).collect();
        self.finals = self.finals.iter().map(get).collect();
        self.transitions = self
            .transitions
            .iter()
            .map(|t| Transition {
                from: get(&t.from),
                label: t.label.clone(),
                to: get(&t.to),
            })
            .collect();
    }

    /// \return true iff there is exactly one initial state and no state has
    /// two transitions on the same symbol. Epsilon edges are not counted.
    pub fn is_deterministic(&self) -> bool {
        if self.initial.len() != 1 {
            return false;
        }
        let mut prev: Option<(StateId, &Symbol)> = None;
        for t in self.transitions.iter().filter(|t| !t.is_epsilon()) {
            let key = (t.from, &t.label);
            if prev == Some(key) {
                return false;
            }
            prev = Some(key);
        }
        true
    }

    /// \return true iff there is an initial state and every state has a
    /// transition on every alphabet symbol.
    pub fn is_complete(&self) -> bool {
        !self.initial.is_empty()
            && self.states.iter().all(|&q| {
                self.alphabet
                    .iter()
                    .all(|a| self.step(q, a).next().is_some())
            })
    }

    /// \return the direct successors of \p state on \p symbol, without
    /// epsilon closure.
    pub fn step<'a>(&'a self, state: StateId, symbol: &Symbol) -> impl Iterator<Item = StateId> + 'a {
        let lo = Transition::new(state, symbol.clone(), StateId::MIN);
        let hi = Transition::new(state, symbol.clone(), StateId::MAX);
        self.transitions.range(lo..=hi).map(|t| t.to)
    }

    /// \return the direct predecessors of \p state on \p symbol.
    pub fn step_back<'a>(
        &'a self,
        state: StateId,
        symbol: &'a Symbol,
    ) -> impl Iterator<Item = StateId> + 'a {
        self.transitions
            .iter()
            .filter(move |t| t.to == state && &t.label == symbol)
            .map(|t| t.from)
    }

    fn step_dir(&self, state: StateId, symbol: &Symbol, dir: Direction) -> Vec<StateId> {
        match dir {
            Direction::Forward => self.step(state, symbol).collect(),
            Direction::Backward => self.step_back(state, symbol).collect(),
        }
    }

    /// \return the states reachable from \p state through epsilon edges
    /// alone, \p state included. Terminates on epsilon cycles.
    pub fn epsilon_closure(&self, state: StateId, dir: Direction) -> StateSet {
        self.epsilon_closure_of(core::iter::once(state), dir)
    }

    /// \return the union of the epsilon closures of \p states.
    pub fn epsilon_closure_of<I>(&self, states: I, dir: Direction) -> StateSet
    where
        I: IntoIterator<Item = StateId>,
    {
        let eps = Symbol::epsilon();
        let mut closure = StateSet::new();
        let mut worklist: VecDeque<StateId> = VecDeque::new();
        for q in states {
            if closure.insert(q) {
                worklist.push_back(q);
            }
        }
        while let Some(q) = worklist.pop_front() {
            for next in self.step_dir(q, &eps, dir) {
                if closure.insert(next) {
                    worklist.push_back(next);
                }
            }
        }
        closure
    }

    /// Simulate reading \p word from \p start: epsilon-close, then for each
    /// symbol take every successor and epsilon-close again.
    /// \return the states occupied at the end.
    pub fn run<I>(&self, start: &StateSet, word: I, dir: Direction) -> StateSet
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        let mut current = self.epsilon_closure_of(start.iter().copied(), dir);
        for symbol in word {
            let symbol = symbol.into();
            if symbol.is_epsilon() {
                continue;
            }
            if current.is_empty() {
                break;
            }
            let stepped: Vec<StateId> = current
                .iter()
                .flat_map(|&q| self.step_dir(q, &symbol, dir))
                .collect();
            current = self.epsilon_closure_of(stepped, dir);
        }
        current
    }

    /// \return whether the symbol sequence \p word is accepted.
    /// Epsilon symbols in the word are skipped.
    pub fn accepts<I>(&self, word: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        let reached = self.run(&self.initial, word, Direction::Forward);
        !reached.is_disjoint(&self.finals)
    }

    /// \return whether \p word is accepted, reading one symbol per character.
    /// `&` and `ε` denote the empty word and are skipped.
    pub fn is_accepted(&self, word: &str) -> bool {
        self.accepts(word.chars().map(Symbol::from))
    }

    /// \return the states reachable from \p from using alphabet symbols only.
    pub fn reachable_states(&self, from: &StateSet) -> StateSet {
        let mut reachable = from.clone();
        let mut has_added = true;
        while has_added {
            has_added = false;
            for a in &self.alphabet {
                let new_states: Vec<StateId> = reachable
                    .iter()
                    .flat_map(|&q| self.step(q, a))
                    .filter(|p| !reachable.contains(p))
                    .collect();
                if !new_states.is_empty() {
                    has_added = true;
                    reachable.extend(new_states);
                }
            }
        }
        reachable
    }

    /// \return the states reachable from the initial states.
    pub fn reachable_from_initial(&self) -> StateSet {
        self.reachable_states(&self.initial)
    }

    /// Keep only the states in \p keep, dropping every transition touching
    /// another state.
    pub(crate) fn retain_states(&mut self, keep: &StateSet) {
        self.states.retain(|q| keep.contains(q));
        self.initial.retain(|q| keep.contains(q));
        self.finals.retain(|q| keep.contains(q));
        self.transitions
            .retain(|t| keep.contains(&t.from) && keep.contains(&t.to));
    }

    /// Restrict the automaton to the states reachable from the initial
    /// states. Epsilon edges are not followed; this is meant for
    /// epsilon-free automata.
    pub fn remove_unreachable(&mut self) {
        let reachable = self.reachable_from_initial();
        self.retain_states(&reachable);
    }

    /// Remove states from which no final state is reachable.
    pub fn remove_dead(&mut self) {
        let live = self.reverse().reachable_states(&self.finals);
        self.retain_states(&live);
    }

    /// \return the automaton with every edge reversed and the initial and
    /// final states exchanged.
    pub fn reverse(&self) -> Automaton {
        Automaton {
            states: self.states.clone(),
            alphabet: self.alphabet.clone(),
            initial: self.finals.clone(),
            finals: self.initial.clone(),
            transitions: self.transitions.iter().map(Transition::reversed).collect(),
        }
    }
}
