//! Editor-facing entry points.

use crate::ast::Regex;
use crate::automata::graph::LabeledGraph;
use crate::automata::nfa::Automaton;
use crate::parse;
use core::{fmt, str::FromStr};

/// Errors surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An automaton references an undeclared state or symbol, or declares the
    /// epsilon token as part of its alphabet.
    InvariantViolation(String),

    /// State elimination could not reduce the automaton to a single
    /// transition between its entry and exit markers.
    SynthesisFailure(String),

    /// A regex pattern failed to parse.
    Syntax(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvariantViolation(text) => write!(f, "invariant violation: {}", text),
            Error::SynthesisFailure(text) => write!(f, "synthesis failure: {}", text),
            Error::Syntax(text) => f.write_str(text),
        }
    }
}

impl std::error::Error for Error {}

/// Flags used to control the transformations.
/// The default flags simplify synthesized regexes and minimize by double
/// reversal.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// If set, `to_regex` returns the raw state-elimination result.
    pub no_simplify: bool,

    /// If set, `minimize` merges equivalent states by partition refinement
    /// rather than by determinizing the reverse automaton twice.
    pub partition_refinement: bool,
}

impl Flags {
    /// Construct a Flags from a character iterator.
    /// 'n' disables simplification, 'p' selects partition refinement.
    /// Other flags are ignored.
    #[inline]
    pub fn new<T: Iterator<Item = char>>(chars: T) -> Self {
        let mut result = Self::default();
        for c in chars {
            match c {
                'n' => {
                    result.no_simplify = true;
                }
                'p' => {
                    result.partition_refinement = true;
                }
                _ => {
                    // Silently skip unsupported flags.
                }
            }
        }
        result
    }
}

impl From<&str> for Flags {
    /// Construct a Flags from a string.
    ///
    /// See also: [`Flags::new`].
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s.chars())
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.no_simplify {
            f.write_str("n")?;
        }
        if self.partition_refinement {
            f.write_str("p")?;
        }
        Ok(())
    }
}

impl FromStr for Regex {
    type Err = Error;

    /// Attempts to parse a string into a regular expression AST.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        parse::try_parse(s)
    }
}

/// Build an automaton from an editor graph.
pub fn to_automaton(graph: &LabeledGraph) -> Result<Automaton, Error> {
    graph.to_automaton()
}

/// Render an automaton as an editor graph, renumbering its states.
pub fn to_labeled_graph(nfa: &Automaton) -> LabeledGraph {
    LabeledGraph::from_automaton(nfa)
}

/// \return whether \p nfa accepts \p word, one symbol per character.
pub fn is_accepted(nfa: &Automaton, word: &str) -> bool {
    nfa.is_accepted(word)
}

pub fn determinize(nfa: &Automaton) -> Automaton {
    nfa.determinize()
}

pub fn minimize(nfa: &Automaton, flags: Flags) -> Automaton {
    nfa.minimize(flags)
}

pub fn complete(mut nfa: Automaton) -> Automaton {
    nfa.complete();
    nfa
}

pub fn remove_epsilon(mut nfa: Automaton) -> Automaton {
    nfa.remove_epsilon();
    nfa
}

pub fn from_regex(re: &Regex) -> Automaton {
    Automaton::from_regex(re)
}

pub fn to_regex(nfa: &Automaton, flags: Flags) -> Result<Regex, Error> {
    nfa.to_regex(flags)
}
