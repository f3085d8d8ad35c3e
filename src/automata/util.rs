//! Human-readable dumps of automata.

use crate::automata::nfa::{Automaton, StateId, Transition};
use core::fmt;

impl Automaton {
    fn state_marker(&self, q: StateId) -> &'static str {
        match (self.initial.contains(&q), self.finals.contains(&q)) {
            (true, true) => "SF",
            (true, false) => "S",
            (false, true) => "F",
            (false, false) => "",
        }
    }

    fn outgoing(&self, q: StateId) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| t.from == q)
    }

    /// Generate a human-readable representation of the automaton.
    pub fn to_readable_string(&self) -> String {
        let mut result = String::new();
        result.push_str("Automaton States:\n");
        result.push_str("=================\n\n");
        let alphabet: Vec<&str> = self.alphabet.iter().map(|a| a.as_str()).collect();
        result.push_str(&format!("Alphabet: {{{}}}\n\n", alphabet.join(", ")));

        for &q in &self.states {
            let marker = match (self.initial.contains(&q), self.finals.contains(&q)) {
                (true, true) => " (START, FINAL)",
                (true, false) => " (START)",
                (false, true) => " (FINAL)",
                (false, false) => "",
            };
            result.push_str(&format!("State {}{}\n", q, marker));

            let (eps, symbols): (Vec<&Transition>, Vec<&Transition>) =
                self.outgoing(q).partition(|t| t.is_epsilon());
            if !eps.is_empty() {
                result.push_str("  ε-transitions:\n");
                for t in eps {
                    result.push_str(&format!("    ε ──> {}\n", t.to));
                }
            }
            if !symbols.is_empty() {
                result.push_str("  Symbol transitions:\n");
                for t in symbols {
                    result.push_str(&format!("    {} ──> {}\n", t.label, t.to));
                }
            }
            if self.outgoing(q).next().is_none() {
                result.push_str("  (no transitions)\n");
            }
            result.push('\n');
        }
        result
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Automaton({} states)", self.states.len())?;
        for &q in &self.states {
            writeln!(f)?;
            write!(f, "[{}{}]", self.state_marker(q), q)?;
            for t in self.outgoing(q) {
                write!(f, " {}→{}", t.label, t.to)?;
            }
        }
        Ok(())
    }
}
