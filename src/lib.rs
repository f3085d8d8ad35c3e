/*!

# relang - finite automata and regular expressions

This crate implements the classical transformations between nondeterministic
finite automata and regular expressions: subset construction, minimization,
completion, epsilon elimination, construction of an automaton from a regex and
synthesis of a regex from an automaton by state elimination.

# Example: determinize an automaton

```rust
use relang::Automaton;
// Accepts one or more `a`.
let nfa = Automaton::new([0, 1], ["a", "b"], [0], [1], [(0, "a", 1), (0, "a", 0)]).unwrap();
assert!(!nfa.is_deterministic());
let dfa = relang::determinize(&nfa);
assert!(dfa.is_deterministic());
assert!(dfa.is_accepted("aaa"));
assert!(!dfa.is_accepted("ab"));
```

# Example: from a regex and back

```rust
use relang::{Flags, Regex};
let re: Regex = "(a|b)*".parse().unwrap();
let mut nfa = relang::from_regex(&re);
nfa.remove_epsilon();
assert!(nfa.is_accepted(""));
assert!(nfa.is_accepted("ab"));
assert!(!nfa.is_accepted("c"));

let single = relang::Automaton::new([0], ["a"], [0], [0], [(0, "a", 0)]).unwrap();
assert_eq!(relang::to_regex(&single, Flags::default()).unwrap().to_string(), "a*");
```

# Symbols

An alphabet symbol is an opaque token. Regex patterns and words passed to
`is_accepted` read one symbol per character; a pattern may brace a longer
token, as in `{ab}`. The reserved token `ε` labels epsilon transitions and
stands for the empty word. `&` is accepted as an alternative spelling.

# Architecture

relang has a regex parser, an AST with a simplifier which rewrites it to a
fixpoint, and an automaton model whose transformations each live in their own
module under `automata`. Every transformation is a pure function of its input
automaton or regex.

# Crate features

- **serde**. Derives `Serialize` and `Deserialize` for automata, regexes and
  labeled graphs. Automata are saved as a plain snapshot record and validated
  when loaded.

*/

#![warn(clippy::all)]

pub use crate::api::*;
pub use crate::ast::Regex;
pub use crate::automata::graph::{GraphEdge, GraphNode, LabeledGraph};
pub use crate::automata::nfa::{Automaton, Direction, StateId, StateSet, Transition};
pub use crate::symbol::{Symbol, EPSILON};

mod api;
pub mod ast;
pub mod automata;
pub mod parse;
pub mod simplify;
mod symbol;
