#![allow(clippy::uninlined_format_args)]

use relang::{Automaton, Flags, Regex, StateId, Transition};

/// Longest word enumerated by the language comparisons.
pub const MAX_WORD_LEN: usize = 6;

/// Build an automaton, panicking on invalid input.
#[track_caller]
pub fn nfa(
    states: &[StateId],
    alphabet: &[&str],
    initial: &[StateId],
    finals: &[StateId],
    transitions: &[(StateId, &str, StateId)],
) -> Automaton {
    let res = Automaton::new(
        states.iter().copied(),
        alphabet.iter().copied(),
        initial.iter().copied(),
        finals.iter().copied(),
        transitions.iter().map(|&(p, a, q)| Transition::new(p, a, q)),
    );
    assert!(res.is_ok(), "Invalid automaton: {}", res.unwrap_err());
    res.unwrap()
}

/// Parse a pattern, panicking on syntax errors.
#[track_caller]
pub fn regex(pattern: &str) -> Regex {
    let res = pattern.parse::<Regex>();
    assert!(res.is_ok(), "Failed to parse {}: {}", pattern, res.unwrap_err());
    res.unwrap()
}

/// \return every word over \p alphabet of length at most \p max_len, each
/// symbol being one character.
pub fn words(alphabet: &[&str], max_len: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for a in alphabet {
                next.push(format!("{}{}", prefix, a));
            }
        }
        result.extend(next.iter().cloned());
        frontier = next;
    }
    result
}

/// Check that \p lhs and \p rhs agree on every short word over \p alphabet.
#[track_caller]
pub fn assert_same_language(lhs: &Automaton, rhs: &Automaton, alphabet: &[&str]) {
    for word in words(alphabet, MAX_WORD_LEN) {
        assert_eq!(
            lhs.is_accepted(&word),
            rhs.is_accepted(&word),
            "Languages differ on {:?}\nlhs: {}\nrhs: {}",
            word,
            lhs,
            rhs
        );
    }
}

/// Check that \p nfa accepts exactly the words in \p accepted among the short
/// words over \p alphabet.
#[track_caller]
pub fn assert_language(nfa: &Automaton, alphabet: &[&str], accepted: impl Fn(&str) -> bool) {
    for word in words(alphabet, MAX_WORD_LEN) {
        assert_eq!(
            nfa.is_accepted(&word),
            accepted(&word),
            "Wrong verdict on {:?} for {}",
            word,
            nfa
        );
    }
}

/// Invoke \p func with each flag configuration, in turn.
pub fn test_with_flags<F>(func: F)
where
    F: Fn(Flags),
{
    func(Flags::default());
    func(Flags {
        no_simplify: true,
        ..Flags::default()
    });
    func(Flags {
        partition_refinement: true,
        ..Flags::default()
    });
    func(Flags {
        no_simplify: true,
        partition_refinement: true,
    });
}
