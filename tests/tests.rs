// Work around dead code warnings: rust-lang issue #46379
pub mod common;

// Work around dead code warnings: rust-lang issue #46379
use common::*;

use relang::{Automaton, Error, Flags, StateSet};

/// Patterns with a non-empty language over single-character symbols.
const PATTERNS: &[&str] = &[
    "a",
    "ab",
    "a|b",
    "(a|b)*",
    "a*b*",
    "(ab|c)*a",
    "&",
    "a(b|&)c",
    "((a|b)c)*|a**",
    "(a*|b)(c|a)*b",
    "c**(ab)*",
];

const ALPHABET: &[&str] = &["a", "b", "c"];

#[test]
fn test_determinize_one_or_more() {
    let nfa = nfa(&[0, 1], &["a", "b"], &[0], &[1], &[(0, "a", 1), (0, "a", 0)]);
    assert!(!nfa.is_deterministic());

    let mut dfa = relang::determinize(&nfa);
    assert!(dfa.is_deterministic());
    assert_language(&dfa, &["a", "b"], |w| !w.is_empty() && w.chars().all(|c| c == 'a'));

    // The reachable non-empty subsets are {0} and {0,1}.
    dfa.remove_unreachable();
    dfa.remove_dead();
    assert_eq!(dfa.num_states(), 2);
    assert_language(&dfa, &["a", "b"], |w| !w.is_empty() && w.chars().all(|c| c == 'a'));
}

#[test]
fn test_star_of_alternation_without_epsilon() {
    let nfa = relang::remove_epsilon(relang::from_regex(&regex("(a|b)*")));
    assert!(!nfa.has_epsilon());
    assert!(relang::is_accepted(&nfa, ""));
    assert!(relang::is_accepted(&nfa, "ab"));
    assert!(!relang::is_accepted(&nfa, "c"));
}

fn single_state_loop_tc(flags: Flags) {
    let nfa = nfa(&[0], &["a"], &[0], &[0], &[(0, "a", 0)]);
    let re = relang::to_regex(&nfa, flags).unwrap();
    let back = relang::from_regex(&re);
    assert_same_language(&nfa, &back, &["a", "b"]);
    if !flags.no_simplify {
        assert_eq!(re.to_string(), "a*");
    }
}

#[test]
fn test_single_state_loop() {
    test_with_flags(single_state_loop_tc)
}

fn round_trip_tc(flags: Flags) {
    for pattern in PATTERNS {
        let nfa = relang::from_regex(&regex(pattern));
        let re = relang::to_regex(&nfa, flags).unwrap();
        let back = relang::from_regex(&re);
        assert_same_language(&nfa, &back, ALPHABET);

        // The printed form parses back to the same language.
        let reparsed = relang::from_regex(&regex(&re.to_string()));
        assert_same_language(&nfa, &reparsed, ALPHABET);
    }
}

#[test]
fn test_round_trip() {
    test_with_flags(round_trip_tc)
}

#[test]
fn test_language_preservation() {
    for pattern in PATTERNS {
        let nfa = relang::from_regex(&regex(pattern));
        let dfa = relang::determinize(&nfa);
        let eps_free = relang::remove_epsilon(nfa.clone());
        assert!(dfa.is_deterministic(), "{}", pattern);
        assert!(!eps_free.has_epsilon(), "{}", pattern);
        assert_same_language(&nfa, &dfa, ALPHABET);
        assert_same_language(&nfa, &eps_free, ALPHABET);

        let again = relang::determinize(&dfa);
        assert!(again.is_deterministic());
        assert_same_language(&dfa, &again, ALPHABET);
    }
}

fn minimize_tc(flags: Flags) {
    for pattern in PATTERNS {
        let nfa = relang::from_regex(&regex(pattern));
        let mut dfa = relang::determinize(&nfa);
        dfa.remove_unreachable();

        let min = relang::minimize(&dfa, flags);
        assert!(min.is_deterministic(), "{}", pattern);
        assert!(min.num_states() <= dfa.num_states(), "{}", pattern);
        assert_same_language(&nfa, &min, ALPHABET);

        // Minimizing the NFA directly reaches the same size.
        let direct = relang::minimize(&nfa, flags);
        assert_eq!(direct.num_states(), min.num_states(), "{}", pattern);
        assert_same_language(&nfa, &direct, ALPHABET);

        let twice = relang::minimize(&min, flags);
        assert_eq!(twice.num_states(), min.num_states(), "{}", pattern);
    }
}

#[test]
fn test_minimize() {
    test_with_flags(minimize_tc)
}

#[test]
fn test_minimize_strategies_agree() {
    for pattern in PATTERNS {
        let nfa = relang::from_regex(&regex(pattern));
        let reversal = relang::minimize(&nfa, Flags::default());
        let refinement = relang::minimize(&nfa, Flags::from("p"));
        assert_eq!(reversal.num_states(), refinement.num_states(), "{}", pattern);
        assert_same_language(&reversal, &refinement, ALPHABET);
    }
}

#[test]
fn test_minimal_sizes() {
    for (pattern, size) in [("a", 2), ("(a|b)*", 1), ("a*b*", 2), ("ab|ac", 3), ("(ab)*", 2)] {
        let min = relang::minimize(&relang::from_regex(&regex(pattern)), Flags::default());
        assert_eq!(min.num_states(), size, "{}", pattern);
    }
}

#[test]
fn test_complete() {
    for pattern in PATTERNS {
        let nfa = relang::from_regex(&regex(pattern));
        let full = relang::complete(nfa.clone());
        assert!(full.is_complete(), "{}", pattern);
        for &q in full.states() {
            for a in full.alphabet() {
                assert!(full.transitions().iter().any(|t| t.from == q && &t.label == a));
            }
        }
        assert_same_language(&nfa, &full, ALPHABET);
    }
}

#[test]
fn test_pipeline_keeps_language() {
    for pattern in PATTERNS {
        let nfa = relang::from_regex(&regex(pattern));
        let eps_free = relang::remove_epsilon(nfa.clone());
        let dfa = relang::complete(relang::minimize(&eps_free, Flags::default()));
        assert!(dfa.is_deterministic() && dfa.is_complete(), "{}", pattern);
        assert_same_language(&nfa, &dfa, ALPHABET);
        let re = relang::to_regex(&dfa, Flags::default()).unwrap();
        assert_same_language(&nfa, &relang::from_regex(&re), ALPHABET);
    }
}

#[test]
fn test_labeled_graph_round_trip() {
    for pattern in PATTERNS {
        let nfa = relang::from_regex(&regex(pattern));
        let graph = relang::to_labeled_graph(&nfa);
        assert_eq!(graph.nodes.len(), nfa.num_states());
        let back = relang::to_automaton(&graph).unwrap();
        assert_eq!(back.states(), &(0..nfa.num_states() as u64).collect::<StateSet>());
        assert_same_language(&nfa, &back, ALPHABET);
    }
}

#[test]
fn test_empty_language_has_no_regex() {
    let nfa = nfa(&[0, 1], &["a"], &[0], &[], &[(0, "a", 1)]);
    let err = relang::to_regex(&nfa, Flags::default()).unwrap_err();
    assert!(matches!(err, Error::SynthesisFailure(..)));
    assert!(err.to_string().starts_with("synthesis failure"));
}

#[test]
fn test_zero_states() {
    let empty = Automaton::default();
    assert!(!relang::is_accepted(&empty, ""));
    assert_eq!(relang::determinize(&empty).num_states(), 1);
    assert_eq!(relang::minimize(&empty, Flags::default()).num_states(), 0);
    let full = relang::complete(empty);
    assert!(full.is_complete());
    assert!(!relang::is_accepted(&full, ""));
}
