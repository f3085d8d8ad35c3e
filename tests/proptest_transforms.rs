//! Property-based tests for the automaton transformations.

// Work around dead code warnings: rust-lang issue #46379
pub mod common;

use common::*;
use proptest::prelude::*;
use relang::{Automaton, Flags, Regex, Transition};

const ALPHABET: &[&str] = &["a", "b"];

// ============================================================================
// Test Data Strategies
// ============================================================================

fn label_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("a"), Just("b"), Just("ε")]
}

/// Generate small automata over {a, b}, possibly with epsilon edges.
fn automaton_strategy() -> impl Strategy<Value = Automaton> {
    (1..=6u64).prop_flat_map(|n| {
        let state = 0..n;
        (
            prop::collection::vec(state.clone(), 0..=2),
            prop::collection::vec(state.clone(), 0..=3),
            prop::collection::vec((state.clone(), label_strategy(), state), 0..=12),
        )
            .prop_map(move |(initial, finals, edges)| {
                Automaton::new(
                    0..n,
                    ALPHABET.iter().copied(),
                    initial,
                    finals,
                    edges.into_iter().map(|(p, a, q)| Transition::new(p, a, q)),
                )
                .unwrap()
            })
    })
}

/// Generate regex ASTs over {a, b}.
fn regex_strategy() -> impl Strategy<Value = Regex> {
    let leaf = prop_oneof![
        Just(Regex::symbol("a")),
        Just(Regex::symbol("b")),
        Just(Regex::empty()),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Regex::concat(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Regex::alt(l, r)),
            inner.prop_map(Regex::star),
        ]
    })
}

fn flags_strategy() -> impl Strategy<Value = Flags> {
    (any::<bool>(), any::<bool>()).prop_map(|(no_simplify, partition_refinement)| Flags {
        no_simplify,
        partition_refinement,
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_determinize_preserves_language(nfa in automaton_strategy()) {
        let dfa = relang::determinize(&nfa);
        prop_assert!(dfa.is_deterministic());
        prop_assert!(!dfa.has_epsilon());
        assert_same_language(&nfa, &dfa, ALPHABET);

        let again = relang::determinize(&dfa);
        prop_assert!(again.is_deterministic());
        assert_same_language(&dfa, &again, ALPHABET);
    }

    #[test]
    fn prop_remove_epsilon_preserves_language(nfa in automaton_strategy()) {
        let eps_free = relang::remove_epsilon(nfa.clone());
        prop_assert!(!eps_free.has_epsilon());
        prop_assert_eq!(eps_free.states(), nfa.states());
        assert_same_language(&nfa, &eps_free, ALPHABET);
    }

    #[test]
    fn prop_complete_is_total(nfa in automaton_strategy()) {
        let full = relang::complete(nfa.clone());
        prop_assert!(full.is_complete());
        prop_assert!(full.num_states() <= nfa.num_states() + 1);
        assert_same_language(&nfa, &full, ALPHABET);
    }

    #[test]
    fn prop_minimize_shrinks(nfa in automaton_strategy(), flags in flags_strategy()) {
        let mut dfa = relang::determinize(&nfa);
        dfa.remove_unreachable();
        let min = relang::minimize(&dfa, flags);
        prop_assert!(min.is_deterministic() || min.num_states() == 0);
        prop_assert!(min.num_states() <= dfa.num_states());
        assert_same_language(&nfa, &min, ALPHABET);
    }

    #[test]
    fn prop_minimize_strategies_agree(nfa in automaton_strategy()) {
        let reversal = relang::minimize(&nfa, Flags::default());
        let refinement = relang::minimize(&nfa, Flags::from("p"));
        prop_assert_eq!(reversal.num_states(), refinement.num_states());
    }

    #[test]
    fn prop_to_regex_preserves_language(nfa in automaton_strategy(), flags in flags_strategy()) {
        match relang::to_regex(&nfa, flags) {
            Ok(re) => assert_same_language(&nfa, &relang::from_regex(&re), ALPHABET),
            // Only the empty language has no regex.
            Err(_) => assert_language(&nfa, ALPHABET, |_| false),
        }
    }

    #[test]
    fn prop_regex_round_trip(re in regex_strategy(), flags in flags_strategy()) {
        let nfa = relang::from_regex(&re);
        let back = relang::to_regex(&nfa, flags).unwrap();
        assert_same_language(&nfa, &relang::from_regex(&back), ALPHABET);

        let printed: Regex = back.to_string().parse().unwrap();
        assert_same_language(&nfa, &relang::from_regex(&printed), ALPHABET);
    }

    #[test]
    fn prop_simplify_preserves_language(re in regex_strategy()) {
        let simplified = relang::simplify::simplify(re.clone());
        prop_assert!(!relang::simplify::simplify_in_place(&mut simplified.clone()));
        assert_same_language(&relang::from_regex(&re), &relang::from_regex(&simplified), ALPHABET);
    }
}
