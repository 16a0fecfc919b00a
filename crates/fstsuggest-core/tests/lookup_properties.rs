use std::collections::BTreeMap;

use fstsuggest_core::{Completer, Completion, FstAutomaton, LookupOptions, RankingMode};
use proptest::prelude::*;

const WEIGHT_EXACT: LookupOptions = LookupOptions {
    ranking: RankingMode::WeightFirst,
    exact_first: true,
};
const WEIGHT_ONLY: LookupOptions = LookupOptions {
    ranking: RankingMode::WeightFirst,
    exact_first: false,
};
const ALPHABETICAL: LookupOptions = LookupOptions {
    ranking: RankingMode::Alphabetical,
    exact_first: false,
};

fn entries_strategy(max_bucket: u8) -> impl Strategy<Value = Vec<(String, u8)>> {
    prop::collection::vec(("[a-d]{1,6}", 0u8..=max_bucket), 1..40)
}

/// Highest bucket per distinct term, matching what the builder stores.
fn stored_terms(entries: &[(String, u8)]) -> BTreeMap<String, u8> {
    let mut stored = BTreeMap::new();
    for (term, bucket) in entries {
        let slot = stored.entry(term.clone()).or_insert(*bucket);
        *slot = (*slot).max(*bucket);
    }
    stored
}

fn matches_by_weight(stored: &BTreeMap<String, u8>, key: &str) -> Vec<(String, u8)> {
    let mut matches = stored
        .iter()
        .filter(|(term, _)| term.starts_with(key))
        .map(|(term, bucket)| (term.clone(), *bucket))
        .collect::<Vec<_>>();
    matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    matches
}

fn pairs(results: &[Completion]) -> Vec<(String, u8)> {
    results
        .iter()
        .map(|completion| (completion.text().into_owned(), completion.bucket))
        .collect()
}

proptest! {
    #[test]
    fn weight_first_equals_sorted_matches_truncated(
        entries in entries_strategy(4),
        key in "[a-d]{1,3}",
        limit in 0usize..12,
    ) {
        let automaton = FstAutomaton::from_bucketed_terms(entries.iter().map(|(t, b)| (t.as_str(), *b)))
            .expect("build");
        let completer = Completer::new(&automaton).expect("completer");
        let results = completer.lookup_bytes(key.as_bytes(), limit, WEIGHT_ONLY).expect("lookup");

        let mut expected = matches_by_weight(&stored_terms(&entries), &key);
        expected.truncate(limit);
        prop_assert!(results.len() <= limit);
        prop_assert_eq!(pairs(&results), expected);
    }

    #[test]
    fn exact_first_leads_with_the_key_once_the_limit_is_reached(
        entries in entries_strategy(4),
        pick in any::<prop::sample::Index>(),
        limit in 1usize..8,
    ) {
        let stored = stored_terms(&entries);
        let (key, bucket) = stored
            .iter()
            .nth(pick.index(stored.len()))
            .map(|(term, bucket)| (term.clone(), *bucket))
            .expect("non-empty");
        let automaton = FstAutomaton::from_bucketed_terms(entries.iter().map(|(t, b)| (t.as_str(), *b)))
            .expect("build");
        let completer = Completer::new(&automaton).expect("completer");
        let results = pairs(&completer.lookup_bytes(key.as_bytes(), limit, WEIGHT_EXACT).expect("lookup"));

        prop_assert!(results.len() <= limit);
        prop_assert!(results.contains(&(key.clone(), bucket)));
        if results.len() == limit {
            prop_assert_eq!(&results[0], &(key.clone(), bucket));
        }
        let rest = &results[1..];
        let rest_sorted = rest.windows(2).all(|pair| {
            pair[0].1 > pair[1].1 || (pair[0].1 == pair[1].1 && pair[0].0 < pair[1].0)
        });
        prop_assert!(rest_sorted);
        let all_prefixed = results.iter().all(|(text, _)| text.starts_with(key.as_str()));
        prop_assert!(all_prefixed);
    }

    #[test]
    fn repeated_lookups_are_identical(
        entries in entries_strategy(4),
        key in "[a-d]{1,2}",
        limit in 0usize..10,
    ) {
        let automaton = FstAutomaton::from_bucketed_terms(entries.iter().map(|(t, b)| (t.as_str(), *b)))
            .expect("build");
        let completer = Completer::new(&automaton).expect("completer");
        let first = completer.lookup(&key, limit).expect("lookup");
        let second = completer.lookup(&key, limit).expect("lookup");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn alphabetical_equals_lexicographic_matches_truncated(
        entries in entries_strategy(4),
        key in "[a-d]{1,2}",
        limit in 1usize..10,
    ) {
        let automaton = FstAutomaton::from_bucketed_terms(entries.iter().map(|(t, b)| (t.as_str(), *b)))
            .expect("build");
        let completer = Completer::new(&automaton).expect("completer");
        let results = completer.lookup_bytes(key.as_bytes(), limit, ALPHABETICAL).expect("lookup");

        let mut expected = matches_by_weight(&stored_terms(&entries), &key);
        expected.sort_by(|a, b| a.0.cmp(&b.0));
        expected.truncate(limit);
        prop_assert_eq!(pairs(&results), expected);
    }

    #[test]
    fn single_bucket_results_are_lexicographic(
        entries in entries_strategy(0),
        key in "[a-d]{1,2}",
        limit in 1usize..10,
    ) {
        let automaton = FstAutomaton::from_bucketed_terms(entries.iter().map(|(t, b)| (t.as_str(), *b)))
            .expect("build");
        let completer = Completer::new(&automaton).expect("completer");
        prop_assert_eq!(completer.bucket_count(), 1);

        let weight = completer.lookup_bytes(key.as_bytes(), limit, WEIGHT_EXACT).expect("lookup");
        let alphabetical = completer.lookup_bytes(key.as_bytes(), limit, ALPHABETICAL).expect("lookup");
        prop_assert!(weight.windows(2).all(|pair| pair[0].bytes < pair[1].bytes));
        prop_assert_eq!(weight, alphabetical);
    }

    #[test]
    fn bucket_of_reports_the_stored_bucket(
        entries in entries_strategy(4),
        probe in "[a-d]{1,6}",
    ) {
        let stored = stored_terms(&entries);
        let automaton = FstAutomaton::from_bucketed_terms(entries.iter().map(|(t, b)| (t.as_str(), *b)))
            .expect("build");
        let completer = Completer::new(&automaton).expect("completer");
        prop_assert_eq!(completer.bucket_of(&probe).expect("bucket"), stored.get(&probe).copied());
    }
}
