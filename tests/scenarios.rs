//! End-to-end swap detection scenarios through the public engine API.

use approx::assert_relative_eq;
use proptest::prelude::*;

use argswap::{ArgswapEngine, CallSite, CheckResult, Signature};

fn check(params: &[&str], args: &[&str]) -> CheckResult {
    ArgswapEngine::default()
        .check(Some(params), args, None, false)
        .expect("default threshold is valid")
}

fn set(items: &[&str]) -> std::collections::BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod reference_scenarios {
    use super::*;

    #[test]
    fn unknown_parameters_report_nothing() {
        let engine = ArgswapEngine::default();
        let args = ["hi", "lo", "foo", "bar"];
        let result = engine.check(None, &args[..], Some("f"), false).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn two_independent_swaps() {
        let result = check(&["hi", "lo", "foo", "bar"], &["lo", "hi", "bar", "foo"]);
        assert_eq!(result.positions(), vec![(1, 2), (3, 4)]);
        for candidate in &result {
            assert_relative_eq!(candidate.score, 2.0);
        }
    }

    #[test]
    fn exact_match_is_clean() {
        assert!(check(&["a", "b", "c"], &["a", "b", "c"]).is_empty());
    }

    #[test]
    fn simple_swap_reports_argument_morphemes() {
        let result = check(&["width", "height"], &["height", "width"]);
        assert_eq!(result.len(), 1);

        let candidate = &result.candidates()[0];
        assert_eq!((candidate.arg1, candidate.arg2), (1, 2));
        assert_eq!(candidate.morphemes1, set(&["height"]));
        assert_eq!(candidate.morphemes2, set(&["width"]));
    }

    #[test]
    fn variadic_tail_is_never_paired() {
        let engine = ArgswapEngine::default();
        let sig = Signature::new(["fmt"]).with_callee("printf").variadic(true);
        let site = CallSite::from_names(["fmt", "x", "y"]);
        assert!(engine.check_site(&sig, &site).unwrap().is_empty());
    }
}

#[cfg(test)]
mod naming_scenarios {
    use super::*;

    #[test]
    fn matching_is_case_insensitive() {
        let result = check(&["Dogs", "Cats"], &["cats", "dogs"]);
        assert_eq!(result.positions(), vec![(1, 2)]);
    }

    #[test]
    fn multi_morpheme_names_swap() {
        let result = check(
            &["lolling_dogs", "cats_silly"],
            &["silly_cats", "dogs_lolling"],
        );
        assert_eq!(result.positions(), vec![(1, 2)]);
        assert_relative_eq!(result.candidates()[0].score, 2.0);
    }

    #[test]
    fn shared_morphemes_reduce_the_margin() {
        let result = check(&["startIndex", "endIndex"], &["end_index", "start_index"]);
        assert_eq!(result.positions(), vec![(1, 2)]);
        assert_relative_eq!(result.candidates()[0].score, 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn unrelated_names_are_clean() {
        assert!(check(&["source", "destination"], &["alpha", "omega"]).is_empty());
    }

    #[test]
    fn partially_covered_names_are_clean() {
        assert!(check(&["barking_dogs", "hissing_cats"], &["cats", "dogs"]).is_empty());
    }

    #[test]
    fn rotations_are_not_swaps() {
        assert!(check(&["a", "b", "c"], &["c", "a", "b"]).is_empty());
    }

    #[test]
    fn connector_words_are_ignored() {
        let result = check(&["size_of_buffer", "count"], &["count", "buffer_size"]);
        assert_eq!(result.positions(), vec![(1, 2)]);
    }

    #[test]
    fn non_identifier_arguments_never_match() {
        let result = check(&["width", "height"], &["", "width"]);
        assert!(result.is_empty());
    }

    #[test]
    fn swap_beyond_declared_parameters_is_ignored() {
        let result = check(&["x"], &["y", "x"]);
        assert!(result.is_empty());
    }
}

fn identifier() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "width", "height", "startIndex", "end_index", "src", "dst", "count", "buffer_size",
        "max_value", "minValue", "", "x2y", "lhs", "rhs",
    ])
    .prop_map(str::to_string)
}

#[cfg(test)]
mod property_based_tests {
    use super::*;

    proptest! {
        /// Property: repeated checks of the same call agree exactly
        #[test]
        fn prop_check_is_deterministic(
            params in prop::collection::vec(identifier(), 0..6),
            args in prop::collection::vec(identifier(), 0..6),
        ) {
            let engine = ArgswapEngine::default();
            let first = engine.check(Some(&params[..]), &args[..], None, false).unwrap();
            let second = engine.check(Some(&params[..]), &args[..], None, false).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Property: no position appears in two candidates and output is ordered
        #[test]
        fn prop_candidates_are_disjoint_and_sorted(
            params in prop::collection::vec(identifier(), 0..8),
            args in prop::collection::vec(identifier(), 0..8),
        ) {
            let engine = ArgswapEngine::default();
            let result = engine.check(Some(&params[..]), &args[..], None, false).unwrap();
            let range = params.len().min(args.len());

            let mut seen = std::collections::HashSet::new();
            for candidate in &result {
                prop_assert!(candidate.arg1 < candidate.arg2);
                prop_assert!(candidate.arg2 <= range);
                prop_assert!(candidate.score >= 1.2 && candidate.score <= 2.0);
                prop_assert!(seen.insert(candidate.arg1));
                prop_assert!(seen.insert(candidate.arg2));
            }

            let positions = result.positions();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            prop_assert_eq!(positions, sorted);
        }

        /// Property: without parameter names nothing is ever reported
        #[test]
        fn prop_unknown_signature_is_clean(args in prop::collection::vec(identifier(), 0..8)) {
            let engine = ArgswapEngine::default();
            let result = engine.check(None, &args[..], None, false).unwrap();
            prop_assert!(result.is_empty());
        }
    }
}
