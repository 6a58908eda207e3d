//! Pairwise swap search.
//!
//! For every pair of positions `i < j` inside the scored range the search
//! compares the written alignment against the transposed one:
//!
//! ```text
//! baseline = s(p_i, a_i) + s(p_j, a_j)
//! swapped  = s(p_i, a_j) + s(p_j, a_i)
//! ```
//!
//! Pairs whose margin `swapped - baseline` reaches the threshold are ranked
//! by margin and picked greedily so that no position is reported twice.

use tracing::{debug, trace};

use super::config::MorphemeConfig;
use super::similarity::ScoreMatrix;
use super::types::{CallSite, CheckResult, Signature, SwapCandidate};

#[derive(Debug, Clone, Copy)]
struct RankedPair {
    first: usize,
    second: usize,
    margin: f64,
}

/// Number of positions that have both a parameter and an argument.
///
/// Arguments in a variadic tail, or beyond the declared parameters for any
/// other reason, are never paired.
pub fn scored_range(signature: &Signature, call_site: &CallSite) -> usize {
    signature
        .parameters
        .as_ref()
        .map_or(0, |params| params.len().min(call_site.len()))
}

/// Search a call site for swapped argument pairs.
///
/// The threshold is trusted here; callers validate it first.
pub fn search(
    signature: &Signature,
    call_site: &CallSite,
    threshold: f64,
    morphemes: &MorphemeConfig,
) -> CheckResult {
    if signature.parameters.is_none() {
        trace!(callee = signature.display_name(), "No declared parameters; nothing to check");
        return CheckResult::default();
    }

    let range = scored_range(signature, call_site);
    if range < 2 {
        trace!(callee = signature.display_name(), range, "Fewer than two scored positions");
        return CheckResult::default();
    }

    let param_sets = signature.parameter_morphemes(range, morphemes);
    let arg_sets = call_site.argument_morphemes(range, morphemes);
    let matrix = ScoreMatrix::build(&param_sets, &arg_sets);

    let ranked = rank_pairs(&matrix, threshold);
    let selected = select_non_overlapping(ranked, range);

    let candidates = selected
        .into_iter()
        .map(|pair| SwapCandidate {
            arg1: pair.first + 1,
            arg2: pair.second + 1,
            morphemes1: arg_sets[pair.first].clone(),
            morphemes2: arg_sets[pair.second].clone(),
            score: pair.margin,
        })
        .collect();

    let result = CheckResult::from_candidates(candidates);
    debug!(
        callee = signature.display_name(),
        range,
        variadic = signature.is_variadic,
        candidates = result.len(),
        "Swap search finished"
    );
    result
}

/// Collect every pair whose margin reaches the threshold, best first.
fn rank_pairs(matrix: &ScoreMatrix, threshold: f64) -> Vec<RankedPair> {
    let size = matrix.size();
    let mut ranked = Vec::new();

    for first in 0..size {
        for second in first + 1..size {
            let crossed_first = matrix.get(first, second);
            let crossed_second = matrix.get(second, first);
            // Neither name says anything about the other slot.
            if crossed_first == 0.0 && crossed_second == 0.0 {
                continue;
            }

            let baseline = matrix.get(first, first) + matrix.get(second, second);
            let swapped = crossed_first + crossed_second;
            let margin = swapped - baseline;
            if margin >= threshold {
                trace!(first, second, baseline, swapped, margin, "Swap candidate");
                ranked.push(RankedPair {
                    first,
                    second,
                    margin,
                });
            }
        }
    }

    ranked.sort_by(|a, b| {
        b.margin
            .total_cmp(&a.margin)
            .then(a.first.cmp(&b.first))
            .then(a.second.cmp(&b.second))
    });
    ranked
}

/// Greedy cover: walk the ranking and keep pairs whose positions are still free.
fn select_non_overlapping(ranked: Vec<RankedPair>, size: usize) -> Vec<RankedPair> {
    let mut taken = vec![false; size];
    let mut selected = Vec::new();

    for pair in ranked {
        if taken[pair.first] || taken[pair.second] {
            continue;
        }
        taken[pair.first] = true;
        taken[pair.second] = true;
        selected.push(pair);
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::swapped_args::config::SearchConfig;
    use approx::assert_relative_eq;

    fn run(params: &[&str], args: &[&str]) -> CheckResult {
        search(
            &Signature::new(params.iter().copied()),
            &CallSite::from_names(args.iter().copied()),
            SearchConfig::default_threshold(),
            &MorphemeConfig::default(),
        )
    }

    #[test]
    fn detects_simple_swap() {
        let result = run(&["width", "height"], &["height", "width"]);
        assert_eq!(result.positions(), vec![(1, 2)]);
        assert_relative_eq!(result.candidates()[0].score, 2.0);
    }

    #[test]
    fn unknown_signature_yields_nothing() {
        let result = search(
            &Signature::unknown(),
            &CallSite::from_names(["hi", "lo"]),
            SearchConfig::default_threshold(),
            &MorphemeConfig::default(),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn scored_range_truncates_to_shorter_side() {
        let sig = Signature::new(["fmt"]).variadic(true);
        assert_eq!(scored_range(&sig, &CallSite::from_names(["fmt", "x", "y"])), 1);
        assert_eq!(scored_range(&Signature::unknown(), &CallSite::from_names(["x"])), 0);
        let sig = Signature::new(["a", "b", "c"]);
        assert_eq!(scored_range(&sig, &CallSite::from_names(["a", "b"])), 2);
    }

    #[test]
    fn extra_arguments_are_not_paired() {
        // "height" sits beyond the declared parameters.
        let result = run(&["width", "depth"], &["height", "depth", "width"]);
        assert!(result.is_empty());
    }

    #[test]
    fn unnamed_arguments_never_match() {
        let result = run(&["", "height"], &["height", ""]);
        assert!(result.is_empty());
    }

    #[test]
    fn partial_overlap_swap_is_reported() {
        let result = run(&["start_index", "end_index"], &["end_index", "start_index"]);
        assert_eq!(result.positions(), vec![(1, 2)]);
        assert_relative_eq!(result.candidates()[0].score, 2.0 - 2.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn half_matches_stay_below_threshold() {
        let result = run(&["barking_dogs", "hissing_cats"], &["cats", "dogs"]);
        assert!(result.is_empty());
    }

    #[test]
    fn overlapping_pairs_resolve_to_best_margin() {
        // (1,2) is an exact swap at 2.0; (2,3) also clears the bar at 1.5 but
        // shares position 2.
        let result = run(&["alpha", "beta", "alpha_gamma"], &["beta", "alpha", "beta"]);
        assert_eq!(result.positions(), vec![(1, 2)]);
        assert_relative_eq!(result.candidates()[0].score, 2.0);
    }

    #[test]
    fn ties_prefer_lower_positions() {
        // Argument 1 pairs with 2 or 3 at the same margin.
        let result = run(&["alpha", "beta", "beta"], &["beta", "alpha", "alpha"]);
        assert_eq!(result.positions(), vec![(1, 2)]);
    }

    #[test]
    fn rotations_are_not_reported() {
        let result = run(&["alpha", "beta", "gamma"], &["beta", "gamma", "alpha"]);
        assert!(result.is_empty());
    }
}
