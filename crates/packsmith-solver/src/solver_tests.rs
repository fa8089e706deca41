//! Tests for case dispatch in the pack solver.

use packsmith_config::SearchMode;
use packsmith_core::{PackCombination, PackError, PackScore, PackSizes};
use packsmith_test::reference_sizes;

use super::*;

fn order(quantity: u64) -> OrderQuantity {
    OrderQuantity::new(quantity).unwrap()
}

fn packs(pairs: &[(u64, u64)]) -> PackCombination {
    packsmith_test::fixtures::combination(pairs)
}

#[test]
fn test_exact_match() {
    let result = PackSolver::default()
        .solve_with_stats(order(1000), &reference_sizes())
        .unwrap();
    assert_eq!(result.case, SolveCase::ExactMatch);
    assert_eq!(result.solution.combination(), &packs(&[(1000, 1)]));
    assert_eq!(result.stats, SearchStats::default());
}

#[test]
fn test_below_smallest() {
    let result = PackSolver::default()
        .solve_with_stats(order(1), &reference_sizes())
        .unwrap();
    assert_eq!(result.case, SolveCase::BelowSmallest);
    assert_eq!(result.solution.combination(), &packs(&[(250, 1)]));
    assert_eq!(result.solution.overshoot(), 249);
}

#[test]
fn test_below_largest_searches() {
    let result = PackSolver::default()
        .solve_with_stats(order(3750), &reference_sizes())
        .unwrap();
    assert_eq!(result.case, SolveCase::BelowLargest);
    assert_eq!(
        result.solution.combination(),
        &packs(&[(2000, 1), (1000, 1), (500, 1), (250, 1)])
    );
    assert!(result.stats.nodes_explored > 0);
    assert!(result.stats.candidates > 0);
}

#[test]
fn test_above_largest_exact_multiple() {
    let result = PackSolver::default()
        .solve_with_stats(order(15000), &reference_sizes())
        .unwrap();
    assert_eq!(result.case, SolveCase::AboveLargest);
    assert_eq!(result.solution.combination(), &packs(&[(5000, 3)]));
    assert_eq!(result.stats.nodes_explored, 0);
}

#[test]
fn test_above_largest_remainder_is_size() {
    let solution = PackSolver::default()
        .solve(order(5500), &reference_sizes())
        .unwrap();
    assert_eq!(solution.combination(), &packs(&[(5000, 1), (500, 1)]));
}

#[test]
fn test_above_largest_remainder_below_smallest() {
    let solution = PackSolver::default()
        .solve(order(100001), &reference_sizes())
        .unwrap();
    assert_eq!(solution.combination(), &packs(&[(5000, 20), (250, 1)]));
}

#[test]
fn test_above_largest_merges_search() {
    // The remainder of 4999 resolves to one more 5000.
    let result = PackSolver::default()
        .solve_with_stats(order(124999), &reference_sizes())
        .unwrap();
    assert_eq!(result.case, SolveCase::AboveLargest);
    assert_eq!(result.solution.combination(), &packs(&[(5000, 25)]));
    assert!(result.stats.nodes_explored > 0);
}

#[test]
fn test_above_largest_keeps_whole_largest_packs() {
    // One 10 is reserved first, so 2x6 is never considered.
    let sizes = PackSizes::new([10, 6]).unwrap();
    let solution = PackSolver::default().solve(order(12), &sizes).unwrap();
    assert_eq!(solution.combination(), &packs(&[(10, 1), (6, 1)]));
    assert_eq!(solution.score(), PackScore::of(16, 2));
}

#[test]
fn test_exact_tie_keeps_smaller_sizes() {
    // 1x8 + 1x1 and 1x5 + 1x4 both ship 9 items in 2 packs.
    let sizes = PackSizes::new([10, 8, 5, 4, 1]).unwrap();
    let solution = PackSolver::default().solve(order(9), &sizes).unwrap();
    assert_eq!(solution.combination(), &packs(&[(5, 1), (4, 1)]));
}

#[test]
fn test_termination_stops_search() {
    let solver = PackSolver::default();
    let sizes = reference_sizes();
    let flag = AtomicBool::new(true);

    assert_eq!(
        solver
            .solve_with_termination(order(3750), &sizes, &flag)
            .unwrap_err(),
        PackError::Cancelled
    );
    // Cases without a search finish regardless.
    let result = solver
        .solve_with_termination(order(15000), &sizes, &flag)
        .unwrap();
    assert_eq!(result.solution.combination(), &packs(&[(5000, 3)]));
}

#[test]
fn test_single_size() {
    let sizes = PackSizes::new([7]).unwrap();
    let solver = PackSolver::default();
    assert_eq!(solver.solve(order(3), &sizes).unwrap().total(), 7);
    assert_eq!(solver.solve(order(7), &sizes).unwrap().total(), 7);
    assert_eq!(solver.solve(order(15), &sizes).unwrap().total(), 21);
}

#[test]
fn test_parallel_mode() {
    let solver = PackSolver::with_search_mode(SearchMode::Parallel);
    assert_eq!(solver.config().search_mode, SearchMode::Parallel);

    let solution = solver.solve(order(12001), &reference_sizes()).unwrap();
    assert_eq!(
        solution.combination(),
        &packs(&[(5000, 2), (2000, 1), (250, 1)])
    );
}

#[test]
fn test_zero_quantity_rejected() {
    assert_eq!(
        solve(0, &reference_sizes()).unwrap_err(),
        PackError::InvalidQuantity
    );
}

#[test]
fn test_overflow_reported() {
    let sizes = PackSizes::new([u64::MAX - 1]).unwrap();
    // One pack plus one more for the remainder does not fit in u64.
    assert_eq!(solve(u64::MAX, &sizes).unwrap_err(), PackError::Overflow);
}

#[test]
fn test_free_function_matches_solver() {
    let sizes = reference_sizes();
    for quantity in [1, 251, 501, 8765, 123411] {
        assert_eq!(
            solve(quantity, &sizes).unwrap(),
            PackSolver::default().solve(order(quantity), &sizes).unwrap()
        );
    }
}

#[test]
fn test_solve_case_display() {
    assert_eq!(format!("{}", SolveCase::ExactMatch), "ExactMatch");
    assert_eq!(format!("{}", SolveCase::AboveLargest), "AboveLargest");
}
