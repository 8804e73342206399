//! Open-path 2-opt improvement.
//!
//! # Algorithm
//!
//! For every pair of tour positions `i < k`, reverse the segment `[i..=k]`
//! and rescore the whole path `0 → tour[0] → … → tour[last]`. A candidate
//! is adopted only if its total is strictly lower than the best so far.
//! Sweeps repeat until one completes without an improvement.
//!
//! Rescoring the full path (rather than an endpoint delta) keeps the move
//! correct on asymmetric matrices, where reversing a segment changes the
//! cost of every edge inside it.
//!
//! # Complexity
//!
//! O(n³) per sweep, bounded by the number of strictly improving moves.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::{debug, trace};

use crate::distance::CostMatrix;
use crate::evaluation::{improves, total_cost};

/// Tours shorter than this are returned unchanged.
pub const MIN_TWO_OPT_LEN: usize = 4;

/// Applies 2-opt to a tour until it reaches a local optimum.
///
/// The tour excludes node 0, which is the implicit start. Tours with fewer
/// than four stops are returned as-is. Candidates whose path crosses an
/// unknown edge are never adopted.
///
/// # Examples
///
/// ```
/// use delivery_routing::distance::CostMatrix;
/// use delivery_routing::evaluation::total_cost;
/// use delivery_routing::local_search::two_opt;
///
/// // Stops on a line at x = 1, 2, 3, 4 with the start at x = 0
/// let mut cm = CostMatrix::new(5);
/// for i in 0..5 {
///     for j in 0..5 {
///         cm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// let improved = two_opt(&[3, 2, 1, 4], &cm);
/// assert_eq!(improved, vec![1, 2, 3, 4]);
/// assert_eq!(total_cost(&cm, &improved, None), Some(4.0));
/// ```
pub fn two_opt(tour: &[usize], matrix: &CostMatrix) -> Vec<usize> {
    two_opt_with_limit(tour, matrix, None)
}

/// Like [`two_opt`], but stops after at most `max_sweeps` sweeps.
///
/// The result is never worse than the input, though it may fall short of a
/// local optimum when the cap is hit.
pub fn two_opt_with_limit(
    tour: &[usize],
    matrix: &CostMatrix,
    max_sweeps: Option<usize>,
) -> Vec<usize> {
    let n = tour.len();
    if n < MIN_TWO_OPT_LEN {
        return tour.to_vec();
    }

    let mut best = tour.to_vec();
    let mut best_cost = total_cost(matrix, &best, None);
    let mut candidate = best.clone();
    let mut sweeps = 0;
    let mut moves = 0;
    let mut improved = true;

    while improved {
        if max_sweeps.is_some_and(|cap| sweeps >= cap) {
            debug!("2-opt sweep cap of {sweeps} reached");
            break;
        }
        improved = false;
        sweeps += 1;

        for i in 0..n - 1 {
            for k in i + 1..n {
                candidate.copy_from_slice(&best);
                candidate[i..=k].reverse();

                let cost = total_cost(matrix, &candidate, None);
                if improves(cost, best_cost) {
                    trace!("2-opt reverse [{i}..={k}]: {best_cost:?} -> {cost:?}");
                    std::mem::swap(&mut best, &mut candidate);
                    best_cost = cost;
                    moves += 1;
                    improved = true;
                }
            }
        }
    }

    debug!("2-opt finished after {sweeps} sweeps, {moves} moves, cost {best_cost:?}");
    best
}
