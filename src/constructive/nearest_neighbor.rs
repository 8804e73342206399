//! Nearest-neighbor tour construction.
//!
//! Builds a tour greedily: starting from node 0, always move to the cheapest
//! unvisited stop reachable over a known edge.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes.

use log::{debug, warn};

use crate::distance::CostMatrix;

/// Constructs a tour over stops `1..size` using the nearest-neighbor heuristic.
///
/// Node 0 is the implicit start and never appears in the result. Ties go to
/// the lowest stop index. If at some point no unvisited stop is reachable
/// from the current one, construction stops early: the returned tour is
/// shorter than `size - 1`, and the caller must treat that as infeasible.
///
/// # Examples
///
/// ```
/// use delivery_routing::distance::CostMatrix;
/// use delivery_routing::constructive::nearest_neighbor;
///
/// let cm = CostMatrix::from_rows(vec![
///     vec![Some(0.0), Some(10.0), Some(15.0), Some(20.0)],
///     vec![Some(10.0), Some(0.0), Some(35.0), Some(25.0)],
///     vec![Some(15.0), Some(35.0), Some(0.0), Some(30.0)],
///     vec![Some(20.0), Some(25.0), Some(30.0), Some(0.0)],
/// ])
/// .unwrap();
///
/// assert_eq!(nearest_neighbor(&cm), vec![1, 3, 2]);
/// ```
pub fn nearest_neighbor(matrix: &CostMatrix) -> Vec<usize> {
    let n = matrix.size();
    if n <= 1 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    visited[0] = true;

    let mut tour = Vec::with_capacity(n - 1);
    let mut current = 0;

    while tour.len() < n - 1 {
        match matrix.nearest_unvisited(current, &visited) {
            Some(next) => {
                visited[next] = true;
                tour.push(next);
                current = next;
            }
            None => {
                warn!(
                    "no reachable stop from node {current}: {} of {} stops placed",
                    tour.len(),
                    n - 1
                );
                break;
            }
        }
    }

    debug!("nearest-neighbor tour: {tour:?}");
    tour
}
