//! Route total cost accumulation.

use std::cmp::Ordering;

use crate::distance::CostMatrix;

/// Computes the total cost of `start(0) → tour[0] → … → tour[last]`, then
/// `→ end` if given.
///
/// Returns `None` if any edge on the path is unknown, or if the sum
/// overflows to infinity. An unknown total is a hard failure for the route,
/// never a lower bound. An empty tour with no end costs zero.
///
/// # Examples
///
/// ```
/// use delivery_routing::distance::CostMatrix;
/// use delivery_routing::evaluation::total_cost;
///
/// let mut cm = CostMatrix::new(3);
/// cm.set(0, 1, 4.0);
/// cm.set(1, 2, 6.0);
/// assert_eq!(total_cost(&cm, &[1, 2], None), Some(10.0));
/// assert_eq!(total_cost(&cm, &[2, 1], None), None);
/// ```
pub fn total_cost(matrix: &CostMatrix, tour: &[usize], end: Option<usize>) -> Option<f64> {
    let mut total = 0.0;
    let mut current = 0;
    for &next in tour.iter().chain(end.as_ref()) {
        total += matrix.get(current, next)?;
        current = next;
    }
    Some(total).filter(|t: &f64| t.is_finite())
}

/// Orders two route totals with unknown treated as worse than any finite cost.
pub fn compare_totals(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Returns `true` if `candidate` is strictly better than `best`.
///
/// An unknown candidate never improves on anything.
pub fn improves(candidate: Option<f64>, best: Option<f64>) -> bool {
    compare_totals(candidate, best) == Ordering::Less
}
