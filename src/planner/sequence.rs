//! Stop sequencing over provider matrices.

use std::borrow::Cow;

use log::{debug, warn};

use crate::constructive::nearest_neighbor;
use crate::distance::{CostMatrix, TravelMatrices};
use crate::error::{PlanError, Result};
use crate::evaluation::total_cost;
use crate::local_search::two_opt_with_limit;

/// A visiting order with the travel totals derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct StopOrder {
    /// Matrix indices `1..=stop_count` in visiting order.
    pub tour: Vec<usize>,
    /// Travel distance along the tour, including the leg to the end location.
    pub distance: f64,
    /// Travel duration along the tour, excluding service time.
    pub duration: f64,
}

/// Sequences the stops in `matrices` and prices the chosen order.
///
/// The matrices cover `[start, stops.., end?]`. The order is built on the
/// distance matrix without the end location, then both distance and
/// duration totals are computed along that same order, finishing at the
/// end location when there is one.
///
/// # Errors
///
/// - [`PlanError::SizeMismatch`] if the matrices don't cover the expected locations
/// - [`PlanError::Infeasible`] if some stop could not be reached
/// - [`PlanError::UnknownCost`] if a total crosses an unknown edge
///
/// # Examples
///
/// ```
/// use delivery_routing::distance::{CostMatrix, TravelMatrices};
/// use delivery_routing::planner::order_stops;
///
/// let distance = CostMatrix::from_rows(vec![
///     vec![Some(0.0), Some(10.0), Some(15.0), Some(20.0)],
///     vec![Some(10.0), Some(0.0), Some(35.0), Some(25.0)],
///     vec![Some(15.0), Some(35.0), Some(0.0), Some(30.0)],
///     vec![Some(20.0), Some(25.0), Some(30.0), Some(0.0)],
/// ])
/// .unwrap();
/// let matrices = TravelMatrices::new(distance.clone(), distance).unwrap();
///
/// let order = order_stops(&matrices, 3, false, None).unwrap();
/// assert_eq!(order.tour, vec![1, 3, 2]);
/// assert_eq!(order.distance, 65.0);
/// ```
pub fn order_stops(
    matrices: &TravelMatrices,
    stop_count: usize,
    has_end: bool,
    max_sweeps: Option<usize>,
) -> Result<StopOrder> {
    let expected = stop_count + 1 + usize::from(has_end);
    if matrices.size() != expected {
        return Err(PlanError::SizeMismatch {
            expected,
            found: matrices.size(),
        });
    }

    let sequencing: Cow<'_, CostMatrix> = if has_end {
        Cow::Owned(matrices.distance().without_last())
    } else {
        Cow::Borrowed(matrices.distance())
    };

    let initial = nearest_neighbor(&sequencing);
    let tour = two_opt_with_limit(&initial, &sequencing, max_sweeps);
    if tour.len() != stop_count {
        warn!("only {} of {stop_count} stops could be sequenced", tour.len());
        return Err(PlanError::Infeasible {
            expected: stop_count,
            found: tour.len(),
        });
    }

    let end = has_end.then(|| expected - 1);
    let distance = total_cost(matrices.distance(), &tour, end);
    let duration = total_cost(matrices.duration(), &tour, end);
    let (Some(distance), Some(duration)) = (distance, duration) else {
        warn!("route total for {tour:?} crosses an unknown edge");
        return Err(PlanError::UnknownCost);
    };

    debug!(
        "sequenced {stop_count} stops: {tour:?} (initial {initial:?}), distance {distance}, duration {duration}"
    );
    Ok(StopOrder {
        tour,
        distance,
        duration,
    })
}
