//! Planned routes.

use serde::{Deserialize, Serialize};

use super::{GeocodedLocation, LatLng};

/// A stop placed in visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedStop {
    /// Position of this stop in the request's `stops` list.
    pub input_index: usize,
    /// The location text as entered.
    pub query: String,
    pub position: LatLng,
    pub address: String,
    pub delivered: bool,
}

/// A fully sequenced delivery route.
///
/// Totals are derived from one visiting order: distance in meters, duration
/// in seconds including per-stop service time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub start_query: String,
    pub start: GeocodedLocation,
    pub stops: Vec<PlannedStop>,
    pub end_query: Option<String>,
    pub end: Option<GeocodedLocation>,
    pub total_distance: f64,
    pub total_duration: f64,
}

impl RoutePlan {
    /// Input indices of the stops in visiting order.
    pub fn order(&self) -> Vec<usize> {
        self.stops.iter().map(|s| s.input_index).collect()
    }

    /// The first stop not yet delivered.
    pub fn next_stop(&self) -> Option<&PlannedStop> {
        self.stops.iter().find(|s| !s.delivered)
    }

    /// Flips the delivered flag of the stop at `position` in visiting order.
    ///
    /// Returns the new flag, or `None` if there is no such stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_routing::models::{GeocodedLocation, LatLng, PlannedStop, RoutePlan};
    ///
    /// let stop = |i: usize| PlannedStop {
    ///     input_index: i,
    ///     query: format!("stop {i}"),
    ///     position: LatLng::new(0.0, 0.0),
    ///     address: String::new(),
    ///     delivered: false,
    /// };
    /// let mut plan = RoutePlan {
    ///     start_query: "start".into(),
    ///     start: GeocodedLocation::new(LatLng::new(0.0, 0.0), ""),
    ///     stops: vec![stop(1), stop(0)],
    ///     end_query: None,
    ///     end: None,
    ///     total_distance: 0.0,
    ///     total_duration: 0.0,
    /// };
    ///
    /// assert_eq!(plan.toggle_delivered(0), Some(true));
    /// assert_eq!(plan.next_stop().map(|s| s.input_index), Some(0));
    /// ```
    pub fn toggle_delivered(&mut self, position: usize) -> Option<bool> {
        let stop = self.stops.get_mut(position)?;
        stop.delivered = !stop.delivered;
        Some(stop.delivered)
    }

    /// Where the route finishes: the end location, or else the last stop.
    pub fn destination(&self) -> Option<LatLng> {
        self.end
            .as_ref()
            .map(|e| e.position)
            .or_else(|| self.stops.last().map(|s| s.position))
    }
}
