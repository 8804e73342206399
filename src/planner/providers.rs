//! External collaborators the planner calls into.

use crate::distance::TravelMatrices;
use crate::error::Result;
use crate::models::{GeocodedLocation, LatLng};

/// Resolves a free-form address or postal code to a location.
///
/// `Ok(None)` means the geocoder found nothing; `Err` is reserved for the
/// service itself failing.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Result<Option<GeocodedLocation>>;
}

/// Prices travel between every ordered pair of locations.
///
/// The returned matrices must be indexed in the order of `locations`.
/// Cells the provider could not route are unknown, not zero.
pub trait MatrixProvider {
    fn travel_matrices(&self, locations: &[LatLng]) -> Result<TravelMatrices>;
}
