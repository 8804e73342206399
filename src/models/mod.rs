//! Domain model types for delivery route planning.
//!
//! Provides coordinates and geocoder results, route requests with their
//! input validation, and the sequenced route plan handed back to callers.

mod location;
mod plan;
mod request;

pub use location::{GeocodedLocation, LatLng};
pub use plan::{PlannedStop, RoutePlan};
pub use request::{
    is_numeric_only, is_valid_postal, normalize_location_input, RouteRequest, POSTAL_CODE_LEN,
};
