//! Coordinates and geocoder results.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A geocoder's best guess for one address or postal code.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::{GeocodedLocation, LatLng};
///
/// let loc = GeocodedLocation::new(LatLng::new(1.3, 103.8), "1 Example Road");
/// assert!(!loc.postal_mismatch);
/// assert_eq!(loc.address, "1 Example Road");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedLocation {
    pub position: LatLng,
    /// Formatted address, possibly empty when the geocoder gave none.
    pub address: String,
    /// Set when a postal-code query resolved to a place with a different
    /// postal code.
    pub postal_mismatch: bool,
}

impl GeocodedLocation {
    pub fn new(position: LatLng, address: impl Into<String>) -> Self {
        Self {
            position,
            address: address.into(),
            postal_mismatch: false,
        }
    }

    /// Marks this result as not matching the queried postal code.
    pub fn with_postal_mismatch(mut self) -> Self {
        self.postal_mismatch = true;
        self
    }
}
