//! End-to-end route planning.

use log::{debug, info};

use super::{order_stops, Geocoder, MatrixProvider};
use crate::config::PlannerConfig;
use crate::error::{PlanError, Result};
use crate::models::{GeocodedLocation, LatLng, PlannedStop, RoutePlan, RouteRequest};

/// Plans a delivery route: geocodes the request, fetches travel matrices,
/// sequences the stops and prices the result.
///
/// # Examples
///
/// ```
/// use delivery_routing::distance::{CostMatrix, TravelMatrices};
/// use delivery_routing::error::Result;
/// use delivery_routing::models::{GeocodedLocation, LatLng, RouteRequest};
/// use delivery_routing::planner::{Geocoder, MatrixProvider, RoutePlanner};
///
/// struct OnALine;
///
/// impl Geocoder for OnALine {
///     fn geocode(&self, query: &str) -> Result<Option<GeocodedLocation>> {
///         let x: f64 = query.trim_start_matches("km ").parse().unwrap_or(0.0);
///         Ok(Some(GeocodedLocation::new(LatLng::new(0.0, x), query)))
///     }
/// }
///
/// impl MatrixProvider for OnALine {
///     fn travel_matrices(&self, locations: &[LatLng]) -> Result<TravelMatrices> {
///         let mut cm = CostMatrix::new(locations.len());
///         for (i, a) in locations.iter().enumerate() {
///             for (j, b) in locations.iter().enumerate() {
///                 cm.set(i, j, (a.lng - b.lng).abs());
///             }
///         }
///         TravelMatrices::new(cm.clone(), cm)
///     }
/// }
///
/// let planner = RoutePlanner::default();
/// let request = RouteRequest::new("km 0", vec!["km 300".into(), "km 100".into(), "km 200".into()])
///     .with_stop_minutes(0);
/// let plan = planner.plan(&request, &OnALine, &OnALine).unwrap();
///
/// assert_eq!(plan.order(), vec![1, 2, 0]);
/// assert_eq!(plan.total_distance, 300.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    config: PlannerConfig,
}

impl RoutePlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans the route for `request`.
    ///
    /// Validation and geocoding problems are reported all at once where
    /// possible: every invalid field, every stop that failed to geocode.
    pub fn plan<G, M>(&self, request: &RouteRequest, geocoder: &G, provider: &M) -> Result<RoutePlan>
    where
        G: Geocoder + ?Sized,
        M: MatrixProvider + ?Sized,
    {
        let request = request.normalized();
        let issues = request.validate(&self.config);
        if !issues.is_empty() {
            return Err(PlanError::Validation(issues));
        }

        let start = resolve_one(geocoder, &request.start)?;

        let mut stop_locations = Vec::with_capacity(request.stops.len());
        let mut failed = Vec::new();
        for query in &request.stops {
            match geocoder.geocode(query)? {
                Some(location) => stop_locations.push(location),
                None => failed.push(query.clone()),
            }
        }
        if !failed.is_empty() {
            return Err(PlanError::GeocodeFailed(failed));
        }
        let mismatched: Vec<String> = request
            .stops
            .iter()
            .zip(&stop_locations)
            .filter(|(_, location)| location.postal_mismatch)
            .map(|(query, _)| query.clone())
            .collect();
        if !mismatched.is_empty() {
            return Err(PlanError::PostalMismatch(mismatched));
        }

        let end = request
            .end
            .as_deref()
            .map(|query| resolve_one(geocoder, query))
            .transpose()?;

        let mut locations: Vec<LatLng> = Vec::with_capacity(stop_locations.len() + 2);
        locations.push(start.position);
        locations.extend(stop_locations.iter().map(|l| l.position));
        locations.extend(end.as_ref().map(|l| l.position));
        debug!("requesting travel matrices for {} locations", locations.len());

        let matrices = provider.travel_matrices(&locations)?;
        let order = order_stops(
            &matrices,
            request.stops.len(),
            end.is_some(),
            self.config.max_refine_sweeps,
        )?;

        let stop_minutes = self.config.stop_minutes(request.stop_minutes);
        let service_seconds = f64::from(stop_minutes) * 60.0 * request.stops.len() as f64;

        let stops = order
            .tour
            .iter()
            .map(|&node| {
                let input_index = node - 1;
                let location = &stop_locations[input_index];
                PlannedStop {
                    input_index,
                    query: request.stops[input_index].clone(),
                    position: location.position,
                    address: location.address.clone(),
                    delivered: false,
                }
            })
            .collect();

        let plan = RoutePlan {
            start_query: request.start,
            start,
            stops,
            end_query: request.end,
            end,
            total_distance: order.distance,
            total_duration: order.duration + service_seconds,
        };
        info!(
            "planned {} stops: {:.0} m, {:.0} s",
            plan.stops.len(),
            plan.total_distance,
            plan.total_duration
        );
        Ok(plan)
    }
}

fn resolve_one<G: Geocoder + ?Sized>(geocoder: &G, query: &str) -> Result<GeocodedLocation> {
    let location = geocoder
        .geocode(query)?
        .ok_or_else(|| PlanError::GeocodeFailed(vec![query.to_string()]))?;
    if location.postal_mismatch {
        return Err(PlanError::PostalMismatch(vec![query.to_string()]));
    }
    Ok(location)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;

    use super::*;
    use crate::distance::{CostMatrix, TravelMatrices};
    use crate::error::ValidationIssue;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Geocoder backed by a fixed table of postal codes.
    struct TableGeocoder {
        entries: HashMap<String, GeocodedLocation>,
    }

    impl TableGeocoder {
        fn new(entries: &[(&str, f64, f64)]) -> Self {
            let entries = entries
                .iter()
                .map(|&(postal, lat, lng)| {
                    (
                        postal.to_string(),
                        GeocodedLocation::new(LatLng::new(lat, lng), format!("Singapore {postal}")),
                    )
                })
                .collect();
            Self { entries }
        }

        fn mismatch(mut self, postal: &str) -> Self {
            if let Some(location) = self.entries.remove(postal) {
                self.entries
                    .insert(postal.to_string(), location.with_postal_mismatch());
            }
            self
        }
    }

    impl Geocoder for TableGeocoder {
        fn geocode(&self, query: &str) -> Result<Option<GeocodedLocation>> {
            Ok(self.entries.get(query).cloned())
        }
    }

    /// Prices travel as planar distance in km, one minute per km.
    struct GridProvider {
        calls: Cell<usize>,
        blocked: Vec<(usize, usize)>,
    }

    impl GridProvider {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
                blocked: Vec::new(),
            }
        }
    }

    impl MatrixProvider for GridProvider {
        fn travel_matrices(&self, locations: &[LatLng]) -> Result<TravelMatrices> {
            self.calls.set(self.calls.get() + 1);
            let n = locations.len();
            let mut distance = CostMatrix::new(n);
            let mut duration = CostMatrix::new(n);
            for (i, a) in locations.iter().enumerate() {
                for (j, b) in locations.iter().enumerate() {
                    if self.blocked.contains(&(i, j)) {
                        continue;
                    }
                    let km = ((a.lat - b.lat).powi(2) + (a.lng - b.lng).powi(2)).sqrt();
                    distance.set(i, j, km * 1000.0);
                    duration.set(i, j, km * 60.0);
                }
            }
            TravelMatrices::new(distance, duration)
        }
    }

    struct FailingProvider;

    impl MatrixProvider for FailingProvider {
        fn travel_matrices(&self, _locations: &[LatLng]) -> Result<TravelMatrices> {
            Err(PlanError::matrix("OVER_QUERY_LIMIT"))
        }
    }

    fn geocoder() -> TableGeocoder {
        TableGeocoder::new(&[
            ("100000", 0.0, 0.0),
            ("100001", 0.0, 1.0),
            ("100002", 0.0, 2.0),
            ("100003", 0.0, 3.0),
            ("100004", 0.0, 4.0),
            ("100009", 0.0, 9.0),
        ])
    }

    fn request(stops: &[&str]) -> RouteRequest {
        RouteRequest::new("100000", stops.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_plan_orders_stops() {
        init_logger();
        let planner = RoutePlanner::default();
        let provider = GridProvider::new();
        let plan = planner
            .plan(&request(&["100003", "100001", "100004", "100002"]), &geocoder(), &provider)
            .expect("plan");

        assert_eq!(plan.order(), vec![1, 3, 0, 2]);
        assert_eq!(plan.stops[0].query, "100001");
        assert_eq!(plan.stops[0].address, "Singapore 100001");
        assert!((plan.total_distance - 4000.0).abs() < 1e-6);
        // 4 minutes of driving plus 4 stops at 5 minutes each
        assert!((plan.total_duration - (240.0 + 4.0 * 300.0)).abs() < 1e-6);
        assert_eq!(provider.calls.get(), 1);
    }

    #[test]
    fn test_plan_with_end_location() {
        init_logger();
        let planner = RoutePlanner::default();
        let req = request(&["100002", "100001"])
            .with_end("100009")
            .with_stop_minutes(0);
        let plan = planner
            .plan(&req, &geocoder(), &GridProvider::new())
            .expect("plan");

        assert_eq!(plan.order(), vec![1, 0]);
        assert_eq!(plan.end_query.as_deref(), Some("100009"));
        assert!((plan.total_distance - 9000.0).abs() < 1e-6);
        assert!((plan.total_duration - 540.0).abs() < 1e-6);
        assert_eq!(plan.destination(), Some(LatLng::new(0.0, 9.0)));
    }

    #[test]
    fn test_plan_normalizes_input() {
        let planner = RoutePlanner::default();
        let req = RouteRequest::new(" 100 000 ", vec!["1000 01".into(), "100002".into()]);
        let plan = planner
            .plan(&req, &geocoder(), &GridProvider::new())
            .expect("plan");
        assert_eq!(plan.start_query, "100000");
        assert_eq!(plan.stops[0].query, "100001");
    }

    #[test]
    fn test_plan_rejects_invalid_request() {
        let provider = GridProvider::new();
        let err = RoutePlanner::default()
            .plan(&request(&["12"]), &geocoder(), &provider)
            .unwrap_err();
        match err {
            PlanError::Validation(issues) => assert_eq!(
                issues,
                vec![
                    ValidationIssue::NotEnoughStops(1),
                    ValidationIssue::InvalidStop(1)
                ]
            ),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn test_plan_reports_all_failed_stops() {
        let err = RoutePlanner::default()
            .plan(
                &request(&["100001", "200000", "100002", "300000"]),
                &geocoder(),
                &GridProvider::new(),
            )
            .unwrap_err();
        match err {
            PlanError::GeocodeFailed(queries) => assert_eq!(queries, vec!["200000", "300000"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_plan_start_not_found() {
        let req = RouteRequest::new("999999", vec!["100001".into(), "100002".into()]);
        let err = RoutePlanner::default()
            .plan(&req, &geocoder(), &GridProvider::new())
            .unwrap_err();
        assert!(matches!(err, PlanError::GeocodeFailed(q) if q == vec!["999999"]));
    }

    #[test]
    fn test_plan_postal_mismatch() {
        let geo = geocoder().mismatch("100002");
        let err = RoutePlanner::default()
            .plan(&request(&["100001", "100002"]), &geo, &GridProvider::new())
            .unwrap_err();
        assert!(matches!(err, PlanError::PostalMismatch(q) if q == vec!["100002"]));

        let err = RoutePlanner::default()
            .plan(
                &request(&["100001", "100003"]).with_end("100002"),
                &geo,
                &GridProvider::new(),
            )
            .unwrap_err();
        assert!(matches!(err, PlanError::PostalMismatch(q) if q == vec!["100002"]));
    }

    #[test]
    fn test_plan_unreachable_stop() {
        let mut provider = GridProvider::new();
        // Matrix index 2 is the second stop; block every edge into it.
        provider.blocked = (0..3).map(|i| (i, 2)).collect();
        let err = RoutePlanner::default()
            .plan(&request(&["100001", "100002"]), &geocoder(), &provider)
            .unwrap_err();
        assert!(matches!(
            err,
            PlanError::Infeasible {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_plan_provider_error() {
        let err = RoutePlanner::default()
            .plan(&request(&["100001", "100002"]), &geocoder(), &FailingProvider)
            .unwrap_err();
        assert_eq!(err.to_string(), "matrix provider failed: OVER_QUERY_LIMIT");
    }

    #[test]
    fn test_plan_with_trait_objects() {
        let geo: &dyn Geocoder = &geocoder();
        let provider: &dyn MatrixProvider = &GridProvider::new();
        let plan = RoutePlanner::new(PlannerConfig {
            max_refine_sweeps: Some(1),
            ..PlannerConfig::default()
        })
        .plan(&request(&["100002", "100001"]), geo, provider)
        .expect("plan");
        assert_eq!(plan.order(), vec![1, 0]);
    }
}
