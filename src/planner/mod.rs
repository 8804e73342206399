//! Route planning on top of the sequencing core.
//!
//! - [`order_stops`] — Sequences stops over provider matrices and prices the order
//! - [`RoutePlanner`] — Validates, geocodes, fetches matrices, and builds a [`RoutePlan`](crate::models::RoutePlan)
//! - [`Geocoder`], [`MatrixProvider`] — External services the planner depends on

mod providers;
mod route_planner;
mod sequence;

pub use providers::{Geocoder, MatrixProvider};
pub use route_planner::RoutePlanner;
pub use sequence::{order_stops, StopOrder};
