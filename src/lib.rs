//! # delivery-routing
//!
//! Delivery stop sequencing over asymmetric travel-cost matrices with
//! missing entries: nearest-neighbor construction followed by 2-opt
//! refinement, plus the planning layer that feeds it.
//!
//! ## Modules
//!
//! - [`distance`] — Cost matrices with unknown entries, provider response assembly
//! - [`evaluation`] — Route total cost accumulation
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt tour refinement
//! - [`models`] — Requests, locations, and planned routes
//! - [`planner`] — Geocode, fetch matrices, sequence, and price a route
//! - [`config`] — Planner configuration
//! - [`error`] — Error types

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod planner;

pub use error::{PlanError, Result};
