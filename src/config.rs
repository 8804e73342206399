//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Upper bound on the per-stop service time, in minutes.
pub const MAX_STOP_MINUTES: u32 = 240;

/// Tunables for [`RoutePlanner`](crate::planner::RoutePlanner).
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use delivery_routing::config::PlannerConfig;
///
/// let config = PlannerConfig::from_json_str(r#"{ "max_stops": 12 }"#).unwrap();
/// assert_eq!(config.max_stops, 12);
/// assert_eq!(config.default_stop_minutes, 5);
/// assert!(config.max_refine_sweeps.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum number of stops in one request (excluding start and end).
    pub max_stops: usize,
    /// Service time spent at each stop when the request does not specify one.
    pub default_stop_minutes: u32,
    /// Optional cap on 2-opt sweeps. `None` runs to a local optimum.
    pub max_refine_sweeps: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_stops: 20,
            default_stop_minutes: 5,
            max_refine_sweeps: None,
        }
    }
}

impl PlannerConfig {
    /// Parses a configuration from JSON, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves the service minutes for a request, clamped to `0..=240`.
    pub fn stop_minutes(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_stop_minutes)
            .min(MAX_STOP_MINUTES)
    }
}
