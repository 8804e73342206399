//! Error types for route planning.
//!
//! The sequencing core never fails: infeasibility and unknown costs surface
//! as a short tour or a `None` total. [`PlanError`] is what the planner
//! raises once it has checked those signals.

use thiserror::Error as ThisError;

/// A single problem found while validating a [`RouteRequest`](crate::models::RouteRequest).
///
/// Stop numbers are 1-based, matching how stops are listed to a user.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ValidationIssue {
    #[error("start location is missing")]
    MissingStart,
    #[error("start postal code must have 6 digits")]
    InvalidPostal,
    #[error("at least 2 stops are required, got {0}")]
    NotEnoughStops(usize),
    #[error("at most {max} stops are allowed, got {count}")]
    TooManyStops { count: usize, max: usize },
    #[error("stop {0} is missing")]
    MissingStop(usize),
    #[error("stop {0} postal code must have 6 digits")]
    InvalidStop(usize),
    #[error("end postal code must have 6 digits")]
    InvalidEnd,
}

#[derive(Debug, ThisError)]
pub enum PlanError {
    #[error("invalid request: {}", join(.0))]
    Validation(Vec<ValidationIssue>),
    #[error("could not geocode: {}", .0.join(", "))]
    GeocodeFailed(Vec<String>),
    #[error("geocoded postal code does not match: {}", .0.join(", "))]
    PostalMismatch(Vec<String>),
    #[error("matrix provider failed: {0}")]
    Matrix(String),
    #[error("cost matrix must be square: row {row} has {len} entries, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("matrix covers {found} locations, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },
    #[error("only {found} of {expected} stops are reachable")]
    Infeasible { expected: usize, found: usize },
    #[error("route total contains an unknown travel cost")]
    UnknownCost,
    #[error("invalid planner config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;

impl PlanError {
    pub fn matrix(message: impl Into<String>) -> Self {
        Self::Matrix(message.into())
    }
}

fn join(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
