//! Route requests and input validation.

use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::error::ValidationIssue;

/// Number of digits in a postal code.
pub const POSTAL_CODE_LEN: usize = 6;

/// Collapses whitespace and trims a free-form location.
///
/// Inputs made only of digits and spaces are treated as postal codes: the
/// spaces are removed and the result is cut to six digits.
///
/// # Examples
///
/// ```
/// use delivery_routing::models::normalize_location_input;
///
/// assert_eq!(normalize_location_input("  12  Main   St "), "12 Main St");
/// assert_eq!(normalize_location_input("123 4567"), "123456");
/// ```
pub fn normalize_location_input(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    let digits: String = collapsed.chars().filter(|c| !c.is_whitespace()).collect();
    if is_numeric_only(&digits) {
        return digits.chars().take(POSTAL_CODE_LEN).collect();
    }
    collapsed
}

/// Returns `true` if the trimmed value is non-empty and all ASCII digits.
pub fn is_numeric_only(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if the trimmed value is exactly six ASCII digits.
pub fn is_valid_postal(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.len() == POSTAL_CODE_LEN && is_numeric_only(trimmed)
}

/// A request to plan one delivery route.
///
/// `start` and `stops` are free-form addresses or postal codes. When `end`
/// is set the route finishes there; otherwise it ends at the last stop.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: String,
    pub stops: Vec<String>,
    #[serde(default)]
    pub end: Option<String>,
    /// Service time per stop; falls back to the planner's default.
    #[serde(default)]
    pub stop_minutes: Option<u32>,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, stops: Vec<String>) -> Self {
        Self {
            start: start.into(),
            stops,
            end: None,
            stop_minutes: None,
        }
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn with_stop_minutes(mut self, minutes: u32) -> Self {
        self.stop_minutes = Some(minutes);
        self
    }

    /// Returns a copy with every location normalized. A blank end is dropped.
    pub fn normalized(&self) -> Self {
        Self {
            start: normalize_location_input(&self.start),
            stops: self
                .stops
                .iter()
                .map(|s| normalize_location_input(s))
                .collect(),
            end: self
                .end
                .as_deref()
                .map(normalize_location_input)
                .filter(|e| !e.is_empty()),
            stop_minutes: self.stop_minutes,
        }
    }

    /// Checks the request and returns every problem found.
    ///
    /// Numeric-only entries must be complete postal codes; anything else is
    /// accepted as a free-form address.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_routing::config::PlannerConfig;
    /// use delivery_routing::error::ValidationIssue;
    /// use delivery_routing::models::RouteRequest;
    ///
    /// let request = RouteRequest::new("12345", vec!["238801".into(), "".into()]);
    /// let issues = request.validate(&PlannerConfig::default());
    /// assert_eq!(
    ///     issues,
    ///     vec![ValidationIssue::InvalidPostal, ValidationIssue::MissingStop(2)]
    /// );
    /// ```
    pub fn validate(&self, config: &PlannerConfig) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.start.trim().is_empty() {
            issues.push(ValidationIssue::MissingStart);
        } else if is_numeric_only(&self.start) && !is_valid_postal(&self.start) {
            issues.push(ValidationIssue::InvalidPostal);
        }

        if self.stops.len() < 2 {
            issues.push(ValidationIssue::NotEnoughStops(self.stops.len()));
        }
        if self.stops.len() > config.max_stops {
            issues.push(ValidationIssue::TooManyStops {
                count: self.stops.len(),
                max: config.max_stops,
            });
        }

        for (index, stop) in self.stops.iter().enumerate() {
            if stop.trim().is_empty() {
                issues.push(ValidationIssue::MissingStop(index + 1));
            } else if is_numeric_only(stop) && !is_valid_postal(stop) {
                issues.push(ValidationIssue::InvalidStop(index + 1));
            }
        }

        if let Some(end) = &self.end {
            if is_numeric_only(end) && !is_valid_postal(end) {
                issues.push(ValidationIssue::InvalidEnd);
            }
        }

        issues
    }
}
