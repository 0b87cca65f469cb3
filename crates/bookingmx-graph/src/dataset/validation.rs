//! Structural pre-flight checks for datasets.
//!
//! Checks run in a fixed precedence order and stop at the first failure, so
//! a dataset with several defects always reports the same reason:
//!
//! 1. `duplicate cities`
//! 2. `invalid city entry`
//! 3. `edge references unknown city`
//! 4. `invalid distance`

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{is_valid_city_name, is_valid_distance};

use super::Dataset;

/// Reason code for a failed validation.
///
/// Serializes (and displays) as the literal reason string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationReason {
    #[serde(rename = "duplicate cities")]
    DuplicateCities,
    #[serde(rename = "invalid city entry")]
    InvalidCityEntry,
    #[serde(rename = "edge references unknown city")]
    UnknownEdgeCity,
    #[serde(rename = "invalid distance")]
    InvalidDistance,
}

impl ValidationReason {
    /// The literal reason code.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DuplicateCities => "duplicate cities",
            Self::InvalidCityEntry => "invalid city entry",
            Self::UnknownEdgeCity => "edge references unknown city",
            Self::InvalidDistance => "invalid distance",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`validate_graph_data`].
///
/// Serializes as `{"ok":true}` or `{"ok":false,"reason":"..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub ok: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ValidationReason>,
}

impl ValidationReport {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    #[must_use]
    pub fn invalid(reason: ValidationReason) -> Self {
        Self {
            ok: false,
            reason: Some(reason),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Convert into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<(), ValidationReason> {
        match self.reason {
            Some(reason) if !self.ok => Err(reason),
            _ => Ok(()),
        }
    }
}

impl From<Result<(), ValidationReason>> for ValidationReport {
    fn from(result: Result<(), ValidationReason>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(reason) => Self::invalid(reason),
        }
    }
}

/// Validate a dataset without mutating anything.
///
/// Never fails: problems are reported in the returned
/// [`ValidationReport`].
///
/// # Example
///
/// ```
/// use bookingmx_graph::{validate_graph_data, Dataset, EdgeSpec, ValidationReason};
///
/// let dataset = Dataset::new(["A", "A"], vec![EdgeSpec::new("A", "A", -1.0)]);
/// let report = validate_graph_data(&dataset);
/// assert!(!report.ok);
/// assert_eq!(report.reason, Some(ValidationReason::DuplicateCities));
/// ```
#[must_use]
pub fn validate_graph_data(dataset: &Dataset) -> ValidationReport {
    let report = ValidationReport::from(check(dataset));
    if let Some(reason) = report.reason {
        tracing::warn!(%reason, "dataset failed validation");
    }
    report
}

fn check(dataset: &Dataset) -> Result<(), ValidationReason> {
    let mut known: HashSet<&str> = HashSet::with_capacity(dataset.cities.len());
    if !dataset.cities.iter().all(|city| known.insert(city.as_str())) {
        return Err(ValidationReason::DuplicateCities);
    }

    if !dataset.cities.iter().all(|city| is_valid_city_name(city)) {
        return Err(ValidationReason::InvalidCityEntry);
    }

    let dangling = dataset
        .edges
        .iter()
        .any(|edge| !known.contains(edge.from.as_str()) || !known.contains(edge.to.as_str()));
    if dangling {
        return Err(ValidationReason::UnknownEdgeCity);
    }

    if !dataset
        .edges
        .iter()
        .all(|edge| is_valid_distance(edge.distance))
    {
        return Err(ValidationReason::InvalidDistance);
    }

    Ok(())
}
