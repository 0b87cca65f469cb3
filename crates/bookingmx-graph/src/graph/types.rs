//! Neighbor records and the validity rules shared with dataset validation.

use serde::{Deserialize, Serialize};

/// One adjacency record: the city on the other end of an edge and the
/// edge distance.
///
/// The same shape is returned by [`Graph::neighbors`](super::Graph::neighbors)
/// and by [`nearby_cities`](crate::query::nearby_cities).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Name of the neighboring city.
    pub city: String,

    /// Edge distance (finite, >= 0).
    pub distance: f64,
}

impl Neighbor {
    pub fn new(city: impl Into<String>, distance: f64) -> Self {
        Self {
            city: city.into(),
            distance,
        }
    }
}

/// A city name must contain at least one non-whitespace character.
#[inline]
pub(crate) fn is_valid_city_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Distances must be finite and non-negative. NaN fails both checks.
#[inline]
pub(crate) fn is_valid_distance(distance: f64) -> bool {
    distance.is_finite() && distance >= 0.0
}
