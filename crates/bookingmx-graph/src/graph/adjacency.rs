//! Graph container: city registry plus per-city adjacency lists.

use std::collections::HashMap;

use crate::error::{GraphError, GraphResult};

use super::types::{is_valid_city_name, is_valid_distance, Neighbor};

/// Undirected, weighted graph over city names.
///
/// Cities keep their registration order; each city's neighbor list keeps
/// edge insertion order.
///
/// # Example
///
/// ```
/// use bookingmx_graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_city("Guadalajara")?;
/// graph.add_city("Zapopan")?;
/// graph.add_edge("Guadalajara", "Zapopan", 15.0)?;
///
/// assert_eq!(graph.neighbors("Zapopan")?[0].city, "Guadalajara");
/// # Ok::<(), bookingmx_graph::GraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// City name -> slot in `cities` / `adjacency`.
    index: HashMap<String, usize>,

    /// City names in registration order.
    cities: Vec<String>,

    /// Neighbor records, parallel to `cities`.
    adjacency: Vec<Vec<Neighbor>>,

    /// Number of successful `add_edge` calls.
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city.
    ///
    /// Registering an existing name is a no-op; uniqueness of a dataset's
    /// city list is checked by the validator, not here.
    ///
    /// # Errors
    /// * `GraphError::InvalidArgument` - name is empty or whitespace-only
    pub fn add_city(&mut self, name: &str) -> GraphResult<()> {
        if !is_valid_city_name(name) {
            return Err(GraphError::InvalidArgument(format!(
                "city name must be a non-empty string (got {:?})",
                name
            )));
        }

        if self.index.contains_key(name) {
            tracing::trace!(city = name, "city already registered");
            return Ok(());
        }

        let slot = self.cities.len();
        self.index.insert(name.to_string(), slot);
        self.cities.push(name.to_string());
        self.adjacency.push(Vec::new());
        tracing::debug!(city = name, slot, "registered city");
        Ok(())
    }

    /// Connect two registered cities with an undirected edge.
    ///
    /// Both endpoints receive a record for the other. Endpoints are checked
    /// before the distance.
    ///
    /// # Errors
    /// * `GraphError::UnknownCity` - `from` or `to` is not registered
    /// * `GraphError::InvalidDistance` - distance is negative, NaN or infinite
    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) -> GraphResult<()> {
        let from_slot = self.slot(from)?;
        let to_slot = self.slot(to)?;

        if !is_valid_distance(distance) {
            return Err(GraphError::InvalidDistance(distance));
        }

        self.adjacency[from_slot].push(Neighbor::new(to, distance));
        if from_slot != to_slot {
            self.adjacency[to_slot].push(Neighbor::new(from, distance));
        }
        self.edge_count += 1;

        tracing::debug!(from, to, distance, "added edge");
        Ok(())
    }

    /// Neighbor records of `city` in edge insertion order.
    ///
    /// # Errors
    /// * `GraphError::UnknownCity` - `city` is not registered
    pub fn neighbors(&self, city: &str) -> GraphResult<&[Neighbor]> {
        let slot = self.slot(city)?;
        Ok(&self.adjacency[slot])
    }

    /// Check whether a city is registered.
    #[must_use]
    pub fn contains_city(&self, city: &str) -> bool {
        self.index.contains_key(city)
    }

    /// Registered city names in registration order.
    pub fn cities(&self) -> impl Iterator<Item = &str> + '_ {
        self.cities.iter().map(String::as_str)
    }

    /// Get total city count.
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Get total edge count (each undirected edge counts once).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check if no cities are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    fn slot(&self, city: &str) -> GraphResult<usize> {
        self.index
            .get(city)
            .copied()
            .ok_or_else(|| GraphError::UnknownCity(city.to_string()))
    }
}

static_assertions::assert_impl_all!(Graph: Send, Sync);
