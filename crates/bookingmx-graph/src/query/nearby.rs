//! Radius-bounded nearby-city query.
//!
//! One hop only: the result is the origin's direct neighbors, never cities
//! reached through them.

use std::cmp::Ordering;

use crate::graph::{Graph, Neighbor};

/// Direct neighbors of `origin` whose edge distance is `<= max_distance`,
/// sorted ascending by distance.
///
/// - `max_distance = None` means unbounded. A NaN bound matches nothing.
/// - Equal distances keep edge insertion order (stable sort).
/// - An unregistered `origin` yields an empty vector instead of an error,
///   unlike [`Graph::neighbors`].
///
/// # Example
///
/// ```
/// use bookingmx_graph::{build_graph, nearby_cities, EdgeSpec};
///
/// let graph = build_graph(
///     &["Guadalajara", "Zapopan", "Tepatitlán"],
///     &[
///         EdgeSpec::new("Guadalajara", "Tepatitlán", 80.0),
///         EdgeSpec::new("Guadalajara", "Zapopan", 15.0),
///     ],
/// )?;
///
/// let near = nearby_cities(&graph, "Guadalajara", Some(20.0));
/// assert_eq!(near.len(), 1);
/// assert_eq!(near[0].city, "Zapopan");
/// assert!(nearby_cities(&graph, "XYZ", None).is_empty());
/// # Ok::<(), bookingmx_graph::GraphError>(())
/// ```
#[must_use]
pub fn nearby_cities(graph: &Graph, origin: &str, max_distance: Option<f64>) -> Vec<Neighbor> {
    let Ok(neighbors) = graph.neighbors(origin) else {
        tracing::debug!(origin, "nearby query for unknown city");
        return Vec::new();
    };

    let mut result: Vec<Neighbor> = neighbors
        .iter()
        .filter(|n| max_distance.map_or(true, |max| n.distance <= max))
        .cloned()
        .collect();

    // slice::sort_by is stable; 0.0 and -0.0 compare equal
    result.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
    });

    tracing::debug!(origin, ?max_distance, found = result.len(), "nearby query");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_graph;
    use crate::dataset::EdgeSpec;

    fn star() -> Graph {
        build_graph(
            &["Hub", "Far", "Near", "Mid", "Tie", "Other"],
            &[
                EdgeSpec::new("Hub", "Far", 90.0),
                EdgeSpec::new("Hub", "Mid", 20.0),
                EdgeSpec::new("Near", "Hub", 5.0),
                EdgeSpec::new("Hub", "Tie", 20.0),
                EdgeSpec::new("Far", "Other", 1.0),
            ],
        )
        .expect("build failed")
    }

    fn names(result: &[Neighbor]) -> Vec<&str> {
        result.iter().map(|n| n.city.as_str()).collect()
    }

    #[test]
    fn test_unbounded_returns_all_sorted() {
        let result = nearby_cities(&star(), "Hub", None);
        assert_eq!(names(&result), vec!["Near", "Mid", "Tie", "Far"]);
    }

    #[test]
    fn test_bound_is_inclusive() {
        let result = nearby_cities(&star(), "Hub", Some(20.0));
        assert_eq!(names(&result), vec!["Near", "Mid", "Tie"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let graph = build_graph(
            &["O", "B", "A", "C"],
            &[
                EdgeSpec::new("O", "B", 3.0),
                EdgeSpec::new("O", "A", 3.0),
                EdgeSpec::new("O", "C", 3.0),
            ],
        )
        .expect("build failed");

        assert_eq!(names(&nearby_cities(&graph, "O", None)), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_signed_zero_distances_tie() {
        let graph = build_graph(
            &["O", "First", "Second"],
            &[
                EdgeSpec::new("O", "First", 0.0),
                EdgeSpec::new("O", "Second", -0.0),
            ],
        )
        .expect("build failed");

        let result = nearby_cities(&graph, "O", None);
        assert_eq!(names(&result), vec!["First", "Second"]);
        assert_eq!(names(&nearby_cities(&graph, "O", Some(0.0))), vec!["First", "Second"]);
    }

    #[test]
    fn test_one_hop_only() {
        // Other is reachable through Far but is not a direct neighbor of Hub
        let result = nearby_cities(&star(), "Hub", None);
        assert!(!names(&result).contains(&"Other"));
    }

    #[test]
    fn test_unknown_origin_is_empty() {
        assert!(nearby_cities(&star(), "XYZ", None).is_empty());
        assert!(nearby_cities(&Graph::new(), "XYZ", Some(10.0)).is_empty());
    }

    #[test]
    fn test_isolated_origin_is_empty() {
        let graph = build_graph(&["Alone"], &[]).expect("build failed");
        assert!(nearby_cities(&graph, "Alone", None).is_empty());
    }

    #[test]
    fn test_small_and_nan_bounds() {
        let graph = star();
        assert!(nearby_cities(&graph, "Hub", Some(1.0)).is_empty());
        assert!(nearby_cities(&graph, "Hub", Some(-1.0)).is_empty());
        assert!(nearby_cities(&graph, "Hub", Some(f64::NAN)).is_empty());
        assert_eq!(nearby_cities(&graph, "Hub", Some(f64::INFINITY)).len(), 4);
    }

    #[test]
    fn test_query_does_not_mutate_graph() {
        let graph = star();
        let _ = nearby_cities(&graph, "Hub", Some(10.0));
        let order: Vec<&str> = graph
            .neighbors("Hub")
            .expect("neighbors")
            .iter()
            .map(|n| n.city.as_str())
            .collect();
        assert_eq!(order, vec!["Far", "Mid", "Near", "Tie"]);
    }
}
