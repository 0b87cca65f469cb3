//! Materialize graphs from city and edge lists.

use crate::dataset::{Dataset, EdgeSpec};
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Build a graph: every city in listed order, then every edge in listed
/// order.
///
/// Input is trusted to have passed [`validate_graph_data`]; nothing is
/// re-validated here, but errors from the graph primitives still propagate.
///
/// [`validate_graph_data`]: crate::dataset::validate_graph_data
///
/// # Errors
/// * `GraphError::InvalidArgument` - a city name is empty
/// * `GraphError::UnknownCity` - an edge references an unlisted city
/// * `GraphError::InvalidDistance` - an edge distance is negative or non-finite
pub fn build_graph<S: AsRef<str>>(cities: &[S], edges: &[EdgeSpec]) -> GraphResult<Graph> {
    let mut graph = Graph::new();

    for city in cities {
        graph.add_city(city.as_ref())?;
    }
    for edge in edges {
        graph.add_edge(&edge.from, &edge.to, edge.distance)?;
    }

    tracing::debug!(
        cities = graph.city_count(),
        edges = graph.edge_count(),
        "built graph"
    );
    Ok(graph)
}

/// Validate a dataset and build it.
///
/// # Errors
/// * `GraphError::InvalidDataset` - validation failed; carries the reason code
pub fn load_graph(dataset: &Dataset) -> GraphResult<Graph> {
    dataset
        .validate()
        .into_result()
        .map_err(GraphError::InvalidDataset)?;
    build_graph(&dataset.cities, &dataset.edges)
}

impl TryFrom<&Dataset> for Graph {
    type Error = GraphError;

    fn try_from(dataset: &Dataset) -> GraphResult<Self> {
        load_graph(dataset)
    }
}
