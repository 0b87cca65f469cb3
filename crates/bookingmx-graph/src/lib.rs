//! City Distance Graph
//!
//! An undirected, weighted graph over city names with dataset validation,
//! bulk construction, and a radius-bounded nearby-city query.
//!
//! # Architecture
//!
//! - **graph**: adjacency-list container with add/query primitives
//! - **dataset**: raw `{cities, edges}` input and its structural validation
//! - **builder**: materializes a graph from city and edge lists
//! - **query**: one-hop nearby-city lookup
//! - **error**: `GraphError` for fail-fast graph mutations
//!
//! Validation reports problems as data ([`ValidationReport`]); graph
//! mutation fails with [`GraphError`]. The two styles are separate on
//! purpose: check a dataset first, then build it.
//!
//! # Example
//!
//! ```
//! use bookingmx_graph::{load_graph, nearby_cities, Dataset, EdgeSpec};
//!
//! let dataset = Dataset::new(
//!     ["Guadalajara", "Tlaquepaque", "Zapopan"],
//!     vec![
//!         EdgeSpec::new("Guadalajara", "Tlaquepaque", 10.0),
//!         EdgeSpec::new("Guadalajara", "Zapopan", 15.0),
//!     ],
//! );
//! assert!(dataset.validate().is_ok());
//!
//! let graph = load_graph(&dataset)?;
//! let near = nearby_cities(&graph, "Guadalajara", Some(12.0));
//! assert_eq!(near[0].city, "Tlaquepaque");
//! # Ok::<(), bookingmx_graph::GraphError>(())
//! ```

pub mod builder;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod query;

pub use builder::{build_graph, load_graph};
pub use dataset::{validate_graph_data, Dataset, EdgeSpec, ValidationReason, ValidationReport};
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, Neighbor};
pub use query::nearby_cities;
