//! Undirected, weighted city graph stored as adjacency lists.
//!
//! Cities are registered by name, then connected with symmetric edges.
//! Every neighbor record points at a registered city; there are no
//! deletion operations, so that invariant holds for the life of a graph.
//!
//! # Edge Policy
//!
//! - Duplicate edges are kept as parallel records in insertion order.
//! - A self-loop is recorded once in the city's own list.

mod adjacency;
mod types;


pub use self::adjacency::Graph;
pub use self::types::Neighbor;

pub(crate) use self::types::{is_valid_city_name, is_valid_distance};
