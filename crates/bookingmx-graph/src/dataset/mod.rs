//! Raw `{cities, edges}` datasets and their structural validation.
//!
//! A [`Dataset`] is untrusted input: it is checked with
//! [`validate_graph_data`] and then materialized with
//! [`build_graph`](crate::builder::build_graph) or, in one step,
//! [`load_graph`](crate::builder::load_graph).
//!
//! # JSON Shape
//!
//! ```text
//! {
//!   "cities": ["Guadalajara", "Zapopan"],
//!   "edges": [{ "from": "Guadalajara", "to": "Zapopan", "distance": 15 }]
//! }
//! ```

mod validation;


use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GraphResult;

pub use self::validation::{validate_graph_data, ValidationReason, ValidationReport};

/// One edge descriptor as it appears in a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// Unvalidated city list plus edge descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub cities: Vec<String>,
    pub edges: Vec<EdgeSpec>,
}

impl Dataset {
    pub fn new<I, S>(cities: I, edges: Vec<EdgeSpec>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cities: cities.into_iter().map(Into::into).collect(),
            edges,
        }
    }

    /// Parse a dataset from JSON text.
    ///
    /// # Errors
    /// * `GraphError::Serialization` - malformed JSON or wrong field types
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset file.
    ///
    /// # Errors
    /// * `GraphError::Io` - file cannot be read
    /// * `GraphError::Serialization` - malformed JSON or wrong field types
    pub fn from_path(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            cities = dataset.cities.len(),
            edges = dataset.edges.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Run the structural checks. See [`validate_graph_data`].
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validate_graph_data(self)
    }
}
