//! Sample datasets for integration tests.
//!
//! Fixtures are plain constructors; each test builds its own copy.

use bookingmx_graph::{Dataset, EdgeSpec};

/// Guadalajara metro area sample: a hub with three spokes.
pub fn jalisco_dataset() -> Dataset {
    Dataset::new(
        ["Guadalajara", "Tlaquepaque", "Zapopan", "Tepatitlán"],
        vec![
            EdgeSpec::new("Guadalajara", "Tlaquepaque", 10.0),
            EdgeSpec::new("Guadalajara", "Zapopan", 15.0),
            EdgeSpec::new("Guadalajara", "Tepatitlán", 80.0),
        ],
    )
}

/// Same sample as JSON text, matching the on-disk dataset format.
pub const JALISCO_JSON: &str = r#"{
  "cities": ["Guadalajara", "Tlaquepaque", "Zapopan", "Tepatitlán"],
  "edges": [
    { "from": "Guadalajara", "to": "Tlaquepaque", "distance": 10 },
    { "from": "Guadalajara", "to": "Zapopan", "distance": 15 },
    { "from": "Guadalajara", "to": "Tepatitlán", "distance": 80 }
  ]
}"#;
