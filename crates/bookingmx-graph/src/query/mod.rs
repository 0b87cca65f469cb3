//! Read-only queries over a built graph.
//!
//! - **nearby**: one-hop neighbors of a city within a distance bound

mod nearby;

pub use self::nearby::nearby_cities;
