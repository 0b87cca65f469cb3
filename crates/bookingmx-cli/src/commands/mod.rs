//! CLI command handlers
//!
//! # Modules
//!
//! - `graph`: dataset validation and neighbor queries

pub mod graph;
