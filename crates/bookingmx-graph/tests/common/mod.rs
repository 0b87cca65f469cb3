//! Shared fixtures for graph integration tests.

pub mod fixtures;
