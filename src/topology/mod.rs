//! Topology description module.
//!
//! This module contains the records decoded from a topology file and the
//! structural checks run on them before a graph is built.

pub mod types;
pub mod validation;

// Re-export key types and functions for easier access
pub use types::{AdjacencyDescription, NetworkDescription, TopologyDescription};
pub use validation::{validate, validate_with, ValidationError};
