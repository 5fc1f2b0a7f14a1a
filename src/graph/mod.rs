//! Directed network graph module.
//!
//! This module builds an immutable graph from a topology description and
//! provides read-only queries and a degree summary over it.

pub mod builder;
pub mod summary;
pub mod types;

// Re-export key types and functions for easier access
pub use builder::{build, build_with, GraphError, UnresolvedReference};
pub use summary::{GraphSummary, NodeDegree};
pub use types::{Graph, NetworkNode, NodeId};
