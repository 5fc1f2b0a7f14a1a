//! # Topograph - Network topology validation and graph construction
//!
//! This library turns a user-authored topology description (a named set of
//! networks, each owning an address prefix and declaring neighboring
//! networks) into a validated model and an immutable directed graph suitable
//! for downstream reachability and configuration analysis.
//!
//! ## Architecture
//!
//! - `topology`: description records and structural validation
//! - `graph`: graph construction, queries and degree summary
//! - `loader`: reading and decoding topology files (JSON or YAML)
//! - `diagnostics`: injectable sinks for diagnostic messages
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use topograph::{graph, loader, topology};
//!
//! let description = loader::load_topology(Path::new("topology.json"))?;
//! topology::validate(&description)?;
//!
//! let graph = graph::build(&description)?;
//! drop(description);
//!
//! for (id, node) in graph.iter() {
//!     let peers: Vec<&str> = graph.egress_of(id).map(|n| n.name()).collect();
//!     println!("{} ({}) -> {:?}", node.name(), node.prefix(), peers);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Topology Format
//!
//! ```json
//! {
//!   "name": "simple topology",
//!   "networks": [
//!     { "name": "net1", "prefix": "10.0.0.0/24", "adjacencies": [ { "name": "net2" } ] },
//!     { "name": "net2", "prefix": "10.0.1.0/24", "adjacencies": [] }
//!   ]
//! }
//! ```
//!
//! Each adjacency is a one-directional edge from the owning network. The
//! built graph records it on both endpoints: as egress on the source and as
//! ingress on the target.
//!
//! ## Error Handling
//!
//! Each module has its own `thiserror` error type (`ValidationError`,
//! `GraphError`, `LoadError`). The `topograph` binary wraps them with
//! `color_eyre` for reporting.

pub mod diagnostics;
pub mod graph;
pub mod loader;
pub mod topology;

pub use graph::{build, Graph, GraphError, NetworkNode, NodeId};
pub use topology::{validate, TopologyDescription, ValidationError};
