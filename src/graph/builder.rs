//! Graph construction from a topology description.
//!
//! Construction runs in two passes over the description:
//! 1. allocate one node per network and register it in the name index
//! 2. resolve every declared adjacency through the index and link both
//!    endpoints
//!
//! Every index lookup is treated as fallible, since callers are free to build
//! without validating first.

use std::fmt;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::graph::types::{Graph, NetworkNode};
use crate::topology::TopologyDescription;

/// A name in the description that could not be found in the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReference {
    /// A declared network has no node
    Network { network: String },
    /// An adjacency target has no node
    Adjacency { network: String, adjacency: String },
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { network } => write!(f, "network '{}' is not in the graph", network),
            Self::Adjacency { network, adjacency } => write!(
                f,
                "adjacency '{}' of network '{}' is not in the graph",
                adjacency, network
            ),
        }
    }
}

/// Graph construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Topology has no networks")]
    NoNetworks,

    #[error("Network '{name}' is declared more than once")]
    DuplicateNode { name: String },

    #[error("{} unresolved reference(s): {}", .0.len(), join_references(.0))]
    Unresolved(Vec<UnresolvedReference>),
}

fn join_references(references: &[UnresolvedReference]) -> String {
    references
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Build a graph, reporting through the `log` facade
pub fn build(description: &TopologyDescription) -> Result<Graph, GraphError> {
    build_with(description, &mut LogSink)
}

/// Build a graph, reporting through `sink`
///
/// Unresolved references do not stop linking: every valid declaration is
/// still linked and every broken one is collected, then the whole build
/// fails with [`GraphError::Unresolved`]. The partially linked graph is
/// released before returning.
pub fn build_with(
    description: &TopologyDescription,
    sink: &mut dyn DiagnosticSink,
) -> Result<Graph, GraphError> {
    if description.networks.is_empty() {
        sink.error(&format!("Topology '{}' has no networks", description.name));
        return Err(GraphError::NoNetworks);
    }

    let mut graph = Graph::with_capacity(description.name.clone(), description.networks.len());

    for network in &description.networks {
        let node = NetworkNode::new(network.name.clone(), network.prefix.clone());
        if graph.push_node(node).is_none() {
            sink.error(&format!("Network '{}' is declared more than once", network.name));
            graph.release();
            return Err(GraphError::DuplicateNode {
                name: network.name.clone(),
            });
        }
    }

    let mut unresolved = Vec::new();

    for network in &description.networks {
        let Some(source) = graph.node_id(&network.name) else {
            unresolved.push(UnresolvedReference::Network {
                network: network.name.clone(),
            });
            continue;
        };

        for adjacency in &network.adjacencies {
            match graph.node_id(&adjacency.name) {
                Some(target) => graph.link(source, target),
                None => unresolved.push(UnresolvedReference::Adjacency {
                    network: network.name.clone(),
                    adjacency: adjacency.name.clone(),
                }),
            }
        }
    }

    if !unresolved.is_empty() {
        for reference in &unresolved {
            sink.error(&format!("Failed to link topology: {}", reference));
        }
        graph.release();
        return Err(GraphError::Unresolved(unresolved));
    }

    sink.info(&format!(
        "Built graph '{}' with {} nodes and {} edges",
        graph.name(),
        graph.len(),
        graph.edge_count()
    ));

    Ok(graph)
}
