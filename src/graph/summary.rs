//! Degree summary of a built graph.
//!
//! Provides a serializable overview for downstream consumers:
//! - node and edge counts
//! - per-node ingress/egress degree
//! - isolated, source-only and sink-only nodes

use serde::{Deserialize, Serialize};

use crate::graph::types::Graph;

/// Degree information for a single node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDegree {
    pub name: String,
    pub prefix: String,
    pub egress: usize,
    pub ingress: usize,
}

impl NodeDegree {
    pub fn total(&self) -> usize {
        self.egress + self.ingress
    }
}

/// Summary of a whole graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub name: String,
    pub total_nodes: usize,
    pub total_edges: usize,
    /// In node order
    pub degrees: Vec<NodeDegree>,
    /// Nodes with no edges at all
    pub isolated_nodes: Vec<String>,
    /// Nodes with egress edges only
    pub source_nodes: Vec<String>,
    /// Nodes with ingress edges only
    pub sink_nodes: Vec<String>,
    pub max_egress: usize,
    pub max_ingress: usize,
}

impl GraphSummary {
    pub fn from_graph(graph: &Graph) -> Self {
        let degrees: Vec<NodeDegree> = graph
            .nodes()
            .iter()
            .map(|node| NodeDegree {
                name: node.name().to_string(),
                prefix: node.prefix().to_string(),
                egress: node.egress().len(),
                ingress: node.ingress().len(),
            })
            .collect();

        let names_where = |pred: fn(&NodeDegree) -> bool| -> Vec<String> {
            degrees
                .iter()
                .filter(|d| pred(d))
                .map(|d| d.name.clone())
                .collect()
        };

        let isolated_nodes: Vec<String> = graph
            .nodes()
            .iter()
            .filter(|node| node.is_isolated())
            .map(|node| node.name().to_string())
            .collect();
        let source_nodes = names_where(|d: &NodeDegree| d.egress > 0 && d.ingress == 0);
        let sink_nodes = names_where(|d: &NodeDegree| d.ingress > 0 && d.egress == 0);

        Self {
            name: graph.name().to_string(),
            total_nodes: graph.len(),
            total_edges: graph.edge_count(),
            max_egress: degrees.iter().map(|d| d.egress).max().unwrap_or(0),
            max_ingress: degrees.iter().map(|d| d.ingress).max().unwrap_or(0),
            degrees,
            isolated_nodes,
            source_nodes,
            sink_nodes,
        }
    }

    /// Mean egress degree (equal to mean ingress degree)
    pub fn mean_degree(&self) -> f64 {
        if self.total_nodes == 0 {
            return 0.0;
        }
        self.total_edges as f64 / self.total_nodes as f64
    }
}
