//! Graph data structures.
//!
//! Nodes live in a fixed arena owned by the [`Graph`]. Adjacency lists and the
//! name index hold [`NodeId`] positions into that arena rather than
//! references, so nothing outside the graph can keep a node alive.

use std::collections::HashMap;
use std::fmt;

/// Position of a node in its graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A network in the built graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkNode {
    name: String,
    prefix: String,
    /// Nodes this node has an edge to
    egress: Vec<NodeId>,
    /// Nodes that have an edge to this node
    ingress: Vec<NodeId>,
}

impl NetworkNode {
    pub(crate) fn new(name: String, prefix: String) -> Self {
        Self {
            name,
            prefix,
            egress: Vec::new(),
            ingress: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn egress(&self) -> &[NodeId] {
        &self.egress
    }

    pub fn ingress(&self) -> &[NodeId] {
        &self.ingress
    }

    /// Neither ingress nor egress edges
    pub fn is_isolated(&self) -> bool {
        self.egress.is_empty() && self.ingress.is_empty()
    }
}

/// Immutable directed graph of networks
///
/// Built once by [`crate::graph::build`]; there is no API to add or remove
/// nodes or edges afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    name: String,
    nodes: Vec<NetworkNode>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    pub(crate) fn with_capacity(name: String, capacity: usize) -> Self {
        Self {
            name,
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Append a node and register it in the index.
    ///
    /// Returns `None` without touching the graph if the name is taken.
    pub(crate) fn push_node(&mut self, node: NetworkNode) -> Option<NodeId> {
        if self.index.contains_key(&node.name) {
            return None;
        }

        let id = NodeId(self.nodes.len());
        self.index.insert(node.name.clone(), id);
        self.nodes.push(node);
        Some(id)
    }

    /// Record `source -> target` on both endpoints
    pub(crate) fn link(&mut self, source: NodeId, target: NodeId) {
        self.nodes[source.0].egress.push(target);
        self.nodes[target.0].ingress.push(source);
    }

    /// Release all storage held by the graph.
    ///
    /// Node strings and adjacency lists go first, then the node arena, the
    /// graph name and finally the index. Taking `self` by value means this
    /// can only run once, and it is the same path used for partially built
    /// graphs when construction fails.
    pub fn release(self) {
        let Graph { name, nodes, index } = self;

        log::trace!(
            target: crate::diagnostics::LOG_TARGET,
            "Releasing graph '{}' ({} nodes)",
            name,
            nodes.len()
        );

        for node in nodes {
            let NetworkNode {
                name,
                prefix,
                egress,
                ingress,
            } = node;
            drop((name, prefix, egress, ingress));
        }
        drop(name);
        drop(index);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in the order their networks were declared
    pub fn nodes(&self) -> &[NetworkNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&NetworkNode> {
        self.nodes.get(id.0)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn node_by_name(&self, name: &str) -> Option<&NetworkNode> {
        self.node_id(name).and_then(|id| self.node(id))
    }

    /// Ids paired with their nodes
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NetworkNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Nodes `id` has an edge to
    pub fn egress_of(&self, id: NodeId) -> impl Iterator<Item = &NetworkNode> {
        self.resolve(self.node(id).map(NetworkNode::egress))
    }

    /// Nodes with an edge to `id`
    pub fn ingress_of(&self, id: NodeId) -> impl Iterator<Item = &NetworkNode> {
        self.resolve(self.node(id).map(NetworkNode::ingress))
    }

    fn resolve<'a>(&'a self, ids: Option<&'a [NodeId]>) -> impl Iterator<Item = &'a NetworkNode> {
        ids.unwrap_or_default().iter().map(move |id| &self.nodes[id.0])
    }

    /// Every edge as `(source, target)`, grouped by source in node order
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.iter()
            .flat_map(|(source, node)| node.egress.iter().map(move |&target| (source, target)))
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.egress.len()).sum()
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.node_by_name(source), self.node_id(target)) {
            (Some(node), Some(target)) => node.egress.contains(&target),
            _ => false,
        }
    }
}
