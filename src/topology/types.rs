//! Topology description records.
//!
//! These mirror the on-disk topology file one to one. They carry no
//! domain guarantees of their own; see [`crate::topology::validation`].

use serde::{Deserialize, Serialize};

/// Root record of a topology file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopologyDescription {
    /// Identifying name of the topology, must be non-empty
    pub name: String,
    /// Networks in declaration order
    pub networks: Vec<NetworkDescription>,
}

/// A single network and the neighbors it declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkDescription {
    pub name: String,
    /// Textual IP prefix, e.g. "10.0.0.0/24"
    pub prefix: String,
    #[serde(default)]
    pub adjacencies: Vec<AdjacencyDescription>,
}

/// Directed edge from the owning network to the network called `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjacencyDescription {
    pub name: String,
}

impl TopologyDescription {
    pub fn new(name: impl Into<String>, networks: Vec<NetworkDescription>) -> Self {
        Self {
            name: name.into(),
            networks,
        }
    }

    /// Find a network by name
    pub fn network(&self, name: &str) -> Option<&NetworkDescription> {
        self.networks.iter().find(|network| network.name == name)
    }

    /// Total number of declared adjacencies across all networks
    pub fn adjacency_count(&self) -> usize {
        self.networks.iter().map(|network| network.adjacencies.len()).sum()
    }
}

impl NetworkDescription {
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            adjacencies: Vec::new(),
        }
    }

    /// Builder-style helper that appends an adjacency to `target`
    pub fn with_adjacency(mut self, target: impl Into<String>) -> Self {
        self.adjacencies.push(AdjacencyDescription::new(target));
        self
    }

    /// Returns true if this network declares an edge to `target`
    pub fn is_adjacent_to(&self, target: &str) -> bool {
        self.adjacencies.iter().any(|adj| adj.name == target)
    }
}

impl AdjacencyDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_parsing() {
        let json = r#"
{
  "name": "simple topology",
  "networks": [
    { "name": "net1", "prefix": "10.0.0.0/24", "adjacencies": [ { "name": "net2" } ] },
    { "name": "net2", "prefix": "10.0.1.0/24" }
  ]
}
"#;

        let description: TopologyDescription = serde_json::from_str(json).unwrap();
        assert_eq!(description.name, "simple topology");
        assert_eq!(description.networks.len(), 2);
        assert!(description.networks[0].is_adjacent_to("net2"));

        // A missing adjacency list is treated as empty
        assert!(description.networks[1].adjacencies.is_empty());
        assert_eq!(description.adjacency_count(), 1);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let json = r#"{
  "name": "t",
  "networks": [ { "name": "a", "prefix": "p", "adjacency": [] } ]
}"#;
        assert!(serde_json::from_str::<TopologyDescription>(json).is_err());
    }

    #[test]
    fn test_networks_field_required() {
        let err = serde_json::from_str::<TopologyDescription>(r#"{ "name": "t" }"#).unwrap_err();
        assert!(err.to_string().contains("networks"));

        // An explicit empty list still decodes
        let description: TopologyDescription =
            serde_json::from_str(r#"{ "name": "t", "networks": [] }"#).unwrap();
        assert!(description.networks.is_empty());
    }

    #[test]
    fn test_builder_helpers() {
        let network = NetworkDescription::new("net1", "10.0.0.0/24")
            .with_adjacency("net2")
            .with_adjacency("net3");
        let description = TopologyDescription::new("t", vec![network]);

        assert_eq!(description.network("net1").unwrap().adjacencies.len(), 2);
        assert!(description.network("net2").is_none());
    }
}
