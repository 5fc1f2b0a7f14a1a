//! Structural validation of topology descriptions.
//!
//! Checks run in a fixed order and stop at the first violation:
//! - the topology has a name
//! - network names are unique
//! - network prefixes are unique (textual comparison only)
//! - adjacencies never point at their own network and always point at an
//!   existing network

use std::collections::HashSet;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::topology::types::TopologyDescription;

/// Topology validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Topology has no name")]
    NoTopologyName,

    #[error("Duplicate network name '{name}'")]
    DuplicateNetworkName { name: String },

    #[error("Networks '{first}' and '{second}' share prefix '{prefix}'")]
    DuplicateNetworkPrefix {
        prefix: String,
        first: String,
        second: String,
    },

    #[error("Network '{network}' declares an adjacency to itself")]
    NetworkAdjSelf { network: String },

    #[error("Network '{network}' declares an adjacency to unknown network '{adjacency}'")]
    NetworkAdjNotFound { network: String, adjacency: String },
}

/// Validate a topology description, reporting through the `log` facade
pub fn validate(description: &TopologyDescription) -> Result<(), ValidationError> {
    validate_with(description, &mut LogSink)
}

/// Validate a topology description, reporting through `sink`
///
/// The description is never modified, so repeated calls give the same
/// result.
///
/// Prefix uniqueness is plain string equality. Overlapping CIDR ranges such
/// as "10.0.0.0/16" and "10.0.1.0/24" are not detected.
pub fn validate_with(
    description: &TopologyDescription,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ValidationError> {
    let result = check(description);

    match &result {
        Ok(()) => sink.info(&format!(
            "Topology '{}' is valid ({} networks, {} adjacencies)",
            description.name,
            description.networks.len(),
            description.adjacency_count()
        )),
        Err(e) => sink.error(&format!("Topology validation failed: {}", e)),
    }

    result
}

fn check(description: &TopologyDescription) -> Result<(), ValidationError> {
    if description.name.is_empty() {
        return Err(ValidationError::NoTopologyName);
    }

    check_uniqueness(description)?;
    check_adjacencies(description)
}

fn check_uniqueness(description: &TopologyDescription) -> Result<(), ValidationError> {
    let networks = &description.networks;

    for (i, first) in networks.iter().enumerate() {
        for second in &networks[i + 1..] {
            if first.name == second.name {
                return Err(ValidationError::DuplicateNetworkName {
                    name: first.name.clone(),
                });
            }

            if first.prefix == second.prefix {
                return Err(ValidationError::DuplicateNetworkPrefix {
                    prefix: first.prefix.clone(),
                    first: first.name.clone(),
                    second: second.name.clone(),
                });
            }
        }
    }

    Ok(())
}

fn check_adjacencies(description: &TopologyDescription) -> Result<(), ValidationError> {
    let known: HashSet<&str> = description
        .networks
        .iter()
        .map(|network| network.name.as_str())
        .collect();

    for network in &description.networks {
        for adjacency in &network.adjacencies {
            if adjacency.name == network.name {
                return Err(ValidationError::NetworkAdjSelf {
                    network: network.name.clone(),
                });
            }

            if !known.contains(adjacency.name.as_str()) {
                return Err(ValidationError::NetworkAdjNotFound {
                    network: network.name.clone(),
                    adjacency: adjacency.name.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::topology::types::NetworkDescription;

    fn simple_topology() -> TopologyDescription {
        TopologyDescription::new(
            "simple topology",
            vec![
                NetworkDescription::new("net1", "10.0.0.0/24").with_adjacency("net2"),
                NetworkDescription::new("net2", "10.0.1.0/24"),
            ],
        )
    }

    #[test]
    fn test_valid_topology() {
        assert_eq!(validate(&simple_topology()), Ok(()));
    }

    #[test]
    fn test_no_name() {
        let mut description = simple_topology();
        description.name.clear();
        // Also break the networks; the name check must win
        description.networks[1].name = "net1".to_string();

        assert_eq!(validate(&description), Err(ValidationError::NoTopologyName));
    }

    #[test]
    fn test_duplicate_network_name() {
        let description = TopologyDescription::new(
            "dupes",
            vec![
                NetworkDescription::new("net1", "10.0.0.0/24"),
                NetworkDescription::new("net1", "10.0.1.0/24"),
            ],
        );

        assert_eq!(
            validate(&description),
            Err(ValidationError::DuplicateNetworkName {
                name: "net1".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_network_prefix() {
        let description = TopologyDescription::new(
            "dupes",
            vec![
                NetworkDescription::new("net1", "10.0.0.0/24"),
                NetworkDescription::new("net2", "10.0.0.0/24"),
            ],
        );

        assert_eq!(
            validate(&description),
            Err(ValidationError::DuplicateNetworkPrefix {
                prefix: "10.0.0.0/24".to_string(),
                first: "net1".to_string(),
                second: "net2".to_string(),
            })
        );
    }

    #[test]
    fn test_overlapping_prefixes_are_accepted() {
        let description = TopologyDescription::new(
            "overlap",
            vec![
                NetworkDescription::new("net1", "10.0.0.0/16"),
                NetworkDescription::new("net2", "10.0.1.0/24"),
            ],
        );

        assert!(validate(&description).is_ok());
    }

    #[test]
    fn test_self_adjacency() {
        let description = TopologyDescription::new(
            "self",
            vec![
                NetworkDescription::new("net1", "10.0.0.0/24").with_adjacency("net1"),
                NetworkDescription::new("net2", "10.0.1.0/24"),
            ],
        );

        assert_eq!(
            validate(&description),
            Err(ValidationError::NetworkAdjSelf {
                network: "net1".to_string()
            })
        );
    }

    #[test]
    fn test_dangling_adjacency() {
        let description = TopologyDescription::new(
            "dangling",
            vec![
                NetworkDescription::new("net1", "10.0.0.0/24").with_adjacency("net3"),
                NetworkDescription::new("net2", "10.0.1.0/24"),
            ],
        );

        assert_eq!(
            validate(&description),
            Err(ValidationError::NetworkAdjNotFound {
                network: "net1".to_string(),
                adjacency: "net3".to_string(),
            })
        );
    }

    #[test]
    fn test_uniqueness_checked_before_adjacencies() {
        let description = TopologyDescription::new(
            "order",
            vec![
                NetworkDescription::new("net1", "10.0.0.0/24").with_adjacency("missing"),
                NetworkDescription::new("net2", "10.0.0.0/24"),
            ],
        );

        assert!(matches!(
            validate(&description),
            Err(ValidationError::DuplicateNetworkPrefix { .. })
        ));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let good = simple_topology();
        assert_eq!(validate(&good), validate(&good));

        let mut bad = simple_topology();
        bad.networks[1].adjacencies.push(crate::topology::AdjacencyDescription::new("net2"));
        let first = validate(&bad);
        let second = validate(&bad);
        assert!(first.is_err());
        assert_eq!(first, second);
    }

    #[test]
    fn test_diagnostics_reported_to_sink() {
        let mut sink = CollectingSink::new();
        validate_with(&simple_topology(), &mut sink).unwrap();
        assert!(!sink.has_errors());
        assert_eq!(sink.messages.len(), 1);

        let mut description = simple_topology();
        description.name.clear();
        let mut sink = CollectingSink::new();
        assert!(validate_with(&description, &mut sink).is_err());
        assert!(sink.has_errors());
    }
}
