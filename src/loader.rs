//! Topology file loading.
//!
//! Reads a topology file from disk and decodes it into a
//! [`TopologyDescription`]. No domain checks happen here; decode failures are
//! handed back unchanged.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info};

use crate::topology::TopologyDescription;

/// On-disk encodings of a topology description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyFormat {
    Json,
    Yaml,
}

impl TopologyFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl FromStr for TopologyFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unknown topology format '{}' (expected json or yaml)", other)),
        }
    }
}

impl fmt::Display for TopologyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Errors that can occur while loading a topology file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read topology file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON topology: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML topology: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Cannot determine topology format of {path:?} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },
}

/// Load a topology file, picking the decoder from its extension
pub fn load_topology(path: &Path) -> Result<TopologyDescription, LoadError> {
    let format = TopologyFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    load_topology_with_format(path, format)
}

/// Load a topology file with an explicit format
pub fn load_topology_with_format(
    path: &Path,
    format: TopologyFormat,
) -> Result<TopologyDescription, LoadError> {
    info!("Loading topology from: {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let description = parse_topology(&content, format)?;

    debug!(
        "Decoded topology '{}' ({} networks) as {}",
        description.name,
        description.networks.len(),
        format
    );

    Ok(description)
}

/// Decode a topology description from memory
pub fn parse_topology(
    content: &str,
    format: TopologyFormat,
) -> Result<TopologyDescription, LoadError> {
    let description = match format {
        TopologyFormat::Json => serde_json::from_str(content)?,
        TopologyFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(description)
}
