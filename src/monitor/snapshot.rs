//! Status snapshots
//!
//! A snapshot is the immutable world the engine queries: every query of a
//! request runs against one snapshot, so results are consistent within a
//! request regardless of what the monitoring core does meanwhile.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{HostRecord, ServiceRecord};

/// Errors loading a status file
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Status file could not be read
    #[error("failed to read status file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Status file is not valid status JSON
    #[error("invalid status JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Point-in-time status of the monitored world
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// All monitored hosts, in the core's reporting order
    #[serde(default)]
    pub hosts: Vec<HostRecord>,
    /// All monitored services, in the core's reporting order
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
}

impl Snapshot {
    /// Loads a snapshot from a JSON status file
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// True when the snapshot contains no records at all
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty() && self.services.is_empty()
    }
}
