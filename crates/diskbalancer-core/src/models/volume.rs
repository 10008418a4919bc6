//! Disk volume model.

use serde::{Deserialize, Serialize};

use super::StorageType;

/// A single disk attached to a data node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DiskVolume {
    /// Unique identifier of the volume
    pub uuid: String,

    /// Mount path of the volume on its node
    pub path: String,

    /// Media the volume is backed by
    #[serde(default)]
    pub storage_type: StorageType,

    /// Raw capacity in bytes
    #[serde(default)]
    pub capacity: u64,

    /// Bytes currently used
    #[serde(default)]
    pub used: u64,

    /// Bytes reserved for non-block data
    #[serde(default)]
    pub reserved: u64,

    /// Volume has reported failures
    #[serde(default)]
    pub failed: bool,

    /// Volume accepts no writes
    #[serde(default)]
    pub read_only: bool,

    /// Volume contents do not survive restarts
    #[serde(default)]
    pub transient: bool,

    /// Volume is excluded from balancing
    #[serde(default)]
    pub skip: bool,
}
