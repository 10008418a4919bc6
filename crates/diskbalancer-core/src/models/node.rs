//! Data node model.

use serde::{Deserialize, Serialize};

use super::DiskVolume;

/// A storage node and the volumes attached to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DataNode {
    /// Unique node identifier
    pub uuid: String,

    /// IP address the node is reachable at
    #[serde(default)]
    pub ip_address: String,

    /// Host name of the node
    #[serde(default)]
    pub hostname: String,

    /// Data transfer port
    #[serde(default)]
    pub data_port: u16,

    /// Volumes attached to the node
    #[serde(default)]
    pub volumes: Vec<DiskVolume>,
}
