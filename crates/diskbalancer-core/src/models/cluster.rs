//! Cluster snapshot model.

use serde::{Deserialize, Serialize};

use super::DataNode;
use crate::error::Result;

/// In-memory view of the cluster as loaded from a connector.
///
/// `nodes_to_process` is scoped to one invocation and is never serialized, so
/// the snapshot written next to a plan mirrors what was loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClusterSnapshot {
    /// All nodes known to the cluster
    #[serde(default)]
    pub nodes: Vec<DataNode>,

    #[serde(skip)]
    nodes_to_process: Vec<DataNode>,
}

impl ClusterSnapshot {
    /// Creates a snapshot from a list of nodes.
    pub fn new(nodes: Vec<DataNode>) -> Self {
        Self {
            nodes,
            nodes_to_process: Vec::new(),
        }
    }

    /// Parses a snapshot from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the snapshot. This is the content of the "before" artifact.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Looks a node up by UUID, then IP address, then host name.
    ///
    /// Each kind of identifier is tried across every node before the next
    /// one, so a host named like another node's address never shadows it.
    pub fn find_node(&self, identifier: &str) -> Option<&DataNode> {
        if identifier.is_empty() {
            return None;
        }
        let find_by = |field: fn(&DataNode) -> &str| {
            self.nodes.iter().find(|n| field(n) == identifier)
        };
        find_by(|n| n.uuid.as_str())
            .or_else(|| find_by(|n| n.ip_address.as_str()))
            .or_else(|| find_by(|n| n.hostname.as_str()))
    }

    /// Restricts planning to the given node.
    pub fn mark_for_processing(&mut self, node: DataNode) {
        self.nodes_to_process = vec![node];
    }

    /// Nodes the planner should act on.
    pub fn nodes_to_process(&self) -> &[DataNode] {
        &self.nodes_to_process
    }
}
