//! Node plan model definition.

use serde::{Deserialize, Serialize};

use super::Step;

/// The balancing plan computed for a single node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NodePlan {
    /// Host name of the node the plan is for
    pub node_name: String,

    /// UUID of the node the plan is for
    pub node_uuid: String,

    /// Data transfer port of the node
    #[serde(default)]
    pub port: u16,

    /// Planner-assigned creation time, milliseconds since the epoch
    #[serde(default)]
    pub timestamp: i64,

    /// Ordered moves for this node
    #[serde(default)]
    pub volume_set_plans: Vec<Step>,
}

impl NodePlan {
    /// Steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.volume_set_plans
    }

    /// Mutable access to the steps, used when applying runtime limits.
    pub fn steps_mut(&mut self) -> &mut [Step] {
        &mut self.volume_set_plans
    }
}
