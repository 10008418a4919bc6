//! Data models for cluster snapshots and balancing plans.
//!
//! A [`ClusterSnapshot`] holds the [`DataNode`]s of a cluster and their
//! [`DiskVolume`]s. The planner turns a snapshot into one [`NodePlan`] per
//! processed node, each an ordered list of [`Step`]s moving bytes from one
//! volume to another.
//!
//! Display implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use diskbalancer_core::models::{ClusterSnapshot, DataNode};
//!
//! let cluster = ClusterSnapshot::new(vec![DataNode {
//!     uuid: "a1b2".to_string(),
//!     ip_address: "10.0.0.7".to_string(),
//!     hostname: "node-7".to_string(),
//!     ..Default::default()
//! }]);
//!
//! assert_eq!(cluster.find_node("10.0.0.7").map(|n| n.uuid.as_str()), Some("a1b2"));
//! assert!(cluster.find_node("node-8").is_none());
//! ```

pub mod cluster;
pub mod node;
pub mod plan;
pub mod step;
pub mod storage_type;
pub mod volume;


pub use cluster::ClusterSnapshot;
pub use node::DataNode;
pub use plan::NodePlan;
pub use step::Step;
pub use storage_type::StorageType;
pub use volume::DiskVolume;
