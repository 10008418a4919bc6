//! Core library of the disk balancer plan tool.
//!
//! Given a storage node and an imbalance threshold, the [`PlanCommand`]
//! asks a planner for the disk-to-disk moves that would balance the node,
//! applies user supplied runtime limits to every move, and writes two
//! artifacts next to each other:
//!
//! - `before.<node>.json`: the cluster snapshot the plan was computed from
//! - `plan.<node>.json`: the node plans, ready for a later execution phase
//!
//! The cluster source, the planner and the output sink are traits
//! ([`ClusterConnector`], [`PlanComputer`], [`ArtifactSink`]) so callers can
//! plug in their own. The crate ships a JSON file connector, a planner that
//! runs an external program, and a local file sink.
//!
//! Writing the two artifacts is not atomic. If the plan write fails, the
//! before snapshot written just prior stays where it is.

pub mod command;
pub mod config;
pub mod connector;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod sink;

// Re-export commonly used types
pub use command::{ArtifactPaths, PlanCommand, PlanOutcome};
pub use config::Settings;
pub use connector::{ClusterConnector, JsonFileConnector};
pub use display::{ByteSize, PlanReport};
pub use error::{DiskBalancerError, Result};
pub use models::{ClusterSnapshot, DataNode, DiskVolume, NodePlan, Step, StorageType};
pub use params::{PlanOptions, PlanOverrides};
pub use planner::{CommandPlanner, PlanComputer, PlanRequest};
pub use sink::{ArtifactSink, LocalFileSink};
