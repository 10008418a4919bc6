//! The planner seam.
//!
//! Deciding which bytes move between which disks is not done here. A
//! [`PlanComputer`] receives the cluster, with the node to process already
//! marked, and returns one [`NodePlan`] per node it acted on.
//!
//! [`CommandPlanner`] is the stock implementation: it runs an external
//! program, writes a [`PlanRequest`] as JSON to its stdin and reads a JSON
//! array of node plans from its stdout.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::{
    error::{DiskBalancerError, Result, ResultExt},
    models::{ClusterSnapshot, NodePlan},
};

/// Computes balancing plans for the nodes marked in a snapshot.
#[async_trait]
pub trait PlanComputer: Send + Sync {
    /// Returns the plans needed to bring the marked nodes within
    /// `threshold` percent. An empty list means nothing needs to move.
    async fn compute_plan(&self, cluster: &ClusterSnapshot, threshold: f64)
        -> Result<Vec<NodePlan>>;
}

#[async_trait]
impl<F> PlanComputer for F
where
    F: Fn(&ClusterSnapshot, f64) -> Result<Vec<NodePlan>> + Send + Sync,
{
    async fn compute_plan(
        &self,
        cluster: &ClusterSnapshot,
        threshold: f64,
    ) -> Result<Vec<NodePlan>> {
        self(cluster, threshold)
    }
}

/// Payload handed to an external planner.
#[derive(Debug, Serialize)]
pub struct PlanRequest<'a> {
    pub threshold_percent: f64,
    pub nodes_to_process: Vec<&'a str>,
    pub cluster: &'a ClusterSnapshot,
}

impl<'a> PlanRequest<'a> {
    pub fn new(cluster: &'a ClusterSnapshot, threshold: f64) -> Self {
        Self {
            threshold_percent: threshold,
            nodes_to_process: cluster
                .nodes_to_process()
                .iter()
                .map(|n| n.uuid.as_str())
                .collect(),
            cluster,
        }
    }
}

/// Runs an external planner program.
#[derive(Debug, Clone)]
pub struct CommandPlanner {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandPlanner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends arguments passed to the planner program.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn describe(&self) -> String {
        self.program.display().to_string()
    }
}

#[async_trait]
impl PlanComputer for CommandPlanner {
    async fn compute_plan(
        &self,
        cluster: &ClusterSnapshot,
        threshold: f64,
    ) -> Result<Vec<NodePlan>> {
        let payload = serde_json::to_vec(&PlanRequest::new(cluster, threshold))?;
        debug!(
            "Running planner {} with {} byte request",
            self.describe(),
            payload.len()
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .planning_context(format!("Failed to start planner {}", self.describe()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| DiskBalancerError::planning("Planner stdin is not available"))?;

        // Feed stdin while draining stdout so neither pipe can fill up.
        let feed = async move {
            stdin.write_all(&payload).await?;
            stdin.shutdown().await
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.planning_context(format!("Planner {} failed", self.describe()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DiskBalancerError::planning(format!(
                "Planner {} exited with {}: {}",
                self.describe(),
                output.status,
                stderr.trim()
            )));
        }

        match fed {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                warn!("Planner {} did not read the full request", self.describe());
            }
            other => other.planning_context("Failed to send request to planner")?,
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&stdout).planning_context(format!(
            "Planner {} produced an unreadable plan",
            self.describe()
        ))
    }
}
