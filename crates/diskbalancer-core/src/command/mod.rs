//! The plan command.
//!
//! [`PlanCommand`] creates a disk balancer plan for one node:
//!
//! ```text
//! options ─▶ threshold ─▶ node ─▶ planner ─▶ overrides ─▶ artifacts ─▶ report
//! ```
//!
//! Each stage runs once, in order, and the first error ends the run. Input
//! errors and unknown nodes are caught before the planner is called, so no
//! artifact is written for them.
//!
//! ## Submodules
//!
//! - [`threshold`]: resolving the imbalance tolerance
//! - [`overlay`]: writing bandwidth / max-error overrides into the plan
//! - [`persist`]: artifact paths and writes
//!
//! # Usage
//!
//! ```rust,no_run
//! use diskbalancer_core::{
//!     CommandPlanner, JsonFileConnector, LocalFileSink, PlanCommand, PlanOptions, Settings,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let command = PlanCommand::new(
//!     Settings::load(None)?,
//!     JsonFileConnector::from_uri("file:///etc/diskbalancer/cluster.json")?,
//!     CommandPlanner::new("/usr/libexec/diskbalancer-planner"),
//!     LocalFileSink,
//! );
//!
//! let options = PlanOptions {
//!     node: Some("node-7".to_string()),
//!     output_dir: Some("/out".into()),
//!     bandwidth: Some("50".to_string()),
//!     ..Default::default()
//! };
//! let outcome = command.execute(&options, &mut std::io::stdout()).await?;
//! println!("{} steps", outcome.step_count());
//! # Ok(())
//! # }
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use jiff::Timestamp;
use log::{debug, info, warn};

use crate::{
    config::Settings,
    connector::ClusterConnector,
    display::PlanReport,
    error::{DiskBalancerError, Result},
    models::{ClusterSnapshot, DataNode, NodePlan},
    params::{PlanOptions, PlanOverrides},
    planner::PlanComputer,
    sink::ArtifactSink,
};

pub mod overlay;
pub mod persist;
pub mod threshold;


pub use overlay::apply_overrides;
pub use persist::{persist_artifacts, plans_to_json, write_artifact, ArtifactPaths};
pub use threshold::{is_valid_threshold, resolve_threshold};

/// Everything a successful run produced.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    /// Identifier the node was requested by
    pub node: String,
    /// Threshold the planner was called with
    pub threshold: f64,
    /// Directory holding the artifacts
    pub output_dir: PathBuf,
    /// Paths of the two artifacts
    pub artifacts: ArtifactPaths,
    /// Plans as written, overrides applied
    pub plans: Vec<NodePlan>,
}

impl PlanOutcome {
    /// Total number of steps across all plans.
    pub fn step_count(&self) -> usize {
        self.plans.iter().map(|p| p.volume_set_plans.len()).sum()
    }
}

/// Options after validation and defaulting.
#[derive(Debug, Clone)]
struct ResolvedOptions<'a> {
    node: &'a str,
    threshold: f64,
    overrides: PlanOverrides,
    output_dir: Option<&'a Path>,
    verbose: bool,
}

/// Creates a balancing plan for a single node and writes it out.
pub struct PlanCommand<C, P, S> {
    settings: Settings,
    connector: C,
    planner: P,
    sink: S,
}

impl<C, P, S> PlanCommand<C, P, S>
where
    C: ClusterConnector,
    P: PlanComputer,
    S: ArtifactSink,
{
    pub fn new(settings: Settings, connector: C, planner: P, sink: S) -> Self {
        Self {
            settings,
            connector,
            planner,
            sink,
        }
    }

    /// Runs the command. Progress lines and, in verbose mode, the plan
    /// report go to `console`; failures writing to it are logged and
    /// otherwise ignored.
    ///
    /// # Errors
    ///
    /// * `DiskBalancerError::InvalidInput` - Missing node or malformed number
    /// * `DiskBalancerError::NodeNotFound` - The node is not in the cluster
    /// * `DiskBalancerError::Planning` - The planner failed
    /// * `DiskBalancerError::FileSystem` / `Serialization` - An artifact
    ///   could not be written; the before snapshot may already exist
    pub async fn execute<W: Write>(
        &self,
        options: &PlanOptions,
        console: &mut W,
    ) -> Result<PlanOutcome> {
        debug!("Processing plan command");
        let resolved = self.resolve_options(options)?;

        let mut cluster = self.connector.load().await?;
        debug!(
            "Loaded {} nodes from {}",
            cluster.nodes.len(),
            self.connector.location()
        );
        let node = resolve_node(&cluster, resolved.node)?;
        debug!("Planning for node {} ({})", node.uuid, resolved.node);
        cluster.mark_for_processing(node);

        let mut plans = self.planner.compute_plan(&cluster, resolved.threshold).await?;
        apply_overrides(&mut plans, resolved.overrides);
        debug!(
            "Planner returned {} steps in {} plans",
            plans.iter().map(|p| p.volume_set_plans.len()).sum::<usize>(),
            plans.len()
        );

        let output_dir = self.output_dir(resolved.output_dir)?;
        let artifacts = ArtifactPaths::for_node(&output_dir, resolved.node);
        info!("Writing plan to : {}", output_dir.display());
        emit(
            console,
            format_args!("Writing plan to : {}\n", output_dir.display()),
        );
        persist_artifacts(&self.sink, &artifacts, &cluster.to_json()?, &plans)?;

        if resolved.verbose {
            emit(console, format_args!("{}", PlanReport(&plans)));
        }

        Ok(PlanOutcome {
            node: resolved.node.to_string(),
            threshold: resolved.threshold,
            output_dir,
            artifacts,
            plans,
        })
    }

    fn resolve_options<'a>(&self, options: &'a PlanOptions) -> Result<ResolvedOptions<'a>> {
        let node = options.require_node()?;
        let overrides = options.overrides()?;
        let threshold = resolve_threshold(
            options.threshold.as_deref(),
            self.settings.plan.threshold_percent,
        )?;
        debug!("Using threshold {threshold}%");

        Ok(ResolvedOptions {
            node,
            threshold,
            overrides,
            output_dir: options.output_dir.as_deref(),
            verbose: options.verbose,
        })
    }

    /// The requested directory, or a fresh timestamped one under the
    /// configured output root.
    fn output_dir(&self, requested: Option<&Path>) -> Result<PathBuf> {
        match requested {
            Some(dir) => Ok(dir.to_path_buf()),
            None => self.settings.default_output_dir(Timestamp::now()),
        }
    }
}

/// Finds the node named by `identifier`.
pub fn resolve_node(cluster: &ClusterSnapshot, identifier: &str) -> Result<DataNode> {
    cluster
        .find_node(identifier)
        .cloned()
        .ok_or_else(|| DiskBalancerError::NodeNotFound {
            identifier: identifier.to_string(),
        })
}

fn emit<W: Write>(console: &mut W, args: std::fmt::Arguments<'_>) {
    if let Err(e) = console.write_fmt(args).and_then(|()| console.flush()) {
        warn!("Failed to write to console: {e}");
    }
}
