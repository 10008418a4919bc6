//! Plan artifact persistence.
//!
//! The before snapshot and the plan are two independent writes. If the plan
//! write fails the snapshot stays on disk; nothing is rolled back.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    error::{DiskBalancerError, Result},
    models::NodePlan,
    sink::ArtifactSink,
};

const BEFORE_PREFIX: &str = "before";
const PLAN_PREFIX: &str = "plan";
const ARTIFACT_EXTENSION: &str = "json";

/// Locations of the two artifacts of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Cluster snapshot taken before planning
    pub before: PathBuf,
    /// Serialized node plans
    pub plan: PathBuf,
}

impl ArtifactPaths {
    /// Derives `before.<node>.json` and `plan.<node>.json` under
    /// `output_dir`.
    pub fn for_node(output_dir: &Path, node: &str) -> Self {
        let name = |prefix: &str| format!("{prefix}.{node}.{ARTIFACT_EXTENSION}");
        Self {
            before: output_dir.join(name(BEFORE_PREFIX)),
            plan: output_dir.join(name(PLAN_PREFIX)),
        }
    }
}

/// Writes `bytes` to `path` through a handle scoped to this call.
pub fn write_artifact<S: ArtifactSink>(sink: &S, path: &Path, bytes: &[u8]) -> Result<()> {
    let mut handle = sink.open_for_write(path)?;
    handle
        .write_all(bytes)
        .and_then(|()| handle.flush())
        .map_err(|e| DiskBalancerError::file_system(path, e))?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Serializes plans the way they are stored in the plan artifact.
pub fn plans_to_json(plans: &[NodePlan]) -> Result<String> {
    Ok(serde_json::to_string_pretty(plans)?)
}

/// Writes the before snapshot, then the plan.
pub fn persist_artifacts<S: ArtifactSink>(
    sink: &S,
    paths: &ArtifactPaths,
    snapshot_json: &str,
    plans: &[NodePlan],
) -> Result<()> {
    write_artifact(sink, &paths.before, snapshot_json.as_bytes())?;
    write_artifact(sink, &paths.plan, plans_to_json(plans)?.as_bytes())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::{models::Step, sink::LocalFileSink};

    #[test]
    fn test_paths_for_node() {
        let paths = ArtifactPaths::for_node(Path::new("/out"), "node-7");
        assert_eq!(paths.before, PathBuf::from("/out/before.node-7.json"));
        assert_eq!(paths.plan, PathBuf::from("/out/plan.node-7.json"));
    }

    #[test]
    fn test_paths_keep_identifier_verbatim() {
        let paths = ArtifactPaths::for_node(Path::new("out"), "10.0.0.7");
        assert_eq!(paths.plan, PathBuf::from("out/plan.10.0.0.7.json"));
    }

    #[test]
    fn test_persist_writes_both_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArtifactPaths::for_node(temp_dir.path(), "node-7");
        let plans = vec![NodePlan {
            node_name: "node-7".to_string(),
            volume_set_plans: vec![Step::default()],
            ..Default::default()
        }];

        persist_artifacts(&LocalFileSink, &paths, "{\"nodes\":[]}", &plans).unwrap();

        assert_eq!(fs::read_to_string(&paths.before).unwrap(), "{\"nodes\":[]}");
        let written: Vec<NodePlan> =
            serde_json::from_str(&fs::read_to_string(&paths.plan).unwrap()).unwrap();
        assert_eq!(written, plans);
    }

    #[test]
    fn test_plan_write_failure_keeps_before_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArtifactPaths::for_node(temp_dir.path(), "node-7");
        fs::create_dir_all(&paths.plan).unwrap();

        let err = persist_artifacts(&LocalFileSink, &paths, "{}", &[]).unwrap_err();

        assert!(err.is_persistence());
        assert!(paths.before.is_file());
        assert!(paths.plan.is_dir());
    }
}
