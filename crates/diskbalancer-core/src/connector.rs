//! Sources of cluster snapshots.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;

use crate::{
    error::{DiskBalancerError, Result},
    models::ClusterSnapshot,
};

const FILE_SCHEME: &str = "file://";

/// Loads the cluster a plan is computed against.
#[async_trait]
pub trait ClusterConnector: Send + Sync {
    /// Reads a fresh snapshot of the cluster.
    async fn load(&self) -> Result<ClusterSnapshot>;

    /// Human readable location of the cluster, used in log lines.
    fn location(&self) -> String;
}

/// Connector reading a JSON snapshot from the local file system.
#[derive(Debug, Clone)]
pub struct JsonFileConnector {
    path: PathBuf,
}

impl JsonFileConnector {
    /// Creates a connector for a plain path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a connector from a `file://` URI or a plain path.
    ///
    /// # Errors
    ///
    /// Returns `DiskBalancerError::Configuration` for any other URI scheme.
    pub fn from_uri(uri: &str) -> Result<Self> {
        if let Some(path) = uri.strip_prefix(FILE_SCHEME) {
            return Ok(Self::new(path));
        }
        match uri.split_once("://") {
            Some((scheme, _)) => Err(DiskBalancerError::Configuration {
                message: format!("Unsupported cluster URI scheme '{scheme}' in {uri}"),
            }),
            None => Ok(Self::new(uri)),
        }
    }

    /// Path the snapshot is read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ClusterConnector for JsonFileConnector {
    async fn load(&self) -> Result<ClusterSnapshot> {
        debug!("Reading cluster info from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DiskBalancerError::file_system(&self.path, e))?;
        ClusterSnapshot::from_json(&raw)
    }

    fn location(&self) -> String {
        format!("{FILE_SCHEME}{}", self.path.display())
    }
}
