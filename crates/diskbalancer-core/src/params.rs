//! Parameter structures for the plan command.
//!
//! [`PlanOptions`] carries the options exactly as the user typed them. Keeping
//! the raw strings here, instead of letting each interface parse them, means
//! every front end reports malformed numbers the same way: as
//! [`DiskBalancerError::InvalidInput`] naming the offending option.
//!
//! [`parse_field`] is the generic piece. It is what the orchestrator uses to
//! turn an optional raw value into a typed one.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{DiskBalancerError, Result};

/// Option name of the target node.
pub const NODE: &str = "node";
/// Option name of the output directory.
pub const OUTFILE: &str = "out";
/// Option name of the bandwidth override.
pub const BANDWIDTH: &str = "bandwidth";
/// Option name of the max-error override.
pub const MAXERROR: &str = "maxerror";
/// Option name of the threshold override.
pub const THRESHOLD: &str = "thresholdPercentage";
/// Option name of the verbose flag.
pub const VERBOSE: &str = "verbose";

/// Raw options for creating a plan.
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// IP address, host name or UUID of the node to plan for (required)
    pub node: Option<String>,
    /// Directory the artifacts are written to
    pub output_dir: Option<PathBuf>,
    /// Copy bandwidth cap in MB/s
    pub bandwidth: Option<String>,
    /// Disk errors tolerated per move
    pub max_error: Option<String>,
    /// Imbalance tolerance in percent
    pub threshold: Option<String>,
    /// Print a summary of the plan
    pub verbose: bool,
}

/// Runtime limits written over every step of a plan.
///
/// A zero value means "keep what the planner chose".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanOverrides {
    pub bandwidth: u64,
    pub max_disk_errors: u64,
}

impl PlanOptions {
    /// Returns the node identifier, failing if it was not supplied.
    pub fn require_node(&self) -> Result<&str> {
        match self.node.as_deref().map(str::trim) {
            Some(node) if !node.is_empty() => Ok(node),
            _ => Err(DiskBalancerError::invalid_input(NODE)
                .with_reason("A node name is required to create a plan.")),
        }
    }

    /// Parses the bandwidth and max-error overrides.
    ///
    /// # Errors
    ///
    /// * `DiskBalancerError::InvalidInput` - When either value is not a
    ///   non-negative integer
    pub fn overrides(&self) -> Result<PlanOverrides> {
        Ok(PlanOverrides {
            bandwidth: parse_field(BANDWIDTH, self.bandwidth.as_deref())?.unwrap_or(0),
            max_disk_errors: parse_field(MAXERROR, self.max_error.as_deref())?.unwrap_or(0),
        })
    }
}

/// Parses an optional raw option value into `T`.
///
/// Absent and blank values yield `Ok(None)`. Anything else must parse.
///
/// # Examples
///
/// ```rust
/// use diskbalancer_core::params::parse_field;
///
/// assert_eq!(parse_field::<u64>("bandwidth", Some("50")).unwrap(), Some(50));
/// assert_eq!(parse_field::<u64>("bandwidth", None).unwrap(), None);
/// assert!(parse_field::<u64>("bandwidth", Some("fast")).is_err());
/// ```
pub fn parse_field<T>(field: &str, raw: Option<&str>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|e| {
            DiskBalancerError::invalid_input(field).with_reason(format!("'{value}': {e}"))
        }),
    }
}
