//! Verbose plan summary.

use std::fmt;

use crate::models::NodePlan;

const SEPARATOR_WIDTH: usize = 80;

/// Newtype wrapper rendering every step of a set of plans between separator
/// lines.
///
/// # Examples
///
/// ```rust
/// use diskbalancer_core::{
///     display::PlanReport,
///     models::{DiskVolume, NodePlan, Step, StorageType},
/// };
///
/// let plan = NodePlan {
///     node_name: "node-7".to_string(),
///     volume_set_plans: vec![Step {
///         source_volume: DiskVolume {
///             path: "/data/disk0".to_string(),
///             ..Default::default()
///         },
///         destination_volume: DiskVolume {
///             path: "/data/disk1".to_string(),
///             storage_type: StorageType::Ssd,
///             ..Default::default()
///         },
///         bytes_to_move: 2048,
///         ..Default::default()
///     }],
///     ..Default::default()
/// };
///
/// let plans = [plan];
/// let output = PlanReport(&plans).to_string();
/// assert!(output.contains("/data/disk0\t/data/disk1\t2.00 KB\tSSD"));
/// ```
pub struct PlanReport<'a>(pub &'a [NodePlan]);

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        writeln!(f, "\nPlan :\n")?;
        writeln!(f, "{separator}")?;
        writeln!(f, "Source Disk\t\t Dest.Disk\t\t Move Size\t Type\n ")?;
        for plan in self.0 {
            write!(f, "{plan}")?;
        }
        writeln!(f, "{separator}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiskVolume, Step, StorageType};

    fn step(src: &str, dst: &str, bytes: u64, ty: StorageType) -> Step {
        Step {
            source_volume: DiskVolume {
                path: src.to_string(),
                ..Default::default()
            },
            destination_volume: DiskVolume {
                path: dst.to_string(),
                storage_type: ty,
                ..Default::default()
            },
            bytes_to_move: bytes,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_lists_every_step() {
        let plans = vec![
            NodePlan {
                volume_set_plans: vec![
                    step("/d0", "/d1", 100, StorageType::Disk),
                    step("/d2", "/d3", 1024 * 1024, StorageType::Ssd),
                ],
                ..Default::default()
            },
            NodePlan {
                volume_set_plans: vec![step("/d4", "/d5", 0, StorageType::Archive)],
                ..Default::default()
            },
        ];
        let output = PlanReport(&plans).to_string();
        assert!(output.contains("/d0\t/d1\t100 B\tDISK\n"));
        assert!(output.contains("/d2\t/d3\t1.00 MB\tSSD\n"));
        assert!(output.contains("/d4\t/d5\t0 B\tARCHIVE\n"));
    }

    #[test]
    fn test_report_bounded_by_separators() {
        let output = PlanReport(&[]).to_string();
        let separator = "=".repeat(80);
        assert_eq!(output.matches(&separator).count(), 2);
        assert!(output.starts_with("\nPlan :\n"));
        assert!(output.trim_end().ends_with(&separator));
    }
}
