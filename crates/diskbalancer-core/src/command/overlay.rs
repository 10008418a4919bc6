//! Runtime limits written over planner output.

use crate::{models::NodePlan, params::PlanOverrides};

/// Writes positive overrides into every step of every plan.
///
/// Zero overrides leave the planner's values alone.
pub fn apply_overrides(plans: &mut [NodePlan], overrides: PlanOverrides) {
    for step in plans.iter_mut().flat_map(NodePlan::steps_mut) {
        if overrides.bandwidth > 0 {
            step.bandwidth = overrides.bandwidth;
        }
        if overrides.max_disk_errors > 0 {
            step.max_disk_errors = overrides.max_disk_errors;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Step;

    fn plans() -> Vec<NodePlan> {
        let step = |bandwidth, max_disk_errors| Step {
            bandwidth,
            max_disk_errors,
            bytes_to_move: 1024,
            ..Default::default()
        };
        vec![
            NodePlan {
                volume_set_plans: vec![step(0, 0), step(10, 5)],
                ..Default::default()
            },
            NodePlan {
                volume_set_plans: vec![step(20, 1)],
                ..Default::default()
            },
        ]
    }

    fn all_steps(plans: &[NodePlan]) -> impl Iterator<Item = &Step> {
        plans.iter().flat_map(NodePlan::steps)
    }

    #[test]
    fn test_bandwidth_override_applies_to_every_step() {
        let mut plans = plans();
        apply_overrides(
            &mut plans,
            PlanOverrides {
                bandwidth: 50,
                max_disk_errors: 0,
            },
        );
        assert!(all_steps(&plans).all(|s| s.bandwidth == 50));
        let errors: Vec<u64> = all_steps(&plans).map(|s| s.max_disk_errors).collect();
        assert_eq!(errors, vec![0, 5, 1]);
    }

    #[test]
    fn test_max_error_override_applies_to_every_step() {
        let mut plans = plans();
        apply_overrides(
            &mut plans,
            PlanOverrides {
                bandwidth: 0,
                max_disk_errors: 9,
            },
        );
        assert!(all_steps(&plans).all(|s| s.max_disk_errors == 9));
        let bandwidths: Vec<u64> = all_steps(&plans).map(|s| s.bandwidth).collect();
        assert_eq!(bandwidths, vec![0, 10, 20]);
    }

    #[test]
    fn test_zero_overrides_leave_plans_untouched() {
        let mut plans = plans();
        apply_overrides(&mut plans, PlanOverrides::default());
        assert_eq!(plans, self::plans());
    }

    #[test]
    fn test_empty_plans() {
        let mut plans: Vec<NodePlan> = Vec::new();
        apply_overrides(
            &mut plans,
            PlanOverrides {
                bandwidth: 1,
                max_disk_errors: 1,
            },
        );
        assert!(plans.is_empty());
    }
}
