use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use diskbalancer_core::PlanOptions;

/// Command-line interface of the disk balancer
///
/// Creates plans that move data between the disks of a single storage node
/// until their usage is within a tolerance of each other. Plans are written
/// as JSON next to the cluster snapshot they were computed from.
#[derive(Parser, Debug)]
#[command(version, about, name = "diskbalancer")]
pub struct Args {
    /// Path to the configuration file. Defaults to
    /// $XDG_CONFIG_HOME/diskbalancer/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a balancing plan for a node
    #[command(alias = "p")]
    Plan(PlanArgs),
}

/// Arguments of the `plan` command.
///
/// Numbers are kept as text so the core reports malformed values.
#[derive(ClapArgs, Debug)]
pub struct PlanArgs {
    #[arg(help = "IP address, host name or UUID of the node to plan for")]
    pub node: Option<String>,

    #[arg(
        long,
        value_name = "URI",
        help = "Cluster snapshot to plan against (file:// URI or path)"
    )]
    pub cluster: String,

    #[arg(
        long,
        value_name = "PROGRAM",
        help = "Planner program that turns a cluster request into node plans"
    )]
    pub planner: PathBuf,

    #[arg(
        long = "planner-arg",
        value_name = "ARG",
        allow_hyphen_values = true,
        help = "Argument passed to the planner program, may be repeated"
    )]
    pub planner_args: Vec<String>,

    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Directory the plan is written to. Defaults to a timestamped directory"
    )]
    pub out: Option<PathBuf>,

    #[arg(long, value_name = "MB/S", help = "Maximum copy bandwidth per step")]
    pub bandwidth: Option<String>,

    #[arg(
        long = "max-error",
        visible_alias = "maxerror",
        value_name = "N",
        help = "Disk errors tolerated before a step is abandoned"
    )]
    pub max_error: Option<String>,

    #[arg(
        long,
        visible_alias = "thresholdPercentage",
        value_name = "PCT",
        help = "Percentage of skew tolerated between disks"
    )]
    pub threshold: Option<String>,

    #[arg(short, long, help = "Print the planned moves")]
    pub verbose: bool,
}

impl From<&PlanArgs> for PlanOptions {
    fn from(args: &PlanArgs) -> Self {
        PlanOptions {
            node: args.node.clone(),
            output_dir: args.out.clone(),
            bandwidth: args.bandwidth.clone(),
            max_error: args.max_error.clone(),
            threshold: args.threshold.clone(),
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> PlanArgs {
        let argv = std::iter::once("diskbalancer").chain(args.iter().copied());
        let Args { command, .. } = Args::try_parse_from(argv).unwrap();
        let Commands::Plan(plan) = command;
        plan
    }

    #[test]
    fn test_parse_full_plan_command() {
        let plan = parse(&[
            "plan",
            "node-7",
            "--cluster",
            "file:///tmp/cluster.json",
            "--planner",
            "planner",
            "--planner-arg",
            "--mode=greedy",
            "--out",
            "/out",
            "--bandwidth",
            "50",
            "--max-error",
            "3",
            "--threshold",
            "5",
            "--verbose",
        ]);

        assert_eq!(plan.planner_args, vec!["--mode=greedy"]);
        let options = PlanOptions::from(&plan);
        assert_eq!(options.node.as_deref(), Some("node-7"));
        assert_eq!(options.output_dir, Some(PathBuf::from("/out")));
        assert_eq!(options.bandwidth.as_deref(), Some("50"));
        assert_eq!(options.max_error.as_deref(), Some("3"));
        assert_eq!(options.threshold.as_deref(), Some("5"));
        assert!(options.verbose);
    }

    #[test]
    fn test_node_is_optional_at_parse_time() {
        let plan = parse(&["plan", "--cluster", "c.json", "--planner", "p"]);
        assert!(plan.node.is_none());
        assert!(!plan.verbose);
    }

    #[test]
    fn test_malformed_numbers_pass_through() {
        let plan = parse(&[
            "plan",
            "node-7",
            "--cluster",
            "c.json",
            "--planner",
            "p",
            "--bandwidth",
            "abc",
        ]);
        assert_eq!(PlanOptions::from(&plan).bandwidth.as_deref(), Some("abc"));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let Args { config, .. } = Args::try_parse_from([
            "diskbalancer",
            "plan",
            "node-7",
            "--cluster",
            "c.json",
            "--planner",
            "p",
            "--config",
            "/etc/diskbalancer.toml",
        ])
        .unwrap();
        assert_eq!(config, Some(PathBuf::from("/etc/diskbalancer.toml")));
    }

    #[test]
    fn test_cluster_is_required() {
        let result = Args::try_parse_from(["diskbalancer", "plan", "node-7", "--planner", "p"]);
        assert!(result.is_err());
    }
}
