//! Command handlers.
//!
//! Turns parsed arguments into the core types, runs the command and leaves
//! all output formatting to the core.

use std::io;

use anyhow::{Context, Result};
use diskbalancer_core::{
    CommandPlanner, JsonFileConnector, LocalFileSink, PlanCommand, PlanOptions, Settings,
};
use log::info;

use crate::args::PlanArgs;

pub struct Cli {
    settings: Settings,
}

impl Cli {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn handle_plan_command(self, args: &PlanArgs) -> Result<()> {
        let connector = JsonFileConnector::from_uri(&args.cluster)
            .with_context(|| format!("Invalid cluster location {}", args.cluster))?;
        let planner =
            CommandPlanner::new(&args.planner).with_args(args.planner_args.iter().cloned());
        let options = PlanOptions::from(args);

        let command = PlanCommand::new(self.settings, connector, planner, LocalFileSink);
        let outcome = command.execute(&options, &mut io::stdout()).await?;

        info!(
            "Plan for {} written to {} ({} steps)",
            outcome.node,
            outcome.output_dir.display(),
            outcome.step_count()
        );
        Ok(())
    }
}
