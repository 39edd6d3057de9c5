//! Command-line interface for the Waybill dispatch engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;

const ARG_PLAN_SCENARIO: &str = "scenario";
const ARG_PLAN_DELIVERIES: &str = "deliveries";
const ARG_PLAN_METRIC: &str = "metric";
const ARG_PLAN_DEADLINE_UNIT: &str = "deadline-unit";
const ARG_PLAN_ENFORCE_DEADLINES: &str = "enforce-deadlines";
const ENV_PLAN_SCENARIO: &str = "WAYBILL_CMDS_PLAN_SCENARIO_PATH";

/// Run the Waybill CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waybill",
    about = "Assign deliveries to depots and vehicles and route each fleet",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a dispatch for a fleet scenario.
    Plan(plan::PlanArgs),
}

#[cfg(test)]
mod tests;
