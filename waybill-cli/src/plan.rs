//! Plan command implementation for the Waybill CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use waybill_core::{DeadlineUnit, Delivery, DispatchPlan, DistanceMetric, PlanRequest, Planner};
use waybill_data::{SkippedRow, load_deliveries_excluding, load_scenario};
use waybill_planner::{GreedyPlanner, PlannerConfig};

use crate::{
    ARG_PLAN_DEADLINE_UNIT, ARG_PLAN_DELIVERIES, ARG_PLAN_ENFORCE_DEADLINES, ARG_PLAN_METRIC,
    ARG_PLAN_SCENARIO, CliError, ENV_PLAN_SCENARIO,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Assign every delivery to its nearest depot, load each depot's \
                 fleet in deadline order and route every loaded vehicle. The \
                 fleet comes from a JSON scenario; extra deliveries may be \
                 read from a CSV file.",
    about = "Plan a multi-depot dispatch"
)]
#[ortho_config(prefix = "WAYBILL")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file describing depots, vehicles and deliveries.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) scenario_path: Option<Utf8PathBuf>,
    /// CSV file with `id,lat,lon,name,weight,deadline` rows.
    #[arg(long = ARG_PLAN_DELIVERIES, value_name = "path")]
    #[serde(default)]
    pub(crate) deliveries: Option<Utf8PathBuf>,
    /// Distance function: `planar` or `haversine` (default).
    #[arg(long = ARG_PLAN_METRIC, value_name = "metric", value_parser = parse_metric)]
    #[ortho_config(skip_cli)]
    #[serde(default)]
    pub(crate) metric: Option<DistanceMetric>,
    /// Deadline unit: `days` (default) or `hours`.
    #[arg(long = ARG_PLAN_DEADLINE_UNIT, value_name = "unit", value_parser = parse_deadline_unit)]
    #[ortho_config(skip_cli)]
    #[serde(default)]
    pub(crate) deadline_unit: Option<DeadlineUnit>,
    /// Reject deliveries whose round trip misses the deadline (default true).
    #[arg(long = ARG_PLAN_ENFORCE_DEADLINES, value_name = "bool")]
    #[serde(default)]
    pub(crate) enforce_deadlines: Option<bool>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

fn parse_metric(value: &str) -> Result<DistanceMetric, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "planar" => Ok(DistanceMetric::Planar),
        "haversine" => Ok(DistanceMetric::Haversine),
        other => Err(format!(
            "unknown metric {other:?}; expected planar or haversine"
        )),
    }
}

fn parse_deadline_unit(value: &str) -> Result<DeadlineUnit, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "days" => Ok(DeadlineUnit::Days),
        "hours" => Ok(DeadlineUnit::Hours),
        other => Err(format!(
            "unknown deadline unit {other:?}; expected days or hours"
        )),
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON scenario.
    pub(crate) scenario_path: Utf8PathBuf,
    /// Optional CSV of extra deliveries.
    pub(crate) deliveries: Option<Utf8PathBuf>,
    /// Planner tunables after defaults are applied.
    pub(crate) planner: PlannerConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.scenario_path, ARG_PLAN_SCENARIO)?;
        if let Some(deliveries) = &self.deliveries {
            Self::require_existing(deliveries, ARG_PLAN_DELIVERIES)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match waybill_data::fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let scenario_path = args.scenario_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_SCENARIO,
            env: ENV_PLAN_SCENARIO,
        })?;
        let defaults = PlannerConfig::default();
        let planner = PlannerConfig {
            metric: args.metric.unwrap_or(defaults.metric),
            deadline_unit: args.deadline_unit.unwrap_or(defaults.deadline_unit),
            enforce_deadlines: args.enforce_deadlines.unwrap_or(defaults.enforce_deadlines),
        };
        Ok(Self {
            scenario_path,
            deliveries: args.deliveries,
            planner,
        })
    }
}

/// Row left out of the CSV input, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SkippedRowReport {
    pub(crate) line: u64,
    pub(crate) reason: String,
}

impl From<&SkippedRow> for SkippedRowReport {
    fn from(row: &SkippedRow) -> Self {
        Self {
            line: row.line,
            reason: row.reason.to_string(),
        }
    }
}

/// JSON document printed by `waybill plan`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PlanReport {
    pub(crate) plan: DispatchPlan,
    pub(crate) skipped_rows: Vec<SkippedRowReport>,
}

/// Builds a planner for the current plan invocation.
pub(super) trait PlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Box<dyn Planner>;
}

pub(super) struct DefaultPlannerBuilder;

impl PlannerBuilder for DefaultPlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Box<dyn Planner> {
        Box::new(GreedyPlanner::with_config(config.planner))
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &DefaultPlannerBuilder, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let report = execute_plan(args, builder)?;
    write_plan_report(writer, &report)
}

fn execute_plan(args: PlanArgs, builder: &dyn PlannerBuilder) -> Result<PlanReport, CliError> {
    let config = resolve_plan_config(args)?;
    let (request, skipped) = load_plan_request(&config)?;
    let planner = builder.build(&config);
    let plan = planner
        .plan(&request)
        .map_err(|source| CliError::Plan { source })?;
    Ok(PlanReport {
        plan,
        skipped_rows: skipped.iter().map(SkippedRowReport::from).collect(),
    })
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads the scenario and appends any CSV deliveries after its inline ones.
///
/// CSV rows reusing an inline delivery id are skipped as duplicates and the
/// inline delivery is kept.
pub(super) fn load_plan_request(
    config: &PlanConfig,
) -> Result<(PlanRequest, Vec<SkippedRow>), CliError> {
    let mut request =
        load_scenario(&config.scenario_path).map_err(|source| CliError::LoadScenario {
            path: config.scenario_path.clone(),
            source,
        })?;
    let Some(path) = &config.deliveries else {
        return Ok((request, Vec::new()));
    };
    let inline_ids = request.deliveries.iter().map(Delivery::id);
    let report =
        load_deliveries_excluding(path, inline_ids).map_err(|source| CliError::LoadDeliveries {
            path: path.clone(),
            source,
        })?;
    request.deliveries.extend(report.deliveries);
    Ok((request, report.skipped))
}

fn write_plan_report(writer: &mut dyn Write, report: &PlanReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
