//! Error types emitted by the Waybill CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use waybill_core::PlanError;
use waybill_data::{IngestError, ScenarioError};

/// Errors emitted by the Waybill CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The fleet scenario could not be loaded.
    #[error("failed to load scenario from {path:?}: {source}")]
    LoadScenario {
        path: Utf8PathBuf,
        #[source]
        source: ScenarioError,
    },
    /// The delivery CSV could not be read.
    #[error("failed to read deliveries from {path:?}: {source}")]
    LoadDeliveries {
        path: Utf8PathBuf,
        #[source]
        source: IngestError,
    },
    /// The planner rejected the request.
    #[error("planning failed: {source}")]
    Plan { source: PlanError },
    /// Serialising the dispatch report failed.
    #[error("failed to serialise dispatch report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the dispatch report failed.
    #[error("failed to write dispatch report: {0}")]
    WriteReport(#[source] std::io::Error),
}
