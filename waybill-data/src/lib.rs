//! Data loading for the Waybill dispatch engine.
//!
//! Responsibilities:
//! - Read delivery records from CSV, skipping and reporting malformed rows.
//! - Decode fleet scenarios (depots, vehicles, inline deliveries) from JSON.
//!
//! Boundaries:
//! - Do not encode planning rules (live in `waybill-core` and
//!   `waybill-planner`).
//! - Validation goes through the core constructors; this crate only parses.
//!
//! Files are opened through `cap-std` with ambient authority and UTF-8
//! (`camino`) paths.

#![forbid(unsafe_code)]

pub mod deliveries;
pub mod fs;
pub mod scenario;

pub use deliveries::{
    IngestError, IngestReport, RowError, SkippedRow, load_deliveries, load_deliveries_excluding,
    read_deliveries, read_deliveries_excluding,
};
pub use scenario::{ScenarioError, load_scenario, parse_scenario};
