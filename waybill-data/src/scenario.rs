//! JSON fleet scenarios.
//!
//! A scenario lists depots with their vehicles and, optionally, inline
//! deliveries:
//!
//! ```json
//! {
//!   "depots": [
//!     {
//!       "id": 1, "name": "Recife", "lat": -8.05428, "lon": -34.8813,
//!       "vehicles": [
//!         { "id": 1, "capacity": 1000, "average_speed": 60, "max_hours_per_day": 8 }
//!       ]
//!     }
//!   ],
//!   "deliveries": [
//!     { "id": 1, "name": "Olinda", "lat": -8.0089, "lon": -34.8553, "weight": 120, "deadline": 2 }
//!   ]
//! }
//! ```
//!
//! Records are converted through the validating constructors, so the first
//! invalid depot, vehicle or delivery fails the whole load.

use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use serde::Deserialize;
use thiserror::Error;
use waybill_core::{
    Delivery, DeliveryError, DepotError, DistributionCenter, PlanRequest, Vehicle, VehicleError,
    lat_lon,
};

use crate::fs::open_utf8_file;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    depots: Vec<DepotRecord>,
    #[serde(default)]
    deliveries: Vec<DeliveryRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DepotRecord {
    id: u64,
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    vehicles: Vec<VehicleRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VehicleRecord {
    id: u64,
    capacity: f64,
    average_speed: f64,
    max_hours_per_day: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeliveryRecord {
    id: u64,
    name: String,
    lat: f64,
    lon: f64,
    weight: f64,
    deadline: u32,
}

/// Errors raised while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The file could not be opened.
    #[error("failed to open scenario at {path}")]
    Open {
        /// Requested path.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not a valid scenario.
    #[error("failed to parse scenario JSON")]
    Parse(#[from] serde_json::Error),
    /// A depot record failed validation.
    #[error(transparent)]
    Depot(#[from] DepotError),
    /// A vehicle record failed validation.
    #[error(transparent)]
    Vehicle(#[from] VehicleError),
    /// An inline delivery failed validation.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl DepotRecord {
    fn into_depot(self) -> Result<DistributionCenter, ScenarioError> {
        let mut depot = DistributionCenter::new(self.id, self.name, lat_lon(self.lat, self.lon))?;
        for record in self.vehicles {
            depot.add_vehicle(Vehicle::new(
                record.id,
                record.capacity,
                record.average_speed,
                record.max_hours_per_day,
            )?);
        }
        Ok(depot)
    }
}

impl DeliveryRecord {
    fn into_delivery(self) -> Result<Delivery, DeliveryError> {
        Delivery::new(
            self.id,
            lat_lon(self.lat, self.lon),
            self.name,
            self.weight,
            self.deadline,
        )
    }
}

/// Parse a scenario from any JSON stream into a plan request.
///
/// Structural checks such as duplicate ids are left to
/// [`PlanRequest::validate`].
pub fn parse_scenario<R: Read>(reader: R) -> Result<PlanRequest, ScenarioError> {
    let file: ScenarioFile = serde_json::from_reader(reader)?;
    let depots = file
        .depots
        .into_iter()
        .map(DepotRecord::into_depot)
        .collect::<Result<Vec<_>, _>>()?;
    let deliveries = file
        .deliveries
        .into_iter()
        .map(DeliveryRecord::into_delivery)
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        "Loaded scenario with {} depots and {} inline deliveries",
        depots.len(),
        deliveries.len()
    );
    Ok(PlanRequest { depots, deliveries })
}

/// Load a scenario file.
pub fn load_scenario(path: &Utf8Path) -> Result<PlanRequest, ScenarioError> {
    let file = open_utf8_file(path).map_err(|source| ScenarioError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scenario(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENARIO: &str = r#"{
        "depots": [
            {
                "id": 1, "name": "Recife", "lat": -8.05428, "lon": -34.8813,
                "vehicles": [
                    { "id": 1, "capacity": 1000, "average_speed": 60, "max_hours_per_day": 8 },
                    { "id": 2, "capacity": 500, "average_speed": 50, "max_hours_per_day": 10 }
                ]
            },
            { "id": 2, "name": "Belém", "lat": -1.45502, "lon": -48.5024, "vehicles": [] }
        ],
        "deliveries": [
            { "id": 10, "name": "Olinda", "lat": -8.0089, "lon": -34.8553, "weight": 120, "deadline": 2 }
        ]
    }"#;

    #[rstest]
    fn parses_depots_vehicles_and_deliveries() {
        let request = parse_scenario(SCENARIO.as_bytes()).expect("scenario");
        assert_eq!(request.depots.len(), 2);
        let recife = request.depots.first().expect("first depot");
        assert_eq!(recife.name(), "Recife");
        assert_eq!(recife.location(), lat_lon(-8.05428, -34.8813));
        let speeds: Vec<f64> = recife.vehicles().iter().map(Vehicle::average_speed).collect();
        assert_eq!(speeds, vec![60.0, 50.0]);
        assert_eq!(request.deliveries.len(), 1);
    }

    #[rstest]
    fn deliveries_are_optional() {
        let json = r#"{ "depots": [ { "id": 1, "name": "A", "lat": 0, "lon": 0, "vehicles": [] } ] }"#;
        let request = parse_scenario(json.as_bytes()).expect("scenario");
        assert!(request.deliveries.is_empty());
    }

    #[rstest]
    #[case(r#"{ "depots": [], "extra": 1 }"#)]
    #[case(r#"{ "depots": [ { "id": 1, "name": "A", "lat": "north", "lon": 0 } ] }"#)]
    #[case("not json")]
    fn malformed_documents_fail_to_parse(#[case] json: &str) {
        let err = parse_scenario(json.as_bytes()).expect_err("malformed");
        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[rstest]
    fn invalid_records_surface_their_validation_error() {
        let json = r#"{ "depots": [ { "id": 1, "name": "A", "lat": 0, "lon": 0,
            "vehicles": [ { "id": 4, "capacity": 0, "average_speed": 1, "max_hours_per_day": 1 } ] } ] }"#;
        let err = parse_scenario(json.as_bytes()).expect_err("zero capacity");
        assert!(matches!(
            err,
            ScenarioError::Vehicle(VehicleError::NonPositiveCapacity { id: 4, .. })
        ));
    }

    #[rstest]
    fn loads_from_disk() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(SCENARIO.as_bytes()).expect("write scenario");
        let path = Utf8Path::from_path(file.path()).expect("utf8 path");
        let request = load_scenario(path).expect("load");
        assert_eq!(request.depots.len(), 2);
    }

    #[rstest]
    fn missing_file_reports_its_path() {
        let missing = Utf8Path::new("/definitely/not/here.json");
        let err = load_scenario(missing).expect_err("missing");
        assert!(matches!(err, ScenarioError::Open { ref path, .. } if path == missing));
    }
}
