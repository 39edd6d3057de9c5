//! The [`Planner`] seam and its request and error types.

use std::collections::HashSet;

use thiserror::Error;

use crate::{
    Delivery, DeliveryId, DepotId, DispatchPlan, DistributionCenter, GraphError, PathError,
    VehicleId,
};

/// Input to a planning run.
///
/// Depots arrive idle: empty pending queues and unloaded vehicles. Every
/// delivery starts in the unassigned pool.
///
/// # Examples
/// ```rust
/// use waybill_core::{Delivery, DistributionCenter, PlanRequest, Vehicle, lat_lon};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = PlanRequest {
///     depots: vec![
///         DistributionCenter::new(1, "Hub", lat_lon(0.0, 0.0))?
///             .with_vehicle(Vehicle::new(1, 20.0, 10.0, 8.0)?),
///     ],
///     deliveries: vec![Delivery::new(1, lat_lon(0.0, 3.0), "Stop", 10.0, 5)?],
/// };
/// request.validate()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Depots with their fleets.
    pub depots: Vec<DistributionCenter>,
    /// The unassigned pool.
    pub deliveries: Vec<Delivery>,
}

impl PlanRequest {
    /// Check structural preconditions, naming the first offending depot,
    /// vehicle or delivery.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.depots.is_empty() {
            return Err(PlanError::NoDepots);
        }
        let mut depot_ids = HashSet::new();
        let mut vehicle_ids = HashSet::new();
        for depot in &self.depots {
            if !depot_ids.insert(depot.id()) {
                return Err(PlanError::DuplicateDepot { id: depot.id() });
            }
            if depot.vehicles().is_empty() {
                return Err(PlanError::NoVehicles {
                    depot: depot.id(),
                    name: depot.name().to_owned(),
                });
            }
            if let Some(delivery) = depot.pending().first() {
                return Err(PlanError::PendingAtDepot {
                    depot: depot.id(),
                    delivery: delivery.id(),
                });
            }
            for vehicle in depot.vehicles() {
                if !vehicle_ids.insert(vehicle.id()) {
                    return Err(PlanError::DuplicateVehicle { id: vehicle.id() });
                }
                if vehicle.stop_count() > 0 {
                    return Err(PlanError::VehicleNotEmpty { id: vehicle.id() });
                }
            }
        }
        let mut delivery_ids = HashSet::new();
        for delivery in &self.deliveries {
            if !delivery_ids.insert(delivery.id()) {
                return Err(PlanError::DuplicateDelivery { id: delivery.id() });
            }
        }
        Ok(())
    }
}

/// Errors returned by [`Planner::plan`].
///
/// Infeasible deliveries are not errors: they are reported in the
/// [`DispatchPlan`]. These variants cover structural problems only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The request has no depots.
    #[error("at least one distribution center is required")]
    NoDepots,
    /// A depot has an empty fleet.
    #[error("distribution center {depot} ({name}) has no vehicles")]
    NoVehicles {
        /// Offending depot.
        depot: DepotId,
        /// Depot name.
        name: String,
    },
    /// Two depots share an id.
    #[error("distribution center id {id} is used more than once")]
    DuplicateDepot {
        /// Repeated id.
        id: DepotId,
    },
    /// Two vehicles share an id.
    #[error("vehicle id {id} is used more than once")]
    DuplicateVehicle {
        /// Repeated id.
        id: VehicleId,
    },
    /// Two deliveries share an id.
    #[error("delivery id {id} is used more than once")]
    DuplicateDelivery {
        /// Repeated id.
        id: DeliveryId,
    },
    /// A depot already holds a queued delivery.
    #[error("distribution center {depot} already has delivery {delivery} queued")]
    PendingAtDepot {
        /// Offending depot.
        depot: DepotId,
        /// First queued delivery.
        delivery: DeliveryId,
    },
    /// A vehicle already carries deliveries.
    #[error("vehicle {id} is already loaded")]
    VehicleNotEmpty {
        /// Offending vehicle.
        id: VehicleId,
    },
    /// The distance graph could not be built.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// A shortest path between two plan points failed.
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Assign deliveries to depot fleets and route every loaded vehicle.
///
/// Implementations must leave every delivery either on exactly one vehicle
/// or in exactly one depot's unassigned list.
/// Planners must be `Send + Sync` to operate safely across threads.
pub trait Planner: Send + Sync {
    /// Plan a request, producing per-depot results or a structural error.
    fn plan(&self, request: &PlanRequest) -> Result<DispatchPlan, PlanError>;
}
