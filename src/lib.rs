//! Facade crate for the Waybill dispatch engine.
//!
//! This crate re-exports the core domain types and exposes the greedy
//! planner behind the `planner-greedy` feature flag.
//!
//! ```
//! # #[cfg(feature = "planner-greedy")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use waybill::{
//!     Delivery, DistributionCenter, GreedyPlanner, PlanRequest, Planner, Vehicle, lat_lon,
//! };
//!
//! let depot = DistributionCenter::new(1, "Recife", lat_lon(-8.05428, -34.8813))?
//!     .with_vehicle(Vehicle::new(1, 1000.0, 60.0, 8.0)?);
//! let request = PlanRequest {
//!     depots: vec![depot],
//!     deliveries: vec![Delivery::new(1, lat_lon(-8.0089, -34.8553), "Olinda", 120.0, 2)?],
//! };
//! let plan = GreedyPlanner::new().plan(&request)?;
//! assert_eq!(plan.assigned_count(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "planner-greedy"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use waybill_core::{
    AssignmentEvent, DeadlineUnit, Delivery, DeliveryError, DepotError, DepotId, DepotPlan,
    DispatchPlan, DistanceGraph, DistanceMetric, DistributionCenter, GraphError, Metric, Path,
    PathError, PlanError, PlanRequest, Planner, Route, UnassignedCause, UnassignedDelivery,
    Vehicle, VehicleError, VehicleId, lat_lon, shortest_path,
};

#[cfg(feature = "planner-greedy")]
pub use waybill_planner::{GreedyPlanner, PlannerConfig};
