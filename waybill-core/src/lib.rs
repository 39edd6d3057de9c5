//! Core domain types for the Waybill dispatch engine.
//!
//! The crate models distribution centres, their fleets and the deliveries
//! they serve, together with the distance primitives used to plan routes:
//! a pluggable [`Metric`], the complete [`DistanceGraph`] over every depot and
//! destination, and a Dijkstra [`shortest_path`] search over that graph.
//!
//! Constructors validate their inputs and return `Result` so that structural
//! problems (a vehicle without capacity, a delivery without a destination
//! name) surface before any planning starts.
//!
//! Coordinates are `geo::Coord<f64>` values with `x = longitude` and
//! `y = latitude`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod delivery;
pub mod depot;
pub mod distance;
pub mod graph;
pub mod plan;
pub mod planner;
pub mod point;
pub mod route;
pub mod vehicle;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use delivery::{DeadlineUnit, Delivery, DeliveryError, DeliveryId};
pub use depot::{DepotError, DepotId, DistributionCenter};
pub use distance::{DistanceMetric, EARTH_RADIUS_KM, Haversine, Metric, Planar};
pub use graph::{
    DistanceGraph, GraphError, GraphNode, Path, PathError, Waypoint, shortest_path,
};
pub use plan::{
    AssignmentEvent, DepotPlan, DispatchPlan, RejectionReason, UnassignedCause,
    UnassignedDelivery,
};
pub use planner::{PlanError, PlanRequest, Planner};
pub use point::{PointKey, lat_lon};
pub use route::{Leg, LegTarget, Route, RouteBuilder};
pub use vehicle::{OverCapacity, Vehicle, VehicleError, VehicleId};
