//! Planning results: per-depot fleets with routes, unassigned deliveries and
//! the ordered log of assignment decisions.

use std::fmt;

use crate::{
    DeadlineUnit, Delivery, DeliveryId, DepotId, DistanceMetric, DistributionCenter, OverCapacity,
    Vehicle, VehicleId,
};

/// Why a delivery was left without a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum UnassignedCause {
    /// No vehicle at the depot had enough remaining capacity.
    CapacityExceeded,
    /// Some vehicle had room, but none could complete the round trip in time.
    DeadlineMissed,
}

impl fmt::Display for UnassignedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CapacityExceeded => "capacity exceeded",
            Self::DeadlineMissed => "deadline missed",
        })
    }
}

/// Why a single vehicle refused a delivery.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum RejectionReason {
    /// Accepting the delivery would exceed the vehicle capacity.
    Capacity {
        /// Vehicle load before the delivery.
        load: f64,
        /// Delivery weight.
        weight: f64,
        /// Vehicle capacity.
        capacity: f64,
    },
    /// The depot round trip takes longer than the deadline allows.
    Deadline {
        /// Round-trip effort in `unit`.
        required: f64,
        /// Delivery deadline in `unit`.
        deadline: u32,
        /// Unit of both values.
        unit: DeadlineUnit,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity {
                load,
                weight,
                capacity,
            } => write!(f, "capacity: {load} + {weight} exceeds {capacity}"),
            Self::Deadline {
                required,
                deadline,
                unit,
            } => write!(f, "deadline: needs {required:.3} {unit:?} but allows {deadline}"),
        }
    }
}

impl From<&OverCapacity> for RejectionReason {
    fn from(refused: &OverCapacity) -> Self {
        Self::Capacity {
            load: refused.load,
            weight: refused.delivery.weight(),
            capacity: refused.capacity,
        }
    }
}

/// A single decision taken during planning, in the order it was taken.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "event", rename_all = "snake_case")
)]
pub enum AssignmentEvent {
    /// Pass 1 queued a delivery at its nearest depot.
    DepotSelected {
        /// Delivery routed to the depot.
        delivery: DeliveryId,
        /// Nearest depot.
        depot: DepotId,
        /// Distance from the depot to the destination.
        distance: f64,
    },
    /// Pass 2 loaded a delivery onto a vehicle.
    VehicleAssigned {
        /// Loaded delivery.
        delivery: DeliveryId,
        /// Depot owning the vehicle.
        depot: DepotId,
        /// Accepting vehicle.
        vehicle: VehicleId,
        /// Round-trip distance used by the feasibility check.
        round_trip: f64,
    },
    /// Pass 2 found a vehicle unable to take a delivery.
    VehicleRejected {
        /// Refused delivery.
        delivery: DeliveryId,
        /// Depot owning the vehicle.
        depot: DepotId,
        /// Refusing vehicle.
        vehicle: VehicleId,
        /// Capacity or deadline violation.
        reason: RejectionReason,
    },
    /// A delivery remained pending after every vehicle at its depot.
    Unassigned {
        /// Stranded delivery.
        delivery: DeliveryId,
        /// Depot the delivery was queued at.
        depot: DepotId,
        /// Dominant cause.
        cause: UnassignedCause,
    },
}

/// A delivery no vehicle could take.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnassignedDelivery {
    /// The delivery, handed back unchanged.
    pub delivery: Delivery,
    /// Why it was not assigned.
    pub cause: UnassignedCause,
}

/// Planning outcome for one depot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DepotPlan {
    /// The depot with its loaded and routed fleet. Its pending queue is empty.
    pub depot: DistributionCenter,
    /// Deliveries left over after every vehicle was considered.
    pub unassigned: Vec<UnassignedDelivery>,
}

impl DepotPlan {
    /// Number of deliveries the depot could not place.
    pub fn unassigned_count(&self) -> usize {
        self.unassigned.len()
    }

    /// Number of deliveries loaded across the fleet.
    pub fn assigned_count(&self) -> usize {
        self.depot.vehicles().iter().map(Vehicle::stop_count).sum()
    }
}

/// Result of [`crate::Planner::plan`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DispatchPlan {
    /// Metric used for every distance in the plan.
    pub metric: DistanceMetric,
    /// Unit applied to delivery deadlines.
    pub deadline_unit: DeadlineUnit,
    /// Outcome per depot, in request order.
    pub depots: Vec<DepotPlan>,
    /// Assignment decisions in the order they were taken.
    pub events: Vec<AssignmentEvent>,
}

impl DispatchPlan {
    /// Look up the plan of depot `id`.
    pub fn depot(&self, id: DepotId) -> Option<&DepotPlan> {
        self.depots.iter().find(|plan| plan.depot.id() == id)
    }

    /// Every vehicle across every depot.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.depots.iter().flat_map(|plan| plan.depot.vehicles())
    }

    /// Total deliveries loaded onto vehicles.
    pub fn assigned_count(&self) -> usize {
        self.depots.iter().map(DepotPlan::assigned_count).sum()
    }

    /// Total deliveries left unassigned.
    pub fn unassigned_count(&self) -> usize {
        self.depots.iter().map(DepotPlan::unassigned_count).sum()
    }
}
