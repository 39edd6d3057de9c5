//! Distribution centres: fixed depots owning a fleet and a pending queue.

use geo::Coord;
use thiserror::Error;

use crate::point::is_finite;
use crate::{Delivery, Vehicle};

/// Identifier of a [`DistributionCenter`].
pub type DepotId = u64;

/// A depot from which vehicles depart and to which they return.
///
/// # Examples
/// ```
/// use waybill_core::{DistributionCenter, Vehicle, lat_lon};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let depot = DistributionCenter::new(1, "Recife", lat_lon(-8.05428, -34.8813))?
///     .with_vehicle(Vehicle::new(1, 1000.0, 60.0, 8.0)?);
/// assert_eq!(depot.vehicles().len(), 1);
/// assert!(depot.pending().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistributionCenter {
    id: DepotId,
    name: String,
    location: Coord<f64>,
    vehicles: Vec<Vehicle>,
    pending: Vec<Delivery>,
}

/// Errors returned by [`DistributionCenter::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepotError {
    /// The depot name was empty or whitespace.
    #[error("depot {id} has an empty name")]
    EmptyName {
        /// Offending depot.
        id: DepotId,
    },
    /// The location had a NaN or infinite coordinate.
    #[error("depot {id} has a non-finite location")]
    NonFiniteLocation {
        /// Offending depot.
        id: DepotId,
    },
}

impl DistributionCenter {
    /// Validate and construct a depot without vehicles.
    pub fn new(
        id: DepotId,
        name: impl Into<String>,
        location: Coord<f64>,
    ) -> Result<Self, DepotError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DepotError::EmptyName { id });
        }
        if !is_finite(location) {
            return Err(DepotError::NonFiniteLocation { id });
        }
        Ok(Self {
            id,
            name,
            location,
            vehicles: Vec::new(),
            pending: Vec::new(),
        })
    }

    /// Add a vehicle while returning `self` for chaining.
    #[must_use]
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.add_vehicle(vehicle);
        self
    }

    /// Add a vehicle to the fleet.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    /// Depot identifier.
    pub const fn id(&self) -> DepotId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Depot location.
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Fleet in list order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Mutable access to the fleet.
    pub fn vehicles_mut(&mut self) -> &mut [Vehicle] {
        &mut self.vehicles
    }

    /// Deliveries waiting for a vehicle.
    pub fn pending(&self) -> &[Delivery] {
        &self.pending
    }

    /// Queue a delivery at this depot.
    pub fn enqueue(&mut self, delivery: Delivery) {
        self.pending.push(delivery);
    }

    /// Move all pending deliveries out of the depot.
    pub fn take_pending(&mut self) -> Vec<Delivery> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lat_lon;
    use rstest::rstest;

    #[rstest]
    fn rejects_blank_name() {
        let err = DistributionCenter::new(2, " ", lat_lon(0.0, 0.0)).expect_err("blank");
        assert_eq!(err, DepotError::EmptyName { id: 2 });
    }

    #[rstest]
    fn rejects_non_finite_location() {
        let err = DistributionCenter::new(3, "Nowhere", lat_lon(0.0, f64::NEG_INFINITY))
            .expect_err("infinite");
        assert_eq!(err, DepotError::NonFiniteLocation { id: 3 });
    }

    #[rstest]
    fn take_pending_empties_the_queue() {
        let mut depot = DistributionCenter::new(1, "Hub", lat_lon(0.0, 0.0)).expect("depot");
        let delivery = Delivery::new(1, lat_lon(0.0, 1.0), "Stop", 1.0, 1).expect("delivery");
        depot.enqueue(delivery.clone());
        assert_eq!(depot.pending(), std::slice::from_ref(&delivery));

        let taken = depot.take_pending();
        assert_eq!(taken, vec![delivery]);
        assert!(depot.pending().is_empty());
    }
}
