//! Capacity- and time-constrained carriers.

use thiserror::Error;

use crate::{Delivery, Route};

/// Identifier of a [`Vehicle`].
pub type VehicleId = u64;

/// A carrier with a weight capacity, an average speed and a daily hour
/// limit.
///
/// The sum of assigned delivery weights never exceeds the capacity:
/// [`Vehicle::load`] refuses any delivery that would break this.
///
/// # Examples
/// ```
/// use waybill_core::{Delivery, Vehicle, lat_lon};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut truck = Vehicle::new(1, 20.0, 10.0, 8.0)?;
/// let parcel = Delivery::new(1, lat_lon(0.0, 3.0), "Stop", 15.0, 1)?;
/// truck.load(parcel)?;
/// assert_eq!(truck.current_load(), 15.0);
/// assert_eq!(truck.remaining_capacity(), 5.0);
///
/// let heavy = Delivery::new(2, lat_lon(0.0, 4.0), "Other stop", 6.0, 1)?;
/// let refused = truck.load(heavy).expect_err("over capacity");
/// assert_eq!(refused.delivery.id(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vehicle {
    id: VehicleId,
    capacity: f64,
    average_speed: f64,
    max_hours_per_day: f64,
    deliveries: Vec<Delivery>,
    load: f64,
    route: Route,
}

/// Errors returned by [`Vehicle::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VehicleError {
    /// Capacity was zero, negative or not finite.
    #[error("vehicle {id} has invalid capacity {value}; capacity must be positive")]
    NonPositiveCapacity {
        /// Offending vehicle.
        id: VehicleId,
        /// Rejected capacity.
        value: f64,
    },
    /// Average speed was zero, negative or not finite.
    #[error("vehicle {id} has invalid average speed {value}; speed must be positive")]
    NonPositiveSpeed {
        /// Offending vehicle.
        id: VehicleId,
        /// Rejected speed.
        value: f64,
    },
    /// Daily operating hours were zero, negative or not finite.
    #[error("vehicle {id} has invalid daily hours {value}; hours must be positive")]
    NonPositiveHours {
        /// Offending vehicle.
        id: VehicleId,
        /// Rejected hour limit.
        value: f64,
    },
}

/// A delivery refused by [`Vehicle::load`] because it would exceed the
/// vehicle's capacity. The delivery is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "delivery {} (weight {}) exceeds vehicle {vehicle} remaining capacity ({load} of {capacity} loaded)",
    .delivery.id(),
    .delivery.weight()
)]
pub struct OverCapacity {
    /// Vehicle that refused the delivery.
    pub vehicle: VehicleId,
    /// Load at the time of refusal.
    pub load: f64,
    /// Vehicle capacity.
    pub capacity: f64,
    /// The refused delivery.
    pub delivery: Delivery,
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Vehicle {
    /// Validate and construct an empty vehicle.
    pub fn new(
        id: VehicleId,
        capacity: f64,
        average_speed: f64,
        max_hours_per_day: f64,
    ) -> Result<Self, VehicleError> {
        if !is_positive(capacity) {
            return Err(VehicleError::NonPositiveCapacity {
                id,
                value: capacity,
            });
        }
        if !is_positive(average_speed) {
            return Err(VehicleError::NonPositiveSpeed {
                id,
                value: average_speed,
            });
        }
        if !is_positive(max_hours_per_day) {
            return Err(VehicleError::NonPositiveHours {
                id,
                value: max_hours_per_day,
            });
        }
        Ok(Self {
            id,
            capacity,
            average_speed,
            max_hours_per_day,
            deliveries: Vec::new(),
            load: 0.0,
            route: Route::empty(),
        })
    }

    /// Vehicle identifier.
    pub const fn id(&self) -> VehicleId {
        self.id
    }

    /// Maximum total weight.
    pub const fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Average speed in distance units per hour.
    pub const fn average_speed(&self) -> f64 {
        self.average_speed
    }

    /// Maximum operating hours per day.
    pub const fn max_hours_per_day(&self) -> f64 {
        self.max_hours_per_day
    }

    /// Sum of assigned delivery weights.
    pub const fn current_load(&self) -> f64 {
        self.load
    }

    /// Capacity not yet taken by assigned deliveries.
    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.load
    }

    /// Whether a delivery of `weight` would still fit.
    pub fn fits(&self, weight: f64) -> bool {
        self.load + weight <= self.capacity
    }

    /// Assigned deliveries in assignment order.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Number of assigned deliveries.
    pub fn stop_count(&self) -> usize {
        self.deliveries.len()
    }

    /// Computed route; empty until a route has been built.
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// Record the computed route for this vehicle.
    pub fn set_route(&mut self, route: Route) {
        self.route = route;
    }

    /// Driving hours needed to cover `distance`.
    pub fn hours_for(&self, distance: f64) -> f64 {
        distance / self.average_speed
    }

    /// Operating days needed to cover `distance` under the daily hour limit.
    pub fn days_for(&self, distance: f64) -> f64 {
        self.hours_for(distance) / self.max_hours_per_day
    }

    /// Assign `delivery` to this vehicle.
    ///
    /// Fails without changing the vehicle when the delivery does not fit.
    pub fn load(&mut self, delivery: Delivery) -> Result<(), OverCapacity> {
        if !self.fits(delivery.weight()) {
            return Err(OverCapacity {
                vehicle: self.id,
                load: self.load,
                capacity: self.capacity,
                delivery,
            });
        }
        self.load += delivery.weight();
        self.deliveries.push(delivery);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lat_lon;
    use rstest::{fixture, rstest};

    #[fixture]
    fn truck() -> Vehicle {
        Vehicle::new(1, 20.0, 10.0, 8.0).expect("valid vehicle")
    }

    fn parcel(id: u64, weight: f64) -> Delivery {
        Delivery::new(id, lat_lon(0.0, 1.0), "Stop", weight, 1).expect("valid delivery")
    }

    #[rstest]
    #[case(0.0, 10.0, 8.0)]
    #[case(-1.0, 10.0, 8.0)]
    #[case(f64::NAN, 10.0, 8.0)]
    fn rejects_invalid_capacity(#[case] capacity: f64, #[case] speed: f64, #[case] hours: f64) {
        let err = Vehicle::new(2, capacity, speed, hours).expect_err("invalid capacity");
        assert!(matches!(err, VehicleError::NonPositiveCapacity { id: 2, .. }));
    }

    #[rstest]
    fn rejects_invalid_speed_and_hours() {
        assert!(matches!(
            Vehicle::new(3, 1.0, 0.0, 8.0),
            Err(VehicleError::NonPositiveSpeed { id: 3, .. })
        ));
        assert!(matches!(
            Vehicle::new(4, 1.0, 10.0, -8.0),
            Err(VehicleError::NonPositiveHours { id: 4, .. })
        ));
    }

    #[rstest]
    fn load_accumulates_until_capacity(mut truck: Vehicle) {
        truck.load(parcel(1, 12.0)).expect("fits");
        truck.load(parcel(2, 8.0)).expect("fills exactly");
        assert_eq!(truck.current_load(), 20.0);
        assert_eq!(truck.stop_count(), 2);

        let refused = truck.load(parcel(3, 0.5)).expect_err("over capacity");
        assert_eq!(refused.delivery.id(), 3);
        assert_eq!(refused.load, 20.0);
        assert_eq!(truck.stop_count(), 2);
    }

    #[rstest]
    fn preserves_assignment_order(mut truck: Vehicle) {
        truck.load(parcel(9, 1.0)).expect("fits");
        truck.load(parcel(4, 1.0)).expect("fits");
        let ids: Vec<u64> = truck.deliveries().iter().map(Delivery::id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[rstest]
    fn converts_distance_to_hours_and_days(truck: Vehicle) {
        assert!((truck.hours_for(6.0) - 0.6).abs() < 1e-12);
        assert!((truck.days_for(6.0) - 0.075).abs() < 1e-12);
    }

    #[rstest]
    fn new_vehicle_has_empty_route(truck: Vehicle) {
        assert!(truck.route().is_empty());
    }
}
