//! Fixture constructors shared by unit, behaviour and property tests.
//!
//! The helpers panic on invalid input: they exist for tests, where a bad
//! fixture is a bug in the test itself.

use crate::{Delivery, DeliveryId, DepotId, DistributionCenter, Vehicle, VehicleId, lat_lon};

/// Speed used by [`vehicle`], in distance units per hour.
pub const FIXTURE_SPEED: f64 = 10.0;

/// Daily hour limit used by [`vehicle`].
pub const FIXTURE_HOURS_PER_DAY: f64 = 8.0;

/// A delivery named after its id.
///
/// # Panics
/// Panics if the values fail [`Delivery::new`] validation.
pub fn delivery(id: DeliveryId, lat: f64, lon: f64, weight: f64, deadline: u32) -> Delivery {
    Delivery::new(id, lat_lon(lat, lon), format!("Destination {id}"), weight, deadline)
        .expect("fixture delivery must be valid")
}

/// A depot named after its id, with no vehicles.
///
/// # Panics
/// Panics if the location is not finite.
pub fn depot(id: DepotId, lat: f64, lon: f64) -> DistributionCenter {
    DistributionCenter::new(id, format!("Depot {id}"), lat_lon(lat, lon))
        .expect("fixture depot must be valid")
}

/// A vehicle with the given capacity and the fixture speed and hours.
///
/// # Panics
/// Panics if `capacity` is not positive.
pub fn vehicle(id: VehicleId, capacity: f64) -> Vehicle {
    vehicle_with(id, capacity, FIXTURE_SPEED, FIXTURE_HOURS_PER_DAY)
}

/// A fully specified vehicle.
///
/// # Panics
/// Panics if any value is not positive.
pub fn vehicle_with(
    id: VehicleId,
    capacity: f64,
    average_speed: f64,
    max_hours_per_day: f64,
) -> Vehicle {
    Vehicle::new(id, capacity, average_speed, max_hours_per_day)
        .expect("fixture vehicle must be valid")
}
