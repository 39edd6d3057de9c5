//! Weighted shipments bound for a destination with a deadline.

use geo::Coord;
use thiserror::Error;

use crate::point::is_finite;

/// Identifier of a [`Delivery`].
pub type DeliveryId = u64;

/// Unit in which delivery deadlines are expressed.
///
/// The feasibility check compares a vehicle's required round-trip effort
/// against the deadline in this unit: operating days (driving hours divided
/// by the vehicle's daily hour limit) for [`DeadlineUnit::Days`], raw driving
/// hours for [`DeadlineUnit::Hours`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DeadlineUnit {
    /// Deadlines count vehicle operating days.
    #[default]
    Days,
    /// Deadlines count driving hours.
    Hours,
}

/// A shipment to a destination point.
///
/// Deliveries are immutable once built. During planning a delivery is owned
/// by exactly one of: the unassigned pool, a depot's pending queue or a
/// vehicle's assigned list.
///
/// # Examples
/// ```
/// use waybill_core::{Delivery, lat_lon};
///
/// # fn main() -> Result<(), waybill_core::DeliveryError> {
/// let delivery = Delivery::new(7, lat_lon(-23.5505, -46.6333), "São Paulo", 300.5, 2)?;
/// assert_eq!(delivery.id(), 7);
/// assert_eq!(delivery.name(), "São Paulo");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Delivery {
    id: DeliveryId,
    destination: Coord<f64>,
    name: String,
    weight: f64,
    deadline: u32,
}

/// Errors returned by [`Delivery::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeliveryError {
    /// The destination had a NaN or infinite coordinate.
    #[error("delivery {id} has a non-finite destination")]
    NonFiniteDestination {
        /// Offending delivery.
        id: DeliveryId,
    },
    /// The destination name was empty or whitespace.
    #[error("delivery {id} has an empty destination name")]
    EmptyName {
        /// Offending delivery.
        id: DeliveryId,
    },
    /// The weight was zero, negative or not finite.
    #[error("delivery {id} has invalid weight {weight}; weight must be positive")]
    NonPositiveWeight {
        /// Offending delivery.
        id: DeliveryId,
        /// Rejected weight.
        weight: f64,
    },
    /// The deadline was zero.
    #[error("delivery {id} has a zero deadline; deadline must be positive")]
    NonPositiveDeadline {
        /// Offending delivery.
        id: DeliveryId,
    },
}

impl Delivery {
    /// Validate and construct a delivery.
    pub fn new(
        id: DeliveryId,
        destination: Coord<f64>,
        name: impl Into<String>,
        weight: f64,
        deadline: u32,
    ) -> Result<Self, DeliveryError> {
        let name = name.into();
        if !is_finite(destination) {
            return Err(DeliveryError::NonFiniteDestination { id });
        }
        if name.trim().is_empty() {
            return Err(DeliveryError::EmptyName { id });
        }
        if !(weight.is_finite() && weight > 0.0) {
            return Err(DeliveryError::NonPositiveWeight { id, weight });
        }
        if deadline == 0 {
            return Err(DeliveryError::NonPositiveDeadline { id });
        }
        Ok(Self {
            id,
            destination,
            name,
            weight,
            deadline,
        })
    }

    /// Delivery identifier.
    pub const fn id(&self) -> DeliveryId {
        self.id
    }

    /// Destination point.
    pub const fn destination(&self) -> Coord<f64> {
        self.destination
    }

    /// Human-readable destination name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shipment weight.
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Deadline in the run's [`DeadlineUnit`].
    pub const fn deadline(&self) -> u32 {
        self.deadline
    }
}
