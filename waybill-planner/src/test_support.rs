//! Test-only utilities for `waybill-planner`.
//!
//! The helpers in this module are available to unit tests and downstream
//! crates. They are gated behind the `test-support` feature (and
//! `cfg(test)`).

use waybill_core::{DistanceMetric, PlanRequest, test_support};

use crate::{GreedyPlanner, PlannerConfig};

/// A planner measuring straight-line distance on raw coordinates.
///
/// # Examples
/// ```rust
/// use waybill_core::DistanceMetric;
/// use waybill_planner::test_support::planar_planner;
///
/// assert_eq!(planar_planner().config().metric, DistanceMetric::Planar);
/// ```
#[must_use]
pub const fn planar_planner() -> GreedyPlanner {
    GreedyPlanner::with_config(PlannerConfig {
        metric: DistanceMetric::Planar,
        deadline_unit: waybill_core::DeadlineUnit::Days,
        enforce_deadlines: true,
    })
}

/// One depot at the origin with one vehicle of `capacity` and one delivery
/// at `(0, 3)` weighing `weight`.
///
/// With the fixture vehicle (speed 10, 8 hours a day) the planar round trip
/// is 6 units, 0.6 hours, 0.075 days.
#[must_use]
pub fn single_stop_request(capacity: f64, weight: f64, deadline: u32) -> PlanRequest {
    PlanRequest {
        depots: vec![
            test_support::depot(1, 0.0, 0.0).with_vehicle(test_support::vehicle(1, capacity)),
        ],
        deliveries: vec![test_support::delivery(1, 0.0, 3.0, weight, deadline)],
    }
}
