//! Property-based tests for the greedy planner.
//!
//! These tests use `proptest` to assert invariants that must hold for every
//! valid request, complementing the unit tests and BDD behavioural tests.
//!
//! # Invariants tested
//!
//! - **Capacity:** no vehicle's load ever exceeds its capacity.
//! - **Nearest depot:** every delivery is handled by a depot at minimum
//!   distance from its destination.
//! - **Conservation:** every delivery ends up on exactly one vehicle or in
//!   exactly one unassigned list.
//! - **Deadlines:** every loaded delivery passes the round-trip check.
//! - **Route completeness:** each route visits every assigned destination
//!   exactly once and starts and ends at the depot.


use std::collections::HashMap;

use proptest::prelude::*;
use waybill_core::{Delivery, DistanceMetric, Metric, Planner, PointKey};
use waybill_planner::GreedyPlanner;

use proptest_support::request_strategy;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the sum of loaded weights never exceeds vehicle capacity.
    #[test]
    #[expect(clippy::float_arithmetic, reason = "summing delivery weights")]
    fn capacity_is_never_exceeded(request in request_strategy(3, 25)) {
        let plan = GreedyPlanner::new().plan(&request).expect("plan should succeed");
        for vehicle in plan.vehicles() {
            let total: f64 = vehicle.deliveries().iter().map(Delivery::weight).sum();
            prop_assert!(
                total <= vehicle.capacity(),
                "vehicle {} carries {} over capacity {}",
                vehicle.id(),
                total,
                vehicle.capacity()
            );
            prop_assert!((total - vehicle.current_load()).abs() < 1e-9);
        }
    }

    /// Property: no delivery is handled by a farther depot while a closer one
    /// exists.
    #[test]
    fn deliveries_are_handled_by_a_nearest_depot(request in request_strategy(4, 20)) {
        let plan = GreedyPlanner::new().plan(&request).expect("plan should succeed");
        let metric = DistanceMetric::Haversine;
        for depot_plan in &plan.depots {
            let handled = depot_plan
                .depot
                .vehicles()
                .iter()
                .flat_map(|v| v.deliveries().iter())
                .chain(depot_plan.unassigned.iter().map(|u| &u.delivery));
            for delivery in handled {
                let own = metric.distance(depot_plan.depot.location(), delivery.destination());
                for other in &request.depots {
                    prop_assert!(own <= metric.distance(other.location(), delivery.destination()));
                }
            }
        }
    }

    /// Property: every delivery is accounted for exactly once.
    #[test]
    fn every_delivery_is_accounted_for(request in request_strategy(3, 25)) {
        let plan = GreedyPlanner::new().plan(&request).expect("plan should succeed");
        let mut seen: HashMap<u64, usize> = HashMap::new();
        for vehicle in plan.vehicles() {
            for delivery in vehicle.deliveries() {
                *seen.entry(delivery.id()).or_default() += 1;
            }
        }
        for depot_plan in &plan.depots {
            prop_assert!(depot_plan.depot.pending().is_empty());
            for unassigned in &depot_plan.unassigned {
                *seen.entry(unassigned.delivery.id()).or_default() += 1;
            }
        }
        prop_assert_eq!(seen.len(), request.deliveries.len());
        prop_assert!(seen.values().all(|&count| count == 1));
    }

    /// Property: loaded deliveries satisfy the day-unit deadline check.
    #[test]
    #[expect(clippy::float_arithmetic, reason = "round trip and tolerance")]
    fn loaded_deliveries_meet_their_deadline(request in request_strategy(2, 20)) {
        let plan = GreedyPlanner::new().plan(&request).expect("plan should succeed");
        let metric = DistanceMetric::Haversine;
        for depot_plan in &plan.depots {
            for vehicle in depot_plan.depot.vehicles() {
                for delivery in vehicle.deliveries() {
                    let leg = metric.distance(depot_plan.depot.location(), delivery.destination());
                    let days = vehicle.days_for(leg + leg);
                    prop_assert!(days <= f64::from(delivery.deadline()) + 1e-9);
                }
            }
        }
    }

    /// Property: routes are closed tours over exactly the assigned stops.
    #[test]
    fn routes_visit_each_destination_once(request in request_strategy(2, 20)) {
        let plan = GreedyPlanner::new().plan(&request).expect("plan should succeed");
        for depot_plan in &plan.depots {
            let home = depot_plan.depot.location();
            for vehicle in depot_plan.depot.vehicles() {
                let route = vehicle.route();
                if vehicle.deliveries().is_empty() {
                    prop_assert!(route.is_empty());
                    prop_assert!(route.polyline().is_empty());
                    continue;
                }
                prop_assert_eq!(route.polyline().first(), Some(&home));
                prop_assert_eq!(route.polyline().last(), Some(&home));

                let mut stops = route.stops().to_vec();
                stops.sort_unstable();
                let mut assigned: Vec<u64> =
                    vehicle.deliveries().iter().map(Delivery::id).collect();
                assigned.sort_unstable();
                prop_assert_eq!(stops, assigned);

                for delivery in vehicle.deliveries() {
                    let key = PointKey::from(delivery.destination());
                    let visits = route
                        .polyline()
                        .iter()
                        .filter(|point| PointKey::from(*point) == key)
                        .count();
                    prop_assert_eq!(visits, 1);
                }
            }
        }
    }
}
