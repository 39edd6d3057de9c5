//! Behavioural tests for `GreedyPlanner` using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use waybill_core::test_support::{delivery, depot, vehicle};
use waybill_core::{
    DispatchPlan, DistanceMetric, DistributionCenter, Delivery, PlanError, PlanRequest, Planner,
    UnassignedCause, lat_lon,
};
use waybill_planner::{GreedyPlanner, PlannerConfig};

#[derive(Debug, Default)]
struct PlannerWorld {
    depots: RefCell<Vec<DistributionCenter>>,
    deliveries: RefCell<Vec<Delivery>>,
    outcome: RefCell<Option<Result<DispatchPlan, PlanError>>>,
}

impl PlannerWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_plan(&self) -> DispatchPlan {
        self.outcome
            .borrow()
            .clone()
            .expect("outcome should be recorded before assertions")
            .expect("expected planning success")
    }
}

#[fixture]
fn world() -> PlannerWorld {
    PlannerWorld::default()
}

#[given("a depot at the origin with a vehicle of capacity {capacity}")]
fn given_depot(world: &PlannerWorld, capacity: f64) {
    world
        .depots
        .borrow_mut()
        .push(depot(1, 0.0, 0.0).with_vehicle(vehicle(1, capacity)));
}

#[given("a second depot at latitude {lat} and longitude {lon}")]
fn given_second_depot(world: &PlannerWorld, lat: f64, lon: f64) {
    world
        .depots
        .borrow_mut()
        .push(depot(2, lat, lon).with_vehicle(vehicle(2, 20.0)));
}

#[given("a delivery of weight {weight} at latitude {lat} and longitude {lon}")]
fn given_delivery(world: &PlannerWorld, weight: f64, lat: f64, lon: f64) {
    let mut deliveries = world.deliveries.borrow_mut();
    let id = deliveries.len() as u64 + 1;
    deliveries.push(delivery(id, lat, lon, weight, 100));
}

#[when("the planar planner runs")]
fn when_planner_runs(world: &PlannerWorld) {
    let request = PlanRequest {
        depots: world.depots.borrow().clone(),
        deliveries: world.deliveries.borrow().clone(),
    };
    let planner = GreedyPlanner::with_config(PlannerConfig {
        metric: DistanceMetric::Planar,
        ..PlannerConfig::default()
    });
    world.outcome.replace(Some(planner.plan(&request)));
}

#[then("the delivery is assigned")]
fn then_assigned(world: &PlannerWorld) {
    let plan = world.expect_plan();
    assert_eq!(plan.assigned_count(), 1);
    assert_eq!(plan.unassigned_count(), 0);
}

#[then("the vehicle route is depot, destination, depot")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_route(world: &PlannerWorld) {
    let plan = world.expect_plan();
    let truck = plan.vehicles().next().expect("vehicle");
    assert_eq!(
        truck.route().polyline(),
        &[lat_lon(0.0, 0.0), lat_lon(0.0, 3.0), lat_lon(0.0, 0.0)]
    );
}

#[then("the route takes {days} operating days")]
#[expect(
    clippy::expect_used,
    clippy::float_arithmetic,
    reason = "behaviour tests use expect and float tolerance checks for clarity"
)]
fn then_days(world: &PlannerWorld, days: f64) {
    let plan = world.expect_plan();
    let truck = plan.vehicles().next().expect("vehicle");
    assert!((truck.route().total_days() - days).abs() < 1e-9);
}

#[then("the depot reports one unassigned delivery")]
fn then_one_unassigned(world: &PlannerWorld) {
    let plan = world.expect_plan();
    assert_eq!(plan.depot(1).map(|d| d.unassigned_count()), Some(1));
}

#[then("the unassigned cause is capacity")]
fn then_capacity_cause(world: &PlannerWorld) {
    let plan = world.expect_plan();
    let cause = plan
        .depot(1)
        .and_then(|d| d.unassigned.first())
        .map(|u| u.cause);
    assert_eq!(cause, Some(UnassignedCause::CapacityExceeded));
}

#[then("the delivery is handled by the depot at the origin")]
fn then_nearest_depot(world: &PlannerWorld) {
    let plan = world.expect_plan();
    assert_eq!(plan.depot(1).map(|d| d.assigned_count()), Some(1));
    assert_eq!(plan.depot(2).map(|d| d.assigned_count()), Some(0));
}

#[scenario(path = "tests/features/planner.feature", index = 0)]
fn single_delivery_round_trip(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/planner.feature", index = 1)]
fn overweight_delivery(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/planner.feature", index = 2)]
fn nearest_of_two_depots(world: PlannerWorld) {
    let _ = world;
}
