//! `GreedyPlanner` implementation.

mod assign;
mod tour;

use log::info;
use waybill_core::{
    DepotPlan, DispatchPlan, DistanceGraph, GraphNode, PlanError, PlanRequest, Planner,
};

use crate::PlannerConfig;

/// Two-pass greedy assignment followed by nearest-neighbour routing.
///
/// # Examples
/// ```rust
/// use waybill_core::{
///     DistanceMetric, Delivery, DistributionCenter, PlanRequest, Planner, Vehicle, lat_lon,
/// };
/// use waybill_planner::{GreedyPlanner, PlannerConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let planner = GreedyPlanner::with_config(PlannerConfig {
///     metric: DistanceMetric::Planar,
///     ..PlannerConfig::default()
/// });
/// let request = PlanRequest {
///     depots: vec![
///         DistributionCenter::new(1, "Hub", lat_lon(0.0, 0.0))?
///             .with_vehicle(Vehicle::new(1, 20.0, 10.0, 8.0)?),
///     ],
///     deliveries: vec![Delivery::new(1, lat_lon(0.0, 3.0), "Stop", 10.0, 5)?],
/// };
/// let plan = planner.plan(&request)?;
/// let route = plan.depots[0].depot.vehicles()[0].route();
/// assert_eq!(
///     route.polyline(),
///     &[lat_lon(0.0, 0.0), lat_lon(0.0, 3.0), lat_lon(0.0, 0.0)]
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner {
    config: PlannerConfig,
}

impl GreedyPlanner {
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build the complete graph over every depot and destination.
    ///
    /// Depots come first so that a destination sharing a depot's location
    /// keeps the depot name.
    fn build_graph(&self, request: &PlanRequest) -> Result<DistanceGraph, PlanError> {
        let depots = request
            .depots
            .iter()
            .map(|depot| GraphNode::labelled(depot.location(), depot.name()));
        let destinations = request
            .deliveries
            .iter()
            .map(|delivery| GraphNode::labelled(delivery.destination(), delivery.name()));
        let graph = DistanceGraph::complete(&self.config.metric, depots.chain(destinations))?;
        info!(
            "Distance graph ready: {} nodes, {} edges ({})",
            graph.node_count(),
            graph.edge_count(),
            self.config.metric.unit()
        );
        Ok(graph)
    }
}

impl Planner for GreedyPlanner {
    fn plan(&self, request: &PlanRequest) -> Result<DispatchPlan, PlanError> {
        request.validate()?;
        let graph = self.build_graph(request)?;
        let mut events = Vec::new();

        let mut depots = request.depots.clone();
        assign::queue_at_nearest_depot(
            &self.config.metric,
            &mut depots,
            request.deliveries.iter().cloned(),
            &mut events,
        )?;

        let mut plans = Vec::with_capacity(depots.len());
        for mut depot in depots {
            let unassigned = assign::load_fleet(&self.config, &graph, &mut depot, &mut events)?;
            tour::route_fleet(&graph, &mut depot)?;
            let plan = DepotPlan { depot, unassigned };
            info!(
                "Depot {} ({}): {} assigned, {} unassigned",
                plan.depot.id(),
                plan.depot.name(),
                plan.assigned_count(),
                plan.unassigned_count()
            );
            plans.push(plan);
        }

        Ok(DispatchPlan {
            metric: self.config.metric,
            deadline_unit: self.config.deadline_unit,
            depots: plans,
            events,
        })
    }
}
