//! Tunables for [`GreedyPlanner`](crate::GreedyPlanner).

use waybill_core::{DeadlineUnit, DistanceMetric};

/// Configuration for [`GreedyPlanner`](crate::GreedyPlanner).
///
/// # Examples
/// ```rust
/// use waybill_core::{DeadlineUnit, DistanceMetric};
/// use waybill_planner::PlannerConfig;
///
/// let config = PlannerConfig {
///     metric: DistanceMetric::Planar,
///     ..PlannerConfig::default()
/// };
/// assert_eq!(config.deadline_unit, DeadlineUnit::Days);
/// assert!(config.enforce_deadlines);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Distance function for the graph and the nearest-depot pass.
    pub metric: DistanceMetric,
    /// How delivery deadlines are read by the feasibility check.
    pub deadline_unit: DeadlineUnit,
    /// When `false`, vehicles accept deliveries on capacity alone.
    pub enforce_deadlines: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            metric: DistanceMetric::Haversine,
            deadline_unit: DeadlineUnit::Days,
            enforce_deadlines: true,
        }
    }
}
