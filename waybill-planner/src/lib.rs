//! Greedy dispatch planner for Waybill.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`Planner`](waybill_core::Planner) trait. Planning runs in three stages
//! over a single complete [`DistanceGraph`](waybill_core::DistanceGraph):
//!
//! 1. each delivery is queued at its nearest depot;
//! 2. each depot loads its vehicles in fleet order, most urgent deliveries
//!    first, subject to capacity and a round-trip deadline check;
//! 3. each loaded vehicle gets a nearest-neighbour tour that returns to its
//!    depot.
//!
//! Every pass is greedy and irreversible. A later vehicle never takes over a
//! delivery an earlier one accepted, and a delivery is never reconsidered for
//! another depot. The result is deterministic and `O(vehicles × deliveries)`
//! per depot, but not optimal.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod planner;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::PlannerConfig;
pub use planner::GreedyPlanner;
