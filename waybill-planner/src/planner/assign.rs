//! Pass 1 (delivery to depot) and pass 2 (depot queue to vehicles).

use std::collections::HashSet;

use geo::Coord;
use log::{debug, warn};
use waybill_core::{
    AssignmentEvent, DeadlineUnit, Delivery, DeliveryId, DepotId, DistanceGraph, DistributionCenter,
    Metric, PlanError, RejectionReason, UnassignedCause, UnassignedDelivery, Vehicle, VehicleId,
    shortest_path,
};

use crate::PlannerConfig;

/// Outcome of offering one delivery to one vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Verdict {
    Accept { round_trip: f64 },
    Reject(RejectionReason),
}

/// Index and distance of the depot nearest to `point`.
///
/// The first depot reaching the minimum wins ties.
pub(super) fn nearest_depot<M>(
    metric: &M,
    depots: &[DistributionCenter],
    point: Coord<f64>,
) -> Option<(usize, f64)>
where
    M: Metric + ?Sized,
{
    depots
        .iter()
        .enumerate()
        .map(|(idx, depot)| (idx, metric.distance(depot.location(), point)))
        .fold(None, |best, candidate| match best {
            Some((_, distance)) if distance <= candidate.1 => best,
            _ => Some(candidate),
        })
}

/// Move every delivery from the pool into its nearest depot's queue.
pub(super) fn queue_at_nearest_depot<M, I>(
    metric: &M,
    depots: &mut [DistributionCenter],
    pool: I,
    events: &mut Vec<AssignmentEvent>,
) -> Result<(), PlanError>
where
    M: Metric + ?Sized,
    I: IntoIterator<Item = Delivery>,
{
    for delivery in pool {
        let (idx, distance) =
            nearest_depot(metric, depots, delivery.destination()).ok_or(PlanError::NoDepots)?;
        let depot = depots.get_mut(idx).ok_or(PlanError::NoDepots)?;
        debug!(
            "Delivery {} queued at depot {} ({distance:.3} away)",
            delivery.id(),
            depot.id()
        );
        events.push(AssignmentEvent::DepotSelected {
            delivery: delivery.id(),
            depot: depot.id(),
            distance,
        });
        depot.enqueue(delivery);
    }
    Ok(())
}

/// Offer the depot's queue to each vehicle in fleet order.
///
/// The queue is sorted by ascending deadline (stable, so equal deadlines keep
/// their arrival order) and each vehicle scans what earlier vehicles left.
/// Whatever no vehicle took is returned with its cause; the depot queue is
/// empty afterwards.
pub(super) fn load_fleet(
    config: &PlannerConfig,
    graph: &DistanceGraph,
    depot: &mut DistributionCenter,
    events: &mut Vec<AssignmentEvent>,
) -> Result<Vec<UnassignedDelivery>, PlanError> {
    let depot_id = depot.id();
    let origin = depot.location();
    let mut pending = depot.take_pending();
    pending.sort_by_key(Delivery::deadline);
    let mut missed_deadline: HashSet<DeliveryId> = HashSet::new();

    for vehicle in depot.vehicles_mut() {
        let mut remaining = Vec::with_capacity(pending.len());
        for delivery in pending {
            match offer(config, graph, origin, vehicle, &delivery)? {
                Verdict::Accept { round_trip } => {
                    let id = delivery.id();
                    match vehicle.load(delivery) {
                        Ok(()) => {
                            debug!(
                                "Delivery {id} loaded on vehicle {} (load {}/{})",
                                vehicle.id(),
                                vehicle.current_load(),
                                vehicle.capacity()
                            );
                            events.push(AssignmentEvent::VehicleAssigned {
                                delivery: id,
                                depot: depot_id,
                                vehicle: vehicle.id(),
                                round_trip,
                            });
                        }
                        Err(refused) => {
                            let reason = RejectionReason::from(&refused);
                            reject(events, depot_id, vehicle.id(), &refused.delivery, reason);
                            remaining.push(refused.delivery);
                        }
                    }
                }
                Verdict::Reject(reason) => {
                    if matches!(reason, RejectionReason::Deadline { .. }) {
                        missed_deadline.insert(delivery.id());
                    }
                    reject(events, depot_id, vehicle.id(), &delivery, reason);
                    remaining.push(delivery);
                }
            }
        }
        pending = remaining;
    }

    Ok(pending
        .into_iter()
        .map(|delivery| {
            let cause = if missed_deadline.contains(&delivery.id()) {
                UnassignedCause::DeadlineMissed
            } else {
                UnassignedCause::CapacityExceeded
            };
            warn!(
                "Delivery {} ({}) left unassigned at depot {depot_id}: {cause}",
                delivery.id(),
                delivery.name()
            );
            events.push(AssignmentEvent::Unassigned {
                delivery: delivery.id(),
                depot: depot_id,
                cause,
            });
            UnassignedDelivery { delivery, cause }
        })
        .collect())
}

/// Log a vehicle's refusal and record it as an event.
pub(super) fn reject(
    events: &mut Vec<AssignmentEvent>,
    depot: DepotId,
    vehicle: VehicleId,
    delivery: &Delivery,
    reason: RejectionReason,
) {
    debug!("Vehicle {vehicle} rejected delivery {}: {reason}", delivery.id());
    events.push(AssignmentEvent::VehicleRejected {
        delivery: delivery.id(),
        depot,
        vehicle,
        reason,
    });
}

/// Check capacity first, then the depot round trip against the deadline.
#[expect(
    clippy::float_arithmetic,
    reason = "round-trip distance is the sum of both legs"
)]
fn offer(
    config: &PlannerConfig,
    graph: &DistanceGraph,
    origin: Coord<f64>,
    vehicle: &Vehicle,
    delivery: &Delivery,
) -> Result<Verdict, PlanError> {
    if !vehicle.fits(delivery.weight()) {
        return Ok(Verdict::Reject(RejectionReason::Capacity {
            load: vehicle.current_load(),
            weight: delivery.weight(),
            capacity: vehicle.capacity(),
        }));
    }

    let outbound = shortest_path(graph, origin, delivery.destination())?;
    let inbound = shortest_path(graph, delivery.destination(), origin)?;
    let round_trip = outbound.distance() + inbound.distance();
    if !config.enforce_deadlines {
        return Ok(Verdict::Accept { round_trip });
    }

    let required = match config.deadline_unit {
        DeadlineUnit::Days => vehicle.days_for(round_trip),
        DeadlineUnit::Hours => vehicle.hours_for(round_trip),
    };
    if required <= f64::from(delivery.deadline()) {
        Ok(Verdict::Accept { round_trip })
    } else {
        Ok(Verdict::Reject(RejectionReason::Deadline {
            required,
            deadline: delivery.deadline(),
            unit: config.deadline_unit,
        }))
    }
}
