//! Nearest-neighbour tours over shortest paths.

use geo::Coord;
use log::debug;
use waybill_core::{
    DepotId, DistanceGraph, DistributionCenter, LegTarget, Path, PathError, Route, Vehicle,
    shortest_path,
};

/// Route every vehicle of `depot` from and back to the depot.
pub(super) fn route_fleet(
    graph: &DistanceGraph,
    depot: &mut DistributionCenter,
) -> Result<(), PathError> {
    let depot_id = depot.id();
    let origin = depot.location();
    for vehicle in depot.vehicles_mut() {
        let route = nearest_neighbour(graph, depot_id, origin, vehicle)?;
        if !route.is_empty() {
            debug!(
                "Vehicle {} route: {} stops, {:.3} distance, {:.3} days",
                vehicle.id(),
                route.stops().len(),
                route.total_distance(),
                route.total_days()
            );
        }
        vehicle.set_route(route);
    }
    Ok(())
}

/// Build a tour visiting every delivery assigned to `vehicle`.
///
/// From the current position the closest remaining destination by path
/// distance is visited next, the first one found winning ties. A vehicle
/// without deliveries gets an empty route.
pub(super) fn nearest_neighbour(
    graph: &DistanceGraph,
    depot: DepotId,
    origin: Coord<f64>,
    vehicle: &Vehicle,
) -> Result<Route, PathError> {
    if vehicle.deliveries().is_empty() {
        return Ok(Route::empty());
    }

    let mut pool: Vec<_> = vehicle.deliveries().iter().collect();
    let mut builder = Route::departing(origin);
    let mut position = origin;

    while !pool.is_empty() {
        let mut closest: Option<(usize, Path)> = None;
        for (idx, delivery) in pool.iter().enumerate() {
            let path = shortest_path(graph, position, delivery.destination())?;
            if closest
                .as_ref()
                .is_none_or(|(_, best)| path.distance() < best.distance())
            {
                closest = Some((idx, path));
            }
        }
        let Some((idx, path)) = closest else {
            break;
        };
        let delivery = pool.remove(idx);
        builder.push_leg(LegTarget::Delivery(delivery.id()), &path, graph);
        position = delivery.destination();
    }

    let back = shortest_path(graph, position, origin)?;
    builder.push_leg(LegTarget::Depot(depot), &back, graph);
    Ok(builder.finish(vehicle))
}
