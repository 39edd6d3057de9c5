//! Vehicle routes: the visiting order, the travelled polyline and the totals.

use geo::Coord;

use crate::{DepotId, DeliveryId, DistanceGraph, Path, Vehicle, Waypoint};

/// What a [`Leg`] travels to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", content = "id", rename_all = "snake_case")
)]
pub enum LegTarget {
    /// A delivery destination.
    Delivery(DeliveryId),
    /// The return to the departure depot.
    Depot(DepotId),
}

/// One shortest-path hop of a route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Leg {
    /// Stop reached at the end of the leg.
    pub target: LegTarget,
    /// Path points, origin included, with their graph labels.
    pub waypoints: Vec<Waypoint>,
    /// Leg distance in metric units.
    pub distance: f64,
}

impl Leg {
    /// Build a leg from a computed path, naming its points from `graph`.
    pub fn from_path(target: LegTarget, path: &Path, graph: &DistanceGraph) -> Self {
        Self {
            target,
            waypoints: path.waypoints(graph),
            distance: path.distance(),
        }
    }
}

/// An ordered multi-stop tour starting and ending at a depot.
///
/// A vehicle with no deliveries has an empty route: no stops, no polyline.
/// Otherwise the polyline starts and ends at the depot and visits every stop
/// exactly once.
///
/// # Examples
/// ```
/// use waybill_core::{
///     DistanceGraph, GraphNode, LegTarget, Planar, Route, Vehicle, lat_lon, shortest_path,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let depot = lat_lon(0.0, 0.0);
/// let stop = lat_lon(0.0, 3.0);
/// let graph = DistanceGraph::complete(&Planar, [GraphNode::new(depot), GraphNode::new(stop)])?;
/// let vehicle = Vehicle::new(1, 20.0, 10.0, 8.0)?;
///
/// let mut route = Route::departing(depot);
/// route.push_leg(LegTarget::Delivery(1), &shortest_path(&graph, depot, stop)?, &graph);
/// route.push_leg(LegTarget::Depot(1), &shortest_path(&graph, stop, depot)?, &graph);
/// let route = route.finish(&vehicle);
///
/// assert_eq!(route.polyline(), &[depot, stop, depot]);
/// assert_eq!(route.total_distance(), 6.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    stops: Vec<DeliveryId>,
    polyline: Vec<Coord<f64>>,
    legs: Vec<Leg>,
    total_distance: f64,
    total_hours: f64,
    total_days: f64,
}

impl Route {
    /// A route with no stops.
    pub const fn empty() -> Self {
        Self {
            stops: Vec::new(),
            polyline: Vec::new(),
            legs: Vec::new(),
            total_distance: 0.0,
            total_hours: 0.0,
            total_days: 0.0,
        }
    }

    /// Start building a route at `origin`.
    pub fn departing(origin: Coord<f64>) -> RouteBuilder {
        RouteBuilder {
            route: Self {
                polyline: vec![origin],
                ..Self::empty()
            },
        }
    }

    /// Whether the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Delivery ids in visiting order.
    pub fn stops(&self) -> &[DeliveryId] {
        &self.stops
    }

    /// Every travelled point in order, depot first and last.
    pub fn polyline(&self) -> &[Coord<f64>] {
        &self.polyline
    }

    /// Per-hop detail, one leg per stop plus the return leg.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Sum of all traversed edge distances.
    pub const fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Driving time at the vehicle's average speed.
    pub const fn total_hours(&self) -> f64 {
        self.total_hours
    }

    /// Operating days under the vehicle's daily hour limit.
    pub const fn total_days(&self) -> f64 {
        self.total_days
    }
}

/// Accumulates legs into a [`Route`].
#[derive(Debug, Clone)]
pub struct RouteBuilder {
    route: Route,
}

impl RouteBuilder {
    /// Point the route currently ends at.
    pub fn position(&self) -> Option<Coord<f64>> {
        self.route.polyline.last().copied()
    }

    /// Append `path`, which must start at [`RouteBuilder::position`].
    ///
    /// The path origin is already on the polyline so only its tail is
    /// appended.
    pub fn push_leg(&mut self, target: LegTarget, path: &Path, graph: &DistanceGraph) {
        self.route.polyline.extend_from_slice(path.tail());
        self.route.total_distance += path.distance();
        if let LegTarget::Delivery(id) = target {
            self.route.stops.push(id);
        }
        self.route.legs.push(Leg::from_path(target, path, graph));
    }

    /// Compute the time totals for `vehicle` and return the route.
    pub fn finish(self, vehicle: &Vehicle) -> Route {
        let mut route = self.route;
        if route.stops.is_empty() {
            return Route::empty();
        }
        route.total_hours = vehicle.hours_for(route.total_distance);
        route.total_days = vehicle.days_for(route.total_distance);
        route
    }
}
