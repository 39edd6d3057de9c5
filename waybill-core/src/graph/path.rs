//! Single-source shortest paths over a [`DistanceGraph`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use geo::Coord;

use super::{DistanceGraph, PathError};

/// Relative margin a detour must beat the best known distance by.
///
/// On a complete metric graph the sum of two legs through a collinear point
/// can round just below the direct edge. Improvements inside this margin are
/// rounding noise and keep the path with fewer hops.
const RELAXATION_TOLERANCE: f64 = 1e-9;

/// Whether `candidate` is a real improvement over `current`.
fn improves(candidate: f64, current: f64) -> bool {
    if current.is_infinite() {
        return candidate < current;
    }
    candidate < current - current.abs() * RELAXATION_TOLERANCE
}

/// An ordered sequence of points from an origin to a destination.
///
/// `segments()[i]` is the edge weight between `points()[i]` and
/// `points()[i + 1]`; `distance()` is their sum.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    points: Vec<Coord<f64>>,
    segments: Vec<f64>,
    distance: f64,
}

impl Path {
    fn single(point: Coord<f64>) -> Self {
        Self {
            points: vec![point],
            segments: Vec::new(),
            distance: 0.0,
        }
    }

    /// Points from origin to destination inclusive.
    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    /// Per-segment edge weights.
    pub fn segments(&self) -> &[f64] {
        &self.segments
    }

    /// Total path weight.
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Points after the origin, i.e. what a traveller appends to a route
    /// that already ends at the origin.
    pub fn tail(&self) -> &[Coord<f64>] {
        self.points.get(1..).unwrap_or_default()
    }

    /// Resolve every point to a [`Waypoint`] carrying the graph label.
    pub fn waypoints(&self, graph: &DistanceGraph) -> Vec<Waypoint> {
        self.points
            .iter()
            .map(|point| Waypoint {
                location: *point,
                label: graph.label(*point).map(str::to_owned),
            })
            .collect()
    }
}

/// A path point with its human-readable name, when known.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Waypoint {
    /// Point position.
    pub location: Coord<f64>,
    /// Node label from the graph.
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct Frontier {
    distance: f64,
    node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    // Reversed so that `BinaryHeap` pops the smallest tentative distance,
    // lower node index first on ties.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Find the shortest path from `origin` to `destination` with Dijkstra's
/// algorithm.
///
/// Stale frontier entries are discarded on pop and the search stops as soon
/// as the destination is settled. A detour replaces a known path only when it
/// is shorter by more than a relative rounding margin, so on a complete graph
/// built from a metric the result is always the direct edge
/// `[origin, destination]`, collinear points included.
///
/// # Examples
///
/// ```rust
/// use waybill_core::{DistanceGraph, GraphNode, Planar, lat_lon, shortest_path};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let a = lat_lon(0.0, 0.0);
/// let b = lat_lon(0.0, 3.0);
/// let graph = DistanceGraph::complete(&Planar, [GraphNode::new(a), GraphNode::new(b)])?;
/// let path = shortest_path(&graph, a, b)?;
/// assert_eq!(path.points(), &[a, b]);
/// assert_eq!(path.distance(), 3.0);
/// # Ok(())
/// # }
/// ```
pub fn shortest_path(
    graph: &DistanceGraph,
    origin: Coord<f64>,
    destination: Coord<f64>,
) -> Result<Path, PathError> {
    let start = graph
        .index_of(origin)
        .ok_or(PathError::UnknownOrigin { point: origin })?;
    let goal = graph
        .index_of(destination)
        .ok_or(PathError::UnknownDestination { point: destination })?;
    if start == goal {
        return Ok(Path::single(graph.nodes[start].location));
    }

    let n = graph.node_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut previous: Vec<Option<(usize, f64)>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier = BinaryHeap::new();

    distances[start] = 0.0;
    frontier.push(Frontier {
        distance: 0.0,
        node: start,
    });

    while let Some(Frontier { distance, node }) = frontier.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        if node == goal {
            break;
        }
        for edge in &graph.adjacency[node] {
            if visited[edge.to] {
                continue;
            }
            let candidate = distance + edge.weight;
            if improves(candidate, distances[edge.to]) {
                distances[edge.to] = candidate;
                previous[edge.to] = Some((node, edge.weight));
                frontier.push(Frontier {
                    distance: candidate,
                    node: edge.to,
                });
            }
        }
    }

    if !visited[goal] {
        return Err(PathError::Unreachable {
            origin,
            destination,
        });
    }

    let mut nodes = vec![goal];
    let mut segments = Vec::new();
    let mut cursor = goal;
    while let Some((prev, weight)) = previous[cursor] {
        nodes.push(prev);
        segments.push(weight);
        cursor = prev;
    }
    nodes.reverse();
    segments.reverse();

    let points = nodes
        .into_iter()
        .map(|idx| graph.nodes[idx].location)
        .collect();
    let distance = segments.iter().sum();
    Ok(Path {
        points,
        segments,
        distance,
    })
}
