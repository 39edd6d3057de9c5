//! Weighted graphs over depot and destination points.
//!
//! [`DistanceGraph::complete`] connects every pair of distinct points with an
//! edge weighted by a [`Metric`](crate::Metric). This is a metric closure, not
//! a road network: it is built once per run in `O(n²)` and never mutated.
//! [`DistanceGraph::from_edges`] accepts an explicit, possibly sparse, edge
//! list for callers that need real multi-hop paths.
//!
//! Nodes are identified by exact coordinate equality through
//! [`PointKey`](crate::PointKey); duplicate points collapse into one node.

mod error;
mod path;

use std::collections::HashMap;

use geo::Coord;
use log::debug;

pub use error::{GraphError, PathError};
pub use path::{Path, Waypoint, shortest_path};

use crate::point::is_finite;
use crate::{Metric, PointKey};

/// A point in the graph with an optional display label.
///
/// # Examples
/// ```
/// use waybill_core::{GraphNode, lat_lon};
///
/// let node = GraphNode::labelled(lat_lon(-15.7975, -47.8919), "Brasília");
/// assert_eq!(node.label.as_deref(), Some("Brasília"));
/// assert!(GraphNode::new(lat_lon(0.0, 0.0)).label.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphNode {
    /// Node position.
    pub location: Coord<f64>,
    /// Human-readable name, such as a depot or destination name.
    pub label: Option<String>,
}

impl GraphNode {
    /// Construct an unlabelled node.
    pub const fn new(location: Coord<f64>) -> Self {
        Self {
            location,
            label: None,
        }
    }

    /// Construct a node with a display label.
    pub fn labelled(location: Coord<f64>, label: impl Into<String>) -> Self {
        Self {
            location,
            label: Some(label.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    to: usize,
    weight: f64,
}

/// Adjacency-list graph keyed by exact point identity.
///
/// The graph has no self-loops and is symmetric: `weight(a, b)` always
/// equals `weight(b, a)`.
///
/// # Examples
/// ```
/// use waybill_core::{DistanceGraph, GraphNode, Planar, lat_lon};
///
/// # fn main() -> Result<(), waybill_core::GraphError> {
/// let graph = DistanceGraph::complete(
///     &Planar,
///     [
///         GraphNode::new(lat_lon(0.0, 0.0)),
///         GraphNode::new(lat_lon(0.0, 3.0)),
///         GraphNode::new(lat_lon(4.0, 0.0)),
///     ],
/// )?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.weight(lat_lon(0.0, 3.0), lat_lon(4.0, 0.0)), Some(5.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<PointKey, usize>,
    adjacency: Vec<Vec<Edge>>,
}

impl DistanceGraph {
    /// Build the complete graph over `nodes`, weighting each edge with
    /// `metric`.
    ///
    /// Returns [`GraphError::EmptyInput`] when `nodes` is empty.
    pub fn complete<M, I>(metric: &M, nodes: I) -> Result<Self, GraphError>
    where
        M: Metric + ?Sized,
        I: IntoIterator<Item = GraphNode>,
    {
        let mut graph = Self::with_nodes(nodes)?;
        let n = graph.nodes.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let weight = metric.distance(graph.nodes[i].location, graph.nodes[j].location);
                graph.adjacency[i].push(Edge { to: j, weight });
                graph.adjacency[j].push(Edge { to: i, weight });
            }
        }
        debug!(
            "Built complete distance graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Build a graph from explicit undirected edges `(a, b, weight)`.
    ///
    /// Every endpoint must appear in `nodes`. Self-loops are ignored and a
    /// repeated pair keeps its last weight.
    pub fn from_edges<I, E>(nodes: I, edges: E) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = GraphNode>,
        E: IntoIterator<Item = (Coord<f64>, Coord<f64>, f64)>,
    {
        let mut graph = Self::with_nodes(nodes)?;
        for (from, to, weight) in edges {
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(GraphError::InvalidWeight { weight });
            }
            let a = graph
                .index_of(from)
                .ok_or(GraphError::UnknownEndpoint { point: from })?;
            let b = graph
                .index_of(to)
                .ok_or(GraphError::UnknownEndpoint { point: to })?;
            if a != b {
                graph.connect(a, b, weight);
            }
        }
        Ok(graph)
    }

    fn with_nodes<I>(nodes: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = GraphNode>,
    {
        let mut graph = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        };
        for node in nodes {
            if !is_finite(node.location) {
                return Err(GraphError::NonFiniteNode {
                    point: node.location,
                });
            }
            let key = PointKey::from(node.location);
            if graph.index.contains_key(&key) {
                debug!(
                    "Collapsed duplicate graph node at ({}, {})",
                    node.location.y, node.location.x
                );
                continue;
            }
            graph.index.insert(key, graph.nodes.len());
            graph.nodes.push(node);
            graph.adjacency.push(Vec::new());
        }
        if graph.nodes.is_empty() {
            return Err(GraphError::EmptyInput);
        }
        Ok(graph)
    }

    fn connect(&mut self, a: usize, b: usize, weight: f64) {
        Self::upsert(&mut self.adjacency[a], b, weight);
        Self::upsert(&mut self.adjacency[b], a, weight);
    }

    fn upsert(edges: &mut Vec<Edge>, to: usize, weight: f64) {
        match edges.iter_mut().find(|edge| edge.to == to) {
            Some(edge) => edge.weight = weight,
            None => edges.push(Edge { to, weight }),
        }
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Whether `point` is a node.
    pub fn contains(&self, point: Coord<f64>) -> bool {
        self.index_of(point).is_some()
    }

    /// Label attached to the node at `point`, if any.
    pub fn label(&self, point: Coord<f64>) -> Option<&str> {
        self.index_of(point)
            .and_then(|idx| self.nodes[idx].label.as_deref())
    }

    /// Weight of the direct edge between `from` and `to`.
    pub fn weight(&self, from: Coord<f64>, to: Coord<f64>) -> Option<f64> {
        let a = self.index_of(from)?;
        let b = self.index_of(to)?;
        self.adjacency[a]
            .iter()
            .find(|edge| edge.to == b)
            .map(|edge| edge.weight)
    }

    /// Direct neighbours of `point` with their edge weights.
    pub fn neighbours(&self, point: Coord<f64>) -> impl Iterator<Item = (Coord<f64>, f64)> + '_ {
        self.index_of(point)
            .into_iter()
            .flat_map(move |idx| self.adjacency[idx].iter())
            .map(move |edge| (self.nodes[edge.to].location, edge.weight))
    }

    fn index_of(&self, point: Coord<f64>) -> Option<usize> {
        self.index.get(&PointKey::from(point)).copied()
    }
}
