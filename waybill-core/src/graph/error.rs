use geo::Coord;
use thiserror::Error;

/// Errors raised while building a [`crate::DistanceGraph`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// No points were supplied.
    ///
    /// A graph needs at least one depot or destination. Callers should
    /// validate their request before building.
    #[error("at least one point is required to build a distance graph")]
    EmptyInput,
    /// A node had a NaN or infinite coordinate.
    #[error("graph node at ({}, {}) has a non-finite coordinate", .point.y, .point.x)]
    NonFiniteNode {
        /// Offending point.
        point: Coord<f64>,
    },
    /// An explicit edge referenced a point that is not a node.
    #[error("edge endpoint ({}, {}) is not a graph node", .point.y, .point.x)]
    UnknownEndpoint {
        /// Missing endpoint.
        point: Coord<f64>,
    },
    /// An explicit edge had a negative or non-finite weight.
    #[error("edge weight {weight} is invalid; weights must be finite and non-negative")]
    InvalidWeight {
        /// Rejected weight.
        weight: f64,
    },
}

/// Errors from [`crate::shortest_path`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// The origin is not a node of the graph.
    #[error("origin ({}, {}) is not a graph node", .point.y, .point.x)]
    UnknownOrigin {
        /// Requested origin.
        point: Coord<f64>,
    },
    /// The destination is not a node of the graph.
    #[error("destination ({}, {}) is not a graph node", .point.y, .point.x)]
    UnknownDestination {
        /// Requested destination.
        point: Coord<f64>,
    },
    /// No sequence of edges connects origin and destination.
    #[error(
        "no path from ({}, {}) to ({}, {})",
        .origin.y,
        .origin.x,
        .destination.y,
        .destination.x
    )]
    Unreachable {
        /// Requested origin.
        origin: Coord<f64>,
        /// Requested destination.
        destination: Coord<f64>,
    },
}
