//! Distance functions between geographic points.
//!
//! Two metrics are supported and must not be mixed within a run: a planar
//! Euclidean distance on raw degrees, useful only for relative comparisons,
//! and the great-circle Haversine distance in kilometres, which is required
//! whenever distances feed time-based feasibility checks against speeds in
//! km/h.

use geo::{Coord, Distance, Euclidean, Point};

use crate::PointKey;

/// Mean Earth radius used by [`Haversine`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A pure, symmetric distance function.
///
/// Implementations must satisfy `distance(a, b) == distance(b, a)`,
/// `distance(a, a) == 0.0` and return non-negative values.
///
/// # Examples
///
/// ```rust
/// use waybill_core::{Metric, Planar, lat_lon};
///
/// let d = Planar.distance(lat_lon(0.0, 0.0), lat_lon(0.0, 3.0));
/// assert_eq!(d, 3.0);
/// ```
pub trait Metric: Send + Sync {
    /// Return the distance between `from` and `to`.
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> f64;
}

/// Euclidean distance on the raw coordinate pair.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Planar;

impl Metric for Planar {
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        Euclidean.distance(Point::from(from), Point::from(to))
    }
}

/// Great-circle distance in kilometres on a sphere of radius
/// [`EARTH_RADIUS_KM`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Haversine;

impl Metric for Haversine {
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        // Canonical argument order keeps the result bit-for-bit symmetric.
        let (a, b) = if PointKey::from(from) <= PointKey::from(to) {
            (from, to)
        } else {
            (to, from)
        };
        let lat1 = a.y.to_radians();
        let lat2 = b.y.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (b.x - a.x).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());
        EARTH_RADIUS_KM * c
    }
}

/// Metric selection for a deployment.
///
/// # Examples
///
/// ```rust
/// use waybill_core::{DistanceMetric, Metric, lat_lon};
///
/// let metric = DistanceMetric::Planar;
/// assert_eq!(metric.distance(lat_lon(0.0, 0.0), lat_lon(3.0, 4.0)), 5.0);
/// assert_eq!(DistanceMetric::default(), DistanceMetric::Haversine);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DistanceMetric {
    /// Euclidean distance in coordinate degrees.
    Planar,
    /// Great-circle distance in kilometres.
    #[default]
    Haversine,
}

impl DistanceMetric {
    /// Unit in which the metric reports distances.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Planar => "degrees",
            Self::Haversine => "km",
        }
    }
}

impl Metric for DistanceMetric {
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        match self {
            Self::Planar => Planar.distance(from, to),
            Self::Haversine => Haversine.distance(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lat_lon;
    use rstest::rstest;

    #[rstest]
    #[case(lat_lon(0.0, 0.0), lat_lon(0.0, 3.0), 3.0)]
    #[case(lat_lon(0.0, 0.0), lat_lon(3.0, 4.0), 5.0)]
    #[case(lat_lon(0.0, 0.0), lat_lon(0.0, 1.0), 1.0)]
    fn planar_matches_pythagoras(
        #[case] from: Coord<f64>,
        #[case] to: Coord<f64>,
        #[case] expected: f64,
    ) {
        assert!((Planar.distance(from, to) - expected).abs() < 1e-12);
    }

    #[rstest]
    fn haversine_one_degree_of_latitude() {
        let d = Haversine.distance(lat_lon(0.0, 0.0), lat_lon(1.0, 0.0));
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((d - expected).abs() < 1e-9, "got {d}, expected {expected}");
    }

    #[rstest]
    fn haversine_between_brazilian_capitals_is_plausible() {
        let sao_paulo = lat_lon(-23.5505, -46.6333);
        let brasilia = lat_lon(-15.7975, -47.8919);
        let d = Haversine.distance(sao_paulo, brasilia);
        assert!((860.0..880.0).contains(&d), "got {d} km");
    }

    #[rstest]
    #[case(DistanceMetric::Planar)]
    #[case(DistanceMetric::Haversine)]
    fn metrics_are_symmetric_and_zero_on_identity(#[case] metric: DistanceMetric) {
        let a = lat_lon(-8.05428, -34.8813);
        let b = lat_lon(-27.5969, -48.5495);
        assert_eq!(metric.distance(a, b), metric.distance(b, a));
        assert_eq!(metric.distance(a, a), 0.0);
    }

    #[rstest]
    fn metric_units_are_reported() {
        assert_eq!(DistanceMetric::Planar.unit(), "degrees");
        assert_eq!(DistanceMetric::Haversine.unit(), "km");
    }
}
