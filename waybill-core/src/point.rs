//! Geographic points and their canonical identity.
//!
//! Points are plain `geo::Coord<f64>` values. Floating-point coordinates do
//! not implement `Eq` or `Hash`, so graph nodes are keyed by [`PointKey`],
//! which encodes the exact bit pattern of both coordinates. Two points share
//! a key if and only if their coordinates compare equal.

use geo::Coord;

/// Build a coordinate from latitude and longitude in degrees.
///
/// # Examples
/// ```
/// use waybill_core::lat_lon;
///
/// let belem = lat_lon(-1.4557, -48.4902);
/// assert_eq!(belem.y, -1.4557);
/// assert_eq!(belem.x, -48.4902);
/// ```
pub const fn lat_lon(lat: f64, lon: f64) -> Coord<f64> {
    Coord { x: lon, y: lat }
}

/// Tolerance-free hashable identity for a coordinate.
///
/// Negative zero is folded into positive zero so that the key agrees with
/// `==` on `f64`. Callers must only build keys from finite coordinates.
///
/// # Examples
/// ```
/// use waybill_core::{PointKey, lat_lon};
///
/// let a = PointKey::from(lat_lon(0.0, 3.0));
/// let b = PointKey::from(lat_lon(-0.0, 3.0));
/// assert_eq!(a, b);
/// assert_ne!(a, PointKey::from(lat_lon(0.0, 3.000_000_1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey {
    x: u64,
    y: u64,
}

impl PointKey {
    fn component(value: f64) -> u64 {
        if value == 0.0 {
            0.0_f64.to_bits()
        } else {
            value.to_bits()
        }
    }
}

impl From<Coord<f64>> for PointKey {
    fn from(point: Coord<f64>) -> Self {
        Self {
            x: Self::component(point.x),
            y: Self::component(point.y),
        }
    }
}

impl From<&Coord<f64>> for PointKey {
    fn from(point: &Coord<f64>) -> Self {
        Self::from(*point)
    }
}

/// Return whether both coordinates of `point` are finite.
pub(crate) fn is_finite(point: Coord<f64>) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
