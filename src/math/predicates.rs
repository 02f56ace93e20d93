//! Exact orientation predicates on integer points.
//!
//! All predicates derive from [`signed_volume`], which is evaluated in
//! `i128`. Every coordinate difference of two `i32` values fits in 33 bits,
//! so a triple product stays below 2^100 and the sum of six such terms
//! cannot overflow for any pair of representable inputs.

use nalgebra::Vector3;

use super::Point3;

/// Which side of an oriented plane a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Strictly on the side toward which `(b - a) x (c - a)` points.
    Inward,
    /// On the plane.
    Coplanar,
    /// Strictly on the opposite side.
    Outward,
}

impl Orientation {
    /// Classifies the sign of a signed volume.
    #[must_use]
    pub fn from_volume(volume: i128) -> Self {
        match volume.signum() {
            -1 => Self::Inward,
            0 => Self::Coplanar,
            _ => Self::Outward,
        }
    }
}

fn widen(p: &Point3) -> Vector3<i128> {
    Vector3::new(i128::from(p.x), i128::from(p.y), i128::from(p.z))
}

/// Six times the signed volume of the tetrahedron `(a, b, c, d)`.
///
/// Equals the determinant of the rows `a - d`, `b - d`, `c - d`. The result
/// is negative when `d` lies on the side of plane `(a, b, c)` that the
/// right-handed normal `(b - a) x (c - a)` points to, positive on the other
/// side and zero when the four points are coplanar.
#[must_use]
pub fn signed_volume(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> i128 {
    let d = widen(d);
    let ad = widen(a) - d;
    let bd = widen(b) - d;
    let cd = widen(c) - d;
    ad.dot(&bd.cross(&cd))
}

/// Returns `true` if `p`, `q`, `r` and `t` lie on one plane.
#[must_use]
pub fn coplanar(p: &Point3, q: &Point3, r: &Point3, t: &Point3) -> bool {
    signed_volume(p, q, r, t) == 0
}

/// Returns `true` if `d` is strictly on the inward side of oriented plane `(a, b, c)`.
#[must_use]
pub fn left(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> bool {
    signed_volume(a, b, c, d) < 0
}

/// Classifies `d` against oriented plane `(a, b, c)`.
#[must_use]
pub fn orientation(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> Orientation {
    Orientation::from_volume(signed_volume(a, b, c, d))
}

/// Returns `true` if all three coordinates match.
#[must_use]
pub fn points_equal(a: &Point3, b: &Point3) -> bool {
    a == b
}
