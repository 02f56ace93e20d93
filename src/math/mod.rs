pub mod predicates;

pub use predicates::{coplanar, left, orientation, points_equal, signed_volume, Orientation};

/// 3D point with integer coordinates.
///
/// Coordinates are exact; two points are the same point whenever their
/// coordinates match, regardless of where they sit in a point set.
pub type Point3 = nalgebra::Point3<i32>;

/// Default extent of the coordinate window along each axis.
pub const WINDOW_SIZE: i32 = 500;
