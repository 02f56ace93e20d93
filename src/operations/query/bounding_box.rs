use crate::math::Point3;

/// An axis-aligned bounding box with integer corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }
}

/// Computes the axis-aligned bounding box of a point set.
pub struct BoundingBox;

impl BoundingBox {
    /// Returns the bounding box of `points`, or `None` for an empty set.
    #[must_use]
    pub fn of(points: &[Point3]) -> Option<Aabb> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(
            Aabb {
                min: *first,
                max: *first,
            },
            |b, p| Aabb {
                min: Point3::new(b.min.x.min(p.x), b.min.y.min(p.y), b.min.z.min(p.z)),
                max: Point3::new(b.max.x.max(p.x), b.max.y.max(p.y), b.max.z.max(p.z)),
            },
        ))
    }
}
