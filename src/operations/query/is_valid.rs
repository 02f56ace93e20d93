use crate::error::ValidationError;
use crate::math::{left, points_equal, Point3};
use crate::topology::Hull;

/// Checks that every face of `hull` lies on a supporting plane of `points`.
///
/// A face passes when its indices are in bounds, its three values are
/// pairwise distinct, and every point whose value differs from all three is
/// strictly inward. The trivial single face of a three-point set is not
/// subject to the supporting-plane test.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, in face order.
pub fn verify_hull(points: &[Point3], hull: &Hull) -> Result<(), ValidationError> {
    for (idx, face) in hull.iter().enumerate() {
        let [a, b, c] = face.vertices(points).ok_or(ValidationError::IndexOutOfBounds {
            face: idx,
            len: points.len(),
        })?;

        if points.len() == 3 {
            continue;
        }

        if points_equal(&a, &b) || points_equal(&b, &c) || points_equal(&a, &c) {
            return Err(ValidationError::DegenerateFace { face: idx });
        }

        let outward = points.iter().position(|p| {
            !points_equal(p, &a) && !points_equal(p, &b) && !points_equal(p, &c) && !left(&a, &b, &c, p)
        });
        if let Some(point) = outward {
            return Err(ValidationError::OutwardPoint { face: idx, point });
        }
    }
    Ok(())
}

/// Validates a hull against the point set it was computed from.
pub struct IsValid<'a> {
    points: &'a [Point3],
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(points: &'a [Point3]) -> Self {
        Self { points }
    }

    /// Executes the validation, returning `true` if every face is supporting.
    #[must_use]
    pub fn execute(&self, hull: &Hull) -> bool {
        verify_hull(self.points, hull).is_ok()
    }
}
