use crate::math::Point3;

/// Sort key giving points a total lexicographic order on `(x, y, z)`.
pub type PointKey = (i32, i32, i32);

pub(crate) fn point_key(p: &Point3) -> PointKey {
    (p.x, p.y, p.z)
}

/// A triangular hull face.
///
/// A face does not own its points: it stores indices into the point set it
/// was computed from, in the order the enumerator visited them. The point
/// set must stay unchanged for as long as the face is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    /// Index of the first vertex.
    pub a: usize,
    /// Index of the second vertex.
    pub b: usize,
    /// Index of the third vertex.
    pub c: usize,
}

impl Face {
    /// Creates a face from three point indices.
    #[must_use]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the indices as an array in stored order.
    #[must_use]
    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Resolves the three vertex coordinates, or `None` if an index is out of bounds.
    #[must_use]
    pub fn vertices(&self, points: &[Point3]) -> Option<[Point3; 3]> {
        Some([
            *points.get(self.a)?,
            *points.get(self.b)?,
            *points.get(self.c)?,
        ])
    }

    /// Returns the indices sorted ascending, identifying the face up to permutation.
    #[must_use]
    pub fn canonical(&self) -> [usize; 3] {
        let mut idx = self.indices();
        idx.sort_unstable();
        idx
    }

    /// Returns the vertex values sorted lexicographically.
    ///
    /// Two faces with the same canonical value triangle are the same
    /// geometric triangle even if they were built from different duplicates.
    #[must_use]
    pub fn canonical_by_value(&self, points: &[Point3]) -> Option<[PointKey; 3]> {
        let mut keys = self.vertices(points)?.map(|p| point_key(&p));
        keys.sort_unstable();
        Some(keys)
    }

    /// Returns `true` if `index` is one of this face's vertices.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.a == index || self.b == index || self.c == index
    }
}
