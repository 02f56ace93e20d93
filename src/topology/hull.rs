use std::collections::{BTreeSet, HashSet};

use super::face::Face;
use crate::math::Point3;

/// The faces of a convex hull, computed from one point set snapshot.
///
/// A hull is replaced wholesale whenever its point set changes; it is never
/// updated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hull {
    faces: Vec<Face>,
}

impl Hull {
    /// Creates an empty hull.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the faces in enumeration order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the number of faces, counting permutations separately.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the hull has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Iterates over the faces.
    pub fn iter(&self) -> std::slice::Iter<'_, Face> {
        self.faces.iter()
    }

    /// Consumes the hull, returning its faces.
    #[must_use]
    pub fn into_faces(self) -> Vec<Face> {
        self.faces
    }

    /// Returns the set of faces as unordered index triples.
    #[must_use]
    pub fn index_set(&self) -> BTreeSet<[usize; 3]> {
        self.faces.iter().map(Face::canonical).collect()
    }

    /// Drops faces that repeat an earlier face's triangle, compared by point value.
    ///
    /// The first occurrence of each triangle is kept, so the result preserves
    /// enumeration order. Faces referring outside `points` are dropped.
    #[must_use]
    pub fn dedup_by_value(self, points: &[Point3]) -> Self {
        let mut seen = HashSet::with_capacity(self.faces.len());
        let faces = self
            .faces
            .into_iter()
            .filter(|face| {
                face.canonical_by_value(points)
                    .is_some_and(|key| seen.insert(key))
            })
            .collect();
        Self { faces }
    }
}

impl From<Vec<Face>> for Hull {
    fn from(faces: Vec<Face>) -> Self {
        Self { faces }
    }
}

impl FromIterator<Face> for Hull {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        Self {
            faces: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Hull {
    type Item = &'a Face;
    type IntoIter = std::slice::Iter<'a, Face>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}
