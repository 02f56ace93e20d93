//! Brute-force hull enumeration.
//!
//! Every ordered triple of point indices is a candidate face. A candidate
//! whose three values are pairwise distinct is kept when every other point
//! value lies strictly on its inward side. The cost is O(n^4): three index
//! loops, each candidate scanning the whole point set.

use rayon::prelude::*;
use tracing::{debug, info};

use super::params::HullParams;
use crate::math::{left, points_equal, Point3};
use crate::topology::{Face, Hull};

/// Computes the convex hull faces of a point set with default parameters.
///
/// Fewer than three points yield an empty hull. Exactly three points yield
/// the single face `(0, 1, 2)` without any test. Otherwise every extreme
/// ordered triple becomes a face, so each hull triangle is reported once per
/// cyclic rotation of its vertices.
#[must_use]
pub fn compute_hull(points: &[Point3]) -> Hull {
    BruteForceHull::new().execute(points)
}

/// Brute-force hull operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceHull {
    params: HullParams,
}

/// Faces found for one first index, with the number of candidates examined.
struct AnchorScan {
    faces: Vec<Face>,
    candidates: usize,
}

impl BruteForceHull {
    /// Creates a new `BruteForceHull` operation with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets custom enumeration parameters.
    #[must_use]
    pub fn with_params(mut self, params: HullParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the enumeration over `points`.
    ///
    /// The returned faces index into `points`; the slice must not change
    /// while the hull is in use.
    #[must_use]
    pub fn execute(&self, points: &[Point3]) -> Hull {
        let n = points.len();
        if n < 3 {
            return Hull::new();
        }
        if n == 3 {
            return Hull::from(vec![Face::new(0, 1, 2)]);
        }

        let scans: Vec<AnchorScan> = if self.params.parallel {
            (0..n)
                .into_par_iter()
                .map(|i| scan_anchor(points, i))
                .collect()
        } else {
            (0..n).map(|i| scan_anchor(points, i)).collect()
        };

        let candidates: usize = scans.iter().map(|s| s.candidates).sum();
        let hull: Hull = scans.into_iter().flat_map(|s| s.faces).collect();
        debug!(
            candidates,
            accepted = hull.len(),
            rejected = candidates - hull.len(),
            "Scanned candidate faces"
        );

        let hull = if self.params.dedup {
            hull.dedup_by_value(points)
        } else {
            hull
        };

        info!(points = n, faces = hull.len(), "Computed hull");
        hull
    }
}

fn scan_anchor(points: &[Point3], i: usize) -> AnchorScan {
    let mut faces = Vec::new();
    let mut candidates = 0;
    let pi = &points[i];
    for (j, pj) in points.iter().enumerate() {
        if points_equal(pi, pj) {
            continue;
        }
        for (k, pk) in points.iter().enumerate() {
            if points_equal(pi, pk) || points_equal(pj, pk) {
                continue;
            }
            candidates += 1;
            if is_extreme(points, pi, pj, pk) {
                faces.push(Face::new(i, j, k));
            }
        }
    }
    AnchorScan { faces, candidates }
}

/// Returns `true` if no point other than `a`, `b`, `c` lies on or outward of plane `(a, b, c)`.
fn is_extreme(points: &[Point3], a: &Point3, b: &Point3, c: &Point3) -> bool {
    points.iter().all(|p| {
        points_equal(p, a) || points_equal(p, b) || points_equal(p, c) || left(a, b, c, p)
    })
}
