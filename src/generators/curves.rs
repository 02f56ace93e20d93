//! Points sampled along parametric curves.

// Coordinates are bounded by the window, so float-to-int truncation is intended
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use rand::rngs::StdRng;
use rand::Rng;

use crate::math::Point3;

/// Helix around the window's vertical axis, one turn every `2π / step` points.
pub(super) fn spring(n: usize, w: i32) -> Vec<Point3> {
    // Integer division, so large counts collapse the helix onto one point.
    let step = (i64::from(w) / i64::try_from(n).unwrap_or(i64::MAX)) as f64;
    let size = f64::from(w);
    (0..n)
        .map(|i| {
            let t = i as f64 * step;
            Point3::new(
                (size * ((t.cos() + 1.0) * 0.5)) as i32,
                (size * ((t.sin() + 1.0) * 0.5)) as i32,
                t as i32,
            )
        })
        .collect()
}

/// Classic heart curve in the xy-plane with random depth in `[0, 200)`.
pub(super) fn heart(rng: &mut StdRng, n: usize) -> Vec<Point3> {
    const R: f64 = 100.0;
    (0..n)
        .map(|i| {
            let t = i as f64;
            let x = R * 4.0 * t.sin().powi(3);
            let y = R
                * 0.25
                * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
            Point3::new(x as i32, y as i32, rng.gen_range(0..200))
        })
        .collect()
}

/// Teardrop outline with random depth in `(-520, 0]`.
pub(super) fn droplet(rng: &mut StdRng, n: usize) -> Vec<Point3> {
    const OFFSET: f64 = 200.0;
    const SCALE_X: f64 = 120.0;
    const SCALE_Y: f64 = 250.0;
    const SCALE_Z: i32 = 520;
    (0..n)
        .map(|i| {
            let t = i as f64;
            let x = SCALE_X * (1.0 - t.sin()) * t.cos() + OFFSET;
            let y = SCALE_Y * (1.0 - t).sin() + OFFSET;
            Point3::new(x as i32, y as i32, -rng.gen_range(0..SCALE_Z))
        })
        .collect()
}
