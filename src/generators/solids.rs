//! Fixed shapes.

// Coordinates are bounded by the window, so float-to-int truncation is intended
#![allow(clippy::cast_possible_truncation)]

use std::f64::consts::PI;

use crate::math::Point3;

/// Octahedron around `(0, 150, 0)`; every point past the sixth sits at its centre.
pub(super) fn diamond(n: usize) -> Vec<Point3> {
    let mut points = vec![
        Point3::new(0, 200, 0),
        Point3::new(0, 100, 0),
        Point3::new(50, 150, 50),
        Point3::new(-50, 150, 50),
        Point3::new(50, 150, -50),
        Point3::new(-50, 150, -50),
    ];
    points.extend(std::iter::repeat(Point3::new(0, 150, 0)).take(n.saturating_sub(6)));
    points
}

/// Ten-point house: two gable outlines at depth `w/4` and `w/2`.
pub(super) fn house(w: i32) -> Vec<Point3> {
    let q = w / 4;
    (1..=10)
        .map(|j| {
            let (i, depth) = if j > 5 { (j - 5, 2) } else { (j, 1) };
            let y = q * depth;
            match i {
                1 | 2 => Point3::new(q, y, q * i),
                3 => Point3::new(2 * q, y, 3 * q),
                _ => Point3::new(3 * q, y, q * (i - 3)),
            }
        })
        .collect()
}

/// Radius of each sampled sphere.
const SPHERE_RADIUS: f64 = 200.0;

/// Nine spheres whose centres sit on a shell of radius 100 around the window centre.
pub(super) fn sphere_of_spheres(w: i32) -> Vec<Point3> {
    const N_THETA: u32 = 3;
    const N_PHI: u32 = 3;
    let shell = SPHERE_RADIUS / 2.0;
    let dtheta = PI / f64::from(N_THETA);
    let dphi = 2.0 * PI / f64::from(N_PHI);
    let centre = f64::from(w / 2);

    let mut points = Vec::new();
    for i in 0..N_THETA {
        for j in 0..N_PHI {
            let theta = dtheta * f64::from(i);
            let phi = dphi * f64::from(j);
            let x = centre + shell * theta.sin() * phi.cos();
            let y = centre + shell * theta.sin() * phi.sin();
            let z = centre + shell * theta.cos();
            sample_sphere(&mut points, SPHERE_RADIUS, x, y, z);
        }
    }
    points
}

/// Appends a 6 x 6 latitude/longitude sampling of a sphere.
fn sample_sphere(points: &mut Vec<Point3>, radius: f64, x: f64, y: f64, z: f64) {
    const N: u32 = 6;
    let du = 2.0 * PI / f64::from(N);
    let dv = PI / f64::from(N);
    for i in 0..N {
        for j in 0..N {
            let u = du * f64::from(i);
            let v = dv * f64::from(j);
            points.push(Point3::new(
                (x + radius * u.cos() * v.sin()) as i32,
                (y + radius * u.sin() * v.sin()) as i32,
                (z + radius * v.cos()) as i32,
            ));
        }
    }
}
