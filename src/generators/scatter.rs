//! Randomized scatters inside the window.

// Coordinates are bounded by the window, so float-to-int truncation is intended
#![allow(clippy::cast_possible_truncation)]

use rand::rngs::StdRng;
use rand::Rng;

use super::{jitter, tenths};
use crate::math::Point3;

pub(super) fn random(rng: &mut StdRng, n: usize, w: i32) -> Vec<Point3> {
    let base = tenths(w, 3) / 2;
    let span = tenths(w, 7);
    (0..n)
        .map(|_| {
            let x = jitter(rng, base, span);
            let y = jitter(rng, base, span);
            let z = jitter(rng, base, span);
            Point3::new(x, y, z)
        })
        .collect()
}

/// Half the points on a horizontal slab, half on a vertical one.
pub(super) fn cross(rng: &mut StdRng, n: usize, w: i32) -> Vec<Point3> {
    let span = tenths(w, 5);
    let mid = w / 2;
    let mut points = Vec::with_capacity(n);

    let base = tenths(w, 3) / 2;
    for _ in 0..n / 2 {
        let x = jitter(rng, base, span);
        let y = jitter(rng, base, span);
        points.push(Point3::new(x, y, mid));
    }

    let base = tenths(w, 5) / 2;
    for _ in 0..n / 2 {
        let x = jitter(rng, base, span);
        let z = jitter(rng, base, span);
        points.push(Point3::new(x, mid, z));
    }
    points
}

/// Five pyramid corners, then `n - 5` random points in the lower middle.
pub(super) fn pyramid(rng: &mut StdRng, n: usize, w: i32) -> Vec<Point3> {
    let max = f64::from(w);
    let min = f64::from(w / 5);
    let mid = (max + min) / 2.0;
    let half = (max - min) / 2.0;

    let mut points = vec![
        Point3::new(max as i32, min as i32, min as i32),
        Point3::new(max as i32, max as i32, min as i32),
        Point3::new(min as i32, min as i32, min as i32),
        Point3::new(min as i32, max as i32, min as i32),
        Point3::new(mid as i32, mid as i32, max as i32),
    ];

    for _ in 0..n.saturating_sub(5) {
        let x = (mid + min) / 2.0 + half * rng.gen::<f64>();
        let y = (mid + min) / 2.0 + half * rng.gen::<f64>();
        let z = min + half * rng.gen::<f64>();
        points.push(Point3::new(x as i32, y as i32, z as i32));
    }
    points
}

/// `n / 5` vertical lines of five points at random heights.
pub(super) fn vertical_lines(rng: &mut StdRng, n: usize, w: i32) -> Vec<Point3> {
    let base = tenths(w, 3) / 2;
    let span = tenths(w, 7);
    let mut points = Vec::with_capacity(n / 5 * 5);
    for _ in 0..n / 5 {
        let x = jitter(rng, base, span);
        let y = jitter(rng, base, span);
        for _ in 0..5 {
            points.push(Point3::new(x, y, jitter(rng, base, span)));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn random_stays_in_central_band() {
        let points = random(&mut rng(), 200, 500);
        assert_eq!(points.len(), 200);
        for p in &points {
            for c in [p.x, p.y, p.z] {
                assert!((75..425).contains(&c), "coordinate {c} out of band");
            }
        }
    }

    #[test]
    fn cross_has_two_planar_halves() {
        let points = cross(&mut rng(), 21, 500);
        assert_eq!(points.len(), 20);
        assert!(points[..10].iter().all(|p| p.z == 250));
        assert!(points[10..].iter().all(|p| p.y == 250));
    }

    #[test]
    fn pyramid_starts_with_corners() {
        let points = pyramid(&mut rng(), 12, 500);
        assert_eq!(points.len(), 12);
        assert_eq!(points[0], Point3::new(500, 100, 100));
        assert_eq!(points[3], Point3::new(100, 500, 100));
        assert_eq!(points[4], Point3::new(300, 300, 500));
        for p in &points[5..] {
            assert!((200..400).contains(&p.x));
            assert!((200..400).contains(&p.y));
            assert!((100..300).contains(&p.z));
        }
    }

    #[test]
    fn small_pyramid_keeps_corners() {
        assert_eq!(pyramid(&mut rng(), 2, 500).len(), 5);
    }

    #[test]
    fn vertical_lines_share_xy() {
        let points = vertical_lines(&mut rng(), 17, 500);
        assert_eq!(points.len(), 15);
        for line in points.chunks(5) {
            assert!(line.iter().all(|p| p.x == line[0].x && p.y == line[0].y));
        }
    }
}
