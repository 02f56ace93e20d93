#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use hull3d::math::{coplanar, left, signed_volume};
use hull3d::operations::query::verify_hull;
use hull3d::{
    compute_hull, BruteForceHull, Generator, GeneratorParams, HullParams, Point3,
};

fn p(x: i32, y: i32, z: i32) -> Point3 {
    Point3::new(x, y, z)
}

fn set(triples: &[[usize; 3]]) -> BTreeSet<[usize; 3]> {
    triples.iter().copied().collect()
}

/// Asserts that no point off a face is on or outward of its plane.
fn assert_supporting(points: &[Point3], hull: &hull3d::Hull) {
    for face in hull {
        let [a, b, c] = face.vertices(points).unwrap();
        for q in points {
            if *q != a && *q != b && *q != c {
                assert!(left(&a, &b, &c, q), "{q:?} is not inward of {face:?}");
            }
        }
    }
}

#[test]
fn regular_tetrahedron() {
    let points = vec![p(0, 0, 0), p(10, 10, 0), p(10, 0, 10), p(0, 10, 10)];
    let hull = compute_hull(&points);
    assert_eq!(
        hull.index_set(),
        set(&[[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]])
    );
    assert_supporting(&points, &hull);
}

#[test]
fn cube_corners_have_no_strictly_supporting_triangles() {
    let mut points = Vec::new();
    for x in [0, 10] {
        for y in [0, 10] {
            for z in [0, 10] {
                points.push(p(x, y, z));
            }
        }
    }
    // Every side triangle has a fourth corner on its plane, which the strict
    // test treats as disqualifying; every other triangle cuts the interior.
    let hull = compute_hull(&points);
    assert!(hull.is_empty());
}

#[test]
fn cube_with_centre_point_keeps_interior_out() {
    let mut points = vec![p(5, 5, 5)];
    for x in [0, 10] {
        for y in [0, 10] {
            for z in [0, 10] {
                points.push(p(x, y, z));
            }
        }
    }
    let hull = compute_hull(&points);
    assert!(hull.iter().all(|f| !f.contains(0)));
}

#[test]
fn square_pyramid() {
    let points = vec![
        p(0, 0, 0),
        p(10, 0, 0),
        p(10, 10, 0),
        p(0, 10, 0),
        p(5, 5, 10),
    ];
    let hull = compute_hull(&points);
    assert_eq!(
        hull.index_set(),
        set(&[[0, 1, 4], [1, 2, 4], [2, 3, 4], [0, 3, 4]])
    );
    // No triangle lies in the base plane.
    assert!(hull.iter().all(|f| f.contains(4)));
    assert_eq!(hull.len(), 12);
    assert_supporting(&points, &hull);
}

#[test]
fn duplicated_value_never_appears_twice_in_a_face() {
    let points = vec![
        p(0, 0, 0),
        p(10, 0, 0),
        p(0, 10, 0),
        p(0, 0, 10),
        p(0, 0, 10),
        p(0, 0, 0),
    ];
    let hull = compute_hull(&points);
    assert!(!hull.is_empty());
    for face in &hull {
        let [a, b, c] = face.vertices(&points).unwrap();
        assert!(a != b && b != c && a != c);
    }
    let deduped = BruteForceHull::new()
        .with_params(HullParams::default().with_dedup(true))
        .execute(&points);
    assert_eq!(deduped.len(), 4);
}

#[test]
fn recomputing_is_idempotent() {
    let points = Generator::Random
        .generate(&GeneratorParams::with_count(14).with_seed(9))
        .unwrap();
    let first = compute_hull(&points);
    let second = compute_hull(&points);
    assert_eq!(first.index_set(), second.index_set());
    assert_eq!(first, second);
}

#[test]
fn parallel_enumeration_matches_sequential() {
    let points = Generator::Pyramid
        .generate(&GeneratorParams::with_count(16).with_seed(5))
        .unwrap();
    let sequential = compute_hull(&points);
    let parallel = BruteForceHull::new()
        .with_params(HullParams::default().with_parallel(true))
        .execute(&points);
    assert_eq!(sequential, parallel);
}

#[test]
fn generated_sets_yield_supporting_faces() {
    let params = GeneratorParams::with_count(12).with_seed(3);
    for generator in Generator::ALL {
        if generator == Generator::SphereOfSpheres {
            continue;
        }
        let points = generator.generate(&params).unwrap();
        let hull = compute_hull(&points);
        assert_eq!(verify_hull(&points, &hull), Ok(()), "{generator}");
        if points.len() > 3 {
            assert_supporting(&points, &hull);
        }
    }
}

#[test]
fn coplanar_matches_zero_volume_on_generated_points() {
    let points = Generator::Cross
        .generate(&GeneratorParams::with_count(8))
        .unwrap();
    for a in &points {
        for b in &points {
            for c in &points {
                for d in &points {
                    assert_eq!(coplanar(a, b, c, d), signed_volume(a, b, c, d) == 0);
                }
            }
        }
    }
}
