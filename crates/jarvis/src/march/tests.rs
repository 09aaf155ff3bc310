use super::*;
use crate::geom::Point;
use crate::sample::{fill_model, CloudCfg, Distribution, ReplayToken};
use crate::verify;
use proptest::prelude::*;
use std::f64::consts::PI;

fn cloud_of(points: &[(i32, i32)]) -> PointCloud {
    let mut cloud = PointCloud::new();
    cloud
        .extend(points.iter().map(|&(x, y)| Point::new(x, y)))
        .unwrap();
    cloud
}

fn pts(points: &[(i32, i32)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn triangle_with_interior_point() {
    let mut cloud = cloud_of(&[(0, 0), (2, 4), (2, 2), (4, 0)]);
    let mut marcher = JarvisMarcher::new(&mut cloud).unwrap();
    marcher.solve().unwrap();
    assert_eq!(marcher.state(), MarchState::Done);
    let hull = marcher.hull().unwrap();
    assert!(hull.is_closed());
    assert_eq!(hull.points(), pts(&[(0, 0), (2, 4), (4, 0)]).as_slice());
    assert_eq!(hull.edges().len(), 3);
    assert_eq!(hull.angles().len(), 3);
    assert_eq!(hull.edges()[2].end, Point::ORIGIN);
    verify::check(&cloud).unwrap();
}

#[test]
fn colinear_cloud_is_degenerate() {
    let mut cloud = cloud_of(&[(0, 1), (1, 1), (2, 1)]);
    let mut marcher = JarvisMarcher::new(&mut cloud).unwrap();
    let err = marcher.solve().unwrap_err();
    assert!(matches!(err, HullError::DegenerateGeometry(_)));
    assert!(!err.is_contract_violation());
}

#[test]
fn vertical_colinear_cloud_is_degenerate() {
    let mut cloud = cloud_of(&[(3, 0), (3, 5), (3, 2), (3, 9)]);
    let mut marcher = JarvisMarcher::new(&mut cloud).unwrap();
    assert!(matches!(
        marcher.solve(),
        Err(HullError::DegenerateGeometry(_))
    ));
}

#[test]
fn too_few_points_fail_up_front() {
    let mut cloud = cloud_of(&[(0, 1), (1, 1)]);
    assert!(matches!(
        JarvisMarcher::new(&mut cloud),
        Err(HullError::DegenerateGeometry(_))
    ));
    // Duplicates do not count.
    let mut cloud = cloud_of(&[(0, 1), (1, 1), (1, 1), (0, 1)]);
    assert!(JarvisMarcher::new(&mut cloud).is_err());
    assert!(cloud.hull().is_none());
}

#[test]
fn iterate_walks_one_candidate_per_call() {
    let mut cloud = cloud_of(&[(0, 0), (2, 4), (2, 2), (4, 0)]);
    let mut marcher = JarvisMarcher::new(&mut cloud).unwrap();
    assert!(marcher.hull().is_none());
    assert_eq!(marcher.state(), MarchState::Seeking);

    // Self-comparison is skipped.
    assert!(marcher.iterate().unwrap());
    assert_eq!(marcher.hull().unwrap().points(), &[Point::ORIGIN]);
    assert_eq!(marcher.next_point(), None);
    assert_eq!(marcher.best_point(), None);

    assert!(marcher.iterate().unwrap());
    assert_eq!(marcher.next_point(), Some(Point::new(2, 4)));
    assert_eq!(marcher.best_point(), Some(Point::new(2, 4)));
    let next = marcher.next_vector().unwrap();
    assert_eq!(next.start, Point::ORIGIN);
    assert_eq!(next.end, Point::new(2, 4));
    assert!(marcher.next_angle().unwrap().angle >= PI);

    assert!(marcher.iterate().unwrap());
    assert_eq!(marcher.next_point(), Some(Point::new(2, 2)));
    assert_eq!(marcher.best_point(), Some(Point::new(2, 4)));

    assert!(marcher.iterate().unwrap());
    assert_eq!(marcher.next_point(), Some(Point::new(4, 0)));
    assert_eq!(marcher.best_vector().map(|v| v.end), Some(Point::new(2, 4)));
    assert_eq!(marcher.state(), MarchState::Exhausted);

    // Exhausted: append the best candidate and reset the scan.
    assert!(marcher.iterate().unwrap());
    assert_eq!(marcher.state(), MarchState::Seeking);
    assert!(marcher.scan().is_idle());
    assert_eq!(
        marcher.hull().unwrap().points(),
        pts(&[(0, 0), (2, 4)]).as_slice()
    );
    assert_eq!(marcher.hull().unwrap().cur_point(), Point::new(2, 4));
    assert_eq!(marcher.steps(), 5);
}

#[test]
fn finished_march_does_no_more_work() {
    let mut cloud = cloud_of(&[(0, 0), (2, 4), (2, 2), (4, 0)]);
    let mut marcher = JarvisMarcher::new(&mut cloud).unwrap();
    let mut calls = 0;
    while marcher.iterate().unwrap() {
        calls += 1;
    }
    // Three rounds of four measurements plus one append each; the last call returns false.
    assert_eq!(calls + 1, 15);
    assert_eq!(marcher.steps(), 15);
    assert!(!marcher.iterate().unwrap());
    assert_eq!(marcher.steps(), 15);
    marcher.solve().unwrap();
    assert_eq!(marcher.hull().unwrap().points().len(), 3);
}

#[test]
fn scan_is_idle_between_accepted_vertices() {
    let mut cloud = cloud_of(&[(1, 1), (5, 0), (6, 6), (0, 5), (3, 3)]);
    let mut marcher = JarvisMarcher::new(&mut cloud).unwrap();
    let mut vertices = 0;
    while marcher.iterate().unwrap() {
        let now = marcher.hull().unwrap().points().len();
        if now != vertices {
            vertices = now;
            if vertices > 1 {
                assert!(marcher.scan().is_idle());
                assert!(marcher.next_point().is_none());
                assert!(marcher.best_point().is_none());
            }
        }
    }
    verify::check(&cloud).unwrap();
}

#[test]
fn colinear_boundary_points_walk_to_the_seed() {
    // Seed (0,1) sits between (0,0) and (0,2) on the left boundary.
    let mut cloud = cloud_of(&[(0, 1), (0, 2), (0, 0), (2, 0)]);
    let mut marcher = JarvisMarcher::new(&mut cloud).unwrap();
    marcher.solve().unwrap();
    assert_eq!(
        marcher.hull().unwrap().points(),
        pts(&[(0, 1), (0, 2), (2, 0), (0, 0)]).as_slice()
    );
    verify::check(&cloud).unwrap();
}

#[test]
fn nearer_codirectional_candidate_wins() {
    // (0,3) and (0,6) are both straight up from the seed; (0,3) must come first.
    let mut cloud = cloud_of(&[(0, 0), (0, 6), (0, 3), (5, 5), (5, 0)]);
    let mut marcher = JarvisMarcher::new(&mut cloud).unwrap();
    marcher.solve().unwrap();
    assert_eq!(
        marcher.hull().unwrap().points(),
        pts(&[(0, 0), (0, 3), (0, 6), (5, 5), (5, 0)]).as_slice()
    );
}

#[test]
fn resolving_an_unmodified_cloud_is_deterministic() {
    let mut cloud = cloud_of(&[(7, 3), (1, 8), (4, 4), (9, 9), (2, 1), (6, 0), (0, 4)]);
    let first = {
        let mut m = JarvisMarcher::new(&mut cloud).unwrap();
        m.solve().unwrap();
        m.hull().cloned().unwrap()
    };
    let second = {
        let mut m = JarvisMarcher::new(&mut cloud).unwrap();
        m.solve().unwrap();
        m.hull().cloned().unwrap()
    };
    assert_eq!(first.points(), second.points());
    assert_eq!(first.edges(), second.edges());
    assert_eq!(first.angles(), second.angles());
}

#[test]
fn frame_snapshots_candidate_state() {
    let mut cloud = cloud_of(&[(0, 0), (2, 4), (2, 2), (4, 0)]);
    let mut marcher = JarvisMarcher::new(&mut cloud).unwrap();
    let empty = marcher.frame();
    assert!(empty.vertices.is_empty());
    assert!(empty.cur_point.is_none());
    assert_eq!(empty.cursor, None);

    marcher.iterate().unwrap();
    marcher.iterate().unwrap();
    let frame = marcher.frame();
    assert_eq!(frame.step, 2);
    assert_eq!(frame.cursor, Some(2));
    assert_eq!(frame.state, MarchState::Seeking);
    assert_eq!(frame.vertices, vec![Point::ORIGIN]);
    assert_eq!(frame.cur_point, Some(Point::ORIGIN));
    assert_eq!(frame.next.map(|c| c.point), Some(Point::new(2, 4)));
    assert_eq!(frame.best.map(|c| c.point), Some(Point::new(2, 4)));
}

#[test]
fn convex_hull_helper_matches_marcher() {
    let hull = convex_hull(pts(&[(0, 0), (2, 4), (2, 2), (4, 0)])).unwrap();
    assert_eq!(hull, pts(&[(0, 0), (2, 4), (4, 0)]));
    assert!(matches!(
        convex_hull(pts(&[(1, 1), (2, 2)])),
        Err(HullError::DegenerateGeometry(_))
    ));
    assert!(matches!(
        convex_hull(pts(&[(1, 1), (-2, 2), (3, 0)])),
        Err(HullError::InvalidArgument(_))
    ));
}

#[test]
fn sampled_clouds_close_into_valid_hulls() {
    let distributions = [Distribution::Uniform, Distribution::Normal { sigma: 3.0 }];
    for (index, distribution) in (0..8).zip(distributions.into_iter().cycle()) {
        let cfg = CloudCfg {
            count: 60,
            bounds: Point::new(600, 400),
            distribution,
        };
        let mut cloud = PointCloud::new();
        fill_model(&mut cloud, cfg, ReplayToken { seed: 42, index }).unwrap();
        JarvisMarcher::new(&mut cloud).unwrap().solve().unwrap();
        let hull = cloud.hull().unwrap();
        assert!(verify::is_convex(hull));
        assert!(cloud.points().iter().all(|p| verify::encloses(hull, *p)));
        verify::check(&cloud).unwrap();
    }
}

fn all_colinear(points: &[Point]) -> bool {
    let a = points[0];
    let Some(b) = points.iter().copied().find(|p| *p != a) else {
        return true;
    };
    let ab = crate::geom::Vector::new(a, b);
    points
        .iter()
        .all(|p| ab.orientation(*p) == crate::geom::Orientation::Colinear)
}

proptest! {
    #[test]
    fn random_clouds_close_into_valid_hulls(
        raw in prop::collection::vec((0i32..60, 0i32..60), 3..40)
    ) {
        let mut cloud = PointCloud::new();
        cloud.extend(raw.iter().map(|&(x, y)| Point::new(x, y))).unwrap();
        prop_assume!(cloud.len() >= 3 && !all_colinear(cloud.points()));

        let leftmost = cloud.leftmost();
        let (vertices, edges, angles) = {
            let mut marcher = JarvisMarcher::new(&mut cloud).unwrap();
            marcher.solve().unwrap();
            let hull = marcher.hull().unwrap();
            (hull.points().to_vec(), hull.edges().to_vec(), hull.angles().to_vec())
        };
        prop_assert_eq!(vertices[0], leftmost);
        prop_assert!(angles.iter().all(|a| a.angle >= PI));
        prop_assert!(verify::check(&cloud).is_ok());

        let mut again = JarvisMarcher::new(&mut cloud).unwrap();
        again.solve().unwrap();
        let hull = again.hull().unwrap();
        prop_assert_eq!(hull.points(), vertices.as_slice());
        prop_assert_eq!(hull.edges(), edges.as_slice());
        prop_assert_eq!(hull.angles(), angles.as_slice());
    }

    #[test]
    fn colinear_clouds_are_always_degenerate(
        start in 0i32..20, step in (0i32..4, 0i32..4), n in 3usize..10
    ) {
        prop_assume!(step != (0, 0));
        let mut cloud = PointCloud::new();
        for k in 0..n as i32 {
            cloud.add_point(Point::new(start + k * step.0, start + k * step.1)).unwrap();
        }
        let mut marcher = JarvisMarcher::new(&mut cloud).unwrap();
        prop_assert!(matches!(marcher.solve(), Err(HullError::DegenerateGeometry(_))));
    }
}
