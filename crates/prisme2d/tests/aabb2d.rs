extern crate nalgebra as na;

use na::Point2;
use prisme2d::bounding_volume::Aabb;

#[test]
fn from_points_bounds_every_input() {
    let points = [
        Point2::new(1.0, -3.0),
        Point2::new(-2.0, 5.0),
        Point2::new(4.0, 0.5),
    ];
    let aabb = Aabb::from_points(&points);

    assert_eq!(aabb.mins, Point2::new(-2.0, -3.0));
    assert_eq!(aabb.maxs, Point2::new(4.0, 5.0));

    for pt in &points {
        assert!(aabb.contains_local_point(pt));
    }
}

#[test]
fn extents_and_center() {
    let aabb = Aabb::new(Point2::new(-1.0, 0.0), Point2::new(3.0, 6.0));

    assert_eq!(aabb.extents(), na::Vector2::new(4.0, 6.0));
    assert_eq!(aabb.half_extents(), na::Vector2::new(2.0, 3.0));
    assert_eq!(aabb.center(), Point2::new(1.0, 3.0));
}

#[test]
fn strict_intersection_excludes_touching_boxes() {
    let base = Aabb::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
    let edge_touch = Aabb::new(Point2::new(2.0, 0.0), Point2::new(4.0, 2.0));
    let corner_touch = Aabb::new(Point2::new(2.0, 2.0), Point2::new(3.0, 3.0));
    let overlapping = Aabb::new(Point2::new(1.0, 1.0), Point2::new(3.0, 3.0));
    let disjoint = Aabb::new(Point2::new(5.0, 0.0), Point2::new(6.0, 1.0));

    assert!(!base.intersects_strict(&edge_touch));
    assert!(!edge_touch.intersects_strict(&base));
    assert!(!base.intersects_strict(&corner_touch));
    assert!(base.intersects_strict(&overlapping));
    assert!(overlapping.intersects_strict(&base));
    assert!(!base.intersects_strict(&disjoint));
}

#[test]
fn containment_includes_the_boundary() {
    let aabb = Aabb::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));

    assert!(aabb.contains_local_point(&Point2::new(1.0, 1.0)));
    assert!(aabb.contains_local_point(&Point2::new(0.0, 0.5)));
    assert!(!aabb.contains_local_point(&Point2::new(1.1, 0.5)));
}
