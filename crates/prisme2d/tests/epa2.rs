#[macro_use]
extern crate approx;
extern crate nalgebra as na;

use na::Point2;
use prisme2d::query::epa::EPA;
use prisme2d::query::gjk::Simplex;
use prisme2d::query::{self, QueryError};
use prisme2d::shape::Prism;

fn square(half: f32, cx: f32, cy: f32) -> Prism {
    Prism::new(
        vec![
            Point2::new(cx - half, cy - half),
            Point2::new(cx + half, cy - half),
            Point2::new(cx + half, cy + half),
            Point2::new(cx - half, cy + half),
        ],
        0.0,
        1.0,
    )
    .unwrap()
}

#[test]
fn half_overlapping_squares() {
    let contact = query::contact(&square(1.0, 0.0, 0.0), &square(1.0, 1.0, 0.0))
        .unwrap()
        .expect("the squares overlap");

    // Pushing the shapes apart along `normal` by `depth` leaves them exactly
    // touching on the x axis.
    assert_relative_eq!(contact.depth, 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(contact.normal.x, 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(contact.normal.y, 0.0, epsilon = 1.0e-5);
}

#[test]
fn normal_points_from_the_first_shape_to_the_second() {
    let below = square(1.0, 0.0, 0.0);
    let above = square(1.0, 0.0, 1.5);

    let contact = query::contact(&below, &above)
        .unwrap()
        .expect("the squares overlap");
    assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-5);
    assert_relative_eq!(contact.normal.y, 1.0, epsilon = 1.0e-5);

    // Swapping the arguments flips the normal.
    let contact = query::contact(&above, &below)
        .unwrap()
        .expect("the squares overlap");
    assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-5);
    assert_relative_eq!(contact.normal.y, -1.0, epsilon = 1.0e-5);
}

#[test]
fn coincident_squares_use_an_axis_aligned_escape() {
    let contact = query::contact(&square(1.0, 0.0, 0.0), &square(1.0, 0.0, 0.0))
        .unwrap()
        .expect("the squares coincide");

    // Every escape direction ties; whichever face wins, the depth is the
    // full extent of the square.
    assert_relative_eq!(contact.depth, 2.0, epsilon = 1.0e-5);
    assert!(contact.normal.x.abs() > 0.99 || contact.normal.y.abs() > 0.99);
}

#[test]
fn contained_square_escapes_through_the_nearest_face() {
    let big = square(2.0, 0.0, 0.0);
    let small = square(0.5, 0.5, 0.0);

    let contact = query::contact(&small, &big)
        .unwrap()
        .expect("the small square is inside the big one");

    // The small square sits right of center, so the cheapest escape for it
    // is through the big square's right face, i.e. the big square moves left.
    assert_relative_eq!(contact.depth, 2.0, epsilon = 1.0e-5);
    assert_relative_eq!(contact.normal.x, -1.0, epsilon = 1.0e-5);
    assert_relative_eq!(contact.normal.y, 0.0, epsilon = 1.0e-5);
}

#[test]
fn separated_squares_have_no_contact() {
    assert_eq!(
        query::contact(&square(1.0, 0.0, 0.0), &square(1.0, 3.0, 0.0)),
        Ok(None)
    );
    assert_eq!(
        query::contact(&square(1.0, 0.0, 0.0), &square(1.0, 2.0, 0.0)),
        Ok(None)
    );
}

#[test]
fn applying_the_penetration_separates_the_pair() {
    let mut first = square(1.0, 0.0, 0.0);
    let mut second = square(1.0, 1.0, 0.25);

    let contact = query::contact(&first, &second)
        .unwrap()
        .expect("the squares overlap");

    let shift = contact.penetration() * 0.5;
    first.translate_mut(&-shift);
    second.translate_mut(&shift);

    assert_eq!(query::intersection_test(&first, &second), Ok(false));
}

#[test]
fn rotated_overlap_reports_a_plausible_contact() {
    // A diamond poking into the top edge of a square.
    let diamond = Prism::new(
        vec![
            Point2::new(0.0, 0.25),
            Point2::new(1.0, 1.25),
            Point2::new(0.0, 2.25),
            Point2::new(-1.0, 1.25),
        ],
        0.0,
        1.0,
    )
    .unwrap();
    let base = square(1.0, 0.0, 0.0);

    let contact = query::contact(&base, &diamond)
        .unwrap()
        .expect("the diamond pokes into the square");

    assert_relative_eq!(contact.depth, 0.75, epsilon = 1.0e-5);
    assert_relative_eq!(contact.normal.x, 0.0, epsilon = 1.0e-5);
    assert_relative_eq!(contact.normal.y, 1.0, epsilon = 1.0e-5);
}

#[test]
fn penetration_requires_a_triangle_simplex() {
    let mut epa = EPA::new();
    let simplex = Simplex::new();

    assert!(matches!(
        epa.penetration(&square(1.0, 0.0, 0.0), &square(1.0, 1.0, 0.0), &simplex),
        Err(QueryError::DegenerateInput(_))
    ));
}
