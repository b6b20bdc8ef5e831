use crate::math::Point;
use crate::query::gjk::{self, GJKResult, Simplex};
use crate::query::QueryError;
use crate::shape::Prism;
use crate::utils;

/// Tests whether two prisms overlap with nonzero area.
///
/// Pairs that merely touch along an edge or at a vertex are reported as not
/// intersecting: contact begins strictly inside, not at the boundary.
///
/// # Example
/// ```
/// # #[cfg(feature = "f32")] {
/// use prisme2d::na::Point2;
/// use prisme2d::query;
/// use prisme2d::shape::Prism;
///
/// let square = |x: f32| {
///     Prism::new(
///         vec![
///             Point2::new(x - 1.0, -1.0),
///             Point2::new(x + 1.0, -1.0),
///             Point2::new(x + 1.0, 1.0),
///             Point2::new(x - 1.0, 1.0),
///         ],
///         0.0,
///         1.0,
///     )
///     .unwrap()
/// };
///
/// assert_eq!(query::intersection_test(&square(0.0), &square(1.0)), Ok(true));
/// // Sharing an edge is touching, not overlapping.
/// assert_eq!(query::intersection_test(&square(0.0), &square(2.0)), Ok(false));
/// assert_eq!(query::intersection_test(&square(0.0), &square(3.0)), Ok(false));
/// # }
/// ```
pub fn intersection_test(g1: &Prism, g2: &Prism) -> Result<bool, QueryError> {
    let mut simplex = Simplex::new();
    Ok(intersection_test_with_simplex(g1, g2, &mut simplex)? == GJKResult::Intersection)
}

/// Same as [`intersection_test`], reusing a caller-provided simplex.
///
/// On [`GJKResult::Intersection`] the simplex is left holding the
/// origin-enclosing triangle that seeds [`crate::query::epa::EPA`].
pub fn intersection_test_with_simplex(
    g1: &Prism,
    g2: &Prism,
    simplex: &mut Simplex,
) -> Result<GJKResult, QueryError> {
    // Seed the walk with the lexicographic extremes of the Minkowski
    // difference. They are extreme points of the difference, so they are
    // reproducible regardless of how either polygon orders its vertices.
    let seed0 = Point::from(
        utils::point_cloud_lex_min(g1.points()) - utils::point_cloud_lex_max(g2.points()),
    );
    let seed1 = Point::from(
        utils::point_cloud_lex_max(g1.points()) - utils::point_cloud_lex_min(g2.points()),
    );

    simplex.clear();
    let _ = simplex.add_point(seed0);
    if !simplex.add_point(seed1) {
        return Err(QueryError::DegenerateInput(
            "both shapes collapsed to the same point",
        ));
    }

    gjk::intersects(g1, g2, simplex)
}
