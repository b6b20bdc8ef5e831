//! The Gilbert-Johnson-Keerthi algorithm, specialized for boolean
//! intersection tests.
//!
//! GJK never looks at the two shapes directly. It operates on their
//! **Minkowski difference** (also called the Configuration Space Obstacle, or
//! CSO): the set of all pairwise point differences `a - b`. The two shapes
//! overlap if and only if the origin lies inside that difference. The
//! difference of two convex polygons can have many vertices, so it is never
//! built explicitly; the walk only ever asks for its support points, each of
//! which costs one support query per input shape.
//!
//! This implementation only answers the boolean question "is the origin
//! strictly inside?". It does not compute distances or closest points, but on
//! a positive answer it leaves behind an origin-enclosing triangle that the
//! penetration-depth expansion ([`crate::query::epa`]) starts from.

use na::Unit;

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::Simplex;
use crate::query::{QueryError, QueryStage};
use crate::shape::SupportMap;

/// Iteration bound after which the walk reports non-convergence.
const MAX_ITERATIONS: usize = 100;

/// The absolute tolerance used by the GJK algorithm.
///
/// Support points closer than this are considered duplicates, and the origin
/// is considered to lie on a line it is closer to than this. The returned
/// value is 10 times the default machine epsilon for the current
/// floating-point precision (f32 or f64).
pub fn eps_tol() -> Real {
    let _eps = DEFAULT_EPSILON;
    _eps * 10.0
}

/// Results of the boolean GJK intersection walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GJKResult {
    /// The shapes overlap with nonzero area.
    ///
    /// The simplex passed to the walk holds an origin-enclosing triangle.
    Intersection,
    /// The shapes do not overlap.
    ///
    /// Configurations that merely touch along an edge or at a vertex land
    /// here as well: contact without interpenetration is not an
    /// intersection.
    NoIntersection,
}

/// Support point of the Minkowski difference `g1 - g2` along `dir`.
///
/// Evaluates the support of `g1` along `dir` and of `g2` along `-dir` and
/// subtracts, which is the support of the difference without ever
/// materializing it.
pub fn cso_support_point<G1, G2>(g1: &G1, g2: &G2, dir: &Unit<Vector<Real>>) -> Point<Real>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let sp1 = g1.local_support_point_toward(dir);
    let sp2 = g2.local_support_point_toward(&-*dir);
    Point::from(sp1 - sp2)
}

/*
 * Boolean GJK.
 */
/// Tests whether the origin lies strictly inside the Minkowski difference
/// `g1 - g2`, i.e. whether the two shapes overlap with nonzero area.
///
/// `simplex` must hold two distinct seed points of the difference;
/// [`crate::query::intersection_test_with_simplex`] seeds it from the
/// lexicographic extremes of the two point clouds. On
/// [`GJKResult::Intersection`] the simplex is left holding an
/// origin-enclosing triangle ready to seed [`crate::query::epa::EPA`].
///
/// Each iteration either pushes the current edge of the simplex toward the
/// origin with a fresh support point, or tests the resulting triangle for
/// containment and drops the vertex opposite an edge the origin fell
/// outside of. The walk terminates when a support point fails to reach past
/// the origin (the shapes are separated by that support direction), when a
/// triangle encloses the origin, or when the origin turns out to lie exactly
/// on the boundary of the difference. The latter, grazing case is reported
/// as [`GJKResult::NoIntersection`].
pub fn intersects<G1, G2>(
    g1: &G1,
    g2: &G2,
    simplex: &mut Simplex,
) -> Result<GJKResult, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let _eps_tol: Real = eps_tol();

    if simplex.len() != 2 {
        return Err(QueryError::DegenerateInput("the seed simplex must be an edge"));
    }

    for _ in 0..MAX_ITERATIONS {
        if simplex.len() == 2 {
            let a = simplex.points()[0];
            let b = simplex.points()[1];
            let ab = b - a;
            let perp = Vector::new(-ab.y, ab.x);
            let side = perp.dot(&(-a.coords));

            if side.abs() <= _eps_tol * ab.norm() {
                // The origin lies on the line carrying the current edge. The
                // difference has interior around it only if some support
                // reaches past that line.
                let toward = Unit::try_new(perp, 0.0).ok_or(QueryError::DegenerateInput(
                    "support points collapsed onto each other",
                ))?;

                let mut grew = false;
                for dir in [toward, -toward] {
                    let support = cso_support_point(g1, g2, &dir);
                    if support.coords.dot(&dir) > _eps_tol {
                        grew = simplex.add_point(support);
                        break;
                    }
                }

                if !grew {
                    // Flat difference: the origin at best touches its
                    // boundary.
                    return Ok(GJKResult::NoIntersection);
                }
            } else {
                let toward_origin = Unit::try_new(if side > 0.0 { perp } else { -perp }, 0.0)
                    .ok_or(QueryError::DegenerateInput(
                        "support points collapsed onto each other",
                    ))?;
                let support = cso_support_point(g1, g2, &toward_origin);

                if support.coords.dot(&toward_origin) <= _eps_tol {
                    // No support reaches past the origin: the current edge
                    // carries a separating line.
                    return Ok(GJKResult::NoIntersection);
                }

                if !simplex.add_point(support) {
                    // A repeated support cannot bring the origin inside
                    // either.
                    return Ok(GJKResult::NoIntersection);
                }
            }
        } else {
            let a = simplex.points()[0];
            let b = simplex.points()[1];
            let c = simplex.points()[2];
            let orient = (b - a).perp(&(c - a));

            if orient == 0.0 {
                // A flat triangle cannot strictly enclose the origin.
                return Ok(GJKResult::NoIntersection);
            }

            let ccw = orient > 0.0;
            let mut grazing = None;
            let mut reduced = false;

            for i in 0..3 {
                let p = simplex.points()[i];
                let q = simplex.points()[(i + 1) % 3];
                let e = q - p;
                let side = e.perp(&(-p.coords));

                if side.abs() <= _eps_tol * e.norm() {
                    grazing = Some(i);
                } else if (side > 0.0) != ccw {
                    // The origin lies strictly outside this edge: drop the
                    // opposite vertex and walk through the edge.
                    simplex.remove((i + 2) % 3);
                    reduced = true;
                    break;
                }
            }

            if reduced {
                continue;
            }

            let i = match grazing {
                None => return Ok(GJKResult::Intersection),
                Some(i) => i,
            };

            // The origin lies on an edge of the triangle. It is strictly
            // inside the difference only if the hull extends past that edge.
            let p = simplex.points()[i];
            let q = simplex.points()[(i + 1) % 3];

            if p.coords.norm_squared() < _eps_tol || q.coords.norm_squared() < _eps_tol {
                // The origin coincides with a support point, which always
                // lies on the hull boundary: vertex touch.
                return Ok(GJKResult::NoIntersection);
            }

            let e = q - p;
            let outward = if ccw {
                Vector::new(e.y, -e.x)
            } else {
                Vector::new(-e.y, e.x)
            };
            let outward = Unit::try_new(outward, 0.0)
                .ok_or(QueryError::DegenerateInput("simplex edge collapsed"))?;
            let support = cso_support_point(g1, g2, &outward);

            if (support - p).dot(&outward) <= _eps_tol {
                // The grazed edge lies on the hull itself: edge touch.
                return Ok(GJKResult::NoIntersection);
            }

            return Ok(GJKResult::Intersection);
        }
    }

    Err(QueryError::NonConvergence {
        stage: QueryStage::Gjk,
        iterations: MAX_ITERATIONS,
    })
}
