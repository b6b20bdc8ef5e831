//! Two-dimensional penetration depth queries using the Expanding Polytope
//! Algorithm.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use na::Unit;

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{self, Simplex};
use crate::query::{Contact, QueryError, QueryStage};
use crate::shape::SupportMap;
use crate::utils;

/// Iteration bound after which the expansion reports non-convergence.
const MAX_ITERATIONS: usize = 100;

#[derive(Copy, Clone, PartialEq)]
struct FaceId {
    id: usize,
    neg_dist: Real,
}

impl FaceId {
    fn new(id: usize, neg_dist: Real) -> Option<Self> {
        if neg_dist > gjk::eps_tol() {
            None
        } else {
            Some(FaceId { id, neg_dist })
        }
    }
}

impl Eq for FaceId {}

impl PartialOrd for FaceId {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FaceId {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        if self.neg_dist < other.neg_dist {
            Ordering::Less
        } else if self.neg_dist > other.neg_dist {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// One edge of the expanding polygon, identified by indices into the vertex
/// buffer.
///
/// `dist` is the distance from the origin to the supporting line of the
/// edge, signed positive when the origin lies on the inner side of the
/// outward normal. For a polygon enclosing the origin, the smallest `dist`
/// over all edges is the distance from the origin to the polygon boundary.
#[derive(Copy, Clone)]
struct Face {
    pts: [usize; 2],
    normal: Unit<Vector<Real>>,
    dist: Real,
}

impl Face {
    fn new(vertices: &[Point<Real>], pts: [usize; 2]) -> Option<Self> {
        let normal = utils::ccw_face_normal([&vertices[pts[0]], &vertices[pts[1]]])?;
        let dist = normal.dot(&vertices[pts[0]].coords);
        Some(Face { pts, normal, dist })
    }
}

/// The Expanding Polytope Algorithm in 2D.
///
/// Computes the penetration depth and contact normal of two overlapping
/// convex shapes by growing a polygon inside their Minkowski difference
/// until it reaches the difference's boundary on the side nearest to the
/// origin.
///
/// The structure owns the vertex buffer, the face buffer, and the priority
/// heap driving the expansion; reuse one instance across queries to avoid
/// reallocating them.
#[derive(Default)]
pub struct EPA {
    vertices: Vec<Point<Real>>,
    faces: Vec<Face>,
    heap: BinaryHeap<FaceId>,
}

impl EPA {
    /// Creates a new instance of the 2D Expanding Polytope Algorithm.
    pub fn new() -> Self {
        EPA::default()
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.heap.clear();
    }

    /// Computes the penetration of two overlapping shapes.
    ///
    /// `simplex` must hold the origin-enclosing triangle produced by a
    /// successful [`gjk::intersects`] walk over the same pair, in the same
    /// order. The returned contact normal points from `g1` toward `g2`, and
    /// its depth is the smallest translation along the normal that separates
    /// the two shapes.
    ///
    /// Each iteration pops the polygon edge nearest to the origin and asks
    /// the Minkowski difference for a support point along its outward
    /// normal. If the support cannot push that edge any further, the edge
    /// lies on the boundary of the difference and carries the answer;
    /// otherwise the edge is split in two around the new vertex and the
    /// expansion continues.
    pub fn penetration<G1, G2>(
        &mut self,
        g1: &G1,
        g2: &G2,
        simplex: &Simplex,
    ) -> Result<Contact, QueryError>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let _eps: Real = DEFAULT_EPSILON;
        let _eps_tol = _eps * 100.0;

        self.reset();

        /*
         * Initialization.
         */
        if simplex.len() != 3 {
            return Err(QueryError::DegenerateInput(
                "the seed simplex must be a triangle",
            ));
        }

        self.vertices.extend_from_slice(simplex.points());

        // Normalize the winding so every face normal points away from the
        // enclosed origin.
        let dp1 = self.vertices[1] - self.vertices[0];
        let dp2 = self.vertices[2] - self.vertices[0];
        if dp1.perp(&dp2) < 0.0 {
            self.vertices.swap(1, 2)
        }

        for pts in [[0, 1], [1, 2], [2, 0]] {
            if let Some(face) = Face::new(&self.vertices, pts) {
                let id = FaceId::new(self.faces.len(), -face.dist).ok_or(
                    QueryError::DegenerateInput("the seed simplex does not enclose the origin"),
                )?;
                self.heap.push(id);
                self.faces.push(face);
            }
        }

        if self.heap.is_empty() {
            return Err(QueryError::DegenerateInput("the seed simplex is flat"));
        }

        /*
         * Run the expansion.
         */
        let mut niter = 0;

        while let Some(face_id) = self.heap.pop() {
            let face = self.faces[face_id.id];
            let support = gjk::cso_support_point(g1, g2, &face.normal);
            let support_dist = support.coords.dot(&face.normal);

            if support_dist - face.dist <= _eps_tol {
                // The difference does not extend past this edge: the edge
                // lies on its boundary and carries the closest boundary
                // point.
                return Ok(Contact::new(face.normal, face.dist.max(0.0)));
            }

            let support_id = self.vertices.len();
            self.vertices.push(support);

            for pts in [[face.pts[0], support_id], [support_id, face.pts[1]]] {
                // Degenerate split edges are dropped: their twin still
                // bounds the polygon, and an edge the origin drifted outside
                // of can only stem from numerical noise on a near-zero
                // depth.
                if let Some(new_face) = Face::new(&self.vertices, pts) {
                    if new_face.dist < face.dist - _eps_tol {
                        log::debug!(
                            "Hit unexpected state in EPA: the expansion shrank the polygon."
                        );
                        return Ok(Contact::new(face.normal, face.dist.max(0.0)));
                    }

                    if let Some(id) = FaceId::new(self.faces.len(), -new_face.dist) {
                        self.heap.push(id);
                        self.faces.push(new_face);
                    }
                }
            }

            niter += 1;
            if niter == MAX_ITERATIONS {
                return Err(QueryError::NonConvergence {
                    stage: QueryStage::Epa,
                    iterations: niter,
                });
            }
        }

        Err(QueryError::DegenerateInput(
            "the expansion exhausted every face",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::Face;
    use crate::math::Point;

    #[test]
    fn face_distance_is_measured_to_the_supporting_line() {
        let vertices = [
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(0.0, 1.0),
        ];

        let bottom = Face::new(&vertices, [0, 1]).unwrap();
        assert_relative_eq!(bottom.dist, 1.0);
        assert_relative_eq!(bottom.normal.y, -1.0);
    }

    #[test]
    fn zero_length_face_is_rejected() {
        let vertices = [Point::new(0.5, 0.5), Point::new(0.5, 0.5)];
        assert!(Face::new(&vertices, [0, 1]).is_none());
    }
}
