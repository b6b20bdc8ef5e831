use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils;

/// A convex prism: a convex polygon extruded along the vertical axis.
///
/// Collision detection operates exclusively on the horizontal cross-section
/// `points`, which live directly in world space and are translated in place
/// by the resolver. The vertical extent (`mid_y`, `half_height`) is carried
/// for renderers only and plays no role in any query.
///
/// The cross-section must be convex and consistently wound (either
/// direction). Convexity is a precondition of every query in this crate and
/// is not checked: the behavior of GJK and EPA on a concave cross-section is
/// undefined. Scene conventions keep `points` between 3 and 10 vertices; only
/// the lower bound is enforced.
#[derive(Clone, Debug)]
pub struct Prism {
    points: Vec<Point<Real>>,
    mid_y: Real,
    half_height: Real,
}

impl Prism {
    /// Creates a new prism from a convex, consistently wound cross-section.
    ///
    /// Convexity of the input is not checked. Returns `None` if `points` has
    /// fewer than three vertices.
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use nalgebra::Point2;
    /// use prisme2d::shape::Prism;
    ///
    /// let square = Prism::new(
    ///     vec![
    ///         Point2::new(-1.0, -1.0),
    ///         Point2::new(1.0, -1.0),
    ///         Point2::new(1.0, 1.0),
    ///         Point2::new(-1.0, 1.0),
    ///     ],
    ///     0.0,
    ///     1.0,
    /// );
    /// assert!(square.is_some());
    /// assert!(Prism::new(vec![Point2::new(0.0, 0.0)], 0.0, 1.0).is_none());
    /// # }
    /// ```
    pub fn new(points: Vec<Point<Real>>, mid_y: Real, half_height: Real) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }

        Some(Prism {
            points,
            mid_y,
            half_height,
        })
    }

    /// The vertices of the cross-section, in their creation order.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The number of cross-section vertices. Fixed for the prism's lifetime.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// The vertical midpoint of this prism. Cosmetic only.
    #[inline]
    pub fn mid_y(&self) -> Real {
        self.mid_y
    }

    /// The half-height of this prism along the vertical axis. Cosmetic only.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.half_height
    }

    /// The vertical range `(bottom, top)` of this prism, for renderers.
    #[inline]
    pub fn y_range(&self) -> (Real, Real) {
        (self.mid_y - self.half_height, self.mid_y + self.half_height)
    }

    /// Translates every cross-section vertex by `shift`, in place.
    #[inline]
    pub fn translate_mut(&mut self, shift: &Vector<Real>) {
        for pt in &mut self.points {
            *pt += *shift;
        }
    }

    /// Computes the current AABB of the cross-section.
    ///
    /// Bounds are always derived from the vertex positions at call time and
    /// must be recomputed after any resolution pass.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(&self.points)
    }
}

impl SupportMap for Prism {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points)
    }
}
