//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};
use na;
use num::Bounded;

/// An Axis-Aligned Bounding Box.
///
/// Defined by its minimum and maximum corners on the horizontal collision
/// plane. Prism bounds are always derived from the current vertex positions
/// (see [`crate::shape::Prism::local_aabb`]), never stored, so an `Aabb` is
/// only ever valid for the tick it was computed in.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The corner with the smallest coordinates on each axis.
    pub mins: Point<Real>,
    /// The corner with the largest coordinates on each axis.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// `mins` must be componentwise smaller than or equal to `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` and `maxs` swapped to the
    /// widest sentinel values. Useful as the seed of a merge fold.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Computes the AABB of a cloud of points.
    ///
    /// Panics if `points` is empty.
    pub fn from_points<'a, I>(points: I) -> Aabb
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Aabb::new_invalid();

        for p in points {
            result.mins = result.mins.inf(p);
            result.maxs = result.maxs.sup(p);
        }

        result
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = 0.5;
        (self.maxs - self.mins) * half
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Tests whether the interiors of `self` and `other` overlap.
    ///
    /// Boundary contact does not count: two boxes sharing exactly an edge or
    /// a corner are not considered intersecting. This matches the strict
    /// overlap convention of the narrow phase, so the broad phase never
    /// yields pairs the narrow phase would reject as merely touching.
    #[inline]
    pub fn intersects_strict(&self, other: &Aabb) -> bool {
        self.mins.x < other.maxs.x
            && other.mins.x < self.maxs.x
            && self.mins.y < other.maxs.y
            && other.mins.y < self.maxs.y
    }

    /// Tests whether `self` contains the given point, boundary included.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        point.x >= self.mins.x
            && point.x <= self.maxs.x
            && point.y >= self.mins.y
            && point.y <= self.maxs.y
    }
}
