//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};
use na::Unit;

/// Trait of convex shapes representable by a support mapping function.
///
/// The narrow phase and the penetration solver interact with geometry through
/// this trait only: they never walk edges or clip vertices directly.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// A support function maps a direction to the shape point which maximizes
    /// their dot product. Ties may be broken arbitrarily but must be broken
    /// deterministically for a given shape.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }
}
