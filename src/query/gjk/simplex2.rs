use crate::math::{Point, Real};
use crate::query::gjk;
use arrayvec::ArrayVec;

/// The working point set grown by the GJK intersection walk.
///
/// The simplex lives inside the Minkowski difference of the two shapes being
/// tested and never holds more than three points: a seed edge while the walk
/// searches for the origin, and a triangle once it has something to test
/// containment against. On a successful intersection test the simplex holds
/// an origin-enclosing triangle ready to seed the penetration-depth
/// expansion.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    vertices: ArrayVec<Point<Real>, 3>,
}

impl Simplex {
    /// Creates an empty simplex.
    pub fn new() -> Self {
        Simplex::default()
    }

    /// Removes all points from this simplex.
    pub fn clear(&mut self) {
        self.vertices.clear()
    }

    /// The number of points currently on this simplex.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether this simplex holds no point at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The points currently on this simplex.
    pub fn points(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// Whether `pt` already lies on this simplex, up to the GJK tolerance.
    pub fn contains(&self, pt: &Point<Real>) -> bool {
        self.vertices
            .iter()
            .any(|v| (v - pt).norm_squared() < gjk::eps_tol())
    }

    /// Adds a point to this simplex.
    ///
    /// Returns `false` without modifying the simplex if `pt` duplicates a
    /// point already present, up to the GJK tolerance. Duplicated support
    /// points are how the walk detects that it stopped making progress.
    ///
    /// # Panics
    /// Panics if the simplex already holds three points.
    pub fn add_point(&mut self, pt: Point<Real>) -> bool {
        if self.contains(&pt) {
            return false;
        }

        self.vertices.push(pt);
        true
    }

    /// Removes the `i`-th point, preserving the order of the others.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn remove(&mut self, i: usize) {
        let _ = self.vertices.remove(i);
    }
}
