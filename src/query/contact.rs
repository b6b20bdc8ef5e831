use na::Unit;

use crate::math::{Real, UnitVector, Vector};
use crate::query::epa::EPA;
use crate::query::gjk::{GJKResult, Simplex};
use crate::query::{self, QueryError};
use crate::shape::Prism;

/// Geometric description of one confirmed overlap between two shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// The unit direction along which the shapes interpenetrate, pointing
    /// from the first shape toward the second.
    pub normal: UnitVector<Real>,
    /// The penetration depth along `normal`. Always non-negative.
    pub depth: Real,
}

impl Contact {
    /// Creates a contact from its normal and penetration depth.
    pub fn new(normal: Unit<Vector<Real>>, depth: Real) -> Self {
        Contact { normal, depth }
    }

    /// The full separating vector `normal * depth`.
    ///
    /// Translating the first shape by the negation of this vector, or the
    /// second shape by the vector itself, moves the pair to a touching
    /// configuration.
    pub fn penetration(&self) -> Vector<Real> {
        *self.normal * self.depth
    }
}

/// Computes the contact between two prisms, if they overlap.
///
/// Runs the boolean GJK walk and, on intersection, the EPA expansion over
/// the same simplex. Returns `Ok(None)` for separated or merely touching
/// pairs, and `Ok(Some(contact))` for pairs overlapping with nonzero area.
/// The contact normal points from `g1` toward `g2`.
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
/// let contact = query::contact(&square(0.0), &square(1.0)).unwrap().unwrap();
/// assert_eq!(contact.depth, 1.0);
/// assert_eq!(contact.normal.x, 1.0);
///
/// assert_eq!(query::contact(&square(0.0), &square(3.0)), Ok(None));
/// # }
/// ```
pub fn contact(g1: &Prism, g2: &Prism) -> Result<Option<Contact>, QueryError> {
    let mut simplex = Simplex::new();
    let mut epa = EPA::new();
    contact_with_workspaces(g1, g2, &mut simplex, &mut epa)
}

/// Same as [`contact`], reusing caller-provided GJK and EPA workspaces.
///
/// Both workspaces are reset as needed; reusing them across queries avoids
/// reallocating the EPA buffers on every pair.
pub fn contact_with_workspaces(
    g1: &Prism,
    g2: &Prism,
    simplex: &mut Simplex,
    epa: &mut EPA,
) -> Result<Option<Contact>, QueryError> {
    match query::intersection_test_with_simplex(g1, g2, simplex)? {
        GJKResult::NoIntersection => Ok(None),
        GJKResult::Intersection => epa.penetration(g1, g2, simplex).map(Some),
    }
}
