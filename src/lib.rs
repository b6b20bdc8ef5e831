/*!
prisme
========

**prisme** is a 2-dimensional collision detection and resolution library for
convex prisms written with the rust programming language. Prisms are convex
polygons extruded along a vertical axis; collision is detected and resolved on
their shared horizontal cross-section plane.

The pipeline runs in four stages on a fixed tick interval: a sweep-and-prune
broad phase prunes the pair space by axis-aligned bounding boxes, a boolean
GJK narrow phase decides exact intersection on the Minkowski difference, an
EPA solver extracts the penetration direction and depth, and a positional
resolver translates both prisms apart by half the penetration each.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::type_complexity)]

#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, UnitVector2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the collision plane.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;
}
