//! The GJK algorithm for boolean intersection tests.

pub use self::simplex2::Simplex;
pub use gjk::*;

mod gjk;
mod simplex2;
