//! Non-persistent geometric queries.
//!
//! The methods provided by this module are:
//!
//! * [`query::intersection_test()`](intersection_test) to determine whether
//!   two prisms overlap with nonzero area.
//! * [`query::contact()`](contact) to compute the penetration normal and
//!   depth of an overlapping pair.
//!
//! Both queries run on the Minkowski difference of the two cross-sections
//! through the [`gjk`] walk, with [`epa`] taking over for penetration depth.
//! The `_with_simplex`/`_with_workspaces` variants reuse caller-provided
//! scratch buffers; the collision pipeline calls those to avoid
//! re-allocating per pair.

pub use self::contact::{contact, contact_with_workspaces, Contact};
pub use self::error::{QueryError, QueryStage};
pub use self::intersection_test::{intersection_test, intersection_test_with_simplex};

mod contact;
pub mod epa;
mod error;
pub mod gjk;
mod intersection_test;
