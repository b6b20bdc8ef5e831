//! Shapes supported by prisme.

pub use self::prism::Prism;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod prism;
#[doc(hidden)]
pub mod support_map;
