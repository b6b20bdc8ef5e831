//! The EPA algorithm for penetration depth computation.

pub use self::epa2::EPA;

pub mod epa2;
