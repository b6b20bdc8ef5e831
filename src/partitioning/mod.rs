//! Spatial partitioning tools.

pub use self::sweep_and_prune::{CandidatePairs, CollisionCandidate, SweepAndPrune};

mod sweep_and_prune;
