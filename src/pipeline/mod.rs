//! Structures for chaining the broad phase, the narrow phase and the
//! resolver over a scene of prisms.
//!
//! The [`CollisionPipeline`] runs one *tick*: recompute bounds, sweep them
//! for candidate pairs, confirm candidates with GJK/EPA and translate
//! overlapping pairs apart. The [`TickLoop`] repeats ticks at a fixed
//! interval, either driven by the host or on a dedicated thread, and
//! publishes [`SceneSnapshot`]s for concurrent consumers.
//!
//! Prisms are owned by a [`PrismSet`] and identified by [`PrismHandle`]s.
//! During a tick the pipeline holds exclusive access to the set; everything
//! a consumer may read concurrently goes through snapshots instead.

pub use self::collision_pipeline::{CollisionPipeline, StepSummary};
pub use self::prism_set::{PrismHandle, PrismSet};
pub use self::snapshot::{PrismSnapshot, SceneSnapshot};
pub use self::tick_loop::{TickLoop, TickLoopHandle, DEFAULT_TICK_INTERVAL};

mod collision_pipeline;
mod prism_set;
mod snapshot;
mod tick_loop;
