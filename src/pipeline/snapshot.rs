use crate::math::{Point, Real};
use crate::pipeline::{CollisionPipeline, PrismHandle, PrismSet};

/// Read-only copy of one prism's state at the end of a tick.
#[derive(Clone, Debug)]
pub struct PrismSnapshot {
    /// The handle of the prism this snapshot was taken from.
    pub handle: PrismHandle,
    /// The cross-section vertices, in world space.
    pub points: Vec<Point<Real>>,
    /// The vertical range `(bottom, top)`, for renderers.
    pub y_range: (Real, Real),
    /// Whether the prism took part in a resolved contact during the tick.
    pub colliding: bool,
}

/// Consistent copy of a whole scene, published after a tick completes.
///
/// Snapshots are how concurrent consumers observe a scene driven by
/// [`crate::pipeline::TickLoop`]: the loop clones the scene between ticks,
/// so a snapshot never shows a half-resolved state.
#[derive(Clone, Debug, Default)]
pub struct SceneSnapshot {
    /// The number of ticks completed when the snapshot was taken.
    pub tick: u64,
    /// One entry per prism, in handle order.
    pub prisms: Vec<PrismSnapshot>,
}

impl SceneSnapshot {
    /// Captures the current state of every prism in `prisms`, with the
    /// collision flags of `pipeline`'s most recent step.
    pub fn capture(tick: u64, prisms: &PrismSet, pipeline: &CollisionPipeline) -> Self {
        SceneSnapshot {
            tick,
            prisms: prisms
                .iter()
                .map(|(handle, prism)| PrismSnapshot {
                    handle,
                    points: prism.points().to_vec(),
                    y_range: prism.y_range(),
                    colliding: pipeline.is_colliding(handle),
                })
                .collect(),
        }
    }
}
