use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;
use std::time::Duration;

use crate::pipeline::{CollisionPipeline, PrismSet, SceneSnapshot, StepSummary};

/// The interval between two collision ticks unless overridden: half a
/// second.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Owns a scene and drives the collision pipeline at a fixed cadence.
///
/// A freshly built loop is idle. An embedding application that has its own
/// cadence calls [`TickLoop::step`] whenever it wants a tick and reads the
/// scene back directly between calls. Alternatively, [`TickLoop::spawn`]
/// moves the loop onto a dedicated thread that ticks forever at the
/// configured interval, with consumers observing the scene through
/// published [`SceneSnapshot`]s.
pub struct TickLoop {
    prisms: PrismSet,
    pipeline: CollisionPipeline,
    interval: Duration,
    ticks: u64,
}

impl TickLoop {
    /// Builds an idle loop around an initial scene, ticking at
    /// [`DEFAULT_TICK_INTERVAL`] once spawned.
    pub fn new(prisms: PrismSet) -> Self {
        TickLoop::with_interval(prisms, DEFAULT_TICK_INTERVAL)
    }

    /// Builds an idle loop around an initial scene with a custom tick
    /// interval.
    pub fn with_interval(prisms: PrismSet, interval: Duration) -> Self {
        TickLoop {
            prisms,
            pipeline: CollisionPipeline::new(),
            interval,
            ticks: 0,
        }
    }

    /// The interval between two spawned ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The number of ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The scene driven by this loop.
    pub fn prisms(&self) -> &PrismSet {
        &self.prisms
    }

    /// Mutable access to the scene, for setup and host-driven mutation
    /// between ticks.
    pub fn prisms_mut(&mut self) -> &mut PrismSet {
        &mut self.prisms
    }

    /// The pipeline driven by this loop, exposing the per-prism collision
    /// flags of the most recent tick.
    pub fn pipeline(&self) -> &CollisionPipeline {
        &self.pipeline
    }

    /// Runs one collision tick synchronously.
    pub fn step(&mut self) -> StepSummary {
        let summary = self.pipeline.step(&mut self.prisms);
        self.ticks += 1;
        summary
    }

    /// Captures a snapshot of the current scene state.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(self.ticks, &self.prisms, &self.pipeline)
    }

    /// Moves the loop onto a dedicated thread that ticks perpetually,
    /// sleeping [`TickLoop::interval`] between ticks.
    ///
    /// The thread publishes a fresh [`SceneSnapshot`] after every tick. It
    /// runs until [`TickLoopHandle::stop`] is called; dropping the handle
    /// without stopping leaves the loop ticking for the life of the
    /// process, which matches how perpetual simulations are expected to
    /// shut down (with their process).
    ///
    /// The only error path is the operating system refusing to spawn the
    /// thread.
    pub fn spawn(self) -> io::Result<TickLoopHandle> {
        let shared = Arc::new(SharedState {
            snapshot: RwLock::new(self.snapshot()),
            ticks: AtomicU64::new(self.ticks),
            stop: AtomicBool::new(false),
        });
        let worker = Arc::clone(&shared);
        let mut tick_loop = self;

        let join = thread::Builder::new()
            .name("prisme-tick-loop".into())
            .spawn(move || {
                while !worker.stop.load(Ordering::Acquire) {
                    let _ = tick_loop.step();

                    // A poisoned lock only means a reader panicked while
                    // holding it; the snapshot it protects is still a plain
                    // value we are about to overwrite.
                    let snapshot = tick_loop.snapshot();
                    *worker
                        .snapshot
                        .write()
                        .unwrap_or_else(PoisonError::into_inner) = snapshot;
                    worker.ticks.store(tick_loop.ticks, Ordering::Release);

                    if worker.stop.load(Ordering::Acquire) {
                        break;
                    }

                    thread::sleep(tick_loop.interval);
                }

                tick_loop
            })?;

        Ok(TickLoopHandle { shared, join })
    }
}

struct SharedState {
    snapshot: RwLock<SceneSnapshot>,
    ticks: AtomicU64,
    stop: AtomicBool,
}

/// Control handle for a [`TickLoop`] running on its own thread.
pub struct TickLoopHandle {
    shared: Arc<SharedState>,
    join: thread::JoinHandle<TickLoop>,
}

impl TickLoopHandle {
    /// Clones the snapshot published after the most recently completed
    /// tick.
    ///
    /// Readers never block the loop for longer than the clone takes, and
    /// never observe a scene mid-tick.
    pub fn snapshot(&self) -> SceneSnapshot {
        self.shared
            .snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The number of ticks the loop has completed so far.
    pub fn ticks(&self) -> u64 {
        self.shared.ticks.load(Ordering::Acquire)
    }

    /// Stops scheduling further ticks and returns the loop once the
    /// in-flight tick, if any, has completed.
    ///
    /// The returned [`TickLoop`] holds the final scene state and can be
    /// inspected, mutated and re-spawned. If the loop thread panicked, the
    /// panic is propagated to the caller.
    pub fn stop(self) -> TickLoop {
        self.shared.stop.store(true, Ordering::Release);

        match self.join.join() {
            Ok(tick_loop) => tick_loop,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}
