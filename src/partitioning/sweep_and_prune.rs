use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::pipeline::{PrismHandle, PrismSet};

/// An unordered pair of prisms whose bounds overlap, emitted by the broad
/// phase.
///
/// The pair is stored in canonical order (smaller handle first) so that the
/// same two prisms always produce the same candidate, no matter which of
/// their sweep intervals closed first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CollisionCandidate {
    a: PrismHandle,
    b: PrismHandle,
}

impl CollisionCandidate {
    /// Creates a candidate pair, normalizing the handle order.
    pub fn new(a: PrismHandle, b: PrismHandle) -> Self {
        if b < a {
            CollisionCandidate { a: b, b: a }
        } else {
            CollisionCandidate { a, b }
        }
    }

    /// The smaller handle of the pair.
    pub fn a(&self) -> PrismHandle {
        self.a
    }

    /// The larger handle of the pair.
    pub fn b(&self) -> PrismHandle {
        self.b
    }
}

/// One end of a prism's interval on the sweep axis.
///
/// At equal coordinates, minimum endpoints sort before maximum endpoints so
/// that zero-width intervals still open before they close.
#[derive(Copy, Clone)]
struct Endpoint {
    value: OrderedFloat<Real>,
    is_max: bool,
    prism: PrismHandle,
}

/// A sweep-and-prune broad phase over the horizontal collision plane.
///
/// Every call to [`SweepAndPrune::candidate_pairs`] recomputes each prism's
/// AABB, projects it onto the `x` axis and sorts the resulting interval
/// endpoints. Sweeping the sorted endpoints maintains the set of intervals
/// currently open; when an interval closes, the closing prism is tested
/// against every other open interval with the full two-axis AABB test, so
/// each pair is examined exactly once.
///
/// The endpoint and AABB buffers are owned by this structure and reused
/// across calls.
#[derive(Default)]
pub struct SweepAndPrune {
    endpoints: Vec<Endpoint>,
    aabbs: Vec<Aabb>,
}

impl SweepAndPrune {
    /// Creates a broad phase with empty scratch buffers.
    pub fn new() -> Self {
        SweepAndPrune::default()
    }

    /// Recomputes every prism's bounds and returns the lazy sequence of
    /// candidate pairs for this sweep.
    ///
    /// Candidates are pairs whose AABBs overlap strictly on both axes;
    /// bounds that merely touch are never yielded. The order of candidates
    /// is deterministic for a given prism set.
    pub fn candidate_pairs(&mut self, prisms: &PrismSet) -> CandidatePairs<'_> {
        self.aabbs.clear();
        self.endpoints.clear();

        for (handle, prism) in prisms.iter() {
            let aabb = prism.local_aabb();
            debug_assert_eq!(handle.index(), self.aabbs.len());
            self.endpoints.push(Endpoint {
                value: OrderedFloat(aabb.mins.x),
                is_max: false,
                prism: handle,
            });
            self.endpoints.push(Endpoint {
                value: OrderedFloat(aabb.maxs.x),
                is_max: true,
                prism: handle,
            });
            self.aabbs.push(aabb);
        }

        self.endpoints
            .sort_unstable_by_key(|endpoint| (endpoint.value, endpoint.is_max));

        CandidatePairs {
            endpoints: &self.endpoints,
            aabbs: &self.aabbs,
            active: SmallVec::new(),
            cursor: 0,
            closing: None,
        }
    }
}

/// Lazy iterator over the candidate pairs of one sweep.
///
/// Borrows the sorted endpoints from the [`SweepAndPrune`] that produced it
/// and carries the sweep's open-interval set. Nothing is precomputed: pairs
/// are discovered as the consumer advances the sweep.
pub struct CandidatePairs<'a> {
    endpoints: &'a [Endpoint],
    aabbs: &'a [Aabb],
    active: SmallVec<[PrismHandle; 16]>,
    cursor: usize,
    closing: Option<(PrismHandle, usize)>,
}

impl Iterator for CandidatePairs<'_> {
    type Item = CollisionCandidate;

    fn next(&mut self) -> Option<CollisionCandidate> {
        loop {
            // Drain the tests pending against the interval that last closed.
            if let Some((closing, mut i)) = self.closing.take() {
                let closing_aabb = &self.aabbs[closing.index()];

                while i < self.active.len() {
                    let other = self.active[i];
                    i += 1;

                    if closing_aabb.intersects_strict(&self.aabbs[other.index()]) {
                        self.closing = Some((closing, i));
                        return Some(CollisionCandidate::new(closing, other));
                    }
                }
            }

            let endpoint = *self.endpoints.get(self.cursor)?;
            self.cursor += 1;

            if endpoint.is_max {
                // The interval closes: retire it from the open set, then
                // test it against everything still open.
                if let Some(pos) = self.active.iter().position(|h| *h == endpoint.prism) {
                    let _ = self.active.swap_remove(pos);
                }
                self.closing = Some((endpoint.prism, 0));
            } else {
                self.active.push(endpoint.prism);
            }
        }
    }
}
