use crate::partitioning::{CollisionCandidate, SweepAndPrune};
use crate::pipeline::{PrismHandle, PrismSet};
use crate::query::{self, epa::EPA, gjk::Simplex, Contact, QueryError};

/// Counters summarizing the work performed by one collision tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Pairs emitted by the broad phase.
    pub candidates: usize,
    /// Pairs the narrow phase confirmed and the resolver separated.
    pub contacts: usize,
    /// Pairs abandoned because a query reported an error.
    pub skipped: usize,
}

/// The stages of collision detection and resolution, chained over a
/// [`PrismSet`].
///
/// The pipeline owns the broad-phase scratch, the narrow-phase workspaces
/// and the per-prism collision flags; the prisms themselves live in the
/// [`PrismSet`] passed to [`CollisionPipeline::step`]. One pipeline instance
/// serves one scene: the flags are indexed by prism handle.
#[derive(Default)]
pub struct CollisionPipeline {
    broad_phase: SweepAndPrune,
    simplex: Simplex,
    epa: EPA,
    colliding: Vec<bool>,
    candidates: Vec<CollisionCandidate>,
}

impl CollisionPipeline {
    /// Creates a pipeline with empty scratch buffers.
    pub fn new() -> Self {
        CollisionPipeline::default()
    }

    /// Whether `handle`'s prism took part in a resolved contact during the
    /// most recent [`CollisionPipeline::step`].
    ///
    /// Flags are recomputed from scratch every tick: a prism that collided
    /// last tick but not this one reads `false`. Handles the pipeline has
    /// never seen read `false` as well.
    pub fn is_colliding(&self, handle: PrismHandle) -> bool {
        self.colliding.get(handle.index()).copied().unwrap_or(false)
    }

    /// Runs one full collision tick over `prisms`.
    ///
    /// The tick clears every collision flag, recomputes all bounds, sweeps
    /// them for candidate pairs, confirms each candidate with the GJK/EPA
    /// narrow phase and translates both members of every confirmed pair
    /// apart by half the penetration each. Candidates are resolved in sweep
    /// order and each query sees the positions left by the resolutions
    /// before it, so a prism shared between two pairs is tested where the
    /// first resolution put it. The candidate list itself is fixed at the
    /// start of the tick: a resolution does not re-run the broad phase, so
    /// a prism pushed into a fresh overlap is only picked up on the next
    /// call.
    ///
    /// A query error on one pair (degenerate geometry, non-convergence) is
    /// logged and counted in [`StepSummary::skipped`] without affecting the
    /// remaining pairs.
    pub fn step(&mut self, prisms: &mut PrismSet) -> StepSummary {
        self.colliding.clear();
        self.colliding.resize(prisms.len(), false);

        self.candidates.clear();
        self.candidates.extend(self.broad_phase.candidate_pairs(prisms));

        let mut summary = StepSummary {
            candidates: self.candidates.len(),
            contacts: 0,
            skipped: 0,
        };

        #[cfg(not(feature = "parallel"))]
        {
            for candidate in &self.candidates {
                let result = query::contact_with_workspaces(
                    &prisms[candidate.a()],
                    &prisms[candidate.b()],
                    &mut self.simplex,
                    &mut self.epa,
                );
                resolve_candidate(&mut self.colliding, prisms, *candidate, result, &mut summary);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // The batch fans the narrow-phase queries out across threads
            // against the start-of-tick positions. Resolution then runs
            // serially in candidate order, and a candidate whose member an
            // earlier resolution already translated is re-queried at the
            // current positions; the untouched pairs still sit exactly where
            // the batch saw them, so the final state matches the serial
            // path bit for bit.
            let prisms_ref: &PrismSet = prisms;
            let results: Vec<_> = self
                .candidates
                .par_iter()
                .map_init(
                    || (Simplex::new(), EPA::new()),
                    |(simplex, epa), candidate| {
                        query::contact_with_workspaces(
                            &prisms_ref[candidate.a()],
                            &prisms_ref[candidate.b()],
                            simplex,
                            epa,
                        )
                    },
                )
                .collect();

            for (candidate, batched) in self.candidates.iter().zip(results) {
                let stale = self.colliding[candidate.a().index()]
                    || self.colliding[candidate.b().index()];
                let result = if stale {
                    query::contact_with_workspaces(
                        &prisms[candidate.a()],
                        &prisms[candidate.b()],
                        &mut self.simplex,
                        &mut self.epa,
                    )
                } else {
                    batched
                };
                resolve_candidate(&mut self.colliding, prisms, *candidate, result, &mut summary);
            }
        }

        log::debug!(
            "collision step: {} candidates, {} contacts, {} skipped",
            summary.candidates,
            summary.contacts,
            summary.skipped
        );

        summary
    }
}

fn resolve_candidate(
    colliding: &mut [bool],
    prisms: &mut PrismSet,
    candidate: CollisionCandidate,
    result: Result<Option<Contact>, QueryError>,
    summary: &mut StepSummary,
) {
    match result {
        Ok(Some(contact)) => {
            let shift = contact.penetration() * 0.5;
            let (pa, pb) = prisms.index_mut2(candidate.a(), candidate.b());
            pa.translate_mut(&-shift);
            pb.translate_mut(&shift);
            colliding[candidate.a().index()] = true;
            colliding[candidate.b().index()] = true;
            summary.contacts += 1;
        }
        Ok(None) => {}
        Err(err) => {
            // One failing pair must not starve the rest of the tick.
            log::warn!(
                "skipping candidate pair ({}, {}): {}",
                candidate.a().index(),
                candidate.b().index(),
                err
            );
            summary.skipped += 1;
        }
    }
}
