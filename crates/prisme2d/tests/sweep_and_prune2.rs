extern crate nalgebra as na;

use std::collections::HashSet;

use na::Point2;
use prisme2d::partitioning::{CollisionCandidate, SweepAndPrune};
use prisme2d::pipeline::PrismSet;
use prisme2d::shape::Prism;

fn square(half: f32, cx: f32, cy: f32) -> Prism {
    Prism::new(
        vec![
            Point2::new(cx - half, cy - half),
            Point2::new(cx + half, cy - half),
            Point2::new(cx + half, cy + half),
            Point2::new(cx - half, cy + half),
        ],
        0.0,
        1.0,
    )
    .unwrap()
}

fn random_scene(seed: u64, count: usize) -> PrismSet {
    let mut rng = oorandom::Rand32::new(seed);
    let mut prisms = PrismSet::new();

    for _ in 0..count {
        let sides = rng.rand_range(3..11);
        let cx = rng.rand_float() * 40.0 - 20.0;
        let cy = rng.rand_float() * 40.0 - 20.0;
        let radius = rng.rand_float() * 2.0 + 0.5;
        let phase = rng.rand_float() * std::f32::consts::TAU;

        let points = (0..sides)
            .map(|i| {
                let angle = phase + i as f32 * std::f32::consts::TAU / sides as f32;
                Point2::new(cx + radius * angle.cos(), cy + radius * angle.sin())
            })
            .collect();

        let _ = prisms.insert(Prism::new(points, 0.0, 1.0).unwrap());
    }

    prisms
}

#[test]
fn matches_the_brute_force_pair_enumeration() {
    for seed in 0..8 {
        let prisms = random_scene(seed, 50);
        let mut broad_phase = SweepAndPrune::new();

        let yielded: Vec<_> = broad_phase.candidate_pairs(&prisms).collect();
        let unique: HashSet<_> = yielded.iter().copied().collect();
        assert_eq!(yielded.len(), unique.len(), "a pair was yielded twice");

        let aabbs: Vec<_> = prisms
            .iter()
            .map(|(handle, prism)| (handle, prism.local_aabb()))
            .collect();
        for (i, (first, first_aabb)) in aabbs.iter().enumerate() {
            for (second, second_aabb) in &aabbs[i + 1..] {
                let expected = first_aabb.intersects_strict(second_aabb);
                let yielded = unique.contains(&CollisionCandidate::new(*first, *second));
                assert_eq!(
                    yielded, expected,
                    "seed {}: wrong verdict for pair ({}, {})",
                    seed,
                    first.index(),
                    second.index()
                );
            }
        }
    }
}

#[test]
fn touching_bounds_are_not_candidates() {
    let mut prisms = PrismSet::new();
    let _ = prisms.insert(square(1.0, 0.0, 0.0));
    let _ = prisms.insert(square(1.0, 2.0, 0.0));
    let _ = prisms.insert(square(1.0, 2.0, 2.0));

    let mut broad_phase = SweepAndPrune::new();
    assert_eq!(broad_phase.candidate_pairs(&prisms).count(), 0);
}

#[test]
fn empty_and_singleton_scenes_have_no_candidates() {
    let mut broad_phase = SweepAndPrune::new();

    let empty = PrismSet::new();
    assert_eq!(broad_phase.candidate_pairs(&empty).count(), 0);

    let mut single = PrismSet::new();
    let _ = single.insert(square(1.0, 0.0, 0.0));
    assert_eq!(broad_phase.candidate_pairs(&single).count(), 0);
}

#[test]
fn zero_width_intervals_still_open_before_they_close() {
    // A degenerate prism whose bounds have zero width on the sweep axis.
    let needle = Prism::new(
        vec![
            Point2::new(0.0, -0.5),
            Point2::new(0.0, 0.5),
            Point2::new(0.0, 0.0),
        ],
        0.0,
        1.0,
    )
    .unwrap();

    let mut prisms = PrismSet::new();
    let needle = prisms.insert(needle);
    let fat = prisms.insert(square(1.0, 0.0, 0.0));

    let mut broad_phase = SweepAndPrune::new();
    let pairs: Vec<_> = broad_phase.candidate_pairs(&prisms).collect();
    assert_eq!(pairs, vec![CollisionCandidate::new(needle, fat)]);
}

#[test]
fn candidate_order_is_reproducible() {
    let prisms = random_scene(3, 60);

    let mut broad_phase = SweepAndPrune::new();
    let first: Vec<_> = broad_phase.candidate_pairs(&prisms).collect();
    // Same broad phase, reused buffers.
    let second: Vec<_> = broad_phase.candidate_pairs(&prisms).collect();
    // A fresh broad phase sees nothing different.
    let third: Vec<_> = SweepAndPrune::new().candidate_pairs(&prisms).collect();

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn candidates_store_handles_in_canonical_order() {
    let prisms = random_scene(7, 40);
    let mut broad_phase = SweepAndPrune::new();

    for candidate in broad_phase.candidate_pairs(&prisms) {
        assert!(candidate.a() < candidate.b());
    }
}
