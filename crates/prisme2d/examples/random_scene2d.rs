extern crate nalgebra as na;

use na::Point2;
use prisme2d::pipeline::{CollisionPipeline, PrismSet};
use prisme2d::shape::Prism;

fn main() {
    let mut rng = oorandom::Rand32::new(42);
    let mut prisms = PrismSet::new();

    // A pile of regular polygons crammed into a small arena, so plenty of
    // them start out overlapping.
    for _ in 0..12 {
        let sides = rng.rand_range(3..11);
        let cx = rng.rand_float() * 12.0 - 6.0;
        let cy = rng.rand_float() * 12.0 - 6.0;
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

    let mut pipeline = CollisionPipeline::new();

    for tick in 0..30 {
        let summary = pipeline.step(&mut prisms);
        println!(
            "tick {:>2}: {:>2} candidates, {:>2} contacts, {} skipped",
            tick, summary.candidates, summary.contacts, summary.skipped
        );

        if summary.contacts == 0 {
            println!("scene settled after {} ticks", tick + 1);
            break;
        }
    }

    println!();
    for (handle, prism) in prisms.iter() {
        let aabb = prism.local_aabb();
        println!(
            "prism {:>2}: {:>2} vertices, bounds [{:6.2}, {:6.2}] x [{:6.2}, {:6.2}]",
            handle.index(),
            prism.point_count(),
            aabb.mins.x,
            aabb.maxs.x,
            aabb.mins.y,
            aabb.maxs.y
        );
    }
}
