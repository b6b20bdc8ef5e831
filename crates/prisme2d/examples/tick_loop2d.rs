extern crate nalgebra as na;

use std::thread;
use std::time::Duration;

use na::Point2;
use prisme2d::pipeline::{PrismSet, TickLoop};
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

fn main() {
    let mut prisms = PrismSet::new();
    let _ = prisms.insert(square(1.0, 0.0, 0.0));
    let _ = prisms.insert(square(1.0, 1.2, 0.4));
    let _ = prisms.insert(square(0.8, -0.9, -0.6));
    let _ = prisms.insert(square(1.0, 6.0, 0.0));

    let tick_loop = TickLoop::with_interval(prisms, Duration::from_millis(100));
    let handle = tick_loop.spawn().expect("failed to spawn the tick loop");

    // Observe the scene from the outside while the loop ticks on its own
    // thread.
    for _ in 0..8 {
        thread::sleep(Duration::from_millis(120));

        let snapshot = handle.snapshot();
        let colliding = snapshot.prisms.iter().filter(|p| p.colliding).count();
        println!(
            "tick {:>3}: {} of {} prisms in contact",
            snapshot.tick,
            colliding,
            snapshot.prisms.len()
        );
    }

    let stopped = handle.stop();
    println!("stopped after {} ticks", stopped.ticks());
}
