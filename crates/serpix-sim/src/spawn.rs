//! Spawn placement: scatter candidate points and keep the one farthest from
//! every live head.

use rand::Rng;

use serpix_core::constants::{SPAWN_ATTEMPTS, SPAWN_MARGIN};
use serpix_core::types::Point;

/// Pick a spawn point at least `SPAWN_MARGIN` from every edge of a
/// `world_size` square, maximizing the minimum distance to `heads` over
/// `SPAWN_ATTEMPTS` samples.
///
/// With no heads every candidate ties at infinite clearance and the first
/// sample wins.
pub fn find_spawn_point<R: Rng + ?Sized>(heads: &[Point], world_size: f64, rng: &mut R) -> Point {
    let mut best = inset_point(world_size, rng);
    let mut best_clearance = -1.0;

    for _ in 0..SPAWN_ATTEMPTS {
        let candidate = inset_point(world_size, rng);
        let clearance = heads
            .iter()
            .map(|head| head.distance_to(&candidate))
            .fold(f64::INFINITY, f64::min);

        if clearance > best_clearance {
            best_clearance = clearance;
            best = candidate;
        }
    }
    best
}

fn inset_point<R: Rng + ?Sized>(world_size: f64, rng: &mut R) -> Point {
    let span = world_size - SPAWN_MARGIN * 2.0;
    Point::new(
        rng.gen::<f64>() * span + SPAWN_MARGIN,
        rng.gen::<f64>() * span + SPAWN_MARGIN,
    )
}
