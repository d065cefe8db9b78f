//! Growth model: score to radius, score to body length, head commit and
//! tail trimming.

use serpix_core::components::Body;
use serpix_core::constants::{LENGTH_PER_SCORE, RADIUS_PER_SCORE};
use serpix_core::types::Point;

/// Radius for `score`, clamped to `[base_radius, max_radius]`.
pub fn radius_for(score: f64, base_radius: f64, max_radius: f64) -> f64 {
    (base_radius + score * RADIUS_PER_SCORE)
        .min(max_radius)
        .max(base_radius)
}

/// Body length the tail is trimmed to.
pub fn target_length(score: f64, initial_length: usize) -> f64 {
    initial_length as f64 + score * LENGTH_PER_SCORE
}

/// Prepend `next` as the new head, add a smoothing midpoint behind it when
/// boosting, then trim the tail to `target` (never below one segment).
pub fn commit_head(body: &mut Body, next: Point, boosting: bool, target: f64) {
    body.segments.push_front(next);

    if boosting && body.segments.len() > 1 {
        let midpoint = next.midpoint(&body.segments[1]);
        body.segments.insert(1, midpoint);
    }

    while body.segments.len() > 1 && body.segments.len() as f64 > target {
        body.segments.pop_back();
    }
}
