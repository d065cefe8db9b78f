//! Steering model: smoothed turning, boost speed and boost cost.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

use serpix_core::components::{Motion, Vitals};
use serpix_core::constants::*;
use serpix_core::types::Point;

/// Wrap an angle into `(-π, π]`.
pub fn wrap_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI {
        a - TAU
    } else {
        a
    }
}

/// Signed shortest rotation from `from` to `to`, in `(-π, π]`.
pub fn angle_delta(from: f64, to: f64) -> f64 {
    wrap_angle(to - from)
}

/// Rotate `angle` toward `target` by `rate` of the shortest-path difference.
pub fn turn_toward(angle: f64, target: f64, rate: f64) -> f64 {
    wrap_angle(angle + angle_delta(angle, target) * rate)
}

/// Set this tick's speed and charge the boost cost.
///
/// Boosting needs a score above `BOOST_MIN_SCORE`; the cost is waived while
/// buffed and never drops the score below that threshold.
pub fn apply_speed(motion: &mut Motion, vitals: &mut Vitals, buffed: bool) {
    if motion.boosting && vitals.score > BOOST_MIN_SCORE {
        motion.speed = motion.base_speed * BOOST_SPEED_MULTIPLIER;
        if !buffed {
            vitals.score = (vitals.score - BOOST_SCORE_COST).max(BOOST_MIN_SCORE);
        }
    } else {
        motion.speed = motion.base_speed;
    }
}

/// Candidate head after moving `speed` units along `angle`.
pub fn advance(head: Point, angle: f64, speed: f64) -> Point {
    Point::from(head.to_dvec2() + DVec2::from_angle(angle) * speed)
}
