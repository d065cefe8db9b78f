#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use serpix_core::constants::*;
    use serpix_core::types::Point;

    use crate::decision::{evaluate, nearest, BotContext, BotMode};

    fn context<'a>(
        score: f64,
        power_boost: bool,
        rival_heads: &'a [Point],
        foods: &'a [Point],
    ) -> BotContext<'a> {
        BotContext {
            head: Point::new(1000.0, 1000.0),
            target_angle: 0.25,
            score,
            power_boost,
            rival_heads,
            foods,
        }
    }

    #[test]
    fn test_mode_follows_buff() {
        assert_eq!(BotMode::select(true), BotMode::Hunting);
        assert_eq!(BotMode::select(false), BotMode::Foraging);
    }

    #[test]
    fn test_hunting_targets_nearest_rival_and_boosts() {
        let rivals = [Point::new(1000.0, 5000.0), Point::new(1100.0, 1000.0)];
        let foods = [Point::new(1001.0, 1001.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let decision = evaluate(&context(0.0, true, &rivals, &foods), &mut rng);
        assert_eq!(decision.mode, BotMode::Hunting);
        assert!(decision.boosting, "Buffed bots always boost");
        // Nearest rival lies due +x.
        assert!(decision.target_angle.abs() < 1e-12);
    }

    #[test]
    fn test_hunting_without_rivals_keeps_heading() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let decision = evaluate(&context(0.0, true, &[], &[]), &mut rng);
        assert_eq!(decision.target_angle, 0.25);
    }

    #[test]
    fn test_foraging_targets_food_in_range() {
        let foods = [
            Point::new(1000.0, 1000.0 + BOT_FOOD_SEARCH_RADIUS + 1.0),
            Point::new(1000.0, 900.0),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let decision = evaluate(&context(0.0, false, &[], &foods), &mut rng);
        assert_eq!(decision.mode, BotMode::Foraging);
        assert!((decision.target_angle + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_foraging_wanders_when_nothing_in_range() {
        let foods = [Point::new(3000.0, 3000.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let decision = evaluate(&context(0.0, false, &[], &foods), &mut rng);
            let drift = decision.target_angle - 0.25;
            assert!(
                drift.abs() <= BOT_WANDER_JITTER / 2.0,
                "Wander drift {drift} exceeds jitter bound"
            );
        }
    }

    #[test]
    fn test_poor_bots_never_boost() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..1000 {
            let decision = evaluate(&context(BOT_BOOST_MIN_SCORE, false, &[], &[]), &mut rng);
            assert!(!decision.boosting);
        }
    }

    #[test]
    fn test_rich_bots_boost_rarely() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let trials = 10_000;
        let boosts = (0..trials)
            .filter(|_| evaluate(&context(200.0, false, &[], &[]), &mut rng).boosting)
            .count();
        let rate = boosts as f64 / trials as f64;
        assert!(
            (0.03..0.07).contains(&rate),
            "Boost rate {rate} should be near {BOT_BOOST_CHANCE}"
        );
    }

    #[test]
    fn test_nearest_respects_radius_and_ties() {
        let from = Point::new(0.0, 0.0);
        let candidates = [Point::new(10.0, 0.0), Point::new(0.0, 10.0), Point::new(50.0, 0.0)];
        assert_eq!(nearest(&from, &candidates, 100.0), Some(Point::new(10.0, 0.0)));
        assert_eq!(nearest(&from, &candidates, 10.0), None);
        assert_eq!(nearest(&from, &[], f64::INFINITY), None);
    }
}
