//! End-to-end scenarios driven through the public engine API.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use serpix_sim::core::commands::InputEvent;
use serpix_sim::core::components::{Body, Motion, Vitals};
use serpix_sim::core::config::GameConfig;
use serpix_sim::core::constants::*;
use serpix_sim::core::enums::FoodGrade;
use serpix_sim::core::types::{ConnectionId, Point};
use serpix_sim::resources::ResourceItem;
use serpix_sim::systems::power_event::choose_lucky;
use serpix_sim::{GameEngine, SimConfig};

fn engine_with(food_count: usize, bot_count: usize) -> GameEngine {
    GameEngine::new(SimConfig {
        seed: 3,
        game: GameConfig {
            food_count,
            bot_count,
            ..Default::default()
        },
    })
    .expect("default config is valid")
}

/// Pin an agent at `head`, heading `angle`, with no spawn grace left.
fn pin(engine: &mut GameEngine, entity: hecs::Entity, head: Point, angle: f64, score: f64) {
    let ecs = engine.world_mut().agents.world_mut();
    let (body, motion, vitals) = ecs
        .query_one_mut::<(&mut Body, &mut Motion, &mut Vitals)>(entity)
        .unwrap();
    body.segments = VecDeque::from(vec![head; DEFAULT_INITIAL_LENGTH]);
    motion.angle = angle;
    motion.target_angle = angle;
    vitals.score = score;
    vitals.invulnerable_ticks = 0;
}

fn join(engine: &mut GameEngine, connection: u64) -> hecs::Entity {
    engine.queue_command(InputEvent::Join {
        connection_id: ConnectionId(connection),
        name: "Tester".into(),
    });
    engine.tick();
    engine
        .world()
        .agents
        .find_by_connection(ConnectionId(connection))
        .unwrap()
}

#[test]
fn eliminated_bot_lingers_then_is_replaced() {
    let mut engine = engine_with(0, 1);
    let bot = engine.world().agents.ordered()[0];
    pin(&mut engine, bot, Point::new(1.0, 4000.0), std::f64::consts::PI, 0.0);

    let first = engine.tick();
    let eliminated_at = first.tick;
    let bot_id = first.snapshot.snakes[0].id;
    assert!(first.snapshot.snakes[0].dead, "Bot should leave the arena and die");

    let delay = engine.config().elimination_delay_ticks();
    assert_eq!(delay, 120);

    for _ in 1..delay {
        let output = engine.tick();
        assert_eq!(output.snapshot.snakes.len(), 1);
        assert_eq!(output.snapshot.snakes[0].id, bot_id);
        assert!(output.snapshot.snakes[0].dead);
    }

    let output = engine.tick();
    assert_eq!(output.tick, eliminated_at + delay);
    assert_eq!(output.snapshot.snakes.len(), 1, "Exactly one replacement bot");
    let replacement = &output.snapshot.snakes[0];
    assert_ne!(replacement.id, bot_id);
    assert!(!replacement.dead);
    assert!(replacement.name.starts_with("Bot "));
}

#[test]
fn eliminated_human_is_not_replaced() {
    let mut engine = engine_with(0, 0);
    let player = join(&mut engine, 1);
    pin(&mut engine, player, Point::new(4000.0, 1.0), -std::f64::consts::FRAC_PI_2, 0.0);

    let output = engine.tick();
    assert!(output.snapshot.snakes[0].dead);

    for _ in 0..engine.config().elimination_delay_ticks() {
        engine.tick();
    }
    let output = engine.tick();
    assert!(output.snapshot.snakes.is_empty());
}

#[test]
fn elimination_scatters_premium_food() {
    let mut engine = engine_with(0, 0);
    let player = join(&mut engine, 1);
    pin(&mut engine, player, Point::new(1.0, 4000.0), std::f64::consts::PI, 0.0);

    let output = engine.tick();
    let premium: Vec<_> = output.snapshot.foods.iter().filter(|f| f.is_premium).collect();
    assert_eq!(premium.len(), DEFAULT_INITIAL_LENGTH.div_ceil(SCATTER_STRIDE));
    assert!(premium.iter().all(|f| f.value == PREMIUM_FOOD_VALUE));
    assert!(premium.iter().all(|f| f.color == DEFAULT_HUMAN_COLOR));
}

#[test]
fn boosting_is_refused_below_threshold() {
    let mut engine = engine_with(0, 0);
    let player = join(&mut engine, 1);
    pin(&mut engine, player, Point::new(4000.0, 4000.0), 0.0, 0.0);

    engine.queue_command(InputEvent::UpdateDirection {
        connection_id: ConnectionId(1),
        angle: 0.0,
        boosting: true,
    });
    let output = engine.tick();

    let ecs = engine.world().agents.world();
    let motion = ecs.get::<&Motion>(player).unwrap();
    assert_eq!(motion.speed, BASE_SPEED);
    let snake = &output.snapshot.snakes[0];
    assert_eq!(snake.score, 0.0);
    assert!((snake.segments[0].x - (4000.0 + BASE_SPEED)).abs() < 1e-9);
}

#[test]
fn boosting_above_threshold_costs_score() {
    let mut engine = engine_with(0, 0);
    let player = join(&mut engine, 1);
    pin(&mut engine, player, Point::new(4000.0, 4000.0), 0.0, 100.0);

    engine.queue_command(InputEvent::UpdateDirection {
        connection_id: ConnectionId(1),
        angle: 0.0,
        boosting: true,
    });
    let output = engine.tick();

    let snake = &output.snapshot.snakes[0];
    assert!((snake.score - (100.0 - BOOST_SCORE_COST)).abs() < 1e-9);
    assert!((snake.segments[0].x - (4000.0 + BASE_SPEED * BOOST_SPEED_MULTIPLIER)).abs() < 1e-9);
    assert!(snake.is_boosting);
}

#[test]
fn premium_food_adds_ten_and_disappears() {
    let mut engine = engine_with(0, 0);
    let player = join(&mut engine, 1);
    pin(&mut engine, player, Point::new(2000.0, 2000.0), 0.0, 100.0);
    engine.world_mut().resources.push(ResourceItem {
        id: 0,
        position: Point::new(2000.0, 2000.0),
        radius: PREMIUM_FOOD_RADIUS,
        color: "#ef4444".into(),
        value: PREMIUM_FOOD_VALUE,
        grade: FoodGrade::Premium,
    });
    let before = engine.world().resources.len();

    let output = engine.tick();

    assert_eq!(output.snapshot.snakes[0].score, 110.0);
    assert_eq!(output.snapshot.foods.len(), before - 1);
}

#[test]
fn ordinary_food_count_is_constant() {
    let mut engine = engine_with(400, 20);
    for _ in 0..600 {
        let output = engine.tick();
        let ordinary = output.snapshot.foods.iter().filter(|f| !f.is_premium).count();
        assert_eq!(ordinary, 400);
    }
}

#[test]
fn rampage_favors_humans() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let candidates = [(0u8, true), (1u8, false)];
    let trials = 20_000;
    let human_wins = (0..trials)
        .filter(|_| choose_lucky(&candidates, POWER_EVENT_HUMAN_BIAS, &mut rng) == Some(0))
        .count();
    let rate = human_wins as f64 / trials as f64;
    assert!(rate > 0.62 && rate < 0.68, "Human pick rate was {rate:.3}");
}

#[test]
fn notifications_expire_after_their_duration() {
    let mut engine = engine_with(0, 0);
    let victim = join(&mut engine, 1);
    let killer = join(&mut engine, 2);
    // The victim moves first and runs into the middle of the killer's body,
    // far from the killer's head so the scattered food stays out of reach.
    pin(&mut engine, victim, Point::new(2998.0, 3200.0), 0.0, 50.0);
    pin(&mut engine, killer, Point::new(3010.0, 3000.0), std::f64::consts::FRAC_PI_2, 0.0);
    let body: VecDeque<Point> = (0..DEFAULT_INITIAL_LENGTH)
        .map(|i| Point::new(3010.0, 3000.0 + 40.0 * i as f64))
        .collect();
    engine
        .world_mut()
        .agents
        .world_mut()
        .get::<&mut Body>(killer)
        .unwrap()
        .segments = body;

    let output = engine.tick();
    let killed_at = output.tick;
    assert!(output.snapshot.snakes[0].dead);
    assert_eq!(output.snapshot.snakes[1].score, 5.0);
    assert_eq!(output.snapshot.kill_notifications.len(), 1);
    assert_eq!(output.snapshot.kill_notifications[0].points, 5.0);
    assert_eq!(
        output.snapshot.kill_notifications[0].duration,
        KILL_NOTIFICATION_DURATION_MS
    );

    let duration = engine.config().notification_duration_ticks();
    for _ in 1..duration {
        assert_eq!(engine.tick().snapshot.kill_notifications.len(), 1);
    }
    let output = engine.tick();
    assert_eq!(output.tick, killed_at + duration);
    assert!(output.snapshot.kill_notifications.is_empty());
}
