#[cfg(test)]
mod tests {
    use crate::commands::InputEvent;
    use crate::config::{ConfigError, GameConfig};
    use crate::constants::*;
    use crate::enums::AgentKind;
    use crate::events::GameEvent;
    use crate::state::*;
    use crate::types::{AgentId, ConnectionId, Point, SimTime};

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let cases = vec![
            (
                GameConfig {
                    tick_rate: 0,
                    ..Default::default()
                },
                ConfigError::ZeroTickRate,
            ),
            (
                GameConfig {
                    world_size: SPAWN_MARGIN * 2.0,
                    ..Default::default()
                },
                ConfigError::WorldTooSmall(SPAWN_MARGIN * 2.0),
            ),
            (
                GameConfig {
                    palette: Vec::new(),
                    ..Default::default()
                },
                ConfigError::EmptyPalette,
            ),
            (
                GameConfig {
                    initial_length: 0,
                    ..Default::default()
                },
                ConfigError::ZeroInitialLength,
            ),
            (
                GameConfig {
                    power_event_duration_ms: 0,
                    ..Default::default()
                },
                ConfigError::ZeroPowerDuration,
            ),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn test_config_rejects_nan_world() {
        let config = GameConfig {
            world_size: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WorldTooSmall(_))
        ));
    }

    #[test]
    fn test_config_rejects_infinite_world() {
        for world_size in [f64::INFINITY, f64::NEG_INFINITY] {
            let config = GameConfig {
                world_size,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::WorldTooSmall(_))),
                "world_size {world_size} should be rejected"
            );
        }
    }

    #[test]
    fn test_huge_durations_saturate() {
        let config = GameConfig {
            power_event_interval_ms: i64::MAX as u64,
            power_event_duration_ms: u64::MAX,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.power_event_interval_ticks(), u64::MAX / 1000);
        assert_eq!(config.power_event_duration_ticks(), u64::MAX / 1000);
        assert_eq!(config.tick_to_ms(u64::MAX), u64::MAX / 60);
    }

    #[test]
    fn test_ms_to_ticks_at_60hz() {
        let config = GameConfig::default();
        assert_eq!(config.elimination_delay_ticks(), 120);
        assert_eq!(config.notification_duration_ticks(), 120);
        assert_eq!(config.power_event_interval_ticks(), 7200);
        assert_eq!(config.power_event_duration_ticks(), 300);
        // Sub-tick durations still last one tick.
        assert_eq!(config.ms_to_ticks(1), 1);
    }

    #[test]
    fn test_tick_to_ms() {
        let config = GameConfig::default();
        assert_eq!(config.tick_to_ms(60), 1000);
        assert_eq!(config.tick_to_ms(0), 0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"bot_count": 3}"#).unwrap();
        assert_eq!(config.bot_count, 3);
        assert_eq!(config.food_count, DEFAULT_FOOD_COUNT);
        assert_eq!(config.palette.len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn test_point_geometry() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.midpoint(&b), Point::new(1.5, 2.0));
        assert!((a.angle_to(&Point::new(0.0, 1.0)) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_point_within_square_is_inclusive() {
        assert!(Point::new(0.0, 100.0).within_square(100.0));
        assert!(!Point::new(-0.01, 50.0).within_square(100.0));
        assert!(!Point::new(50.0, 100.01).within_square(100.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance();
        time.advance();
        assert_eq!(time.tick, 2);
    }

    #[test]
    fn test_agent_kind_helpers() {
        let human = AgentKind::Human {
            connection_id: ConnectionId(9),
        };
        assert!(!human.is_bot());
        assert_eq!(human.connection_id(), Some(ConnectionId(9)));
        assert!(AgentKind::Bot.is_bot());
        assert_eq!(AgentKind::Bot.connection_id(), None);
    }

    /// The wire shape uses the camelCase names observers expect.
    #[test]
    fn test_snapshot_field_names() {
        let snapshot = GameStateSnapshot {
            snakes: vec![SnakeView {
                id: AgentId(4),
                name: "Bot 1".into(),
                color: "#ffffff".into(),
                segments: vec![Point::new(1.0, 2.0)],
                angle: 0.5,
                radius: 12.0,
                score: 0.0,
                dead: false,
                is_boosting: true,
                power_boost: false,
                invulnerable: 60,
            }],
            foods: vec![FoodView {
                id: 1,
                x: 0.0,
                y: 0.0,
                radius: 8.0,
                color: "#ef4444".into(),
                value: 10.0,
                is_premium: true,
            }],
            kill_notifications: vec![KillNotificationView {
                x: 1.0,
                y: 1.0,
                points: 3.0,
                created_at: 100,
                duration: 2000,
            }],
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("killNotifications").is_some());
        let snake = &json["snakes"][0];
        assert_eq!(snake["id"], 4);
        assert_eq!(snake["isBoosting"], true);
        assert_eq!(snake["powerBoost"], false);
        assert_eq!(snake["segments"][0]["x"], 1.0);
        assert_eq!(json["foods"][0]["isPremium"], true);
        assert_eq!(json["killNotifications"][0]["createdAt"], 100);
    }

    #[test]
    fn test_input_event_serde() {
        let events = vec![
            InputEvent::Join {
                connection_id: ConnectionId(1),
                name: "ana".into(),
            },
            InputEvent::UpdateDirection {
                connection_id: ConnectionId(1),
                angle: 1.25,
                boosting: true,
            },
            InputEvent::Disconnect {
                connection_id: ConnectionId(1),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: InputEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_game_event_tagging() {
        let event = GameEvent::Rampage {
            snake_name: "Bot 3".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Rampage");
        assert_eq!(json["snake_name"], "Bot 3");
    }
}
