#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::components::Tower;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::level::{LevelData, SegmentRecord};
    use crate::state::FrameSnapshot;
    use crate::stats::{apply_upgrade, bloon_spec, tower_spec, upgrade_spec};
    use crate::types::SimTime;

    fn make_tower(kind: TowerKind) -> Tower {
        let spec = tower_spec(kind);
        Tower {
            id: 0,
            kind,
            turret_length: spec.turret_length,
            turret_angle: 0.0,
            rounds_per_second: spec.rounds_per_second,
            rounds_per_shot: spec.rounds_per_shot,
            round_speed: spec.round_speed,
            round_damage: spec.round_damage,
            round_radius: spec.round_radius,
            round_spray: spec.round_spray,
            round_collats: spec.round_collats,
            round_kind: spec.round_kind,
            targetting_range: spec.targetting_range,
            targetting_mode: TargetingMode::default(),
            targetting_source: TargetingSource::default(),
            fire_pattern: spec.fire_pattern,
            target: None,
            last_fired_ms: None,
            upgrades: Vec::new(),
        }
    }

    // ---- Serde round-trips ----

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_traveller_kind_serde() {
        let variants = vec![
            TravellerKind::Bloon(BloonTier::Red),
            TravellerKind::Bloon(BloonTier::White),
            TravellerKind::Walker,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TravellerKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// The segment kind tag must serialize lowercase to match level files.
    #[test]
    fn test_segment_kind_serde_tags() {
        assert_eq!(serde_json::to_string(&SegmentKind::Line).unwrap(), "\"line\"");
        assert_eq!(
            serde_json::to_string(&SegmentKind::Bezier).unwrap(),
            "\"bezier\""
        );
        let back: SegmentKind = serde_json::from_str("\"bezier\"").unwrap();
        assert_eq!(back, SegmentKind::Bezier);
    }

    #[test]
    fn test_targeting_mode_serde() {
        let variants = vec![
            TargetingMode::First,
            TargetingMode::Last,
            TargetingMode::Strongest,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TargetingMode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::TogglePause,
            PlayerCommand::SetMode {
                mode: GameMode::Edit,
            },
            PlayerCommand::PlaceTower {
                kind: TowerKind::Basic,
                x: 100.0,
                y: 250.0,
            },
            PlayerCommand::SetTargetingMode {
                tower: 1,
                mode: TargetingMode::Strongest,
            },
            PlayerCommand::ApplyUpgrade {
                tower: 1,
                upgrade: UpgradeId::PiercingShot,
            },
            PlayerCommand::SpawnTraveller {
                kind: TravellerKind::Bloon(BloonTier::Blue),
                path: 0,
            },
            PlayerCommand::SavePath { path: 0 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::WaveStarted { round: 3 },
            GameEvent::BloonPopped {
                id: 17,
                tier: BloonTier::Green,
            },
            GameEvent::BloonLeaked {
                id: 4,
                damage: 7,
                lives_remaining: 93,
            },
            GameEvent::LivesExhausted { round: 9 },
            GameEvent::TowerFired { tower: 2, rounds: 8 },
            GameEvent::PathSaved {
                records: vec![SegmentRecord {
                    kind: SegmentKind::Line,
                    layer: 0,
                    points: vec![[0.0, 0.0], [10.0, 0.0]],
                }],
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify FrameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Level data round-trips preserving the record shape exactly.
    #[test]
    fn test_level_data_serde() {
        let json = r#"{
            "layers": ["bg0.png", null, "bg1.png"],
            "paths": [{"path": [
                {"type": "line", "layer": 0, "points": [[0, 0], [100, 50]]},
                {"type": "bezier", "layer": 2,
                 "points": [[100, 50], [150, 50], [150, 150], [200, 150]]}
            ]}]
        }"#;
        let level: LevelData = serde_json::from_str(json).unwrap();
        assert_eq!(level.layers.len(), 3);
        assert_eq!(level.layers[1], None);
        assert_eq!(level.paths.len(), 1);
        assert_eq!(level.paths[0].path[0].kind, SegmentKind::Line);
        assert_eq!(level.paths[0].path[1].points.len(), 4);

        let back: LevelData =
            serde_json::from_str(&serde_json::to_string(&level).unwrap()).unwrap();
        assert_eq!(level, back);
    }

    // ---- Stat catalogs ----

    /// The split chain must walk down the tier ladder to Red.
    #[test]
    fn test_bloon_tier_chain() {
        assert_eq!(bloon_spec(BloonTier::Red).next, None);
        assert_eq!(bloon_spec(BloonTier::Blue).next, Some((BloonTier::Red, 1)));
        assert_eq!(bloon_spec(BloonTier::Green).next, Some((BloonTier::Blue, 1)));
        assert_eq!(
            bloon_spec(BloonTier::Black).next,
            Some((BloonTier::Pink, 2))
        );
        assert_eq!(
            bloon_spec(BloonTier::White).next,
            Some((BloonTier::Pink, 2))
        );
    }

    /// Tier speeds rise with tier strength (Black/White share the top speed).
    #[test]
    fn test_bloon_tier_speeds_ascend() {
        let order = [
            BloonTier::Red,
            BloonTier::Blue,
            BloonTier::Green,
            BloonTier::Yellow,
            BloonTier::Pink,
            BloonTier::Black,
        ];
        for pair in order.windows(2) {
            assert!(
                bloon_spec(pair[0]).speed < bloon_spec(pair[1]).speed + 1e-12,
                "speed should not drop from {:?} to {:?}",
                pair[0],
                pair[1]
            );
        }
        assert_eq!(
            bloon_spec(BloonTier::Black).speed,
            bloon_spec(BloonTier::White).speed
        );
    }

    #[test]
    fn test_tower_spec_basic() {
        let spec = tower_spec(TowerKind::Basic);
        assert_eq!(spec.rounds_per_second, 4.0);
        assert_eq!(spec.rounds_per_shot, 1);
        assert_eq!(spec.targetting_range, 200.0);
        assert_eq!(spec.fire_pattern, FirePattern::Forward);

        let spray = tower_spec(TowerKind::Spray);
        assert_eq!(spray.fire_pattern, FirePattern::Around);
        assert!(spray.rounds_per_shot > 1);
    }

    // ---- Upgrades ----

    /// Faster firing multiplies the fire rate by 1.5 and records its id.
    #[test]
    fn test_upgrade_faster_firing() {
        let mut tower = make_tower(TowerKind::Basic);
        apply_upgrade(&mut tower, UpgradeId::FasterFiring);
        assert!((tower.rounds_per_second - 6.0).abs() < 1e-12);
        assert_eq!(tower.upgrades, vec![UpgradeId::FasterFiring]);
    }

    /// Duplicate application stacks: no dedup guard.
    #[test]
    fn test_upgrade_stacking() {
        let mut tower = make_tower(TowerKind::Basic);
        apply_upgrade(&mut tower, UpgradeId::PiercingShot);
        apply_upgrade(&mut tower, UpgradeId::PiercingShot);
        assert_eq!(tower.round_collats, 4);
        assert_eq!(tower.upgrades.len(), 2);

        apply_upgrade(&mut tower, UpgradeId::FasterFiring);
        apply_upgrade(&mut tower, UpgradeId::FasterFiring);
        assert!((tower.rounds_per_second - 4.0 * 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_upgrade_ids_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_string(&UpgradeId::FasterFiring).unwrap(),
            "\"faster-firing\""
        );
        assert_eq!(
            serde_json::to_string(&UpgradeId::PiercingShot2).unwrap(),
            "\"piercing-shot-2\""
        );
        assert_eq!(upgrade_spec(UpgradeId::PiercingShot2).cost, 200);
    }

    // ---- Time ----

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
        assert!((time.elapsed_ms() - 1000.0).abs() < 1e-7);
    }

    /// DVec2 components serialize as plain arrays, keeping snapshots compact.
    #[test]
    fn test_position_component_serde() {
        let p = crate::components::Position(DVec2::new(3.0, 4.0));
        let json = serde_json::to_string(&p).unwrap();
        let back: crate::components::Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
        assert!((back.0.length() - 5.0).abs() < 1e-12);
    }
}
