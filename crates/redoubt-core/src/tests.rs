//! Tests for the shared vocabulary: serde round-trips, geometry helpers,
//! and authoring-time validation of the content tables.

use glam::Vec2;

use crate::commands::PlayerCommand;
use crate::components::{SlowEffect, WeaponEffect};
use crate::constants::TOWER_MAX_LEVEL;
use crate::content;
use crate::enums::*;
use crate::events::{GameEvent, TickEvents};
use crate::state::GameStateSnapshot;
use crate::types::{Position, Rect, SimTime};

// ---- Serde round-trips ----

#[test]
fn test_enemy_kind_serde() {
    let variants = vec![
        EnemyKind::Grunt,
        EnemyKind::Fast,
        EnemyKind::Tank,
        EnemyKind::Flying,
        EnemyKind::Boss,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: EnemyKind = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_tower_kind_serde() {
    let variants = vec![TowerKind::Archer, TowerKind::Cannon, TowerKind::Frost];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: TowerKind = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_run_phase_serde() {
    let variants = vec![
        RunPhase::Idle,
        RunPhase::WaveRunning,
        RunPhase::Victory,
        RunPhase::Defeat,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: RunPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_player_command_serde() {
    let commands = vec![
        PlayerCommand::SelectMap { map_id: 2 },
        PlayerCommand::SetWorldSize {
            width: 1280.0,
            height: 720.0,
        },
        PlayerCommand::Reset,
        PlayerCommand::StartWave,
        PlayerCommand::SetBuildKind {
            kind: TowerKind::Frost,
        },
        PlayerCommand::PlaceTower { x: 100.0, y: 200.0 },
        PlayerCommand::SelectAt { x: 5.0, y: 5.0 },
        PlayerCommand::UpgradeSelected,
        PlayerCommand::SellSelected,
    ];
    for cmd in &commands {
        let json = serde_json::to_string(cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        // Compare JSON representations since PlayerCommand doesn't derive PartialEq
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}

#[test]
fn test_game_event_serde() {
    let events = vec![
        GameEvent::HudChanged,
        GameEvent::WaveChanged { index: 3 },
        GameEvent::Victory,
        GameEvent::Defeat,
    ];
    for event in &events {
        let json = serde_json::to_string(event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(*event, back);
    }
}

#[test]
fn test_weapon_effect_serde() {
    let effects = vec![
        WeaponEffect::Direct,
        WeaponEffect::Splash { radius: 48.0 },
        WeaponEffect::Chill {
            multiplier: 0.5,
            duration_secs: 1.5,
        },
    ];
    for effect in &effects {
        let json = serde_json::to_string(effect).unwrap();
        let _back: WeaponEffect = serde_json::from_str(&json).unwrap();
    }
}

#[test]
fn test_snapshot_serde() {
    let snapshot = GameStateSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.time.tick, back.time.tick);
    assert_eq!(snapshot.phase, back.phase);
    assert!(
        json.len() < 1024,
        "Empty snapshot should be <1KB, was {} bytes",
        json.len()
    );
}

// ---- Geometry ----

#[test]
fn test_position_distance() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    assert!((a.distance_squared_to(&b) - 25.0).abs() < 1e-6);
}

#[test]
fn test_rect_contains() {
    let r = Rect::from_center_size(Vec2::new(100.0, 100.0), Vec2::splat(56.0));
    assert!(r.contains(Vec2::new(100.0, 100.0)));
    assert!(r.contains(Vec2::new(72.0, 72.0)), "corner is inclusive");
    assert!(r.contains(Vec2::new(128.0, 128.0)));
    assert!(!r.contains(Vec2::new(128.1, 100.0)));
    assert!(!r.contains(Vec2::new(100.0, 71.9)));
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..30 {
        time.advance(1.0 / 30.0);
    }
    assert_eq!(time.tick, 30);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-5);
}

// ---- Slow merging ----

#[test]
fn test_slow_apply_keeps_stronger_and_longer() {
    let mut slow = SlowEffect::default();
    slow.apply(0.5, 1.0);
    assert!((slow.multiplier - 0.5).abs() < 1e-6);
    assert!((slow.remaining_secs - 1.0).abs() < 1e-6);

    // Weaker but longer: multiplier stays, duration extends.
    slow.apply(0.8, 2.0);
    assert!((slow.multiplier - 0.5).abs() < 1e-6);
    assert!((slow.remaining_secs - 2.0).abs() < 1e-6);

    // Stronger but shorter: multiplier drops, duration stays.
    slow.apply(0.3, 0.5);
    assert!((slow.multiplier - 0.3).abs() < 1e-6);
    assert!((slow.remaining_secs - 2.0).abs() < 1e-6);
}

#[test]
fn test_slow_apply_after_expiry_replaces_multiplier() {
    let mut slow = SlowEffect::default();
    slow.apply(0.3, 1.0);
    // Simulate expiry.
    slow.multiplier = 1.0;
    slow.remaining_secs = 0.0;

    // A fresh, weaker slow must take effect rather than being "minned"
    // against the stale 1.0 reset value's history.
    slow.apply(0.8, 1.5);
    assert!((slow.multiplier - 0.8).abs() < 1e-6);
    assert!((slow.remaining_secs - 1.5).abs() < 1e-6);
}

// ---- Tick event deduplication ----

#[test]
fn test_tick_events_dedupe_and_drain() {
    let mut events = TickEvents::default();
    events.hud_changed();
    events.hud_changed();
    events.hud_changed();
    events.wave_changed(2);
    let drained = events.drain();
    assert_eq!(
        drained,
        vec![GameEvent::HudChanged, GameEvent::WaveChanged { index: 2 }]
    );
    assert!(events.drain().is_empty(), "drain clears the accumulator");
}

// ---- Content tables (map-authoring validation) ----

#[test]
fn test_maps_are_well_formed() {
    assert!(!content::MAPS.is_empty());
    for map in &content::MAPS {
        assert!(map.path.len() >= 2, "{}: path needs >= 2 points", map.name);
        assert!(!map.pads.is_empty(), "{}: no pads", map.name);
        assert!(!map.waves.is_empty(), "{}: no waves", map.name);
        assert!(map.lives > 0, "{}: no lives", map.name);

        for wp in map.path {
            assert!(
                (0.0..=1.0).contains(&wp.x) && (0.0..=1.0).contains(&wp.y),
                "{}: path point {wp} outside the normalized square",
                map.name
            );
        }
        for pad in map.pads {
            assert!(pad.size_px > 0.0);
            assert!(
                (0.0..=1.0).contains(&pad.center.x) && (0.0..=1.0).contains(&pad.center.y),
                "{}: pad center outside the normalized square",
                map.name
            );
        }
        for wave in map.waves {
            assert!(!wave.groups.is_empty(), "{}: empty wave", map.name);
            for group in wave.groups {
                assert!(group.count > 0, "{}: empty spawn group", map.name);
                assert!(group.interval_secs >= 0.0);
            }
        }
    }
}

#[test]
fn test_enemy_stats_positive() {
    for kind in [
        EnemyKind::Grunt,
        EnemyKind::Fast,
        EnemyKind::Tank,
        EnemyKind::Flying,
        EnemyKind::Boss,
    ] {
        let stats = content::enemy_stats(kind);
        assert!(stats.hp > 0.0);
        assert!(stats.speed_frac > 0.0);
        assert!(stats.radius_frac > 0.0);
        assert!(stats.leak > 0);
    }
}

#[test]
fn test_tower_costs_increase_per_level() {
    for kind in [TowerKind::Archer, TowerKind::Cannon, TowerKind::Frost] {
        for level in 1..=TOWER_MAX_LEVEL {
            let stats = content::tower_stats(kind, level);
            assert!(stats.cost > 0);
            assert!(stats.range_frac > 0.0);
            assert!(stats.damage > 0.0);
            assert!(stats.fire_interval > 0.0);
            if level > 1 {
                assert!(
                    stats.cost > content::tower_cost(kind, level - 1),
                    "{kind:?} level {level} should cost more than the previous level"
                );
            }
        }
    }
}

#[test]
fn test_tower_invested_sums_levels() {
    let l1 = content::tower_cost(TowerKind::Archer, 1);
    let l2 = content::tower_cost(TowerKind::Archer, 2);
    let l3 = content::tower_cost(TowerKind::Archer, 3);
    assert_eq!(content::tower_invested(TowerKind::Archer, 1), l1);
    assert_eq!(content::tower_invested(TowerKind::Archer, 2), l1 + l2);
    assert_eq!(content::tower_invested(TowerKind::Archer, 3), l1 + l2 + l3);
}

#[test]
fn test_frost_levels_slow_harder_and_longer() {
    let mut last_mul = 1.0_f32;
    let mut last_secs = 0.0_f32;
    for level in 1..=TOWER_MAX_LEVEL {
        let stats = content::tower_stats(TowerKind::Frost, level);
        assert!(stats.slow_multiplier > 0.0 && stats.slow_multiplier < 1.0);
        assert!(stats.slow_multiplier < last_mul);
        assert!(stats.slow_secs > last_secs);
        last_mul = stats.slow_multiplier;
        last_secs = stats.slow_secs;
    }
}

#[test]
fn test_cannon_has_splash_radius() {
    for level in 1..=TOWER_MAX_LEVEL {
        assert!(content::tower_stats(TowerKind::Cannon, level).splash_frac > 0.0);
    }
}

#[test]
fn test_clamp_map_id() {
    assert_eq!(content::clamp_map_id(0), 0);
    assert_eq!(content::clamp_map_id(2), 2);
    assert_eq!(content::clamp_map_id(99), content::MAPS.len() - 1);
}
