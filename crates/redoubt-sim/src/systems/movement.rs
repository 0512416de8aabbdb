//! Movement system: slow-debuff decay, path following for ground enemies,
//! and straight-line flight for flying ones.

use glam::Vec2;
use hecs::World;

use redoubt_core::components::{Enemy, Health, PathProgress, SlowEffect};
use redoubt_core::constants::FLYER_ARRIVE_EPSILON_PX;
use redoubt_core::enums::EnemyKind;
use redoubt_core::events::TickEvents;
use redoubt_core::types::Position;

/// Tick down slow timers. On expiry the multiplier returns to 1 and the
/// timer clamps to 0.
pub fn update_status(world: &mut World, dt: f32) {
    for (_entity, slow) in world.query_mut::<&mut SlowEffect>() {
        if slow.remaining_secs <= 0.0 {
            continue;
        }
        slow.remaining_secs -= dt;
        if slow.remaining_secs <= 0.0 {
            slow.remaining_secs = 0.0;
            slow.multiplier = 1.0;
        }
    }
}

/// Advance every live enemy by `speed × slow × dt` pixels.
///
/// Ground enemies walk the polyline, consuming as many segments as the
/// tick's travel distance covers; flying enemies head straight for the
/// final point. Arrival at the end leaks the enemy's life cost.
pub fn run(world: &mut World, path: &[Vec2], dt: f32, lives: &mut i32, events: &mut TickEvents) {
    let Some(&end) = path.last() else {
        return;
    };

    for (_entity, (enemy, pos, progress, health, slow)) in world.query_mut::<(
        &Enemy,
        &mut Position,
        &mut PathProgress,
        &Health,
        &SlowEffect,
    )>() {
        if health.hp <= 0.0 || progress.reached_end {
            continue;
        }

        let mut remaining = enemy.speed * slow.multiplier * dt;

        if enemy.kind == EnemyKind::Flying {
            let to_end = end - pos.0;
            let dist = to_end.length();
            if dist <= remaining + FLYER_ARRIVE_EPSILON_PX {
                pos.0 = end;
                reach_end(enemy, progress, lives, events);
            } else {
                pos.0 += to_end / dist * remaining;
            }
            continue;
        }

        while remaining > 0.0 && !progress.reached_end {
            let waypoint = path[progress.segment + 1];
            let to_next = waypoint - pos.0;
            let dist = to_next.length();

            if dist <= remaining {
                pos.0 = waypoint;
                remaining -= dist;
                progress.segment += 1;
                if progress.segment >= path.len() - 1 {
                    reach_end(enemy, progress, lives, events);
                    break;
                }
            } else {
                pos.0 += to_next / dist * remaining;
                remaining = 0.0;
            }
        }
    }
}

/// End-of-path handling: flag the enemy once and charge its leak cost.
fn reach_end(enemy: &Enemy, progress: &mut PathProgress, lives: &mut i32, events: &mut TickEvents) {
    progress.reached_end = true;
    *lives -= enemy.leak as i32;
    events.hud_changed();
}
