//! Targeting and combat system.
//!
//! Towers fire sequentially, so a later tower in the same tick sees the
//! damage already dealt by earlier ones. Damage lands at fire time; the
//! projectile spawned per shot is cosmetic.

use glam::Vec2;
use hecs::{Entity, World};

use redoubt_core::components::{
    Enemy, Health, PathProgress, SlowEffect, Tower, Weapon, WeaponEffect,
};
use redoubt_core::types::Position;

use crate::world_setup;

/// Tick cooldowns, then let every ready tower pick a target and resolve
/// its weapon effect.
pub fn run(world: &mut World, dt: f32, base_size: f32) {
    for (_entity, weapon) in world.query_mut::<&mut Weapon>() {
        weapon.cooldown -= dt;
    }

    // Snapshot the ready towers first; firing mutates enemy state and the
    // borrow checker will not allow spawning mid-query anyway.
    let ready: Vec<(Entity, Vec2, Weapon)> = world
        .query::<(&Tower, &Position, &Weapon)>()
        .iter()
        .filter(|(_, (_, _, weapon))| weapon.cooldown <= 0.0)
        .map(|(entity, (_, pos, weapon))| (entity, pos.0, *weapon))
        .collect();

    let mut shots: Vec<(Vec2, Vec2)> = Vec::new();

    for (tower_entity, tower_pos, weapon) in ready {
        let Some((target, target_pos)) = find_target(world, tower_pos, weapon.range) else {
            // No target: leave the cooldown expired so the tower fires the
            // moment an enemy comes into range.
            continue;
        };

        match weapon.effect {
            WeaponEffect::Direct => {
                damage(world, target, weapon.damage);
            }
            WeaponEffect::Splash { radius } => {
                let radius_sq = radius * radius;
                for (_entity, (_enemy, pos, health, progress)) in
                    world.query_mut::<(&Enemy, &Position, &mut Health, &PathProgress)>()
                {
                    if health.hp <= 0.0 || progress.reached_end {
                        continue;
                    }
                    if pos.0.distance_squared(target_pos) <= radius_sq {
                        health.hp -= weapon.damage;
                    }
                }
            }
            WeaponEffect::Chill {
                multiplier,
                duration_secs,
            } => {
                damage(world, target, weapon.damage);
                if let Ok(mut slow) = world.get::<&mut SlowEffect>(target) {
                    slow.apply(multiplier, duration_secs);
                }
            }
        }

        if let Ok(mut armed) = world.get::<&mut Weapon>(tower_entity) {
            armed.cooldown = armed.fire_interval;
        }
        shots.push((tower_pos, target_pos));
    }

    for (from, to) in shots {
        world_setup::spawn_projectile(world, from, to, base_size);
    }
}

/// Nearest eligible enemy within `range` of `from`, by squared distance.
/// Ties keep the first candidate encountered in iteration order.
fn find_target(world: &World, from: Vec2, range: f32) -> Option<(Entity, Vec2)> {
    let range_sq = range * range;
    let mut best: Option<(Entity, Vec2, f32)> = None;

    for (entity, (_enemy, pos, health, progress)) in world
        .query::<(&Enemy, &Position, &Health, &PathProgress)>()
        .iter()
    {
        if health.hp <= 0.0 || progress.reached_end {
            continue;
        }
        let dist_sq = pos.0.distance_squared(from);
        if dist_sq > range_sq {
            continue;
        }
        if best.map_or(true, |(_, _, d)| dist_sq < d) {
            best = Some((entity, pos.0, dist_sq));
        }
    }

    best.map(|(entity, pos, _)| (entity, pos))
}

fn damage(world: &mut World, target: Entity, amount: f32) {
    if let Ok(mut health) = world.get::<&mut Health>(target) {
        health.hp -= amount;
    }
}
