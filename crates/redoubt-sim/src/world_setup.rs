//! Entity spawn factories.
//!
//! Every stat on a spawned entity is a pure function of the content tables,
//! the world base size, and (for towers) the level — which is what lets
//! upgrades rebuild a tower from scratch instead of patching it.

use glam::Vec2;
use hecs::World;

use redoubt_core::components::{
    Enemy, Health, PathProgress, Projectile, SlowEffect, Tower, Weapon, WeaponEffect,
};
use redoubt_core::constants::{
    PROJECTILE_LIFETIME_SECS, PROJECTILE_MIN_DISTANCE_PX, PROJECTILE_SPEED_FRAC,
    TOWER_PLACE_COOLDOWN_SECS,
};
use redoubt_core::content;
use redoubt_core::enums::{EnemyKind, TowerKind};
use redoubt_core::types::{Position, Velocity};

/// Spawn an enemy of `kind` at the path start, scaled to the world.
pub fn spawn_enemy(
    world: &mut World,
    kind: EnemyKind,
    start: Vec2,
    base_size: f32,
    next_id: &mut u32,
) -> hecs::Entity {
    let stats = content::enemy_stats(kind);
    let id = *next_id;
    *next_id += 1;

    world.spawn((
        Enemy {
            id,
            kind,
            speed: stats.speed_frac * base_size,
            radius: stats.radius_frac * base_size,
            reward: stats.reward,
            leak: stats.leak,
        },
        Position(start),
        Health {
            hp: stats.hp,
            max_hp: stats.hp,
        },
        PathProgress::default(),
        SlowEffect::default(),
    ))
}

/// Construct a tower of `kind` at `level`, fully derived from the content
/// tables and the world base size. Used for both placement and the
/// replace-on-upgrade path (which passes the old tower's id).
pub fn spawn_tower(
    world: &mut World,
    kind: TowerKind,
    level: u8,
    pos: Vec2,
    base_size: f32,
    id: u32,
) -> hecs::Entity {
    let stats = content::tower_stats(kind, level);
    let effect = match kind {
        TowerKind::Archer => WeaponEffect::Direct,
        TowerKind::Cannon => WeaponEffect::Splash {
            radius: stats.splash_frac * base_size,
        },
        TowerKind::Frost => WeaponEffect::Chill {
            multiplier: stats.slow_multiplier,
            duration_secs: stats.slow_secs,
        },
    };

    world.spawn((
        Tower { id, kind, level },
        Position(pos),
        Weapon {
            range: stats.range_frac * base_size,
            damage: stats.damage,
            fire_interval: stats.fire_interval,
            cooldown: TOWER_PLACE_COOLDOWN_SECS,
            effect,
        },
    ))
}

/// Spawn a cosmetic projectile from a tower toward its target. Suppressed
/// when the two are close enough that the direction vector degenerates.
pub fn spawn_projectile(
    world: &mut World,
    from: Vec2,
    to: Vec2,
    base_size: f32,
) -> Option<hecs::Entity> {
    let dir = to - from;
    if dir.length() < PROJECTILE_MIN_DISTANCE_PX {
        return None;
    }

    let vel = dir.normalize() * (PROJECTILE_SPEED_FRAC * base_size);
    Some(world.spawn((
        Projectile {
            remaining_secs: PROJECTILE_LIFETIME_SECS,
        },
        Position(from),
        Velocity(vel),
    )))
}
