//! Snapshot system: queries the ECS world and builds a complete
//! `GameStateSnapshot`.
//!
//! This system is read-only — it never modifies the world. Views are
//! sorted by their stable ids so the host sees a consistent ordering
//! regardless of archetype churn.

use glam::Vec2;
use hecs::World;

use redoubt_core::components::{Enemy, Health, Pad, Projectile, Tower, Weapon};
use redoubt_core::enums::RunPhase;
use redoubt_core::events::GameEvent;
use redoubt_core::state::{
    EnemyView, GameStateSnapshot, HudView, PadView, ProjectileView, TowerView,
};
use redoubt_core::types::{Position, SimTime};

/// Build a complete snapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: SimTime,
    phase: RunPhase,
    hud: HudView,
    world_size: Vec2,
    path: &[Vec2],
    pads: &[Pad],
    selected: Option<hecs::Entity>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let towers = build_towers(world);
    let selected_tower = selected
        .and_then(|entity| world.get::<&Tower>(entity).ok().map(|tower| tower.id))
        .and_then(|id| towers.iter().position(|view| view.id == id));

    GameStateSnapshot {
        time,
        phase,
        hud,
        world_size,
        path: path.to_vec(),
        pads: build_pads(pads, world_size),
        enemies: build_enemies(world),
        towers,
        projectiles: build_projectiles(world),
        selected_tower,
        events,
    }
}

fn build_pads(pads: &[Pad], world_size: Vec2) -> Vec<PadView> {
    pads.iter()
        .map(|pad| PadView {
            center: pad.center * world_size,
            size_px: pad.size_px,
            occupied: pad.occupied,
        })
        .collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .map(|(_, (enemy, pos, health))| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            position: pos.0,
            hp: health.hp,
            max_hp: health.max_hp,
            radius: enemy.radius,
        })
        .collect();

    enemies.sort_by_key(|view| view.id);
    enemies
}

fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &Position, &Weapon)>()
        .iter()
        .map(|(_, (tower, pos, weapon))| TowerView {
            id: tower.id,
            kind: tower.kind,
            level: tower.level,
            position: pos.0,
            range: weapon.range,
        })
        .collect();

    towers.sort_by_key(|view| view.id);
    towers
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (_, pos))| ProjectileView { position: pos.0 })
        .collect()
}
