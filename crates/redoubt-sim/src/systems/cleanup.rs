//! Cleanup system: purges dead and leaked enemies, paying out rewards.
//!
//! Runs after combat so a kill and its reward land in the same tick, and
//! before the wave-completion check so "no enemies remain" means exactly
//! that.

use hecs::{Entity, World};

use redoubt_core::components::{Enemy, Health, PathProgress};
use redoubt_core::events::TickEvents;

/// Remove enemies that died (reward paid) or reached the path's end (life
/// cost already charged by the movement system).
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    coins: &mut u32,
    events: &mut TickEvents,
) {
    despawn_buffer.clear();

    for (entity, (enemy, health, progress)) in
        world.query_mut::<(&Enemy, &Health, &PathProgress)>()
    {
        if health.hp <= 0.0 {
            *coins += enemy.reward;
            events.hud_changed();
            despawn_buffer.push(entity);
        } else if progress.reached_end {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
