//! Projectile integration: advance positions, expire lifetimes.

use hecs::{Entity, World};

use redoubt_core::components::Projectile;
use redoubt_core::types::{Position, Velocity};

/// Integrate projectiles and despawn the expired ones. Uses the shared
/// despawn buffer to avoid a per-tick allocation.
pub fn run(world: &mut World, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity)>()
    {
        projectile.remaining_secs -= dt;
        pos.0 += vel.0 * dt;
        if projectile.remaining_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
