//! Spawn scheduler — walks a wave's groups in order, emitting enemies on a
//! countdown timer.

use glam::Vec2;
use hecs::World;

use redoubt_core::content::WaveDef;

use crate::world_setup;

/// Mutable progress through one wave's spawn groups. Re-armed whenever a
/// wave becomes current.
#[derive(Debug, Clone, Default)]
pub struct WaveProgress {
    group: usize,
    spawned_in_group: u32,
    timer_secs: f32,
    finished: bool,
}

impl WaveProgress {
    /// Fresh progress pointing at the first group, timer at zero so the
    /// first spawn fires on the first running tick.
    pub fn armed() -> Self {
        Self::default()
    }

    /// Whether every group has been fully emitted.
    pub fn finished(&self) -> bool {
        self.finished
    }
}

/// Advance the scheduler by `dt`, spawning as many enemies as the elapsed
/// time owes. The timer loop keeps spawning while it is in debt, so a
/// single large `dt` (a stalled frame) never loses spawns; leftover timer
/// value carries across group boundaries.
pub fn run(
    world: &mut World,
    wave: &WaveDef,
    progress: &mut WaveProgress,
    dt: f32,
    path_start: Vec2,
    base_size: f32,
    next_enemy_id: &mut u32,
) {
    if progress.finished {
        return;
    }

    progress.timer_secs -= dt;
    loop {
        let Some(group) = wave.groups.get(progress.group) else {
            progress.finished = true;
            break;
        };
        if progress.spawned_in_group >= group.count {
            progress.group += 1;
            progress.spawned_in_group = 0;
            continue;
        }
        if progress.timer_secs > 0.0 {
            break;
        }
        world_setup::spawn_enemy(world, group.kind, path_start, base_size, next_enemy_id);
        progress.spawned_in_group += 1;
        progress.timer_secs += group.interval_secs;
    }
}
