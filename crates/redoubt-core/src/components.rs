//! ECS components for hecs entities, plus the engine-owned `Pad` record.
//!
//! Components are plain data; the systems in `redoubt-sim` carry the logic.
//! Every enemy entity gets the full bundle (including a default
//! `SlowEffect`) so all enemies share one archetype and iterate in a stable
//! order.

use serde::{Deserialize, Serialize};

use glam::Vec2;

use crate::enums::{EnemyKind, TowerKind};

/// Per-enemy identity and world-scaled stats, fixed at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Monotonic id within a run; snapshot views sort by it.
    pub id: u32,
    pub kind: EnemyKind,
    /// Base speed in px/s (before the slow multiplier).
    pub speed: f32,
    /// Visual radius in pixels.
    pub radius: f32,
    /// Coins paid on death.
    pub reward: u32,
    /// Lives lost if this enemy reaches the path's end.
    pub leak: u32,
}

/// Current and maximum hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: f32,
    pub max_hp: f32,
}

/// Progress along the map's path polyline.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PathProgress {
    /// Index of the segment currently being walked (start waypoint index).
    pub segment: usize,
    /// Set exactly once when the enemy arrives at the path's end.
    pub reached_end: bool,
}

/// Transient slow debuff. `multiplier` scales movement speed while
/// `remaining_secs` is positive; expiry resets the multiplier to 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlowEffect {
    pub multiplier: f32,
    pub remaining_secs: f32,
}

impl Default for SlowEffect {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            remaining_secs: 0.0,
        }
    }
}

impl SlowEffect {
    /// Merge a new slow application: keep the stronger (lower) multiplier
    /// and the longer remaining duration, independently. Overlapping slows
    /// never stack into a combined effect.
    pub fn apply(&mut self, multiplier: f32, duration_secs: f32) {
        self.multiplier = if self.remaining_secs > 0.0 {
            self.multiplier.min(multiplier)
        } else {
            multiplier
        };
        self.remaining_secs = self.remaining_secs.max(duration_secs);
    }
}

/// Per-tower identity. Stats live in `Weapon`; both are rebuilt wholesale
/// on upgrade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower {
    /// Stable id; survives upgrade replacement so the host's selection
    /// index stays meaningful.
    pub id: u32,
    pub kind: TowerKind,
    /// Upgrade level, 1..=TOWER_MAX_LEVEL.
    pub level: u8,
}

/// A tower's weapon, derived from `(kind, level, world size)` at
/// construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    /// Targeting radius in pixels.
    pub range: f32,
    pub damage: f32,
    /// Seconds between shots.
    pub fire_interval: f32,
    /// Time until the next permitted shot; ≤ 0 means ready.
    pub cooldown: f32,
    pub effect: WeaponEffect,
}

/// Weapon effect variant, dispatched once per shot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WeaponEffect {
    /// Damage the selected target only.
    Direct,
    /// Damage every eligible enemy within `radius` px of the target's
    /// position. The target passes the radius check at distance zero, so it
    /// is hit exactly once like everything else in the blast.
    Splash { radius: f32 },
    /// Damage the target and apply a slow debuff to it.
    Chill { multiplier: f32, duration_secs: f32 },
}

/// Cosmetic shot token; carries no gameplay effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub remaining_secs: f32,
}

/// A buildable slot, owned by the engine and rebuilt from the map on
/// reset. `center` is normalized; the footprint is a `size_px` square.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pad {
    pub center: Vec2,
    pub size_px: f32,
    pub occupied: bool,
}
