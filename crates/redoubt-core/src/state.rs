//! Game state snapshot — the complete visible state handed to the host
//! each tick.
//!
//! Snapshots are read-only copies; the host renders from them and never
//! touches the world directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, RunPhase, TowerKind};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete visible state after one update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: RunPhase,
    pub hud: HudView,
    /// Viewport size in pixels; zero until the host reports one.
    pub world_size: Vec2,
    /// Path polyline in world pixels.
    pub path: Vec<Vec2>,
    pub pads: Vec<PadView>,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    /// Index into `towers` of the selected tower, if any.
    pub selected_tower: Option<usize>,
    /// Notifications raised this tick, deduplicated per kind.
    pub events: Vec<GameEvent>,
}

/// HUD-relevant scalars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub lives: i32,
    pub coins: u32,
    /// Zero-based index of the current (or armed) wave.
    pub wave_index: u32,
    pub wave_count: u32,
    /// Tower kind the next placement buys.
    pub build_kind: TowerKind,
    pub wave_running: bool,
    pub victory: bool,
    pub defeat: bool,
}

/// A buildable slot for rendering and click feedback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PadView {
    /// Center in world pixels.
    pub center: Vec2,
    pub size_px: f32,
    pub occupied: bool,
}

/// A live enemy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    pub radius: f32,
}

/// A placed tower. `range` feeds the selection-ring rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TowerView {
    pub id: u32,
    pub kind: TowerKind,
    pub level: u8,
    pub position: Vec2,
    pub range: f32,
}

/// A cosmetic projectile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
}
