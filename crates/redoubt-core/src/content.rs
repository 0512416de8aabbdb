//! Static content tables: enemy stats, tower cost/stat columns, and the
//! map catalog.
//!
//! Everything here is authored data. New enemy or tower types are new rows,
//! not new branches; the simulation looks values up by `(kind, level)` and
//! scales `_frac` entries by the world base size at spawn time. Map data is
//! validated by the tests in this crate, not defended against at runtime.

use glam::Vec2;

use crate::enums::{EnemyKind, TowerKind};

/// Per-archetype enemy stats. `speed_frac` and `radius_frac` are fractions
/// of the world base size (`min(width, height)`).
#[derive(Debug, Clone, Copy)]
pub struct EnemyStats {
    pub hp: f32,
    pub speed_frac: f32,
    pub radius_frac: f32,
    /// Coins paid out when the enemy dies.
    pub reward: u32,
    /// Lives lost when the enemy reaches the path's end.
    pub leak: u32,
}

/// One level column of a tower's stat table. `splash_frac` applies to the
/// cannon only; `slow_multiplier`/`slow_secs` to frost only — the other
/// kinds carry zeros in those slots.
#[derive(Debug, Clone, Copy)]
pub struct TowerLevelStats {
    pub cost: u32,
    pub range_frac: f32,
    pub damage: f32,
    pub fire_interval: f32,
    pub splash_frac: f32,
    pub slow_multiplier: f32,
    pub slow_secs: f32,
}

/// A burst of identical enemies within a wave.
#[derive(Debug, Clone, Copy)]
pub struct SpawnGroup {
    pub kind: EnemyKind,
    pub count: u32,
    /// Seconds between consecutive spawns of this group.
    pub interval_secs: f32,
}

/// An ordered list of spawn groups, consumed front to back.
#[derive(Debug, Clone, Copy)]
pub struct WaveDef {
    pub groups: &'static [SpawnGroup],
}

/// A buildable slot. `center` is normalized to the world size so layouts
/// scale with the viewport; the footprint stays a fixed pixel square.
#[derive(Debug, Clone, Copy)]
pub struct PadDef {
    pub center: Vec2,
    pub size_px: f32,
}

/// A complete authored map.
#[derive(Debug, Clone, Copy)]
pub struct MapDef {
    pub name: &'static str,
    /// Normalized path polyline, at least two points.
    pub path: &'static [Vec2],
    pub pads: &'static [PadDef],
    pub waves: &'static [WaveDef],
    /// Starting lives.
    pub lives: i32,
    /// Starting coin balance.
    pub coins: u32,
}

/// Stats for each enemy archetype, indexed by `EnemyKind as usize`.
pub static ENEMY_STATS: [EnemyStats; 5] = [
    // Grunt
    EnemyStats {
        hp: 120.0,
        speed_frac: 0.16,
        radius_frac: 0.022,
        reward: 5,
        leak: 1,
    },
    // Fast
    EnemyStats {
        hp: 70.0,
        speed_frac: 0.24,
        radius_frac: 0.018,
        reward: 6,
        leak: 1,
    },
    // Tank
    EnemyStats {
        hp: 320.0,
        speed_frac: 0.10,
        radius_frac: 0.028,
        reward: 12,
        leak: 2,
    },
    // Flying
    EnemyStats {
        hp: 90.0,
        speed_frac: 0.20,
        radius_frac: 0.020,
        reward: 8,
        leak: 1,
    },
    // Boss
    EnemyStats {
        hp: 1500.0,
        speed_frac: 0.07,
        radius_frac: 0.040,
        reward: 60,
        leak: 5,
    },
];

/// Tower stat columns, indexed by `TowerKind as usize`, then level − 1.
pub static TOWER_STATS: [[TowerLevelStats; 3]; 3] = [
    // Archer
    [
        TowerLevelStats {
            cost: 40,
            range_frac: 0.22,
            damage: 34.0,
            fire_interval: 0.55,
            splash_frac: 0.0,
            slow_multiplier: 0.0,
            slow_secs: 0.0,
        },
        TowerLevelStats {
            cost: 60,
            range_frac: 0.24,
            damage: 50.0,
            fire_interval: 0.50,
            splash_frac: 0.0,
            slow_multiplier: 0.0,
            slow_secs: 0.0,
        },
        TowerLevelStats {
            cost: 90,
            range_frac: 0.26,
            damage: 70.0,
            fire_interval: 0.45,
            splash_frac: 0.0,
            slow_multiplier: 0.0,
            slow_secs: 0.0,
        },
    ],
    // Cannon
    [
        TowerLevelStats {
            cost: 70,
            range_frac: 0.18,
            damage: 48.0,
            fire_interval: 1.10,
            splash_frac: 0.07,
            slow_multiplier: 0.0,
            slow_secs: 0.0,
        },
        TowerLevelStats {
            cost: 105,
            range_frac: 0.20,
            damage: 70.0,
            fire_interval: 1.00,
            splash_frac: 0.08,
            slow_multiplier: 0.0,
            slow_secs: 0.0,
        },
        TowerLevelStats {
            cost: 160,
            range_frac: 0.22,
            damage: 100.0,
            fire_interval: 0.90,
            splash_frac: 0.09,
            slow_multiplier: 0.0,
            slow_secs: 0.0,
        },
    ],
    // Frost
    [
        TowerLevelStats {
            cost: 55,
            range_frac: 0.20,
            damage: 10.0,
            fire_interval: 0.70,
            splash_frac: 0.0,
            slow_multiplier: 0.55,
            slow_secs: 1.2,
        },
        TowerLevelStats {
            cost: 80,
            range_frac: 0.22,
            damage: 16.0,
            fire_interval: 0.65,
            splash_frac: 0.0,
            slow_multiplier: 0.45,
            slow_secs: 1.5,
        },
        TowerLevelStats {
            cost: 120,
            range_frac: 0.24,
            damage: 24.0,
            fire_interval: 0.60,
            splash_frac: 0.0,
            slow_multiplier: 0.35,
            slow_secs: 1.8,
        },
    ],
];

/// Look up the stats for an enemy archetype.
pub fn enemy_stats(kind: EnemyKind) -> &'static EnemyStats {
    &ENEMY_STATS[kind as usize]
}

/// Look up the stat column for a tower kind at `level` (1-based).
pub fn tower_stats(kind: TowerKind, level: u8) -> &'static TowerLevelStats {
    &TOWER_STATS[kind as usize][(level - 1) as usize]
}

/// Purchase cost of a tower kind at `level` (1-based).
pub fn tower_cost(kind: TowerKind, level: u8) -> u32 {
    tower_stats(kind, level).cost
}

/// Total coins invested in a tower of `level`: the sum of every level
/// purchased so far, which the sell refund is computed from.
pub fn tower_invested(kind: TowerKind, level: u8) -> u32 {
    (1..=level).map(|l| tower_cost(kind, l)).sum()
}

// --- Map catalog ---

static MEADOW_PATH: [Vec2; 5] = [
    Vec2::new(0.50, 0.10),
    Vec2::new(0.50, 0.42),
    Vec2::new(0.75, 0.55),
    Vec2::new(0.25, 0.68),
    Vec2::new(0.50, 0.92),
];

static MEADOW_PADS: [PadDef; 4] = [
    PadDef {
        center: Vec2::new(0.28, 0.50),
        size_px: 56.0,
    },
    PadDef {
        center: Vec2::new(0.72, 0.38),
        size_px: 56.0,
    },
    PadDef {
        center: Vec2::new(0.72, 0.70),
        size_px: 56.0,
    },
    PadDef {
        center: Vec2::new(0.28, 0.78),
        size_px: 56.0,
    },
];

static MEADOW_WAVES: [WaveDef; 4] = [
    WaveDef {
        groups: &[SpawnGroup {
            kind: EnemyKind::Grunt,
            count: 6,
            interval_secs: 0.9,
        }],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Grunt,
                count: 6,
                interval_secs: 0.8,
            },
            SpawnGroup {
                kind: EnemyKind::Fast,
                count: 4,
                interval_secs: 0.6,
            },
        ],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Tank,
                count: 3,
                interval_secs: 1.6,
            },
            SpawnGroup {
                kind: EnemyKind::Grunt,
                count: 8,
                interval_secs: 0.7,
            },
        ],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Fast,
                count: 6,
                interval_secs: 0.5,
            },
            SpawnGroup {
                kind: EnemyKind::Flying,
                count: 4,
                interval_secs: 1.0,
            },
            SpawnGroup {
                kind: EnemyKind::Tank,
                count: 2,
                interval_secs: 1.8,
            },
        ],
    },
];

static RIVERBEND_PATH: [Vec2; 6] = [
    Vec2::new(0.08, 0.50),
    Vec2::new(0.30, 0.50),
    Vec2::new(0.42, 0.25),
    Vec2::new(0.62, 0.25),
    Vec2::new(0.72, 0.60),
    Vec2::new(0.92, 0.60),
];

static RIVERBEND_PADS: [PadDef; 5] = [
    PadDef {
        center: Vec2::new(0.22, 0.35),
        size_px: 56.0,
    },
    PadDef {
        center: Vec2::new(0.36, 0.42),
        size_px: 56.0,
    },
    PadDef {
        center: Vec2::new(0.55, 0.40),
        size_px: 56.0,
    },
    PadDef {
        center: Vec2::new(0.62, 0.72),
        size_px: 56.0,
    },
    PadDef {
        center: Vec2::new(0.82, 0.45),
        size_px: 56.0,
    },
];

static RIVERBEND_WAVES: [WaveDef; 5] = [
    WaveDef {
        groups: &[SpawnGroup {
            kind: EnemyKind::Grunt,
            count: 8,
            interval_secs: 0.8,
        }],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Fast,
                count: 6,
                interval_secs: 0.5,
            },
            SpawnGroup {
                kind: EnemyKind::Grunt,
                count: 6,
                interval_secs: 0.7,
            },
        ],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Flying,
                count: 5,
                interval_secs: 0.9,
            },
            SpawnGroup {
                kind: EnemyKind::Fast,
                count: 4,
                interval_secs: 0.5,
            },
        ],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Tank,
                count: 4,
                interval_secs: 1.5,
            },
            SpawnGroup {
                kind: EnemyKind::Grunt,
                count: 10,
                interval_secs: 0.5,
            },
        ],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Flying,
                count: 6,
                interval_secs: 0.7,
            },
            SpawnGroup {
                kind: EnemyKind::Tank,
                count: 3,
                interval_secs: 1.4,
            },
            SpawnGroup {
                kind: EnemyKind::Fast,
                count: 8,
                interval_secs: 0.4,
            },
        ],
    },
];

static SERPENT_PATH: [Vec2; 6] = [
    Vec2::new(0.50, 0.05),
    Vec2::new(0.20, 0.20),
    Vec2::new(0.80, 0.35),
    Vec2::new(0.20, 0.55),
    Vec2::new(0.80, 0.70),
    Vec2::new(0.50, 0.95),
];

static SERPENT_PADS: [PadDef; 6] = [
    PadDef {
        center: Vec2::new(0.38, 0.15),
        size_px: 52.0,
    },
    PadDef {
        center: Vec2::new(0.55, 0.28),
        size_px: 52.0,
    },
    PadDef {
        center: Vec2::new(0.45, 0.45),
        size_px: 52.0,
    },
    PadDef {
        center: Vec2::new(0.60, 0.60),
        size_px: 52.0,
    },
    PadDef {
        center: Vec2::new(0.35, 0.68),
        size_px: 52.0,
    },
    PadDef {
        center: Vec2::new(0.65, 0.85),
        size_px: 52.0,
    },
];

static SERPENT_WAVES: [WaveDef; 6] = [
    WaveDef {
        groups: &[SpawnGroup {
            kind: EnemyKind::Grunt,
            count: 10,
            interval_secs: 0.7,
        }],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Fast,
                count: 8,
                interval_secs: 0.45,
            },
            SpawnGroup {
                kind: EnemyKind::Flying,
                count: 3,
                interval_secs: 1.2,
            },
        ],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Tank,
                count: 5,
                interval_secs: 1.3,
            },
            SpawnGroup {
                kind: EnemyKind::Fast,
                count: 6,
                interval_secs: 0.5,
            },
        ],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Flying,
                count: 8,
                interval_secs: 0.6,
            },
            SpawnGroup {
                kind: EnemyKind::Grunt,
                count: 12,
                interval_secs: 0.4,
            },
        ],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Tank,
                count: 6,
                interval_secs: 1.1,
            },
            SpawnGroup {
                kind: EnemyKind::Flying,
                count: 6,
                interval_secs: 0.8,
            },
            SpawnGroup {
                kind: EnemyKind::Fast,
                count: 10,
                interval_secs: 0.35,
            },
        ],
    },
    WaveDef {
        groups: &[
            SpawnGroup {
                kind: EnemyKind::Boss,
                count: 1,
                interval_secs: 1.0,
            },
            SpawnGroup {
                kind: EnemyKind::Tank,
                count: 4,
                interval_secs: 1.5,
            },
        ],
    },
];

/// The map catalog, indexed by the host's map id.
pub static MAPS: [MapDef; 3] = [
    MapDef {
        name: "Meadow Crossing",
        path: &MEADOW_PATH,
        pads: &MEADOW_PADS,
        waves: &MEADOW_WAVES,
        lives: 20,
        coins: 80,
    },
    MapDef {
        name: "Riverbend",
        path: &RIVERBEND_PATH,
        pads: &RIVERBEND_PADS,
        waves: &RIVERBEND_WAVES,
        lives: 15,
        coins: 90,
    },
    MapDef {
        name: "Serpent Pass",
        path: &SERPENT_PATH,
        pads: &SERPENT_PADS,
        waves: &SERPENT_WAVES,
        lives: 12,
        coins: 100,
    },
];

/// Clamp a host-supplied map id into the catalog range.
pub fn clamp_map_id(map_id: usize) -> usize {
    map_id.min(MAPS.len() - 1)
}
