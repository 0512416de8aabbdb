//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Stats live in the content tables, keyed by this tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline ground walker.
    #[default]
    Grunt,
    /// Low hit points, high speed.
    Fast,
    /// High hit points, slow, leaks two lives.
    Tank,
    /// Ignores the path polyline and flies straight to its end.
    Flying,
    /// Wave-capstone unit with a large life cost on leak.
    Boss,
}

/// Tower archetype. Determines the weapon effect variant and the cost/stat
/// column in the content tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Single-target direct damage.
    #[default]
    Archer,
    /// Splash damage around the struck target.
    Cannon,
    /// Direct damage plus a slow debuff.
    Frost,
}

/// Top-level run state.
///
/// `Idle` is the build phase between waves; `Victory` and `Defeat` are
/// terminal until an explicit reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    #[default]
    Idle,
    WaveRunning,
    Victory,
    Defeat,
}

impl RunPhase {
    /// Terminal states ignore updates and player actions until `reset`.
    pub fn is_terminal(self) -> bool {
        matches!(self, RunPhase::Victory | RunPhase::Defeat)
    }
}
