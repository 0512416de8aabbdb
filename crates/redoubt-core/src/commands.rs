//! Player commands sent from the host to the simulation.
//!
//! Each command maps onto one `GameEngine` method; `GameEngine::apply`
//! dispatches and returns whether the action took effect. Preconditions
//! that fail (wave running, insufficient coins, no selection, terminal
//! run) yield `false` with no state change.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Lifecycle ---
    /// Choose a map from the catalog. Out-of-range ids clamp.
    SelectMap { map_id: usize },
    /// Report the viewport size in pixels. Non-positive sizes are ignored.
    SetWorldSize { width: f32, height: f32 },
    /// Restart the run on the selected map.
    Reset,

    // --- Run control ---
    /// Begin the armed wave. No-op outside the Idle phase.
    StartWave,

    // --- Building ---
    /// Choose which tower kind the next placement buys.
    SetBuildKind { kind: TowerKind },
    /// Attempt to place a tower of the chosen kind at a click point.
    PlaceTower { x: f32, y: f32 },
    /// Attempt to select the tower nearest a click point; a miss clears
    /// the selection.
    SelectAt { x: f32, y: f32 },
    /// Upgrade the selected tower to the next level.
    UpgradeSelected,
    /// Sell the selected tower for a partial refund.
    SellSelected,
}
