//! Change notifications raised by the simulation for the host.
//!
//! The engine never calls back into host code. Observable mutations mark a
//! flag in `TickEvents`; `update` drains the accumulator into the returned
//! snapshot, so each kind of event is delivered at most once per tick.

use serde::{Deserialize, Serialize};

/// Edge-triggered notifications, polled from the snapshot after each
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Some HUD-relevant field changed (lives, coins, wave index,
    /// selection, phase).
    HudChanged,
    /// The run advanced to a new wave.
    WaveChanged { index: u32 },
    /// The final wave was cleared.
    Victory,
    /// Lives ran out.
    Defeat,
}

/// Per-tick accumulator. Flags dedupe repeated notifications within a
/// tick; `drain` converts them to the snapshot's event list and resets.
#[derive(Debug, Default)]
pub struct TickEvents {
    hud: bool,
    wave: Option<u32>,
    won: bool,
    lost: bool,
}

impl TickEvents {
    pub fn hud_changed(&mut self) {
        self.hud = true;
    }

    pub fn wave_changed(&mut self, index: u32) {
        self.wave = Some(index);
    }

    pub fn victory(&mut self) {
        self.won = true;
    }

    pub fn defeat(&mut self) {
        self.lost = true;
    }

    /// Convert the accumulated flags into an event list and clear them.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        let mut out = Vec::new();
        if std::mem::take(&mut self.hud) {
            out.push(GameEvent::HudChanged);
        }
        if let Some(index) = self.wave.take() {
            out.push(GameEvent::WaveChanged { index });
        }
        if std::mem::take(&mut self.won) {
            out.push(GameEvent::Victory);
        }
        if std::mem::take(&mut self.lost) {
            out.push(GameEvent::Defeat);
        }
        out
    }
}
