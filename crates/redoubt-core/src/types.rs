//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space position in pixels. Origin is the top-left corner of the
/// viewport the host reported via `SetWorldSize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Squared distance to another position. Range checks compare against
    /// squared radii so no square root is taken per candidate.
    pub fn distance_squared_to(&self, other: &Position) -> f32 {
        self.0.distance_squared(other.0)
    }
}

/// Velocity in pixels per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Speed magnitude (px/s).
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

/// Axis-aligned rectangle, used for pad footprints and click testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Build a rectangle centered on `center` with the given edge lengths.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Simulation clock, advanced by the caller-supplied delta each update.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed updates.
    pub tick: u64,
    /// Accumulated simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one update of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
