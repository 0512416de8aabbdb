//! Simulation constants and tuning parameters.
//!
//! Per-type and per-level numbers live in the content tables
//! (`content.rs`); only global tuning belongs here. Values tagged `_frac`
//! elsewhere are fractions of the world base size, `min(width, height)`.

// --- Towers ---

/// Highest purchasable tower level.
pub const TOWER_MAX_LEVEL: u8 = 3;

/// Cooldown a freshly constructed tower starts with (seconds). Keeps a
/// just-placed or just-upgraded tower from firing on the same update.
pub const TOWER_PLACE_COOLDOWN_SECS: f32 = 0.05;

/// Click radius for selecting a tower (pixels).
pub const SELECT_RADIUS_PX: f32 = 28.0;

/// Fraction of the invested coin total returned when selling a tower.
pub const SELL_REFUND_RATIO: f32 = 0.6;

// --- Projectiles ---

/// Projectile speed as a fraction of the world base size (px/s).
pub const PROJECTILE_SPEED_FRAC: f32 = 0.9;

/// Projectile lifetime in seconds. Damage is applied at fire time; the
/// projectile is a visual token only.
pub const PROJECTILE_LIFETIME_SECS: f32 = 0.15;

/// Minimum tower-to-target distance for spawning a projectile (pixels).
/// Below this the direction vector degenerates and the shot is suppressed.
pub const PROJECTILE_MIN_DISTANCE_PX: f32 = 1.0;

// --- Movement ---

/// Arrival tolerance for flying enemies closing on the path's end (pixels).
pub const FLYER_ARRIVE_EPSILON_PX: f32 = 1.0;
