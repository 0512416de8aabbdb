//! Run state machine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, executes player actions, runs all
//! systems in a fixed order once per `update`, and produces
//! `GameStateSnapshot`s. Completely headless (no rendering or input
//! dependency), enabling deterministic testing.

use glam::Vec2;
use hecs::World;

use redoubt_core::commands::PlayerCommand;
use redoubt_core::components::{Pad, Tower};
use redoubt_core::constants::{SELECT_RADIUS_PX, SELL_REFUND_RATIO, TOWER_MAX_LEVEL};
use redoubt_core::content::{self, MapDef, WaveDef};
use redoubt_core::enums::{RunPhase, TowerKind};
use redoubt_core::events::TickEvents;
use redoubt_core::state::{GameStateSnapshot, HudView};
use redoubt_core::types::{Position, SimTime};

use crate::systems;
use crate::systems::spawner::WaveProgress;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all run state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: RunPhase,
    map_id: usize,
    /// Viewport size in pixels; zero until the host reports one.
    world_size: Vec2,
    /// Path polyline scaled to the current world size.
    path_px: Vec<Vec2>,
    pads: Vec<Pad>,
    lives: i32,
    coins: u32,
    wave_index: usize,
    progress: WaveProgress,
    build_kind: TowerKind,
    selected: Option<hecs::Entity>,
    next_enemy_id: u32,
    next_tower_id: u32,
    despawn_buffer: Vec<hecs::Entity>,
    events: TickEvents,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine on the first catalog map. The host must still call
    /// `set_world_size` and `reset` before the run is playable.
    pub fn new() -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: RunPhase::Idle,
            map_id: 0,
            world_size: Vec2::ZERO,
            path_px: Vec::new(),
            pads: Vec::new(),
            lives: content::MAPS[0].lives,
            coins: content::MAPS[0].coins,
            wave_index: 0,
            progress: WaveProgress::armed(),
            build_kind: TowerKind::Archer,
            selected: None,
            next_enemy_id: 0,
            next_tower_id: 0,
            despawn_buffer: Vec::new(),
            events: TickEvents::default(),
        }
    }

    // --- Lifecycle ---

    /// Choose a map from the catalog. Out-of-range ids clamp to the valid
    /// range. Takes effect fully on the next `reset`.
    pub fn select_map(&mut self, map_id: usize) {
        self.map_id = content::clamp_map_id(map_id);
        self.rebuild_path();
    }

    /// Report the viewport size. Non-positive dimensions are silently
    /// ignored; a valid size rescales the path polyline.
    pub fn set_world_size(&mut self, size: Vec2) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        self.world_size = size;
        self.rebuild_path();
    }

    /// Restart the run: map defaults for lives and coins, wave 0 armed,
    /// pads rebuilt, all entities discarded.
    pub fn reset(&mut self) {
        let map = self.map();
        self.world.clear();
        self.time = SimTime::default();
        self.phase = RunPhase::Idle;
        self.lives = map.lives;
        self.coins = map.coins;
        self.wave_index = 0;
        self.progress = WaveProgress::armed();
        self.selected = None;
        self.next_enemy_id = 0;
        self.next_tower_id = 0;
        self.pads = map
            .pads
            .iter()
            .map(|pad| Pad {
                center: pad.center,
                size_px: pad.size_px,
                occupied: false,
            })
            .collect();
        self.events.hud_changed();
    }

    // --- Player actions ---

    /// Begin the armed wave. Only valid in the Idle phase with a world
    /// size set.
    pub fn start_wave(&mut self) -> bool {
        if self.phase != RunPhase::Idle || !self.world_ready() {
            return false;
        }
        self.phase = RunPhase::WaveRunning;
        self.events.hud_changed();
        true
    }

    /// Attempt to place a tower of the current build kind at a click
    /// point. The first unoccupied pad whose footprint contains the point
    /// is claimed; insufficient coins reject the placement with no charge.
    pub fn try_place_tower(&mut self, at: Vec2) -> bool {
        if self.phase != RunPhase::Idle || !self.world_ready() {
            return false;
        }

        let Some(pad_index) = self.pads.iter().position(|pad| {
            !pad.occupied && self.pad_footprint(pad).contains(at)
        }) else {
            return false;
        };

        let cost = content::tower_cost(self.build_kind, 1);
        if self.coins < cost {
            return false;
        }

        self.coins -= cost;
        let center = self.pads[pad_index].center * self.world_size;
        let id = self.next_tower_id;
        self.next_tower_id += 1;
        let base_size = self.base_size();
        let entity = world_setup::spawn_tower(
            &mut self.world,
            self.build_kind,
            1,
            center,
            base_size,
            id,
        );
        self.pads[pad_index].occupied = true;
        self.selected = Some(entity);
        self.events.hud_changed();
        true
    }

    /// Select the first tower within the click radius of `at`, or clear
    /// the selection on a miss. Returns whether a tower is now selected.
    pub fn select_tower_at(&mut self, at: Vec2) -> bool {
        let radius_sq = SELECT_RADIUS_PX * SELECT_RADIUS_PX;
        let mut hit = None;
        for (entity, (_tower, pos)) in self.world.query::<(&Tower, &Position)>().iter() {
            if pos.0.distance_squared(at) <= radius_sq {
                hit = Some(entity);
                break;
            }
        }

        if hit != self.selected {
            self.selected = hit;
            self.events.hud_changed();
        }
        hit.is_some()
    }

    /// Choose which tower kind the next placement buys.
    pub fn set_build_kind(&mut self, kind: TowerKind) {
        if kind != self.build_kind {
            self.build_kind = kind;
            self.events.hud_changed();
        }
    }

    /// Upgrade the selected tower to the next level. The tower is replaced
    /// wholesale: stats are recomputed from the content tables, never
    /// patched incrementally.
    pub fn upgrade_selected(&mut self) -> bool {
        if self.phase == RunPhase::WaveRunning {
            return false;
        }
        let Some(entity) = self.selected else {
            return false;
        };
        let Ok(tower) = self.world.get::<&Tower>(entity).map(|t| *t) else {
            return false;
        };
        if tower.level >= TOWER_MAX_LEVEL {
            return false;
        }
        let Ok(pos) = self.world.get::<&Position>(entity).map(|p| p.0) else {
            return false;
        };

        let next_level = tower.level + 1;
        let cost = content::tower_cost(tower.kind, next_level);
        if self.coins < cost {
            return false;
        }

        self.coins -= cost;
        let base_size = self.base_size();
        let _ = self.world.despawn(entity);
        let replacement = world_setup::spawn_tower(
            &mut self.world,
            tower.kind,
            next_level,
            pos,
            base_size,
            tower.id,
        );
        self.selected = Some(replacement);
        self.events.hud_changed();
        true
    }

    /// Sell the selected tower: refund a fraction of every level paid for,
    /// free the nearest pad, clear the selection.
    pub fn sell_selected(&mut self) -> bool {
        if self.phase == RunPhase::WaveRunning {
            return false;
        }
        let Some(entity) = self.selected else {
            return false;
        };
        let Ok(tower) = self.world.get::<&Tower>(entity).map(|t| *t) else {
            return false;
        };
        let Ok(pos) = self.world.get::<&Position>(entity).map(|p| p.0) else {
            return false;
        };

        let invested = content::tower_invested(tower.kind, tower.level);
        let refund = (invested as f32 * SELL_REFUND_RATIO).round() as u32;
        self.coins += refund;

        // The nearest pad by squared distance, which is not necessarily the
        // pad the tower was placed on.
        let world_size = self.world_size;
        if let Some(pad) = self.pads.iter_mut().min_by(|a, b| {
            let da = (a.center * world_size).distance_squared(pos);
            let db = (b.center * world_size).distance_squared(pos);
            da.total_cmp(&db)
        }) {
            pad.occupied = false;
        }

        let _ = self.world.despawn(entity);
        self.selected = None;
        self.events.hud_changed();
        true
    }

    /// Dispatch a command to the matching method, returning whether it
    /// took effect.
    pub fn apply(&mut self, command: PlayerCommand) -> bool {
        match command {
            PlayerCommand::SelectMap { map_id } => {
                self.select_map(map_id);
                true
            }
            PlayerCommand::SetWorldSize { width, height } => {
                self.set_world_size(Vec2::new(width, height));
                true
            }
            PlayerCommand::Reset => {
                self.reset();
                true
            }
            PlayerCommand::StartWave => self.start_wave(),
            PlayerCommand::SetBuildKind { kind } => {
                self.set_build_kind(kind);
                true
            }
            PlayerCommand::PlaceTower { x, y } => self.try_place_tower(Vec2::new(x, y)),
            PlayerCommand::SelectAt { x, y } => self.select_tower_at(Vec2::new(x, y)),
            PlayerCommand::UpgradeSelected => self.upgrade_selected(),
            PlayerCommand::SellSelected => self.sell_selected(),
        }
    }

    // --- Tick ---

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. A no-op (aside from event delivery) while the world size
    /// is unset or the run is terminal.
    pub fn update(&mut self, dt: f32) -> GameStateSnapshot {
        if !self.world_ready() || self.phase.is_terminal() {
            return self.drain_snapshot();
        }

        let base_size = self.base_size();
        let path_start = self.path_px[0];

        // 1. Spawn scheduling
        if self.phase == RunPhase::WaveRunning {
            let wave = self.current_wave();
            systems::spawner::run(
                &mut self.world,
                wave,
                &mut self.progress,
                dt,
                path_start,
                base_size,
                &mut self.next_enemy_id,
            );
        }
        // 2. Enemy status + movement
        systems::movement::update_status(&mut self.world, dt);
        systems::movement::run(
            &mut self.world,
            &self.path_px,
            dt,
            &mut self.lives,
            &mut self.events,
        );
        // 3. Tower cooldown / targeting / firing
        systems::combat::run(&mut self.world, dt, base_size);
        // 4. Projectile integration
        systems::projectile::run(&mut self.world, dt, &mut self.despawn_buffer);
        // 5. Dead-enemy cleanup with reward payout
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.coins,
            &mut self.events,
        );
        // 6. Wave completion
        self.check_wave_complete();
        // 7. Defeat
        self.check_defeat();

        self.time.advance(dt);
        self.drain_snapshot()
    }

    // --- Observation ---

    /// Read-only snapshot of the current state. Does not drain pending
    /// notifications; those are delivered by `update`.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            self.hud_view(),
            self.world_size,
            &self.path_px,
            &self.pads,
            self.selected,
            Vec::new(),
        )
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn wave_index(&self) -> usize {
        self.wave_index
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Override the coin balance (for economy tests).
    #[cfg(test)]
    pub fn set_coins(&mut self, coins: u32) {
        self.coins = coins;
    }

    /// Override the life pool (for defeat tests).
    #[cfg(test)]
    pub fn set_lives(&mut self, lives: i32) {
        self.lives = lives;
    }

    /// Jump directly to a wave index (for victory tests).
    #[cfg(test)]
    pub fn jump_to_wave(&mut self, wave_index: usize) {
        self.wave_index = wave_index.min(self.map().waves.len() - 1);
        self.progress = WaveProgress::armed();
    }

    // --- Internals ---

    fn map(&self) -> &'static MapDef {
        &content::MAPS[self.map_id]
    }

    fn current_wave(&self) -> &'static WaveDef {
        &content::MAPS[self.map_id].waves[self.wave_index]
    }

    fn world_ready(&self) -> bool {
        self.world_size.x > 0.0 && self.world_size.y > 0.0 && self.path_px.len() >= 2
    }

    fn base_size(&self) -> f32 {
        self.world_size.min_element()
    }

    fn rebuild_path(&mut self) {
        if self.world_size.x <= 0.0 || self.world_size.y <= 0.0 {
            return;
        }
        let size = self.world_size;
        self.path_px = self.map().path.iter().map(|wp| *wp * size).collect();
    }

    fn pad_footprint(&self, pad: &Pad) -> redoubt_core::types::Rect {
        redoubt_core::types::Rect::from_center_size(
            pad.center * self.world_size,
            Vec2::splat(pad.size_px),
        )
    }

    fn enemies_remaining(&self) -> usize {
        let mut query = self.world.query::<&redoubt_core::components::Enemy>();
        query.iter().count()
    }

    /// Wave cleared ⇔ spawning finished and no enemies remain after
    /// cleanup. Skipped once lives are gone so a simultaneous last leak
    /// resolves to defeat.
    fn check_wave_complete(&mut self) {
        if self.phase != RunPhase::WaveRunning || !self.progress.finished() || self.lives <= 0 {
            return;
        }
        if self.enemies_remaining() > 0 {
            return;
        }

        if self.wave_index + 1 >= self.map().waves.len() {
            self.phase = RunPhase::Victory;
            self.events.victory();
            self.events.hud_changed();
        } else {
            self.wave_index += 1;
            self.progress = WaveProgress::armed();
            self.phase = RunPhase::Idle;
            self.events.wave_changed(self.wave_index as u32);
            self.events.hud_changed();
        }
    }

    fn check_defeat(&mut self) {
        if self.lives <= 0 && self.phase != RunPhase::Defeat {
            self.phase = RunPhase::Defeat;
            self.events.defeat();
            self.events.hud_changed();
        }
    }

    fn hud_view(&self) -> HudView {
        HudView {
            lives: self.lives,
            coins: self.coins,
            wave_index: self.wave_index as u32,
            wave_count: self.map().waves.len() as u32,
            build_kind: self.build_kind,
            wave_running: self.phase == RunPhase::WaveRunning,
            victory: self.phase == RunPhase::Victory,
            defeat: self.phase == RunPhase::Defeat,
        }
    }

    fn drain_snapshot(&mut self) -> GameStateSnapshot {
        let events = self.events.drain();
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            self.hud_view(),
            self.world_size,
            &self.path_px,
            &self.pads,
            self.selected,
            events,
        )
    }
}
