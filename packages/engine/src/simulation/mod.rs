//! World - sprites, their bodies and the shape registry, stepped per tick
//!
//! `WorldCore` only orchestrates. Body state lives in `systems::body`, shape
//! ownership in `systems::registry`, motion in `systems::integrator` and the
//! boundary response in `systems::world_bounds`.
//!
//! Tick order (see `step`):
//! 1. every body rolls `touching` into `was_touching` and clears `touching`
//! 2. integrator moves shapes, bounds solver writes `touching`
//! 3. every sprite syncs its transform from its shape
//! 4. rendering / debug output reads state only

use crate::core::Result;
use crate::domain::{ShapeId, SpriteId, Transform, WorldConfig};
use crate::systems::body::DebugSurface;
use crate::systems::registry::PhysicsRegistry;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "sprite/sprite.rs"]
mod sprite;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/canvas.rs"]
mod canvas;
mod facade;

pub use canvas::CanvasSurface;
pub use facade::World;
pub use perf_stats::PerfStats;
pub use sprite::Sprite;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    config: WorldConfig,
    registry: PhysicsRegistry,
    sprites: Vec<Sprite>,
    next_sprite_id: u32,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world of the given size with default physics settings
    pub fn new(width: f32, height: f32) -> Result<Self> {
        Self::with_config(WorldConfig::new(width, height))
    }

    /// Create a world from an explicit configuration
    pub fn with_config(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(init::create_world_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        Ok(init::create_world_core(WorldConfig::from_json(json)?))
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn registry(&self) -> &PhysicsRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PhysicsRegistry {
        &mut self.registry
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn sprite_count(&self) -> usize { self.sprites.len() }

    pub fn shape_count(&self) -> usize { self.registry.len() }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Set default gravity for bodies created from now on
    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn set_time_step(&mut self, seconds: f32) -> Result<()> {
        settings::set_time_step(self, seconds)
    }

    pub fn set_collide_world_bounds(&mut self, enabled: bool) {
        settings::set_collide_world_bounds(self, enabled);
    }

    // === SPRITE API ===

    /// Create a sprite and its body. Returns the sprite id.
    pub fn spawn_sprite(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<SpriteId> {
        commands::spawn_sprite(self, Transform::new(x, y, width, height))
    }

    /// Destroy a sprite and release its shape
    pub fn remove_sprite(&mut self, id: SpriteId) -> Result<()> {
        commands::remove_sprite(self, id)
    }

    pub fn sprite(&self, id: SpriteId) -> Result<&Sprite> {
        commands::sprite(self, id)
    }

    pub fn sprite_mut(&mut self, id: SpriteId) -> Result<&mut Sprite> {
        commands::sprite_mut(self, id)
    }

    /// Swap a sprite's shape for a circle at its current position
    pub fn set_circle(&mut self, id: SpriteId, diameter: f32) -> Result<ShapeId> {
        commands::set_circle(self, id, diameter)
    }

    /// Swap a sprite's shape for a box at its current position
    pub fn set_rectangle(&mut self, id: SpriteId, width: f32, height: f32) -> Result<ShapeId> {
        commands::set_rectangle(self, id, width, height)
    }

    pub fn debug_lines(&self, id: SpriteId) -> Result<[String; 4]> {
        commands::debug_lines(self, id)
    }

    pub fn render_debug_info(
        &self,
        id: SpriteId,
        surface: &mut dyn DebugSurface,
        x: f32,
        y: f32,
        color: Option<&str>,
    ) -> Result<()> {
        commands::render_debug_info(self, id, surface, x, y, color)
    }

    /// Remove every sprite and shape
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Step the simulation forward by one configured time step
    pub fn step(&mut self) {
        step::step(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
