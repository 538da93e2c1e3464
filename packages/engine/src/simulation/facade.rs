use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::core::{PhysicsError, Vec2};
use crate::domain::{Directions, SpriteId};

use super::canvas::CanvasSurface;
use super::perf_stats::PerfStats;
use super::WorldCore;

fn to_js(err: PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<World, JsValue> {
        let core = WorldCore::new(width, height).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn sprite_count(&self) -> usize { self.core.sprite_count() }

    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> usize { self.core.shape_count() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Default gravity for sprites spawned after this call
    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_time_step(&mut self, seconds: f32) -> Result<(), JsValue> {
        self.core.set_time_step(seconds).map_err(to_js)
    }

    pub fn set_collide_world_bounds(&mut self, enabled: bool) {
        self.core.set_collide_world_bounds(enabled);
    }

    // === SPRITES ===

    /// Spawn a sprite with a box body. Returns the sprite id.
    pub fn spawn_sprite(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<u32, JsValue> {
        self.core
            .spawn_sprite(x, y, width, height)
            .map(|id| id.0)
            .map_err(to_js)
    }

    pub fn remove_sprite(&mut self, id: u32) -> Result<(), JsValue> {
        self.core.remove_sprite(SpriteId(id)).map_err(to_js)
    }

    /// Returns the new shape id
    pub fn set_circle(&mut self, id: u32, diameter: f32) -> Result<u32, JsValue> {
        self.core
            .set_circle(SpriteId(id), diameter)
            .map(|shape| shape.0)
            .map_err(to_js)
    }

    /// Returns the new shape id
    pub fn set_rectangle(&mut self, id: u32, width: f32, height: f32) -> Result<u32, JsValue> {
        self.core
            .set_rectangle(SpriteId(id), width, height)
            .map(|shape| shape.0)
            .map_err(to_js)
    }

    pub fn set_velocity(&mut self, id: u32, x: f32, y: f32) -> Result<(), JsValue> {
        let sprite = self.core.sprite_mut(SpriteId(id)).map_err(to_js)?;
        sprite.body_mut().velocity = Vec2::new(x, y);
        Ok(())
    }

    pub fn set_acceleration(&mut self, id: u32, x: f32, y: f32) -> Result<(), JsValue> {
        let sprite = self.core.sprite_mut(SpriteId(id)).map_err(to_js)?;
        sprite.body_mut().acceleration = Vec2::new(x, y);
        Ok(())
    }

    pub fn set_bounce(&mut self, id: u32, x: f32, y: f32) -> Result<(), JsValue> {
        let sprite = self.core.sprite_mut(SpriteId(id)).map_err(to_js)?;
        sprite.body_mut().bounce = Vec2::new(x, y);
        Ok(())
    }

    pub fn set_moves(&mut self, id: u32, moves: bool) -> Result<(), JsValue> {
        let sprite = self.core.sprite_mut(SpriteId(id)).map_err(to_js)?;
        sprite.body_mut().moves = moves;
        Ok(())
    }

    pub fn set_immovable(&mut self, id: u32, immovable: bool) -> Result<(), JsValue> {
        let sprite = self.core.sprite_mut(SpriteId(id)).map_err(to_js)?;
        sprite.body_mut().immovable = immovable;
        Ok(())
    }

    /// Bitmask: LEFT=0x0001, RIGHT=0x0010, UP=0x0100, DOWN=0x1000
    pub fn set_allow_collisions(&mut self, id: u32, mask: u32) -> Result<(), JsValue> {
        let sprite = self.core.sprite_mut(SpriteId(id)).map_err(to_js)?;
        sprite.body_mut().allow_collisions = Directions::from_bits_truncate(mask);
        Ok(())
    }

    pub fn sprite_x(&self, id: u32) -> Result<f32, JsValue> {
        self.core.sprite(SpriteId(id)).map(|s| s.transform.x).map_err(to_js)
    }

    pub fn sprite_y(&self, id: u32) -> Result<f32, JsValue> {
        self.core.sprite(SpriteId(id)).map(|s| s.transform.y).map_err(to_js)
    }

    pub fn touching(&self, id: u32) -> Result<u32, JsValue> {
        self.core
            .sprite(SpriteId(id))
            .map(|s| s.body().touching.bits())
            .map_err(to_js)
    }

    pub fn was_touching(&self, id: u32) -> Result<u32, JsValue> {
        self.core
            .sprite(SpriteId(id))
            .map(|s| s.body().was_touching.bits())
            .map_err(to_js)
    }

    /// Debug lines joined with '\n'
    pub fn debug_text(&self, id: u32) -> Result<String, JsValue> {
        self.core
            .debug_lines(SpriteId(id))
            .map(|lines| lines.join("\n"))
            .map_err(to_js)
    }

    /// Draw a sprite's debug info onto a canvas
    pub fn render_debug_info(
        &self,
        id: u32,
        ctx: &CanvasRenderingContext2d,
        x: f32,
        y: f32,
        color: Option<String>,
    ) -> Result<(), JsValue> {
        let mut surface = CanvasSurface::new(ctx);
        self.core
            .render_debug_info(SpriteId(id), &mut surface, x, y, color.as_deref())
            .map_err(to_js)
    }

    /// Remove every sprite and shape
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        self.core.step();
    }
}
