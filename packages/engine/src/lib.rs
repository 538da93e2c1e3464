//! Spritephys Engine - per-sprite physics bodies for a 2D WASM game engine
//!
//! Architecture:
//! - core/        - Value types and errors
//! - domain/      - Ids, direction flags, transforms, configuration
//! - systems/     - Shapes, shape registry, bodies, integrator, bounds solver
//! - simulation/  - World orchestration and the wasm-bindgen facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Spritephys engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{PhysicsError, Vec2};
pub use domain::{Directions, PhysicsDefaults, ShapeId, SpriteId, Transform, WorldConfig};
pub use simulation::{Sprite, World, WorldCore};
pub use systems::body::{Body, DebugSurface, TextLog};
pub use systems::registry::PhysicsRegistry;
pub use systems::shapes::{Aabb, Bounds, Circle, PhysicsShape, ShapeKind};

// Direction constants for JS
#[wasm_bindgen]
pub fn dir_none() -> u32 { Directions::NONE.bits() }
#[wasm_bindgen]
pub fn dir_left() -> u32 { Directions::LEFT.bits() }
#[wasm_bindgen]
pub fn dir_right() -> u32 { Directions::RIGHT.bits() }
#[wasm_bindgen]
pub fn dir_up() -> u32 { Directions::UP.bits() }
#[wasm_bindgen]
pub fn dir_down() -> u32 { Directions::DOWN.bits() }
#[wasm_bindgen]
pub fn dir_any() -> u32 { Directions::ANY.bits() }
