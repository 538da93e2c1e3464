use log::debug;

use crate::core::{PhysicsError, Result, Vec2};
use crate::domain::{Directions, SpriteId, Transform};
use crate::systems::registry::PhysicsRegistry;
use crate::systems::shapes::{Aabb, Circle, PhysicsShape, ShapeId};

use super::debug::{DebugSurface, DEFAULT_DEBUG_COLOR, DEBUG_LINE_HEIGHT};

/// Physics state of one sprite.
///
/// The body holds the id of its single active shape; the shape itself lives
/// in the `PhysicsRegistry`. Every shape attached through a body carries the
/// body's sprite id as its back-reference.
#[derive(Debug)]
pub struct Body {
    sprite: SpriteId,
    shape: ShapeId,

    // === Environment (copied from registry defaults) ===
    pub gravity: Vec2,
    pub drag: Vec2,
    pub bounce: Vec2,
    pub friction: Vec2,

    // === Kinematics ===
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Must stay > 0 for anything that divides by it.
    pub mass: f32,

    /// Collision response never displaces this body's shape.
    pub immovable: bool,
    /// When false, `update` leaves the sprite transform alone.
    pub moves: bool,

    // === Contact flags ===
    pub touching: Directions,
    pub was_touching: Directions,
    pub allow_collisions: Directions,
}

impl Body {
    /// Create the body for `sprite` and register a box shape matching `transform`.
    pub fn new(sprite: SpriteId, transform: &Transform, registry: &mut PhysicsRegistry) -> Result<Self> {
        let aabb = Aabb::new(sprite, transform.x, transform.y, transform.width, transform.height)?;
        let defaults = *registry.defaults();

        let mut body = Self {
            sprite,
            shape: ShapeId::UNASSIGNED,
            gravity: defaults.gravity,
            drag: defaults.drag,
            bounce: defaults.bounce,
            friction: defaults.friction,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass: 1.0,
            immovable: false,
            moves: true,
            touching: Directions::NONE,
            was_touching: Directions::NONE,
            allow_collisions: Directions::ANY,
        };
        body.shape = body.register(registry, Box::new(aabb))?;
        Ok(body)
    }

    pub fn sprite(&self) -> SpriteId {
        self.sprite
    }

    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    /// Replace the active shape with `shape`.
    ///
    /// Nothing is touched unless the current shape is still registered and
    /// `shape` was built for this body's sprite.
    pub fn set_shape(&mut self, registry: &mut PhysicsRegistry, shape: Box<dyn PhysicsShape>) -> Result<ShapeId> {
        if shape.owner() != self.sprite {
            return Err(PhysicsError::OwnerMismatch {
                expected: self.sprite,
                found: shape.owner(),
            });
        }
        if !registry.contains(self.shape) {
            return Err(PhysicsError::UnknownShape(self.shape));
        }
        if !registry.has_capacity() {
            return Err(PhysicsError::IdsExhausted("shape"));
        }

        let old = self.shape;
        registry.remove(old)?;
        self.shape = self.register(registry, shape)?;
        debug!("sprite {:?} swapped shape {:?} -> {:?}", self.sprite, old, self.shape);
        Ok(self.shape)
    }

    /// Swap to a circle of `diameter` placed at the sprite's current position.
    pub fn set_circle(&mut self, registry: &mut PhysicsRegistry, transform: &Transform, diameter: f32) -> Result<ShapeId> {
        let circle = Circle::new(self.sprite, transform.x, transform.y, diameter)?;
        self.set_shape(registry, Box::new(circle))
    }

    /// Swap to a box of the given size placed at the sprite's current position.
    pub fn set_rectangle(
        &mut self,
        registry: &mut PhysicsRegistry,
        transform: &Transform,
        width: f32,
        height: f32,
    ) -> Result<ShapeId> {
        let aabb = Aabb::new(self.sprite, transform.x, transform.y, width, height)?;
        self.set_shape(registry, Box::new(aabb))
    }

    /// Copy the shape's simulated position into the sprite transform.
    pub fn update(&self, transform: &mut Transform, registry: &PhysicsRegistry) {
        if !self.moves {
            return;
        }
        let Some(shape) = registry.get(self.shape) else {
            return;
        };

        let position = shape.position();
        let bounds = shape.bounds();
        let offset = shape.offset();
        transform.x = (position.x - bounds.half_width) - offset.x;
        transform.y = (position.y - bounds.half_height) - offset.y;
    }

    /// Roll contact flags over to a new tick. Run before the solver writes `touching`.
    pub fn begin_tick(&mut self) {
        self.was_touching = self.touching;
        self.touching = Directions::NONE;
    }

    pub fn is_touching(&self, dirs: Directions) -> bool {
        self.touching.any_of(dirs)
    }

    /// Touching on `dirs` this tick but not on the previous one.
    pub fn just_touched(&self, dirs: Directions) -> bool {
        self.touching.any_of(dirs) && !self.was_touching.any_of(dirs)
    }

    /// Release the shape back to the registry. Consumes the body.
    pub fn destroy(self, registry: &mut PhysicsRegistry) -> Result<()> {
        registry.remove(self.shape)?;
        debug!("sprite {:?} released shape {:?}", self.sprite, self.shape);
        Ok(())
    }

    /// Human-readable state: size, bounds/rotation, velocity, acceleration.
    pub fn debug_lines(&self, transform: &Transform, registry: &PhysicsRegistry) -> Result<[String; 4]> {
        let shape = registry
            .get(self.shape)
            .ok_or(PhysicsError::UnknownShape(self.shape))?;
        let bounds = shape.bounds();

        Ok([
            format!("Sprite: ({} x {})", transform.width, transform.height),
            format!(
                "x: {:.1} y: {:.1} rotation: {:.1}",
                bounds.x, bounds.y, transform.rotation
            ),
            format!("vx: {:.1} vy: {:.1}", self.velocity.x, self.velocity.y),
            format!("ax: {:.1} ay: {:.1}", self.acceleration.x, self.acceleration.y),
        ])
    }

    /// Draw `debug_lines` at (x, y), one line every `DEBUG_LINE_HEIGHT` pixels.
    pub fn render_debug_info(
        &self,
        transform: &Transform,
        registry: &PhysicsRegistry,
        surface: &mut dyn DebugSurface,
        x: f32,
        y: f32,
        color: Option<&str>,
    ) -> Result<()> {
        let color = color.unwrap_or(DEFAULT_DEBUG_COLOR);
        for (i, line) in self.debug_lines(transform, registry)?.iter().enumerate() {
            surface.fill_text(line, x, y + DEBUG_LINE_HEIGHT * i as f32, color);
        }
        Ok(())
    }

    fn register(&self, registry: &mut PhysicsRegistry, mut shape: Box<dyn PhysicsShape>) -> Result<ShapeId> {
        // The registry never sees a shape without its back-reference.
        shape.set_body(Some(self.sprite));
        registry.add(shape)
    }
}
