use crate::core::Result;
use crate::domain::{ShapeId, SpriteId, Transform};
use crate::systems::body::{Body, DebugSurface};
use crate::systems::registry::PhysicsRegistry;

/// A renderable entity with its physics body.
///
/// The sprite owns its `Body`; the body's shape is owned by the registry.
#[derive(Debug)]
pub struct Sprite {
    id: SpriteId,
    pub transform: Transform,
    body: Body,
}

impl Sprite {
    pub fn new(id: SpriteId, transform: Transform, registry: &mut PhysicsRegistry) -> Result<Self> {
        let body = Body::new(id, &transform, registry)?;
        Ok(Self { id, transform, body })
    }

    pub fn id(&self) -> SpriteId {
        self.id
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn set_circle(&mut self, registry: &mut PhysicsRegistry, diameter: f32) -> Result<ShapeId> {
        self.body.set_circle(registry, &self.transform, diameter)
    }

    pub fn set_rectangle(&mut self, registry: &mut PhysicsRegistry, width: f32, height: f32) -> Result<ShapeId> {
        self.body.set_rectangle(registry, &self.transform, width, height)
    }

    /// Pull the simulated shape position into `transform`.
    #[inline]
    pub fn post_update(&mut self, registry: &PhysicsRegistry) {
        self.body.update(&mut self.transform, registry);
    }

    pub fn render_debug_info(
        &self,
        registry: &PhysicsRegistry,
        surface: &mut dyn DebugSurface,
        x: f32,
        y: f32,
        color: Option<&str>,
    ) -> Result<()> {
        self.body
            .render_debug_info(&self.transform, registry, surface, x, y, color)
    }

    pub fn debug_lines(&self, registry: &PhysicsRegistry) -> Result<[String; 4]> {
        self.body.debug_lines(&self.transform, registry)
    }

    /// Tear down the sprite, returning its shape to the registry.
    pub fn destroy(self, registry: &mut PhysicsRegistry) -> Result<()> {
        self.body.destroy(registry)
    }
}
