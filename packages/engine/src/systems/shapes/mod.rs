//! Shapes - collision primitives owned by the `PhysicsRegistry`
//!
//! Every variant stores its simulated `position` at its centre and keeps a
//! top-left `bounds` rectangle in sync with it. A shape records the sprite
//! it was built for (`owner`) and, once attached, the body that uses it
//! (`body`). Neither is an owning reference.

mod aabb;
mod bounds;
mod circle;

pub use aabb::Aabb;
pub use bounds::Bounds;
pub use circle::Circle;

pub use crate::domain::ShapeId;

use crate::core::Vec2;
use crate::domain::SpriteId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Aabb,
    Circle,
}

/// State shared by every shape variant.
#[derive(Clone, Debug)]
pub struct ShapeState {
    pub(crate) id: ShapeId,
    pub(crate) owner: SpriteId,
    pub(crate) body: Option<SpriteId>,
    pub position: Vec2,
    pub old_position: Vec2,
    pub offset: Vec2,
    pub(crate) bounds: Bounds,
}

impl ShapeState {
    /// Build state for a shape whose top-left corner is at (x, y).
    pub(crate) fn new(owner: SpriteId, x: f32, y: f32, width: f32, height: f32) -> Self {
        let bounds = Bounds::new(x, y, width, height);
        let position = Vec2::new(x + bounds.half_width, y + bounds.half_height);
        Self {
            id: ShapeId::UNASSIGNED,
            owner,
            body: None,
            position,
            old_position: position,
            offset: Vec2::zero(),
            bounds,
        }
    }
}

/// Uniform contract for every shape variant.
///
/// Variants only provide `kind` and access to their `ShapeState`; everything a
/// body needs is available through the provided methods.
pub trait PhysicsShape: std::fmt::Debug + Send + Sync {
    fn kind(&self) -> ShapeKind;

    fn state(&self) -> &ShapeState;

    fn state_mut(&mut self) -> &mut ShapeState;

    fn id(&self) -> ShapeId {
        self.state().id
    }

    fn owner(&self) -> SpriteId {
        self.state().owner
    }

    fn body(&self) -> Option<SpriteId> {
        self.state().body
    }

    fn set_body(&mut self, body: Option<SpriteId>) {
        self.state_mut().body = body;
    }

    fn position(&self) -> Vec2 {
        self.state().position
    }

    fn old_position(&self) -> Vec2 {
        self.state().old_position
    }

    /// Move the shape's centre and refresh its bounds.
    fn set_position(&mut self, position: Vec2) {
        let state = self.state_mut();
        state.position = position;
        state.bounds.center_on(position);
    }

    fn bounds(&self) -> &Bounds {
        &self.state().bounds
    }

    fn offset(&self) -> Vec2 {
        self.state().offset
    }

    fn set_offset(&mut self, offset: Vec2) {
        self.state_mut().offset = offset;
    }
}
