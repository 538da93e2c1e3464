use crate::core::{PhysicsError, Result};
use crate::domain::SpriteId;

use super::{PhysicsShape, ShapeKind, ShapeState};

/// Circle shape. Its bounds are the enclosing square of side `diameter`.
#[derive(Clone, Debug)]
pub struct Circle {
    state: ShapeState,
    radius: f32,
}

impl Circle {
    /// Create a circle whose enclosing square has its top-left corner at (x, y).
    pub fn new(owner: SpriteId, x: f32, y: f32, diameter: f32) -> Result<Self> {
        if !(diameter > 0.0 && diameter.is_finite()) {
            return Err(PhysicsError::InvalidDiameter(diameter));
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(PhysicsError::InvalidPosition { x, y });
        }
        Ok(Self {
            state: ShapeState::new(owner, x, y, diameter, diameter),
            radius: diameter / 2.0,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
}

impl PhysicsShape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }
}
