use crate::core::{PhysicsError, Result};
use crate::domain::SpriteId;

use super::{PhysicsShape, ShapeKind, ShapeState};

/// Axis-aligned bounding box shape
#[derive(Clone, Debug)]
pub struct Aabb {
    state: ShapeState,
}

impl Aabb {
    /// Create a box whose top-left corner is at (x, y).
    pub fn new(owner: SpriteId, x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        if !(width >= 0.0 && height >= 0.0 && width.is_finite() && height.is_finite()) {
            return Err(PhysicsError::InvalidBounds { width, height });
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(PhysicsError::InvalidPosition { x, y });
        }
        Ok(Self {
            state: ShapeState::new(owner, x, y, width, height),
        })
    }
}

impl PhysicsShape for Aabb {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Aabb
    }

    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;

    #[test]
    fn position_is_centre_of_bounds() {
        let aabb = Aabb::new(SpriteId(1), 10.0, 20.0, 32.0, 32.0).unwrap();
        assert_eq!(aabb.position(), Vec2::new(26.0, 36.0));
        assert_eq!(aabb.bounds().x, 10.0);
        assert_eq!(aabb.bounds().y, 20.0);
        assert_eq!(aabb.bounds().half_width, 16.0);
        assert_eq!(aabb.owner(), SpriteId(1));
        assert_eq!(aabb.body(), None);
    }

    #[test]
    fn set_position_moves_bounds() {
        let mut aabb = Aabb::new(SpriteId(1), 0.0, 0.0, 10.0, 20.0).unwrap();
        aabb.set_position(Vec2::new(100.0, 100.0));
        assert_eq!(aabb.bounds().x, 95.0);
        assert_eq!(aabb.bounds().y, 90.0);
    }

    #[test]
    fn rejects_negative_size() {
        assert!(matches!(
            Aabb::new(SpriteId(1), 0.0, 0.0, -1.0, 4.0),
            Err(PhysicsError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Aabb::new(SpriteId(1), f32::NAN, 0.0, 1.0, 4.0),
            Err(PhysicsError::InvalidPosition { .. })
        ));
    }
}
