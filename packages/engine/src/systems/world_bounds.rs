//! World-bounds solver - keeps shapes inside the world rectangle
//!
//! Per-axis resolve like the rest of the stepper: clamp, flag the side in
//! `touching`, reflect velocity scaled by `bounce`. Sides missing from
//! `allow_collisions` are ignored. Immovable bodies get their contact flags
//! but are never pushed back.

use crate::domain::Directions;
use crate::systems::body::Body;
use crate::systems::registry::PhysicsRegistry;
use crate::systems::shapes::{Bounds, PhysicsShape};

/// Resolve one body against `world`. Returns the sides that were hit.
pub fn collide_world_bounds(body: &mut Body, registry: &mut PhysicsRegistry, world: &Bounds) -> Directions {
    let Some(shape) = registry.get_mut(body.shape()) else {
        return Directions::NONE;
    };

    let bounds = *shape.bounds();
    let mut position = shape.position();
    let mut hit = Directions::NONE;

    if bounds.x < world.x && body.allow_collisions.contains(Directions::LEFT) {
        hit |= Directions::LEFT;
        position.x = world.x + bounds.half_width;
    } else if bounds.right() > world.right() && body.allow_collisions.contains(Directions::RIGHT) {
        hit |= Directions::RIGHT;
        position.x = world.right() - bounds.half_width;
    }

    if bounds.y < world.y && body.allow_collisions.contains(Directions::UP) {
        hit |= Directions::UP;
        position.y = world.y + bounds.half_height;
    } else if bounds.bottom() > world.bottom() && body.allow_collisions.contains(Directions::DOWN) {
        hit |= Directions::DOWN;
        position.y = world.bottom() - bounds.half_height;
    }

    if hit.is_empty() {
        return hit;
    }
    body.touching |= hit;

    if body.immovable {
        return hit;
    }

    shape.set_position(position);
    if hit.intersects(Directions::WALL) {
        body.velocity.x = -body.velocity.x * body.bounce.x;
    }
    if hit.intersects(Directions::UP | Directions::DOWN) {
        body.velocity.y = -body.velocity.y * body.bounce.y;
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::domain::{SpriteId, Transform};

    fn world() -> Bounds {
        Bounds::new(0.0, 0.0, 100.0, 100.0)
    }

    fn body_at(registry: &mut PhysicsRegistry, x: f32, y: f32) -> Body {
        Body::new(SpriteId(1), &Transform::new(x, y, 10.0, 10.0), registry).unwrap()
    }

    #[test]
    fn floor_contact_clamps_and_bounces() {
        let mut registry = PhysicsRegistry::default();
        let mut body = body_at(&mut registry, 20.0, 95.0);
        body.velocity = Vec2::new(3.0, 40.0);
        body.bounce = Vec2::new(0.0, 0.5);

        let hit = collide_world_bounds(&mut body, &mut registry, &world());
        assert_eq!(hit, Directions::DOWN);
        assert!(body.touching.contains(Directions::FLOOR));
        assert_eq!(body.velocity, Vec2::new(3.0, -20.0));
        assert_eq!(registry.get(body.shape()).unwrap().bounds().bottom(), 100.0);
    }

    #[test]
    fn corner_sets_two_sides() {
        let mut registry = PhysicsRegistry::default();
        let mut body = body_at(&mut registry, -5.0, -5.0);
        let hit = collide_world_bounds(&mut body, &mut registry, &world());
        assert_eq!(hit, Directions::LEFT | Directions::UP);
        let bounds = *registry.get(body.shape()).unwrap().bounds();
        assert_eq!((bounds.x, bounds.y), (0.0, 0.0));
    }

    #[test]
    fn disallowed_side_is_ignored() {
        let mut registry = PhysicsRegistry::default();
        let mut body = body_at(&mut registry, 95.0, 50.0);
        body.allow_collisions = Directions::ANY - Directions::RIGHT;
        let hit = collide_world_bounds(&mut body, &mut registry, &world());
        assert_eq!(hit, Directions::NONE);
        assert_eq!(body.touching, Directions::NONE);
        assert_eq!(registry.get(body.shape()).unwrap().bounds().x, 95.0);
    }

    #[test]
    fn immovable_is_flagged_but_not_moved() {
        let mut registry = PhysicsRegistry::default();
        let mut body = body_at(&mut registry, 95.0, 50.0);
        body.immovable = true;
        body.velocity = Vec2::new(7.0, 0.0);
        let hit = collide_world_bounds(&mut body, &mut registry, &world());
        assert_eq!(hit, Directions::RIGHT);
        assert!(body.is_touching(Directions::RIGHT));
        assert_eq!(body.velocity.x, 7.0);
        assert_eq!(registry.get(body.shape()).unwrap().bounds().x, 95.0);
    }

    #[test]
    fn inside_is_untouched() {
        let mut registry = PhysicsRegistry::default();
        let mut body = body_at(&mut registry, 40.0, 40.0);
        assert!(collide_world_bounds(&mut body, &mut registry, &world()).is_empty());
    }
}
