//! Integrator - moves shapes from their body's velocity
//!
//! Deliberately simple: explicit Euler, per-axis drag, no inter-shape
//! collision. Runs between `Body::begin_tick` and the bounds solver.

use crate::core::Vec2;
use crate::systems::body::Body;
use crate::systems::registry::PhysicsRegistry;
use crate::systems::shapes::PhysicsShape;

/// Velocity magnitude cap per axis (px/s) to keep a single step bounded.
pub const MAX_VELOCITY: f32 = 10_000.0;

/// Advance one axis of velocity by acceleration, or bleed it off with drag.
#[inline]
pub fn compute_velocity(velocity: f32, acceleration: f32, drag: f32, dt: f32) -> f32 {
    let mut v = velocity;
    if acceleration != 0.0 {
        v += acceleration * dt;
    } else if drag != 0.0 {
        let d = drag * dt;
        if v - d > 0.0 {
            v -= d;
        } else if v + d < 0.0 {
            v += d;
        } else {
            v = 0.0;
        }
    }
    v.clamp(-MAX_VELOCITY, MAX_VELOCITY)
}

/// Integrate one body and move its shape. Returns false when nothing moved.
pub fn integrate_body(body: &mut Body, registry: &mut PhysicsRegistry, dt: f32) -> bool {
    if !body.moves {
        return false;
    }
    let Some(shape) = registry.get_mut(body.shape()) else {
        return false;
    };

    let accel = body.acceleration + body.gravity;
    body.velocity = Vec2::new(
        compute_velocity(body.velocity.x, accel.x, body.drag.x, dt),
        compute_velocity(body.velocity.y, accel.y, body.drag.y, dt),
    );

    let state = shape.state_mut();
    state.old_position = state.position;
    let next = state.position + body.velocity * dt;
    shape.set_position(next);
    true
}
