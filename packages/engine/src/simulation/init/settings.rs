use log::warn;

use crate::core::{PhysicsError, Result};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

/// Only bodies created afterwards see the new value.
pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    world.config.defaults.gravity.x = x;
    world.config.defaults.gravity.y = y;
    world.registry.defaults_mut().gravity = world.config.defaults.gravity;
}

pub(super) fn set_time_step(world: &mut WorldCore, seconds: f32) -> Result<()> {
    if !(seconds > 0.0 && seconds.is_finite()) {
        warn!("rejected time step {}", seconds);
        return Err(PhysicsError::Config(format!("time step must be positive: {}", seconds)));
    }
    world.config.time_step = seconds;
    Ok(())
}

pub(super) fn set_collide_world_bounds(world: &mut WorldCore, enabled: bool) {
    world.config.collide_world_bounds = enabled;
}
