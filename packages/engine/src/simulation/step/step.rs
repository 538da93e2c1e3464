#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::Directions;
use crate::systems::integrator::integrate_body;
use crate::systems::shapes::Bounds;
use crate::systems::world_bounds::collide_world_bounds;

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.sprites.len() as u32;
        world.perf_stats.shape_count = world.registry.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === CONTACT ROLLOVER ===
    // Must happen before anything writes `touching` for this tick.
    for sprite in world.sprites.iter_mut() {
        sprite.body_mut().begin_tick();
    }

    // === INTEGRATION ===
    let dt = world.config.time_step;
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    for sprite in world.sprites.iter_mut() {
        integrate_body(sprite.body_mut(), &mut world.registry, dt);
    }
    if let Some(t0) = t0 {
        world.perf_stats.integrate_ms = t0.elapsed_ms();
    }

    // === WORLD BOUNDS ===
    if world.config.collide_world_bounds {
        let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
        let bounds = Bounds::new(0.0, 0.0, world.config.width, world.config.height);
        let mut collisions = 0u32;
        for sprite in world.sprites.iter_mut() {
            let hit = collide_world_bounds(sprite.body_mut(), &mut world.registry, &bounds);
            if hit != Directions::NONE {
                collisions += 1;
            }
        }
        if let Some(t0) = t0 {
            world.perf_stats.solve_ms = t0.elapsed_ms();
            world.perf_stats.collisions = collisions;
        }
    }

    // === SYNC ===
    // Read-only on the registry, one transform per sprite.
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    let registry = &world.registry;
    #[cfg(feature = "parallel")]
    {
        world
            .sprites
            .par_iter_mut()
            .for_each(|sprite| sprite.post_update(registry));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for sprite in world.sprites.iter_mut() {
            sprite.post_update(registry);
        }
    }
    if let Some(t0) = t0 {
        world.perf_stats.sync_ms = t0.elapsed_ms();
    }

    world.frame += 1;

    if let Some(t) = step_start {
        world.perf_stats.step_ms = t.elapsed_ms();
    }
}
